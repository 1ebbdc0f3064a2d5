//! Validation rules derived from field declarations.
//!
//! [`build`] turns declared fields into a [`RuleSet`] for an external
//! validation engine. Nothing here evaluates a rule; each [`FieldRule`]
//! carries its predicate for the engine to call at submission time.

use crate::field::{FieldKind, FieldSpec};
use crate::parse::{parse_range_strict, parse_strict};
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Name of the conventional email field every form carries a rule for.
pub const EMAIL_FIELD: &str = "email";

/// Message for integer fields with both bounds. `{0}` and `{1}` are the bounds.
pub const INTEGER_RANGE_MESSAGE: &str = "Please enter a whole number between {0} and {1}.";

/// Message for range fields. `{0}` and `{1}` are the bounds.
pub const RANGE_MESSAGE: &str =
    "Please enter a range within {0}-{1}, written as low-high with low not above high.";

pub type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// One declarative check inside a rule.
#[derive(Clone, Debug, PartialEq)]
pub enum Constraint {
    Required,
    Email,
    Number,
    Integer,
    Min(f64),
    Max(f64),
    /// `low-high`, both numbers, `low <= high`, both within `[start, end]`.
    ValueRange { start: f64, end: f64 },
}

impl Constraint {
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Constraint::Required => !value.trim().is_empty(),
            Constraint::Email => is_email(value),
            Constraint::Number => parse_strict(value).is_some(),
            Constraint::Integer => is_integer(value),
            Constraint::Min(min) => parse_strict(value).is_some_and(|v| v >= *min),
            Constraint::Max(max) => parse_strict(value).is_some_and(|v| v <= *max),
            Constraint::ValueRange { start, end } => parse_range_strict(value)
                .is_some_and(|(low, high)| low <= high && low >= *start && high <= *end),
        }
    }

    /// Method name and parameter in the validator's rule declaration.
    fn declaration(&self) -> (&'static str, Value) {
        match self {
            Constraint::Required => ("required", Value::Bool(true)),
            Constraint::Email => ("email", Value::Bool(true)),
            Constraint::Number => ("number", Value::Bool(true)),
            Constraint::Integer => ("integer", Value::Bool(true)),
            Constraint::Min(min) => ("min", json!(min)),
            Constraint::Max(max) => ("max", json!(max)),
            Constraint::ValueRange { start, end } => ("valueRange", json!([start, end])),
        }
    }
}

/// A message with positional `{n}` placeholders.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageTemplate {
    pub template: &'static str,
    pub params: Vec<f64>,
}

impl MessageTemplate {
    pub fn render(&self) -> String {
        self.params
            .iter()
            .enumerate()
            .fold(self.template.to_string(), |msg, (i, p)| {
                msg.replace(&format!("{{{i}}}"), &p.to_string())
            })
    }
}

/// Rule for one field: its constraints, the predicate combining them, and
/// an optional message.
#[derive(Clone)]
pub struct FieldRule {
    kind: Option<FieldKind>,
    constraints: Vec<Constraint>,
    message: Option<MessageTemplate>,
    predicate: Predicate,
}

impl FieldRule {
    fn new(
        kind: Option<FieldKind>,
        constraints: Vec<Constraint>,
        message: Option<MessageTemplate>,
    ) -> Self {
        let checks = constraints.clone();
        Self {
            kind,
            constraints,
            message,
            predicate: Arc::new(move |value: &str| checks.iter().all(|c| c.accepts(value))),
        }
    }

    /// Declared kind, or `None` for conventional rules such as email.
    pub fn kind(&self) -> Option<FieldKind> {
        self.kind
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn message(&self) -> Option<&MessageTemplate> {
        self.message.as_ref()
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    pub fn accepts(&self, value: &str) -> bool {
        (self.predicate)(value)
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("kind", &self.kind)
            .field("constraints", &self.constraints)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Rules keyed by field name. Immutable once built.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    rules: BTreeMap<String, FieldRule>,
}

impl RuleSet {
    pub fn get(&self, name: &str) -> Option<&FieldRule> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render as `{ "rules": {...}, "messages": {...} }` in the shape
    /// jQuery-validate style engines take.
    pub fn to_validator_json(&self) -> Value {
        let mut rules = Map::new();
        let mut messages = Map::new();
        for (name, rule) in &self.rules {
            let decl: Map<String, Value> = rule
                .constraints
                .iter()
                .map(|c| {
                    let (method, param) = c.declaration();
                    (method.to_string(), param)
                })
                .collect();
            rules.insert(name.clone(), Value::Object(decl));
            if let Some(message) = &rule.message {
                messages.insert(name.clone(), Value::String(message.render()));
            }
        }
        json!({ "rules": rules, "messages": messages })
    }
}

/// Derive the rule set for `fields`, plus the conventional email rule.
///
/// Later fields with a duplicate name replace earlier ones.
pub fn build(fields: &[FieldSpec]) -> RuleSet {
    let mut rules = BTreeMap::new();
    rules.insert(EMAIL_FIELD.to_string(), email_rule());

    for spec in fields {
        let rule = rule_for(spec);
        log::trace!(target: "form.rules", "{}: {:?}", spec.name, rule.constraints);
        if rules.insert(spec.name.clone(), rule).is_some() {
            log::warn!(target: "form.rules", "duplicate rule for field {:?}", spec.name);
        }
    }
    RuleSet { rules }
}

fn email_rule() -> FieldRule {
    FieldRule::new(None, vec![Constraint::Required, Constraint::Email], None)
}

fn rule_for(spec: &FieldSpec) -> FieldRule {
    let bounds = |constraints: &mut Vec<Constraint>| {
        if let Some(start) = spec.range_start {
            constraints.push(Constraint::Min(start));
        }
        if let Some(end) = spec.range_end {
            constraints.push(Constraint::Max(end));
        }
    };

    match spec.kind {
        FieldKind::Integer | FieldKind::BoundedInteger => {
            let mut constraints = vec![Constraint::Integer];
            bounds(&mut constraints);
            let message = integer_range_message(spec);
            if spec.kind.is_bounded() && message.is_none() {
                warn_unbounded(spec);
            }
            FieldRule::new(Some(spec.kind), constraints, message)
        }
        FieldKind::Float | FieldKind::BoundedFloat => {
            let mut constraints = Vec::new();
            bounds(&mut constraints);
            if !constraints.is_empty() {
                constraints.insert(0, Constraint::Number);
            }
            if spec.kind.is_bounded() && constraints.len() < 3 {
                warn_unbounded(spec);
            }
            FieldRule::new(Some(spec.kind), constraints, None)
        }
        FieldKind::BoundedRange => {
            let (start, end) = spec.bounds().unwrap_or_else(|_| {
                warn_unbounded(spec);
                (
                    spec.range_start.unwrap_or(f64::NEG_INFINITY),
                    spec.range_end.unwrap_or(f64::INFINITY),
                )
            });
            FieldRule::new(
                Some(spec.kind),
                vec![Constraint::ValueRange { start, end }],
                Some(MessageTemplate {
                    template: RANGE_MESSAGE,
                    params: vec![start, end],
                }),
            )
        }
    }
}

fn integer_range_message(spec: &FieldSpec) -> Option<MessageTemplate> {
    let (start, end) = spec.bounds().ok()?;
    Some(MessageTemplate {
        template: INTEGER_RANGE_MESSAGE,
        params: vec![start, end],
    })
}

fn warn_unbounded(spec: &FieldSpec) {
    log::warn!(
        target: "form.rules",
        "{}: {:?} field declared without both bounds",
        spec.name,
        spec.kind
    );
}

/// Optional sign followed by ASCII digits.
fn is_integer(value: &str) -> bool {
    let s = value.trim();
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `local@domain` with an ASCII local part and dot-separated hostname labels.
pub fn is_email(value: &str) -> bool {
    let trimmed = value.trim();
    let Some((local, domain)) = trimmed.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    local.chars().all(is_email_local_char)
        && !domain.is_empty()
        && domain.split('.').all(is_domain_label)
}

fn is_email_local_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(ch)
}

fn is_domain_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            label.len() <= 63
                && first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
        _ => false,
    }
}
