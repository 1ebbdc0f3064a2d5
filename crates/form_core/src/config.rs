//! Form declarations in TOML.
//!
//! ```toml
//! [[field]]
//! name = "dose"
//! kind = "bounded_range"
//! range_start = 1
//! range_end = 5
//! step = 0.5
//! value = "2-3"
//! ```

use crate::field::{FieldKind, FieldSpec, FieldSpecError};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    Toml(toml::de::Error),
    Field(FieldSpecError),
    DuplicateField(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Toml(err) => write!(f, "invalid form declaration: {err}"),
            ConfigError::Field(err) => write!(f, "invalid field: {err}"),
            ConfigError::DuplicateField(name) => write!(f, "field {name:?} is declared twice"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Toml(err) => Some(err),
            ConfigError::Field(err) => Some(err),
            ConfigError::DuplicateField(_) => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Toml(err)
    }
}

impl From<FieldSpecError> for ConfigError {
    fn from(err: FieldSpecError) -> Self {
        ConfigError::Field(err)
    }
}

/// One `[[field]]` table.
#[derive(Clone, Debug, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub range_start: Option<f64>,
    #[serde(default)]
    pub range_end: Option<f64>,
    #[serde(default)]
    pub step: Option<f64>,
    /// Initial text of the field.
    #[serde(default)]
    pub value: Option<String>,
}

impl FieldDecl {
    pub fn spec(&self) -> FieldSpec {
        FieldSpec {
            name: self.name.clone(),
            kind: self.kind,
            range_start: self.range_start,
            range_end: self.range_end,
            step: self.step,
        }
    }
}

/// A whole form declaration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FormDecl {
    #[serde(rename = "field", default)]
    pub fields: Vec<FieldDecl>,
}

impl FormDecl {
    /// Parse and check a declaration: every field must satisfy
    /// [`FieldSpec::validate`] and names must be unique.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let decl: FormDecl = toml::from_str(s)?;
        let mut seen = HashSet::new();
        for field in &decl.fields {
            field.spec().validate()?;
            if !seen.insert(field.name.as_str()) {
                return Err(ConfigError::DuplicateField(field.name.clone()));
            }
        }
        log::debug!(target: "form.config", "loaded {} field declarations", decl.fields.len());
        Ok(decl)
    }

    pub fn specs(&self) -> Vec<FieldSpec> {
        self.fields.iter().map(FieldDecl::spec).collect()
    }
}
