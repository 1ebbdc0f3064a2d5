//! Scenario shapes shared by the fixture files.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ScenarioFile {
    #[serde(default)]
    pub range: Vec<RangeScenario>,
    #[serde(default)]
    pub scalar: Vec<ScalarScenario>,
    #[serde(default)]
    pub rule: Vec<RuleScenario>,
}

/// Initialize a range field, optionally commit new text, then check.
#[derive(Debug, Deserialize)]
pub struct RangeScenario {
    pub name: String,
    pub start: f64,
    pub end: f64,
    #[serde(default = "one")]
    pub step: f64,
    pub text: String,
    /// Text committed after initialization.
    #[serde(default)]
    pub commit: Option<String>,
    /// Slider values right after the last step.
    pub values: [f64; 2],
    /// Text before the slider is queried.
    pub text_before_query: String,
    /// Text after the slider is queried.
    pub text_after_query: String,
}

#[derive(Debug, Deserialize)]
pub struct ScalarScenario {
    pub name: String,
    pub start: f64,
    pub end: f64,
    #[serde(default = "one")]
    pub step: f64,
    pub text: String,
    #[serde(default)]
    pub commit: Option<String>,
    pub value: f64,
    pub text_after_query: String,
}

/// Values a field's rule must accept and reject.
#[derive(Debug, Deserialize)]
pub struct RuleScenario {
    pub field: String,
    /// Kind in config spelling, e.g. `bounded_range`.
    pub kind: String,
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
    #[serde(default)]
    pub accept: Vec<String>,
    #[serde(default)]
    pub reject: Vec<String>,
}

fn one() -> f64 {
    1.0
}
