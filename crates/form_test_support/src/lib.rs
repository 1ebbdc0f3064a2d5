//! Fixture loading for form scenario tests.
//!
//! Scenarios live in TOML so new cases can be added without touching test
//! code. Loaders panic with the offending path; they only run under test.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub mod scenario;

pub use scenario::{RangeScenario, RuleScenario, ScalarScenario, ScenarioFile};

/// Read and deserialize a TOML fixture.
pub fn read_fixture<T: DeserializeOwned>(path: &Path) -> T {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read fixture {path:?}: {err}"));
    toml::from_str(&content).unwrap_or_else(|err| panic!("malformed fixture {path:?}: {err}"))
}

/// Load the scenario file at `path` and check it is not empty.
pub fn load_scenarios(path: &Path) -> ScenarioFile {
    let file: ScenarioFile = read_fixture(path);
    assert!(
        !(file.range.is_empty() && file.scalar.is_empty() && file.rule.is_empty()),
        "scenario file {path:?} declares no scenarios"
    );
    file
}

/// Format a list of failures, one per line, for an assertion message.
pub fn report_failures(failures: &[String]) -> String {
    let mut out = format!("{} scenario(s) failed:\n", failures.len());
    for failure in failures {
        out.push_str("  ");
        out.push_str(failure);
        out.push('\n');
    }
    out
}
