//! Headless host and scenario runner
//!
//! Stands in for the native platform: mounts the login form's text fields,
//! owns keyboard focus, and turns gestures into widget events. Scenarios are
//! JSON step lists evaluated against a [`HeadlessHost`] and summarized in a
//! [`HeadlessReport`].

mod assert;
mod host;
mod report;
mod runner;
mod scenario;

pub use assert::{
    evaluate_assert_error, evaluate_assert_focused, evaluate_assert_login_count,
    evaluate_assert_login_enabled, evaluate_assert_no_error, evaluate_assert_value,
    AssertionResult, FieldSnapshot, LoginSnapshot,
};
pub use host::{HeadlessField, HeadlessHost};
pub use report::{HeadlessReport, ReportStatus};
pub use runner::{run_loaded_scenario, run_scenario, RunOutcome};
pub use scenario::{HeadlessScenario, ScenarioStep};
