//! Scenario runner that drives a headless login form.

use anyhow::Result;
use formkit_theme::Theme;

use super::assert::{
    evaluate_assert_error, evaluate_assert_focused, evaluate_assert_login_count,
    evaluate_assert_login_enabled, evaluate_assert_no_error, evaluate_assert_value,
    AssertionResult, LoginSnapshot,
};
use super::host::HeadlessHost;
use super::report::HeadlessReport;
use super::scenario::{HeadlessScenario, ScenarioStep};

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: HeadlessReport },
    Failed { report: HeadlessReport },
}

impl RunOutcome {
    pub fn report(&self) -> &HeadlessReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn into_report(self) -> HeadlessReport {
        match self {
            RunOutcome::Passed { report } | RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Execute scenario JSON against a freshly mounted login form.
pub fn run_scenario(input: &str, theme: Theme) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_json(input)?;
    let mut host = HeadlessHost::new(theme);
    Ok(run_loaded_scenario(&scenario, &mut host))
}

/// Execute a pre-loaded scenario on an existing host.
///
/// Stops at the first failing assertion.
pub fn run_loaded_scenario(scenario: &HeadlessScenario, host: &mut HeadlessHost) -> RunOutcome {
    for (step_index, step) in scenario.steps.iter().enumerate() {
        tracing::debug!(step_index, step = step.name(), "running step");

        let result = match step {
            ScenarioStep::Tap { field } => {
                host.tap(*field);
                AssertionResult::Passed
            }
            ScenarioStep::Type { field, text } => {
                host.type_text(*field, text);
                AssertionResult::Passed
            }
            ScenarioStep::Clear { field } => {
                host.clear(*field);
                AssertionResult::Passed
            }
            ScenarioStep::SubmitEditing { field } => {
                host.submit_editing(*field);
                AssertionResult::Passed
            }
            ScenarioStep::DismissKeyboard => {
                host.dismiss_keyboard();
                AssertionResult::Passed
            }
            ScenarioStep::PressLogin => {
                host.press_login();
                AssertionResult::Passed
            }
            ScenarioStep::Unmount => {
                host.unmount();
                AssertionResult::Passed
            }
            ScenarioStep::AssertError { field, message } => {
                evaluate_assert_error(*field, message.as_deref(), &LoginSnapshot::capture(host))
            }
            ScenarioStep::AssertNoError { field } => {
                evaluate_assert_no_error(*field, &LoginSnapshot::capture(host))
            }
            ScenarioStep::AssertValue { field, value } => {
                evaluate_assert_value(*field, value, host)
            }
            ScenarioStep::AssertFocused { field } => {
                evaluate_assert_focused(*field, &LoginSnapshot::capture(host))
            }
            ScenarioStep::AssertLoginEnabled { enabled } => {
                evaluate_assert_login_enabled(*enabled, &LoginSnapshot::capture(host))
            }
            ScenarioStep::AssertLoginCount { count } => {
                evaluate_assert_login_count(*count, &LoginSnapshot::capture(host))
            }
        };

        if let AssertionResult::Failed { code, message } = result {
            tracing::info!(step_index, assertion = step.name(), %code, %message, "scenario failed");
            let report =
                HeadlessReport::failed(step.name(), step_index, message, LoginSnapshot::capture(host))
                    .named(scenario.name.clone());
            return RunOutcome::Failed { report };
        }
    }

    tracing::info!(
        steps = scenario.steps.len(),
        assertions = scenario.assertion_count(),
        "scenario passed"
    );
    RunOutcome::Passed {
        report: HeadlessReport::passed(scenario.steps.len(), LoginSnapshot::capture(host))
            .named(scenario.name.clone()),
    }
}
