//! Scenario definition for headless login-form runs.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::login_form::LoginField;

/// Sequence of gestures and assertions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlessScenario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub steps: Vec<ScenarioStep>,
}

impl HeadlessScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).context("invalid scenario JSON")
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::from_json(&raw)
    }

    pub fn assertion_count(&self) -> usize {
        self.steps.iter().filter(|s| s.is_assertion()).count()
    }
}

/// One scenario step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Touch a field, moving keyboard focus to it
    Tap { field: LoginField },
    /// Type `text` at the end of the field, focusing it first if needed
    Type { field: LoginField, text: String },
    /// Erase the field's content
    Clear { field: LoginField },
    /// Press the keyboard's return key while `field` is focused
    SubmitEditing { field: LoginField },
    DismissKeyboard,
    PressLogin,
    /// Detach both native fields
    Unmount,
    AssertError {
        field: LoginField,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    AssertNoError { field: LoginField },
    AssertValue { field: LoginField, value: String },
    /// `null` asserts that no field is focused
    AssertFocused { field: Option<LoginField> },
    AssertLoginEnabled { enabled: bool },
    AssertLoginCount { count: u64 },
}

impl ScenarioStep {
    pub fn is_assertion(&self) -> bool {
        matches!(
            self,
            ScenarioStep::AssertError { .. }
                | ScenarioStep::AssertNoError { .. }
                | ScenarioStep::AssertValue { .. }
                | ScenarioStep::AssertFocused { .. }
                | ScenarioStep::AssertLoginEnabled { .. }
                | ScenarioStep::AssertLoginCount { .. }
        )
    }

    /// Step name as written in scenario files
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioStep::Tap { .. } => "tap",
            ScenarioStep::Type { .. } => "type",
            ScenarioStep::Clear { .. } => "clear",
            ScenarioStep::SubmitEditing { .. } => "submit_editing",
            ScenarioStep::DismissKeyboard => "dismiss_keyboard",
            ScenarioStep::PressLogin => "press_login",
            ScenarioStep::Unmount => "unmount",
            ScenarioStep::AssertError { .. } => "assert_error",
            ScenarioStep::AssertNoError { .. } => "assert_no_error",
            ScenarioStep::AssertValue { .. } => "assert_value",
            ScenarioStep::AssertFocused { .. } => "assert_focused",
            ScenarioStep::AssertLoginEnabled { .. } => "assert_login_enabled",
            ScenarioStep::AssertLoginCount { .. } => "assert_login_count",
        }
    }
}
