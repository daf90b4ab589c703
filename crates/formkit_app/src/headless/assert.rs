//! Assertion helpers for headless scenarios.

use serde::Serialize;

use super::host::HeadlessHost;
use crate::login_form::LoginField;

/// Observable state of one field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldSnapshot {
    /// Secret values are masked so they never reach a report
    pub value: String,
    pub touched: bool,
    pub error: Option<String>,
    pub focus_requests: u32,
}

/// Snapshot of the login screen taken for assertions and reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginSnapshot {
    pub email: FieldSnapshot,
    pub password: FieldSnapshot,
    pub focused: Option<LoginField>,
    pub login_enabled: bool,
    pub login_count: u64,
}

impl LoginSnapshot {
    pub fn capture(host: &HeadlessHost) -> Self {
        let form = host.form();
        let field = |field: LoginField| {
            let value = form.value(field);
            FieldSnapshot {
                value: match field {
                    LoginField::Email => value,
                    LoginField::Password => "*".repeat(value.chars().count()),
                },
                touched: form.is_touched(field),
                error: form.error(field),
                focus_requests: host.focus_requests(field),
            }
        };

        Self {
            email: field(LoginField::Email),
            password: field(LoginField::Password),
            focused: host.focused(),
            login_enabled: form.can_submit(),
            login_count: host.login_count(),
        }
    }

    pub fn field(&self, field: LoginField) -> &FieldSnapshot {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }
}

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

impl AssertionResult {
    fn failed(code: &str, message: String) -> Self {
        AssertionResult::Failed {
            code: code.to_string(),
            message,
        }
    }
}

/// Field shows an error; when `expected` is given the message must contain it
pub fn evaluate_assert_error(
    field: LoginField,
    expected: Option<&str>,
    snapshot: &LoginSnapshot,
) -> AssertionResult {
    let Some(error) = snapshot.field(field).error.as_deref() else {
        return AssertionResult::failed("missing_error", format!("{field}: no error shown"));
    };
    match expected {
        Some(expected) if !error.contains(expected) => AssertionResult::failed(
            "error_mismatch",
            format!("{field}: expected error containing '{expected}', got '{error}'"),
        ),
        _ => AssertionResult::Passed,
    }
}

pub fn evaluate_assert_no_error(field: LoginField, snapshot: &LoginSnapshot) -> AssertionResult {
    match snapshot.field(field).error.as_deref() {
        None => AssertionResult::Passed,
        Some(error) => {
            AssertionResult::failed("unexpected_error", format!("{field}: shows '{error}'"))
        }
    }
}

/// Compares against the raw value; the snapshot only holds a masked password
pub fn evaluate_assert_value(
    field: LoginField,
    expected: &str,
    host: &HeadlessHost,
) -> AssertionResult {
    let value = host.form().value(field);
    if value == expected {
        AssertionResult::Passed
    } else {
        let shown = match field {
            LoginField::Email => value,
            LoginField::Password => format!("<{} chars>", value.chars().count()),
        };
        AssertionResult::failed(
            "value_mismatch",
            format!("{field}: expected '{expected}', got '{shown}'"),
        )
    }
}

pub fn evaluate_assert_focused(
    expected: Option<LoginField>,
    snapshot: &LoginSnapshot,
) -> AssertionResult {
    if snapshot.focused == expected {
        return AssertionResult::Passed;
    }
    let describe = |f: Option<LoginField>| f.map_or("none", LoginField::as_str);
    AssertionResult::failed(
        "focus_mismatch",
        format!(
            "expected focus on {}, got {}",
            describe(expected),
            describe(snapshot.focused)
        ),
    )
}

pub fn evaluate_assert_login_enabled(enabled: bool, snapshot: &LoginSnapshot) -> AssertionResult {
    if snapshot.login_enabled == enabled {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "login_state_mismatch",
            format!(
                "expected login button {}, got {}",
                enabled_str(enabled),
                enabled_str(snapshot.login_enabled)
            ),
        )
    }
}

pub fn evaluate_assert_login_count(count: u64, snapshot: &LoginSnapshot) -> AssertionResult {
    if snapshot.login_count == count {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "login_count_mismatch",
            format!(
                "expected {count} login(s), got {}",
                snapshot.login_count
            ),
        )
    }
}

fn enabled_str(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled"
    }
}
