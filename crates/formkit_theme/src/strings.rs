use serde::{Deserialize, Serialize};

/// User-facing text of the login screen
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Strings {
    pub email_placeholder: String,
    pub password_placeholder: String,
    pub login: String,
    pub email_required: String,
    pub password_required: String,
    /// Asset path of the logo shown above the form
    pub logo_source: String,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            email_placeholder: "Email".to_string(),
            password_placeholder: "Password".to_string(),
            login: "Log In".to_string(),
            email_required: "Email is required".to_string(),
            password_required: "Password is required".to_string(),
            logo_source: "images/logo.png".to_string(),
        }
    }
}
