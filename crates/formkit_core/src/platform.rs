//! Host platform identity
//!
//! Widgets branch their styling on the platform the way native toolkits do:
//! Android pads text fields and colors the native underline, iOS draws a
//! hairline bottom border.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Platform the UI is rendered on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    #[default]
    Desktop,
}

impl Platform {
    /// Platform of the compile target
    pub fn current() -> Self {
        if cfg!(target_os = "ios") {
            Platform::Ios
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else {
            Platform::Desktop
        }
    }

    /// Pick a value per platform
    pub fn select<T>(self, ios: T, android: T, other: T) -> T {
        match self {
            Platform::Ios => ios,
            Platform::Android => android,
            Platform::Desktop => other,
        }
    }

    pub fn is_android(self) -> bool {
        self == Platform::Android
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            "desktop" | "macos" | "windows" | "linux" => Ok(Platform::Desktop),
            _ => Err(CoreError::UnknownPlatform(s.to_string())),
        }
    }
}
