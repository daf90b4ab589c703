//! Theme configuration file handling (theme.toml)
//!
//! ```toml
//! platform = "android"
//!
//! [palette]
//! dodger_blue = "#1E90FF"
//!
//! [strings]
//! login = "Sign in"
//! ```

use std::fs;
use std::path::Path;

use formkit_core::Platform;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::palette::Palette;
use crate::strings::Strings;
use crate::Theme;

/// On-disk theme description
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Platform to style for; the compile target when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default)]
    pub palette: Palette,
    #[serde(default)]
    pub strings: Strings,
}

impl ThemeConfig {
    /// Parse a theme from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a theme file
    pub fn load_from_path(path: &Path) -> Result<Self, ThemeError> {
        let content = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded theme file");
        Ok(config)
    }

    /// Describe an existing theme
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            platform: Some(theme.platform.to_string()),
            palette: theme.palette.clone(),
            strings: theme.strings.clone(),
        }
    }

    /// Resolve the platform name and build a [`Theme`]
    pub fn into_theme(self) -> Result<Theme, ThemeError> {
        let platform = match self.platform.as_deref() {
            Some(name) => name.parse::<Platform>()?,
            None => Platform::current(),
        };
        Ok(Theme {
            platform,
            palette: self.palette,
            strings: self.strings,
        })
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String, ThemeError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formkit_core::{Color, CoreError};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = ThemeConfig::from_toml_str("").unwrap();
        assert_eq!(config, ThemeConfig::default());

        let theme = config.into_theme().unwrap();
        assert_eq!(theme.platform, Platform::current());
        assert_eq!(theme.strings.email_required, "Email is required");
    }

    #[test]
    fn test_partial_overrides_keep_other_defaults() {
        let config = ThemeConfig::from_toml_str(
            r##"
platform = "android"

[palette]
dodger_blue = "#1E90FF"

[strings]
login = "Sign in"
"##,
        )
        .unwrap();

        let theme = config.into_theme().unwrap();
        assert_eq!(theme.platform, Platform::Android);
        assert_eq!(theme.palette.dodger_blue, Color::from_hex(0x1E90FF));
        assert_eq!(theme.palette.torch_red, Palette::default().torch_red);
        assert_eq!(theme.strings.login, "Sign in");
        assert_eq!(theme.strings.password_placeholder, "Password");
    }

    #[test]
    fn test_bad_color_is_a_parse_error() {
        let err = ThemeConfig::from_toml_str("[palette]\nsilver = \"grey\"\n").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
        assert!(err.to_string().contains("grey"));
    }

    #[test]
    fn test_unknown_platform_is_rejected() {
        let err = ThemeConfig::from_toml_str("platform = \"palm\"")
            .unwrap()
            .into_theme()
            .unwrap_err();
        assert!(matches!(
            err,
            ThemeError::Core(CoreError::UnknownPlatform(ref name)) if name == "palm"
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = ThemeConfig::load_from_path(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ThemeError::Io { .. }));
        assert!(err.to_string().contains("exist.toml"));
    }

    #[test]
    fn test_dump_and_reload() {
        let theme = Theme::for_platform(Platform::Ios);
        let text = ThemeConfig::from_theme(&theme).to_toml().unwrap();
        assert!(text.contains("platform = \"ios\""));

        let reloaded = ThemeConfig::from_toml_str(&text)
            .unwrap()
            .into_theme()
            .unwrap();
        assert_eq!(reloaded, theme);
    }
}
