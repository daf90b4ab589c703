//! formkit Theme
//!
//! Named colors, UI strings and the platform the UI is styled for, bundled
//! as a [`Theme`].
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use formkit_theme::{ThemeConfig, ThemeState};
//!
//! // Initialize theme at app startup
//! let config = ThemeConfig::load_from_path("theme.toml".as_ref())?;
//! ThemeState::init(config.into_theme()?);
//!
//! // Access theme in widgets
//! let theme = ThemeState::get();
//! let accent = theme.palette.dodger_blue;
//! ```
//!
//! Widgets take a `Theme` by value at construction, so tests can build
//! themes for several platforms side by side without touching the global.

mod config;
mod error;
mod palette;
mod state;
mod strings;

pub use config::ThemeConfig;
pub use error::ThemeError;
pub use palette::Palette;
pub use state::ThemeState;
pub use strings::Strings;

use formkit_core::Platform;

/// Resolved theme used by widgets
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Theme {
    pub platform: Platform,
    pub palette: Palette,
    pub strings: Strings,
}

impl Theme {
    /// Built-in palette and strings for the compile target platform
    pub fn native() -> Self {
        Self::for_platform(Platform::current())
    }

    /// Built-in palette and strings styled for `platform`
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform,
            palette: Palette::default(),
            strings: Strings::default(),
        }
    }

    /// Same theme, styled for another platform
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }
}
