//! Global theme state singleton

use std::sync::OnceLock;

use crate::Theme;

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Fallback used before `init` is called
static DEFAULT_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Global theme state - read by app code that doesn't thread a `Theme`
/// through explicitly
#[derive(Debug)]
pub struct ThemeState {
    theme: Theme,
}

impl ThemeState {
    /// Initialize the global theme state.
    ///
    /// Safe to call multiple times; the first call wins.
    pub fn init(theme: Theme) {
        let platform = theme.platform;
        if THEME_STATE.set(ThemeState { theme }).is_err() {
            tracing::debug!("ThemeState already initialized, ignoring");
        } else {
            tracing::debug!(%platform, "ThemeState initialized");
        }
    }

    /// Initialize with the built-in theme for the compile target
    pub fn init_default() {
        Self::init(Theme::native());
    }

    /// Current theme, or the built-in native theme when never initialized
    pub fn get() -> &'static Theme {
        match THEME_STATE.get() {
            Some(state) => &state.theme,
            None => {
                &DEFAULT_STATE
                    .get_or_init(|| ThemeState {
                        theme: Theme::native(),
                    })
                    .theme
            }
        }
    }

    pub fn try_get() -> Option<&'static Theme> {
        THEME_STATE.get().map(|state| &state.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formkit_core::Platform;

    // The only test in this crate that touches the global.
    #[test]
    fn test_init_first_call_wins() {
        ThemeState::init(Theme::for_platform(Platform::Android));
        ThemeState::init(Theme::for_platform(Platform::Ios));

        assert_eq!(ThemeState::get().platform, Platform::Android);
        assert_eq!(
            ThemeState::try_get().map(|t| t.platform),
            Some(Platform::Android)
        );
    }
}
