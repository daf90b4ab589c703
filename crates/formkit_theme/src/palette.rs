//! Named colors

use formkit_core::Color;
use serde::{Deserialize, Serialize};

/// Colors used by the form widgets.
///
/// Theme files override individual entries; omitted entries keep their
/// defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Accent: selection, focused underline, enabled button
    pub dodger_blue: Color,
    /// Blurred underline, disabled button
    pub light_gray: Color,
    /// Hairline border under text fields
    pub silver: Color,
    /// Validation errors
    pub torch_red: Color,
    pub white: Color,
    pub black: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dodger_blue: Color::from_hex(0x428AF8),
            light_gray: Color::from_hex(0xD3D3D3),
            silver: Color::from_hex(0xBEBEBE),
            torch_red: Color::from_hex(0xF8262F),
            white: Color::WHITE,
            black: Color::BLACK,
        }
    }
}
