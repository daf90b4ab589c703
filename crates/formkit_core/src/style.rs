//! Style properties and composition
//!
//! A [`Style`] is a bag of optional properties. Composition is right-wins per
//! property: `base.merge(&override)` keeps every property of `base` that
//! `override` leaves unset. This lets a widget apply its own style first and
//! an externally supplied style on top of it.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Thinnest visible line on the display
pub const HAIRLINE_WIDTH: f32 = 0.5;

/// Cross/main axis alignment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Start,
    Center,
    End,
    SpaceBetween,
    Stretch,
}

/// Optional visual properties of an element
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// Width as a percentage of the parent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_percent: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom_width: Option<f32>,
    /// Text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    /// Text selection highlight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_color: Option<Color>,
    /// Native underline drawn by the platform text field (Android)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_self: Option<Align>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay `other` on top of `self`; properties set in `other` win
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            height: other.height.or(self.height),
            width_percent: other.width_percent.or(self.width_percent),
            flex: other.flex.or(self.flex),
            margin_bottom: other.margin_bottom.or(self.margin_bottom),
            padding_left: other.padding_left.or(self.padding_left),
            border_color: other.border_color.or(self.border_color),
            border_bottom_width: other.border_bottom_width.or(self.border_bottom_width),
            color: other.color.or(self.color),
            background: other.background.or(self.background),
            selection_color: other.selection_color.or(self.selection_color),
            underline_color: other.underline_color.or(self.underline_color),
            align_items: other.align_items.or(self.align_items),
            justify_content: other.justify_content.or(self.justify_content),
            align_self: other.align_self.or(self.align_self),
        }
    }

    /// Compose a list of styles left to right
    pub fn compose<'a>(styles: impl IntoIterator<Item = &'a Style>) -> Style {
        styles
            .into_iter()
            .fold(Style::default(), |acc, style| acc.merge(style))
    }

    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn width_percent(mut self, percent: f32) -> Self {
        self.width_percent = Some(percent);
        self
    }

    pub fn flex(mut self, flex: f32) -> Self {
        self.flex = Some(flex);
        self
    }

    pub fn margin_bottom(mut self, margin: f32) -> Self {
        self.margin_bottom = Some(margin);
        self
    }

    pub fn padding_left(mut self, padding: f32) -> Self {
        self.padding_left = Some(padding);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn border_bottom_width(mut self, width: f32) -> Self {
        self.border_bottom_width = Some(width);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn selection_color(mut self, color: Color) -> Self {
        self.selection_color = Some(color);
        self
    }

    pub fn underline_color(mut self, color: Color) -> Self {
        self.underline_color = Some(color);
        self
    }

    pub fn align_items(mut self, align: Align) -> Self {
        self.align_items = Some(align);
        self
    }

    pub fn justify_content(mut self, align: Align) -> Self {
        self.justify_content = Some(align);
        self
    }

    pub fn align_self(mut self, align: Align) -> Self {
        self.align_self = Some(align);
        self
    }

    /// Apply `transform` only when `condition` holds
    pub fn when(self, condition: bool, transform: impl FnOnce(Self) -> Self) -> Self {
        if condition {
            transform(self)
        } else {
            self
        }
    }
}
