//! Button widget with FSM-driven interactions
//!
//! The Button widget provides:
//! - Visual states: idle, pressed, disabled
//! - A click callback fired once per completed press
//! - Runtime enable/disable driven by the parent

use std::fmt;

use formkit_core::events::event_types;
use formkit_core::fsm::StateMachine;
use formkit_core::{Align, Color, Event, StateId, Style};
use formkit_theme::Palette;

use crate::element::{Element, ElementKind};
use crate::widget::{Widget, WidgetId};

/// Button states
pub mod states {
    use formkit_core::StateId;

    pub const IDLE: StateId = 0;
    pub const PRESSED: StateId = 2;
    pub const DISABLED: StateId = 3;
}

/// Button configuration
#[derive(Clone, Debug)]
pub struct ButtonConfig {
    /// Button label text
    pub label: String,
    /// Base background color
    pub bg_color: Color,
    /// Pressed background color
    pub pressed_color: Color,
    /// Disabled background color
    pub disabled_color: Color,
    /// Text color
    pub text_color: Color,
    /// Disabled text color
    pub disabled_text_color: Color,
    /// Button height
    pub height: f32,
    /// Space below the button
    pub margin_bottom: f32,
    /// Whether the button is disabled
    pub disabled: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::themed("", &Palette::default())
    }
}

impl ButtonConfig {
    /// Create a new button config with a label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Config colored from a palette
    pub fn themed(label: impl Into<String>, palette: &Palette) -> Self {
        Self {
            label: label.into(),
            bg_color: palette.dodger_blue,
            pressed_color: palette.dodger_blue.with_alpha(0.8),
            disabled_color: palette.light_gray,
            text_color: palette.white,
            disabled_text_color: palette.white.with_alpha(0.7),
            height: 44.0,
            margin_bottom: 12.0,
            disabled: false,
        }
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Button widget
pub struct Button {
    /// Widget ID
    id: WidgetId,
    /// Configuration
    config: ButtonConfig,
    fsm: StateMachine,
    /// Click callback
    on_click: Option<Box<dyn FnMut() + Send>>,
    clicks: u64,
}

impl Button {
    /// Create a button with custom config
    pub fn with_config(config: ButtonConfig) -> Self {
        let fsm = Self::create_fsm(config.disabled);
        Self {
            id: WidgetId::next(),
            config,
            fsm,
            on_click: None,
            clicks: 0,
        }
    }

    /// Create the button FSM
    fn create_fsm(disabled: bool) -> StateMachine {
        if disabled {
            // Disabled button has no transitions
            StateMachine::builder(states::DISABLED).build()
        } else {
            StateMachine::builder(states::IDLE)
                .on(states::IDLE, event_types::POINTER_DOWN, states::PRESSED)
                .on(states::PRESSED, event_types::POINTER_UP, states::IDLE)
                .on(states::PRESSED, event_types::POINTER_CANCEL, states::IDLE)
                .build()
        }
    }

    /// Get the widget ID
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Set the click callback
    pub fn on_click<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn label(&self) -> &str {
        &self.config.label
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    /// Number of completed presses
    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    /// Enable or disable the button; a press in progress is dropped
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.config.disabled == disabled {
            return;
        }
        self.config.disabled = disabled;
        self.fsm = Self::create_fsm(disabled);
    }

    /// Handle an event
    pub fn handle_event(&mut self, event: &Event) -> bool {
        if event.target != self.id.as_raw() {
            return false;
        }
        if self.config.disabled {
            tracing::trace!(widget = %self.id, "event on disabled button ignored");
            return true;
        }

        let old_state = self.fsm.current_state();
        let new_state = self.fsm.send(event.event_type);

        // A press completes on pointer up from PRESSED
        if old_state == states::PRESSED
            && new_state == states::IDLE
            && event.event_type == event_types::POINTER_UP
        {
            self.clicks += 1;
            tracing::debug!(widget = %self.id, label = %self.config.label, "button clicked");
            if let Some(ref mut callback) = self.on_click {
                callback();
            }
        }

        true
    }

    /// Perform a full press (down + up). Returns whether it clicked.
    pub fn press(&mut self) -> bool {
        let before = self.clicks;
        let target = self.id.as_raw();
        self.handle_event(&Event::pointer(event_types::POINTER_DOWN, target));
        self.handle_event(&Event::pointer(event_types::POINTER_UP, target));
        self.clicks > before
    }

    /// Build the button's element
    pub fn build(&self) -> Element {
        let (bg_color, text_color) = match self.fsm.current_state() {
            states::DISABLED => (self.config.disabled_color, self.config.disabled_text_color),
            states::PRESSED => (self.config.pressed_color, self.config.text_color),
            _ => (self.config.bg_color, self.config.text_color),
        };

        Element::new(ElementKind::Button {
            widget: self.id.as_raw(),
            label: self.config.label.clone(),
            disabled: self.config.disabled,
        })
        .key(self.id.to_string())
        .style(
            Style::new()
                .height(self.config.height)
                .margin_bottom(self.config.margin_bottom)
                .background(bg_color)
                .color(text_color)
                .align_items(Align::Center)
                .justify_content(Align::Center),
        )
    }
}

impl Widget for Button {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn render(&self) -> Element {
        self.build()
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        Button::handle_event(self, event)
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("state", &self.fsm.current_state())
            .field("clicks", &self.clicks)
            .finish()
    }
}

/// Create a button with a label
pub fn button(label: impl Into<String>) -> Button {
    Button::with_config(ButtonConfig::new(label))
}
