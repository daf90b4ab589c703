//! Labeled text input
//!
//! A native text field with a fixed-height error line below it:
//! - Controlled value: text changes are reported, never applied locally
//! - Focus state tracked by a two-state FSM and used for the underline color
//! - Focus/blur events forwarded unchanged to the caller's handlers
//! - Imperative `focus()` forwarded to the native field through a [`FieldRef`]
//!
//! # Example
//!
//! ```ignore
//! let password = LabeledInput::new(
//!     theme.clone(),
//!     LabeledInputProps::new()
//!         .placeholder("Password")
//!         .secure_text_entry(true)
//!         .return_key_type(ReturnKeyType::Done),
//! );
//! password.focus();
//! ```

use std::fmt;

use formkit_core::events::event_types;
use formkit_core::fsm::StateMachine;
use formkit_core::style::HAIRLINE_WIDTH;
use formkit_core::{Event, FocusEvent, Platform, StateId, Style};
use formkit_theme::Theme;
use serde::{Deserialize, Serialize};

use crate::element::{container, text, Element, ElementKind, TextFieldSpec};
use crate::field_ref::FieldRef;
use crate::widget::{Widget, WidgetId};

/// Focus states
pub mod states {
    use formkit_core::StateId;

    pub const BLURRED: StateId = 0;
    pub const FOCUSED: StateId = 1;
}

/// Height of the text field
pub const FIELD_HEIGHT: f32 = 40.0;
/// Height of the error line, reserved even when there is no error
pub const ERROR_HEIGHT: f32 = 20.0;
/// Space below each input
pub const INPUT_MARGIN_BOTTOM: f32 = 10.0;
/// Left padding applied on Android, where the native underline is inset
pub const ANDROID_PADDING_LEFT: f32 = 6.0;

/// Soft keyboard layout hint
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardType {
    #[default]
    Default,
    EmailAddress,
    Numeric,
    PhonePad,
}

/// Label of the soft keyboard's return key
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnKeyType {
    #[default]
    Default,
    Done,
    Go,
    Next,
    Search,
    Send,
}

/// Focus/blur handler
pub type FocusHandler = Box<dyn FnMut(&FocusEvent) + Send>;
/// Text change handler, receives the full new value
pub type ChangeTextHandler = Box<dyn FnMut(&str) + Send>;
/// Return-key handler
pub type SubmitHandler = Box<dyn FnMut(&Event) + Send>;

/// Everything a native text field accepts, plus an optional error message
pub struct LabeledInputProps {
    pub placeholder: String,
    pub value: String,
    pub secure_text_entry: bool,
    pub keyboard_type: KeyboardType,
    pub return_key_type: ReturnKeyType,
    pub auto_correct: bool,
    /// Applied to both the wrapper and the field
    pub style: Style,
    /// Shown below the field; `None` renders an empty line
    pub error: Option<String>,
    on_change_text: Option<ChangeTextHandler>,
    on_submit_editing: Option<SubmitHandler>,
    on_focus: Option<FocusHandler>,
    on_blur: Option<FocusHandler>,
}

impl Default for LabeledInputProps {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            value: String::new(),
            secure_text_entry: false,
            keyboard_type: KeyboardType::Default,
            return_key_type: ReturnKeyType::Default,
            auto_correct: true,
            style: Style::default(),
            error: None,
            on_change_text: None,
            on_submit_editing: None,
            on_focus: None,
            on_blur: None,
        }
    }
}

impl LabeledInputProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn secure_text_entry(mut self, secure: bool) -> Self {
        self.secure_text_entry = secure;
        self
    }

    pub fn keyboard_type(mut self, keyboard_type: KeyboardType) -> Self {
        self.keyboard_type = keyboard_type;
        self
    }

    pub fn return_key_type(mut self, return_key_type: ReturnKeyType) -> Self {
        self.return_key_type = return_key_type;
        self
    }

    pub fn auto_correct(mut self, auto_correct: bool) -> Self {
        self.auto_correct = auto_correct;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn on_change_text<F: FnMut(&str) + Send + 'static>(mut self, handler: F) -> Self {
        self.on_change_text = Some(Box::new(handler));
        self
    }

    pub fn on_submit_editing<F: FnMut(&Event) + Send + 'static>(mut self, handler: F) -> Self {
        self.on_submit_editing = Some(Box::new(handler));
        self
    }

    pub fn on_focus<F: FnMut(&FocusEvent) + Send + 'static>(mut self, handler: F) -> Self {
        self.on_focus = Some(Box::new(handler));
        self
    }

    pub fn on_blur<F: FnMut(&FocusEvent) + Send + 'static>(mut self, handler: F) -> Self {
        self.on_blur = Some(Box::new(handler));
        self
    }
}

impl fmt::Debug for LabeledInputProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabeledInputProps")
            .field("placeholder", &self.placeholder)
            .field("value_len", &self.value.len())
            .field("secure_text_entry", &self.secure_text_entry)
            .field("keyboard_type", &self.keyboard_type)
            .field("return_key_type", &self.return_key_type)
            .field("auto_correct", &self.auto_correct)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

/// Text input with an error line and focus forwarding
pub struct LabeledInput {
    id: WidgetId,
    props: LabeledInputProps,
    focus_fsm: StateMachine,
    field: FieldRef,
    theme: Theme,
}

impl LabeledInput {
    /// Create an input with its own field handle
    pub fn new(theme: Theme, props: LabeledInputProps) -> Self {
        Self::with_field_ref(theme, props, FieldRef::new())
    }

    /// Create an input bound to an existing field handle
    pub fn with_field_ref(theme: Theme, props: LabeledInputProps, field: FieldRef) -> Self {
        Self {
            id: WidgetId::next(),
            props,
            focus_fsm: Self::create_fsm(),
            field,
            theme,
        }
    }

    fn create_fsm() -> StateMachine {
        StateMachine::builder(states::BLURRED)
            .on(states::BLURRED, event_types::FOCUS, states::FOCUSED)
            .on(states::FOCUSED, event_types::BLUR, states::BLURRED)
            .build()
    }

    /// Get the widget ID
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Handle the host attaches the native field to
    pub fn field_ref(&self) -> &FieldRef {
        &self.field
    }

    /// Request focus on the native field; no-op until it is mounted
    pub fn focus(&self) {
        if self.field.focus() {
            tracing::debug!(widget = %self.id, "focus requested");
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focus_fsm.is_in(states::FOCUSED)
    }

    pub fn focus_state(&self) -> StateId {
        self.focus_fsm.current_state()
    }

    pub fn props(&self) -> &LabeledInputProps {
        &self.props
    }

    /// Parent-driven value update
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.props.value = value.into();
    }

    /// Parent-driven error update
    pub fn set_error(&mut self, error: Option<String>) {
        self.props.error = error;
    }

    /// Route a host event addressed to this input
    pub fn handle_event(&mut self, event: &Event) -> bool {
        if event.target != self.id.as_raw() {
            return false;
        }

        match event.event_type {
            event_types::FOCUS => {
                self.focus_fsm.send(event_types::FOCUS);
                tracing::debug!(widget = %self.id, "input focused");
                let payload = event.focus_payload();
                if let Some(handler) = self.props.on_focus.as_mut() {
                    handler(&payload);
                }
            }
            event_types::BLUR => {
                self.focus_fsm.send(event_types::BLUR);
                tracing::debug!(widget = %self.id, "input blurred");
                let payload = event.focus_payload();
                if let Some(handler) = self.props.on_blur.as_mut() {
                    handler(&payload);
                }
            }
            event_types::TEXT_CHANGE => {
                let Some(text) = event.text() else {
                    return false;
                };
                if let Some(handler) = self.props.on_change_text.as_mut() {
                    handler(text);
                }
            }
            event_types::SUBMIT_EDITING => {
                tracing::debug!(widget = %self.id, "input submitted");
                if let Some(handler) = self.props.on_submit_editing.as_mut() {
                    handler(event);
                }
            }
            _ => return false,
        }

        true
    }

    fn container_style(&self) -> Style {
        Style::new()
            .margin_bottom(INPUT_MARGIN_BOTTOM)
            .merge(&self.props.style)
    }

    fn field_style(&self) -> Style {
        let palette = &self.theme.palette;
        let underline = if self.is_focused() {
            palette.dodger_blue
        } else {
            palette.light_gray
        };

        let platform_style = match self.theme.platform {
            Platform::Android => Style::new()
                .padding_left(ANDROID_PADDING_LEFT)
                .underline_color(underline),
            Platform::Ios | Platform::Desktop => Style::new()
                .border_color(palette.silver)
                .border_bottom_width(HAIRLINE_WIDTH),
        };

        Style::compose([
            &Style::new()
                .height(FIELD_HEIGHT)
                .selection_color(palette.dodger_blue),
            &platform_style,
            &self.props.style,
        ])
    }

    fn error_style(&self) -> Style {
        Style::new()
            .height(ERROR_HEIGHT)
            .color(self.theme.palette.torch_red)
            .when(self.theme.platform.is_android(), |s| {
                s.padding_left(ANDROID_PADDING_LEFT)
            })
    }

    /// Build the input's element tree
    pub fn build(&self) -> Element {
        let key = self.id.to_string();
        let spec = TextFieldSpec {
            widget: self.id.as_raw(),
            placeholder: self.props.placeholder.clone(),
            value: self.props.value.clone(),
            display_value: TextFieldSpec::mask(&self.props.value, self.props.secure_text_entry),
            secure_text_entry: self.props.secure_text_entry,
            keyboard_type: self.props.keyboard_type,
            return_key_type: self.props.return_key_type,
            auto_correct: self.props.auto_correct,
            focused: self.is_focused(),
        };

        container()
            .key(key.clone())
            .style(self.container_style())
            .child(
                Element::new(ElementKind::TextField(spec))
                    .key(format!("{key}.field"))
                    .style(self.field_style()),
            )
            .child(
                text(self.props.error.clone().unwrap_or_default())
                    .key(format!("{key}.error"))
                    .style(self.error_style()),
            )
    }
}

impl Widget for LabeledInput {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn render(&self) -> Element {
        self.build()
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        LabeledInput::handle_event(self, event)
    }
}

impl fmt::Debug for LabeledInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabeledInput")
            .field("id", &self.id)
            .field("props", &self.props)
            .field("focused", &self.is_focused())
            .field("field", &self.field)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_ref::NativeTextField;
    use formkit_core::Color;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn input(platform: Platform, props: LabeledInputProps) -> LabeledInput {
        LabeledInput::new(Theme::for_platform(platform), props)
    }

    fn error_line(input: &LabeledInput) -> Element {
        let key = format!("{}.error", input.id());
        input.render().find(&key).cloned().unwrap()
    }

    fn field(input: &LabeledInput) -> Element {
        let key = format!("{}.field", input.id());
        input.render().find(&key).cloned().unwrap()
    }

    #[test]
    fn test_focus_and_blur_are_tracked_and_forwarded() {
        let seen: Arc<Mutex<Vec<(&'static str, FocusEvent)>>> = Arc::default();
        let (on_focus_log, on_blur_log) = (seen.clone(), seen.clone());

        let mut input = input(
            Platform::Android,
            LabeledInputProps::new()
                .on_focus(move |e| on_focus_log.lock().unwrap().push(("focus", *e)))
                .on_blur(move |e| on_blur_log.lock().unwrap().push(("blur", *e))),
        );
        let id = input.id().as_raw();

        assert!(input.handle_event(&Event::focus(id, 5)));
        assert!(input.is_focused());
        assert!(input.handle_event(&Event::blur(id, 9)));
        assert!(!input.is_focused());

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                ("focus", FocusEvent { target: id, timestamp: 5 }),
                ("blur", FocusEvent { target: id, timestamp: 9 }),
            ]
        );
    }

    #[test]
    fn test_focus_tracked_without_handlers() {
        let mut input = input(Platform::Ios, LabeledInputProps::new());
        let id = input.id().as_raw();

        input.handle_event(&Event::focus(id, 0));
        assert_eq!(input.focus_state(), states::FOCUSED);
        input.handle_event(&Event::blur(id, 1));
        assert_eq!(input.focus_state(), states::BLURRED);
    }

    #[test]
    fn test_events_for_other_widgets_are_ignored() {
        let mut input = input(Platform::Ios, LabeledInputProps::new());
        let other = input.id().as_raw() + 1_000;

        assert!(!input.handle_event(&Event::focus(other, 0)));
        assert!(!input.is_focused());
    }

    #[test]
    fn test_text_change_is_reported_not_applied() {
        let changes: Arc<Mutex<Vec<String>>> = Arc::default();
        let log = changes.clone();
        let mut input = input(
            Platform::Ios,
            LabeledInputProps::new()
                .value("a")
                .on_change_text(move |t| log.lock().unwrap().push(t.to_string())),
        );
        let id = input.id().as_raw();

        assert!(input.handle_event(&Event::text_change(id, "ab")));
        assert_eq!(*changes.lock().unwrap(), vec!["ab".to_string()]);
        assert_eq!(input.props().value, "a");
    }

    #[test]
    fn test_submit_editing_forwards_event() {
        let submits = Arc::new(AtomicUsize::new(0));
        let count = submits.clone();
        let mut input = input(
            Platform::Ios,
            LabeledInputProps::new().on_submit_editing(move |_| {
                count.fetch_add(1, Ordering::SeqCst);
            }),
        );

        input.handle_event(&Event::submit_editing(input.id().as_raw()));
        assert_eq!(submits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_focus_without_mount_is_noop() {
        let input = input(Platform::Ios, LabeledInputProps::new());
        input.focus();
        assert!(!input.field_ref().is_mounted());
        assert!(!input.is_focused());
    }

    #[test]
    fn test_focus_reaches_attached_field() {
        struct Native(Arc<AtomicUsize>);
        impl NativeTextField for Native {
            fn focus(&mut self) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let count = Arc::new(AtomicUsize::new(0));
        let handle = FieldRef::new();
        let input = LabeledInput::with_field_ref(
            Theme::for_platform(Platform::Ios),
            LabeledInputProps::new(),
            handle.clone(),
        );
        handle.attach(Box::new(Native(count.clone())));

        input.focus();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_error_line_is_always_rendered_with_fixed_height() {
        let mut input = input(Platform::Ios, LabeledInputProps::new());

        let empty = error_line(&input);
        assert_eq!(empty.text_content(), Some(""));
        assert_eq!(empty.style.height, Some(ERROR_HEIGHT));

        input.set_error(Some("Email is required".to_string()));
        let shown = error_line(&input);
        assert_eq!(shown.text_content(), Some("Email is required"));
        assert_eq!(shown.style.height, Some(ERROR_HEIGHT));
        assert_eq!(input.render().count(), 3);
    }

    #[test]
    fn test_external_style_reaches_container_and_field() {
        let external = Style::new().height(60.0).background(Color::BLACK);
        let input = input(Platform::Ios, LabeledInputProps::new().style(external));
        let root = input.render();

        assert_eq!(root.style.height, Some(60.0));
        assert_eq!(root.style.margin_bottom, Some(INPUT_MARGIN_BOTTOM));
        let field = field(&input);
        assert_eq!(field.style.height, Some(60.0));
        assert_eq!(field.style.background, Some(Color::BLACK));
    }

    #[test]
    fn test_android_underline_follows_focus() {
        let palette = formkit_theme::Palette::default();
        let mut input = input(Platform::Android, LabeledInputProps::new());
        let id = input.id().as_raw();

        let blurred = field(&input);
        assert_eq!(blurred.style.underline_color, Some(palette.light_gray));
        assert_eq!(blurred.style.padding_left, Some(ANDROID_PADDING_LEFT));
        assert_eq!(blurred.style.border_bottom_width, None);
        assert_eq!(error_line(&input).style.padding_left, Some(ANDROID_PADDING_LEFT));

        input.handle_event(&Event::focus(id, 0));
        let focused = field(&input);
        assert_eq!(focused.style.underline_color, Some(palette.dodger_blue));
        assert!(focused.as_text_field().unwrap().focused);
    }

    #[test]
    fn test_ios_shows_hairline_border_regardless_of_focus() {
        let palette = formkit_theme::Palette::default();
        let mut input = input(Platform::Ios, LabeledInputProps::new());
        let id = input.id().as_raw();

        for focused in [false, true] {
            if focused {
                input.handle_event(&Event::focus(id, 0));
            }
            let style = field(&input).style;
            assert_eq!(style.border_bottom_width, Some(HAIRLINE_WIDTH));
            assert_eq!(style.border_color, Some(palette.silver));
            assert_eq!(style.underline_color, None);
            assert_eq!(style.padding_left, None);
            assert_eq!(style.selection_color, Some(palette.dodger_blue));
        }
        assert_eq!(error_line(&input).style.padding_left, None);
    }

    #[test]
    fn test_secure_entry_is_masked_in_render() {
        let input = input(
            Platform::Ios,
            LabeledInputProps::new()
                .value("pw")
                .secure_text_entry(true)
                .keyboard_type(KeyboardType::Default)
                .return_key_type(ReturnKeyType::Done),
        );
        let rendered = field(&input);
        let spec = rendered.as_text_field().unwrap();
        assert_eq!(spec.value, "pw");
        assert_eq!(spec.display_value, "\u{2022}\u{2022}");
        assert_eq!(spec.return_key_type, ReturnKeyType::Done);
    }

    #[test]
    fn test_repeated_focus_cycles_keep_state_constant() {
        let mut input = input(Platform::Android, LabeledInputProps::new());
        let id = input.id().as_raw();
        let before = format!("{:?}", input.focus_fsm);

        for ts in 0..10_000 {
            input.handle_event(&Event::focus(id, ts));
            input.handle_event(&Event::blur(id, ts));
        }

        assert!(!input.is_focused());
        assert_eq!(format!("{:?}", input.focus_fsm), before);
    }
}
