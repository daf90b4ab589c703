//! Login screen
//!
//! Holds the email and password values plus a touched flag per field.
//! Validation errors are never stored: they are derived from
//! `(value, touched)` whenever the children are re-rendered or an accessor
//! is called, so they cannot drift from the field they describe.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard};

use formkit_core::events::event_types;
use formkit_core::fsm::StateMachine;
use formkit_core::{Align, Event, Style};
use formkit_theme::{Theme, ThemeState};
use formkit_widgets::element::{container, image};
use formkit_widgets::{
    Button, ButtonConfig, Element, FieldRef, KeyboardType, LabeledInput, LabeledInputProps,
    ReturnKeyType, WidgetId,
};
use serde::{Deserialize, Serialize};

/// Touched states
pub mod touched_states {
    use formkit_core::StateId;

    pub const UNTOUCHED: StateId = 0;
    pub const TOUCHED: StateId = 1;
}

/// Error shown for a field: present iff it was left at least once and is
/// currently empty
pub fn field_error<'a>(value: &str, touched: bool, message: &'a str) -> Option<&'a str> {
    (touched && value.is_empty()).then_some(message)
}

/// The two inputs of the login form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginField {
    Email,
    Password,
}

impl LoginField {
    pub const ALL: [LoginField; 2] = [LoginField::Email, LoginField::Password];

    pub fn as_str(self) -> &'static str {
        match self {
            LoginField::Email => "email",
            LoginField::Password => "password",
        }
    }
}

impl fmt::Display for LoginField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoginField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(LoginField::Email),
            "password" => Ok(LoginField::Password),
            other => Err(format!("unknown field `{other}` (expected email or password)")),
        }
    }
}

/// Value and touched flag of one field
pub struct FieldState {
    value: String,
    touched: StateMachine,
}

impl Default for FieldState {
    fn default() -> Self {
        Self {
            value: String::new(),
            // One-way: there is no transition back to UNTOUCHED
            touched: StateMachine::builder(touched_states::UNTOUCHED)
                .on(
                    touched_states::UNTOUCHED,
                    event_types::BLUR,
                    touched_states::TOUCHED,
                )
                .build(),
        }
    }
}

impl FieldState {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_touched(&self) -> bool {
        self.touched.is_in(touched_states::TOUCHED)
    }

    pub fn error<'a>(&self, message: &'a str) -> Option<&'a str> {
        field_error(&self.value, self.is_touched(), message)
    }

    fn set_value(&mut self, value: &str) {
        self.value.clear();
        self.value.push_str(value);
    }

    fn mark_touched(&mut self) {
        self.touched.send(event_types::BLUR);
    }
}

impl fmt::Debug for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldState")
            .field("value_len", &self.value.len())
            .field("touched", &self.is_touched())
            .finish()
    }
}

/// Form state owned by the login screen
#[derive(Debug, Default)]
pub struct LoginState {
    pub email: FieldState,
    pub password: FieldState,
}

impl LoginState {
    pub fn field(&self, field: LoginField) -> &FieldState {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    fn field_mut(&mut self, field: LoginField) -> &mut FieldState {
        match field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    /// Both fields are filled in
    pub fn can_submit(&self) -> bool {
        !self.email.value.is_empty() && !self.password.value.is_empty()
    }
}

type SharedLoginState = Arc<Mutex<LoginState>>;

/// Reads and writes both go through here; a poisoned lock is recovered.
fn lock(state: &SharedLoginState) -> MutexGuard<'_, LoginState> {
    state.lock().unwrap_or_else(|poisoned| {
        tracing::warn!("login state lock poisoned, recovering");
        poisoned.into_inner()
    })
}

fn update(state: &SharedLoginState, f: impl FnOnce(&mut LoginState)) {
    f(&mut lock(state));
}

/// Login screen widget
pub struct LoginForm {
    theme: Theme,
    state: SharedLoginState,
    email_input: LabeledInput,
    password_input: LabeledInput,
    login_button: Button,
}

impl LoginForm {
    /// Create a form styled with the global theme
    pub fn new<F: FnMut() + Send + 'static>(on_login: F) -> Self {
        Self::with_theme(ThemeState::get().clone(), on_login)
    }

    /// Create a form; `on_login` runs once per press of the enabled button
    pub fn with_theme<F: FnMut() + Send + 'static>(theme: Theme, mut on_login: F) -> Self {
        let state: SharedLoginState = Arc::default();
        let password_ref = FieldRef::new();
        let strings = &theme.strings;

        let email_input = LabeledInput::new(
            theme.clone(),
            Self::field_props(&state, LoginField::Email)
                .placeholder(strings.email_placeholder.clone())
                .auto_correct(false)
                .keyboard_type(KeyboardType::EmailAddress)
                .return_key_type(ReturnKeyType::Next)
                .on_submit_editing({
                    let password_ref = password_ref.clone();
                    move |_| {
                        tracing::debug!("email submitted, moving focus to password");
                        password_ref.focus();
                    }
                }),
        );

        let password_input = LabeledInput::with_field_ref(
            theme.clone(),
            Self::field_props(&state, LoginField::Password)
                .placeholder(strings.password_placeholder.clone())
                .secure_text_entry(true)
                .return_key_type(ReturnKeyType::Done),
            password_ref,
        );

        let login_button = Button::with_config(
            ButtonConfig::themed(strings.login.clone(), &theme.palette).disabled(true),
        )
        .on_click(move || {
            tracing::info!("login requested");
            on_login();
        });

        let mut form = Self {
            theme,
            state,
            email_input,
            password_input,
            login_button,
        };
        form.sync_children();
        form
    }

    /// Change and blur handlers shared by both inputs
    fn field_props(state: &SharedLoginState, field: LoginField) -> LabeledInputProps {
        let on_change = state.clone();
        let on_blur = state.clone();
        LabeledInputProps::new()
            .on_change_text(move |text| {
                update(&on_change, |s| s.field_mut(field).set_value(text));
            })
            .on_blur(move |_| {
                update(&on_blur, |s| s.field_mut(field).mark_touched());
            })
    }

    /// Route a host event to the input or button it targets, then
    /// re-render the children from the updated state
    pub fn handle_event(&mut self, event: &Event) -> bool {
        let handled = self.email_input.handle_event(event)
            || self.password_input.handle_event(event)
            || self.login_button.handle_event(event);

        if handled {
            self.sync_children();
        } else {
            tracing::trace!(target_id = event.target, "event not addressed to login form");
        }
        handled
    }

    /// Push current values, freshly derived errors and the submit
    /// availability down to the children
    fn sync_children(&mut self) {
        let state = lock(&self.state);
        let strings = &self.theme.strings;

        self.email_input.set_value(state.email.value());
        self.email_input.set_error(
            state
                .email
                .error(&strings.email_required)
                .map(str::to_string),
        );
        self.password_input.set_value(state.password.value());
        self.password_input.set_error(
            state
                .password
                .error(&strings.password_required)
                .map(str::to_string),
        );
        self.login_button.set_disabled(!state.can_submit());
    }

    /// Press the login button (down + up). Returns whether the action ran.
    pub fn press_login(&mut self) -> bool {
        let clicked = self.login_button.press();
        self.sync_children();
        clicked
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn input(&self, field: LoginField) -> &LabeledInput {
        match field {
            LoginField::Email => &self.email_input,
            LoginField::Password => &self.password_input,
        }
    }

    pub fn input_id(&self, field: LoginField) -> WidgetId {
        self.input(field).id()
    }

    /// Handle the host mounts the native field on
    pub fn field_ref(&self, field: LoginField) -> &FieldRef {
        self.input(field).field_ref()
    }

    /// Which field an event target belongs to
    pub fn field_for_target(&self, target: u64) -> Option<LoginField> {
        LoginField::ALL
            .into_iter()
            .find(|field| self.input_id(*field).as_raw() == target)
    }

    pub fn login_button_id(&self) -> WidgetId {
        self.login_button.id()
    }

    pub fn value(&self, field: LoginField) -> String {
        lock(&self.state).field(field).value().to_string()
    }

    pub fn is_touched(&self, field: LoginField) -> bool {
        lock(&self.state).field(field).is_touched()
    }

    /// Current validation error, derived from the live state
    pub fn error(&self, field: LoginField) -> Option<String> {
        let message = match field {
            LoginField::Email => &self.theme.strings.email_required,
            LoginField::Password => &self.theme.strings.password_required,
        };
        lock(&self.state)
            .field(field)
            .error(message)
            .map(str::to_string)
    }

    pub fn is_focused(&self, field: LoginField) -> bool {
        self.input(field).is_focused()
    }

    pub fn can_submit(&self) -> bool {
        !self.login_button.is_disabled()
    }

    pub fn login_clicks(&self) -> u64 {
        self.login_button.clicks()
    }

    /// Build the screen's element tree
    pub fn render(&self) -> Element {
        let palette = &self.theme.palette;

        container()
            .key("login")
            .style(
                Style::new()
                    .flex(1.0)
                    .background(palette.white)
                    .align_items(Align::Center)
                    .justify_content(Align::SpaceBetween),
            )
            .child(
                image(self.theme.strings.logo_source.clone())
                    .key("logo")
                    .style(
                        Style::new()
                            .flex(1.0)
                            .width_percent(100.0)
                            .align_self(Align::Center),
                    ),
            )
            .child(
                container()
                    .key("form")
                    .style(
                        Style::new()
                            .flex(1.0)
                            .justify_content(Align::Center)
                            .width_percent(80.0),
                    )
                    .child(self.email_input.build())
                    .child(self.password_input.build())
                    .child(self.login_button.build()),
            )
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("platform", &self.theme.platform)
            .field("state", &*lock(&self.state))
            .field("email_input", &self.email_input)
            .field("password_input", &self.password_input)
            .field("login_button", &self.login_button)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formkit_core::Platform;
    use formkit_widgets::NativeTextField;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn form() -> (LoginForm, Arc<AtomicUsize>) {
        let logins = Arc::new(AtomicUsize::new(0));
        let counter = logins.clone();
        let form = LoginForm::with_theme(Theme::for_platform(Platform::Ios), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (form, logins)
    }

    fn id(form: &LoginForm, field: LoginField) -> u64 {
        form.input_id(field).as_raw()
    }

    fn type_into(form: &mut LoginForm, field: LoginField, text: &str) {
        let target = id(form, field);
        form.handle_event(&Event::text_change(target, text));
    }

    fn blur(form: &mut LoginForm, field: LoginField) {
        let target = id(form, field);
        form.handle_event(&Event::focus(target, 0));
        form.handle_event(&Event::blur(target, 1));
    }

    #[test]
    fn test_field_error_truth_table() {
        for value in ["", "x"] {
            for touched in [false, true] {
                let expected = value.is_empty() && touched;
                assert_eq!(field_error(value, touched, "msg").is_some(), expected);
            }
        }
        assert_eq!(field_error("", true, "Email is required"), Some("Email is required"));
    }

    #[test]
    fn test_fresh_form_has_no_errors_and_cannot_submit() {
        let (mut form, logins) = form();

        for field in LoginField::ALL {
            assert_eq!(form.value(field), "");
            assert!(!form.is_touched(field));
            assert_eq!(form.error(field), None);
        }
        assert!(!form.can_submit());
        assert!(!form.press_login());
        assert_eq!(logins.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_blurred_empty_email_shows_only_email_error() {
        let (mut form, _) = form();
        blur(&mut form, LoginField::Email);

        assert_eq!(form.error(LoginField::Email).as_deref(), Some("Email is required"));
        assert_eq!(form.error(LoginField::Password), None);
        assert!(!form.is_touched(LoginField::Password));

        let key = format!("{}.error", form.input_id(LoginField::Email));
        let rendered = form.render();
        assert_eq!(
            rendered.find(&key).and_then(Element::text_content),
            Some("Email is required")
        );
    }

    #[test]
    fn test_typing_after_blur_clears_error_immediately() {
        let (mut form, _) = form();
        blur(&mut form, LoginField::Email);
        type_into(&mut form, LoginField::Email, "a");

        assert_eq!(form.error(LoginField::Email), None);
        let key = format!("{}.error", form.input_id(LoginField::Email));
        assert_eq!(form.render().find(&key).and_then(Element::text_content), Some(""));

        // Clearing the value brings it back since the field stays touched
        type_into(&mut form, LoginField::Email, "");
        assert!(form.error(LoginField::Email).is_some());
    }

    #[test]
    fn test_touched_is_monotonic() {
        let (mut form, _) = form();
        blur(&mut form, LoginField::Password);
        assert!(form.is_touched(LoginField::Password));

        let target = id(&form, LoginField::Password);
        form.handle_event(&Event::focus(target, 2));
        type_into(&mut form, LoginField::Password, "pw");
        type_into(&mut form, LoginField::Password, "");
        assert!(form.is_touched(LoginField::Password));
    }

    #[test]
    fn test_change_only_affects_one_field() {
        let (mut form, _) = form();
        blur(&mut form, LoginField::Password);
        type_into(&mut form, LoginField::Email, "a@b.com");

        assert_eq!(form.value(LoginField::Email), "a@b.com");
        assert_eq!(form.value(LoginField::Password), "");
        assert!(form.is_touched(LoginField::Password));
        assert!(!form.is_touched(LoginField::Email));
    }

    #[test]
    fn test_email_submit_focuses_password_once() {
        struct Native(Arc<AtomicUsize>);
        impl NativeTextField for Native {
            fn focus(&mut self) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let (mut form, _) = form();
        type_into(&mut form, LoginField::Email, "a@b.com");

        // Not mounted yet: silently dropped
        form.handle_event(&Event::submit_editing(id(&form, LoginField::Email)));

        let requests = Arc::new(AtomicUsize::new(0));
        form.field_ref(LoginField::Password)
            .attach(Box::new(Native(requests.clone())));

        form.handle_event(&Event::submit_editing(id(&form, LoginField::Email)));
        assert_eq!(requests.load(Ordering::SeqCst), 1);
        assert_eq!(form.value(LoginField::Email), "a@b.com");
        assert_eq!(form.value(LoginField::Password), "");
    }

    #[test]
    fn test_password_submit_does_not_move_focus() {
        let (mut form, _) = form();
        let requests = Arc::new(AtomicUsize::new(0));

        struct Native(Arc<AtomicUsize>);
        impl NativeTextField for Native {
            fn focus(&mut self) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
        form.field_ref(LoginField::Email)
            .attach(Box::new(Native(requests.clone())));

        form.handle_event(&Event::submit_editing(id(&form, LoginField::Password)));
        assert_eq!(requests.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_filled_form_submits_once_per_press() {
        let (mut form, logins) = form();
        type_into(&mut form, LoginField::Email, "a@b.com");
        assert!(!form.can_submit());
        type_into(&mut form, LoginField::Password, "pw");

        assert!(form.can_submit());
        for field in LoginField::ALL {
            assert_eq!(form.error(field), None);
        }

        assert!(form.press_login());
        assert_eq!(logins.load(Ordering::SeqCst), 1);
        assert!(form.press_login());
        assert_eq!(logins.load(Ordering::SeqCst), 2);
        assert_eq!(form.login_clicks(), 2);
    }

    #[test]
    fn test_emptying_a_field_disables_submit_again() {
        let (mut form, logins) = form();
        type_into(&mut form, LoginField::Email, "a@b.com");
        type_into(&mut form, LoginField::Password, "pw");
        type_into(&mut form, LoginField::Password, "");

        assert!(!form.can_submit());
        assert!(!form.press_login());
        assert_eq!(logins.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_pointer_events_reach_the_button() {
        let (mut form, logins) = form();
        type_into(&mut form, LoginField::Email, "a@b.com");
        type_into(&mut form, LoginField::Password, "pw");

        let button = form.login_button_id().as_raw();
        assert!(form.handle_event(&Event::pointer(event_types::POINTER_DOWN, button)));
        assert!(form.handle_event(&Event::pointer(event_types::POINTER_UP, button)));
        assert_eq!(logins.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unknown_target_is_not_handled() {
        let (mut form, _) = form();
        assert!(!form.handle_event(&Event::focus(u64::MAX, 0)));
        assert_eq!(form.field_for_target(u64::MAX), None);
        assert_eq!(
            form.field_for_target(id(&form, LoginField::Password)),
            Some(LoginField::Password)
        );
    }

    #[test]
    fn test_render_layout() {
        let (form, _) = form();
        let tree = form.render();

        assert_eq!(tree.style.background, Some(form.theme().palette.white));
        let logo = tree.find("logo").unwrap();
        assert!(matches!(
            &logo.kind,
            formkit_widgets::ElementKind::Image { source } if source == "images/logo.png"
        ));

        let form_box = tree.find("form").unwrap();
        assert_eq!(form_box.style.width_percent, Some(80.0));
        assert_eq!(form_box.children.len(), 3);

        let email_field = form_box.children[0].children[0].as_text_field().unwrap();
        assert_eq!(email_field.placeholder, "Email");
        assert_eq!(email_field.keyboard_type, KeyboardType::EmailAddress);
        assert_eq!(email_field.return_key_type, ReturnKeyType::Next);
        assert!(!email_field.auto_correct);

        let password_field = form_box.children[1].children[0].as_text_field().unwrap();
        assert!(password_field.secure_text_entry);
        assert_eq!(password_field.return_key_type, ReturnKeyType::Done);
    }

    #[test]
    fn test_poisoned_state_still_updates_and_renders_consistently() {
        let (mut form, logins) = form();
        let shared = form.state.clone();
        let _ = std::thread::spawn(move || {
            let _guard = shared.lock().unwrap();
            panic!("handler panicked while holding the form state");
        })
        .join();
        assert!(form.state.is_poisoned());

        type_into(&mut form, LoginField::Email, "a@b.com");
        type_into(&mut form, LoginField::Password, "pw");

        assert_eq!(form.value(LoginField::Email), "a@b.com");
        assert!(form.can_submit());
        let key = format!("{}.field", form.input_id(LoginField::Email));
        assert_eq!(
            form.render().find(&key).and_then(Element::text_content),
            Some("a@b.com")
        );
        assert!(form.press_login());
        assert_eq!(logins.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_new_uses_global_theme() {
        let form = LoginForm::new(|| {});
        assert_eq!(form.theme(), ThemeState::get());
        assert!(!form.can_submit());
    }

    #[test]
    fn test_login_field_parsing() {
        assert_eq!("email".parse::<LoginField>(), Ok(LoginField::Email));
        assert_eq!(LoginField::Password.to_string(), "password");
        assert!("username".parse::<LoginField>().is_err());
    }
}
