//! Deterministic stand-in for the native platform.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use formkit_core::Event;
use formkit_theme::Theme;
use formkit_widgets::{Element, NativeTextField};
use rustc_hash::FxHashMap;

use crate::login_form::{LoginField, LoginForm};

type FocusQueue = Arc<Mutex<VecDeque<LoginField>>>;

/// Native text field mounted by the headless host.
///
/// Focus requests are queued and applied on the next [`HeadlessHost::pump`],
/// the way a real platform applies them after the current handler returns.
pub struct HeadlessField {
    field: LoginField,
    queue: FocusQueue,
}

impl NativeTextField for HeadlessField {
    fn focus(&mut self) {
        match self.queue.lock() {
            Ok(mut queue) => queue.push_back(self.field),
            Err(_) => tracing::warn!(field = %self.field, "focus queue lock poisoned"),
        }
    }
}

/// Mounted login form plus the platform's keyboard focus
pub struct HeadlessHost {
    form: LoginForm,
    queue: FocusQueue,
    focused: Option<LoginField>,
    mounted: bool,
    focus_requests: FxHashMap<LoginField, u32>,
    logins: Arc<AtomicU64>,
    clock: u64,
}

impl HeadlessHost {
    /// Mount a fresh login form; logins are counted by the host
    pub fn new(theme: Theme) -> Self {
        let logins = Arc::new(AtomicU64::new(0));
        let counter = logins.clone();
        let form = LoginForm::with_theme(theme, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let mut host = Self {
            form,
            queue: FocusQueue::default(),
            focused: None,
            mounted: false,
            focus_requests: FxHashMap::default(),
            logins,
            clock: 0,
        };
        host.mount();
        host
    }

    /// Attach a native field to each input
    pub fn mount(&mut self) {
        for field in LoginField::ALL {
            self.form.field_ref(field).attach(Box::new(HeadlessField {
                field,
                queue: self.queue.clone(),
            }));
        }
        self.mounted = true;
        tracing::debug!("login form mounted");
    }

    /// Detach both native fields, dropping keyboard focus
    pub fn unmount(&mut self) {
        self.dismiss_keyboard();
        for field in LoginField::ALL {
            self.form.field_ref(field).detach();
        }
        self.mounted = false;
        tracing::debug!("login form unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    /// Field currently holding keyboard focus
    pub fn focused(&self) -> Option<LoginField> {
        self.focused
    }

    /// Focus requests the form has made on `field` so far
    pub fn focus_requests(&self, field: LoginField) -> u32 {
        self.focus_requests.get(&field).copied().unwrap_or(0)
    }

    /// Times the login action has run
    pub fn login_count(&self) -> u64 {
        self.logins.load(Ordering::SeqCst)
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn dispatch(&mut self, event: Event) -> bool {
        let handled = self.form.handle_event(&event);
        self.pump();
        handled
    }

    fn target(&self, field: LoginField) -> u64 {
        self.form.input_id(field).as_raw()
    }

    /// Move keyboard focus: blur the previous field, then focus `field`
    fn move_focus(&mut self, field: LoginField) {
        if self.focused == Some(field) {
            tracing::trace!(%field, "already focused");
            return;
        }
        if let Some(previous) = self.focused.take() {
            let (target, ts) = (self.target(previous), self.tick());
            self.form.handle_event(&Event::blur(target, ts));
        }
        let (target, ts) = (self.target(field), self.tick());
        self.form.handle_event(&Event::focus(target, ts));
        self.focused = Some(field);
    }

    /// Apply queued focus requests. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        loop {
            let next = match self.queue.lock() {
                Ok(mut queue) => queue.pop_front(),
                Err(_) => {
                    tracing::warn!("focus queue lock poisoned");
                    None
                }
            };
            let Some(field) = next else {
                break;
            };
            *self.focus_requests.entry(field).or_insert(0) += 1;
            self.move_focus(field);
            applied += 1;
        }
        applied
    }

    /// Gestures need mounted native fields to land on
    fn accepts(&self, gesture: &str, field: LoginField) -> bool {
        if !self.mounted {
            tracing::trace!(%field, gesture, "gesture on unmounted form ignored");
        }
        self.mounted
    }

    /// Touch a field
    pub fn tap(&mut self, field: LoginField) {
        if !self.accepts("tap", field) {
            return;
        }
        self.move_focus(field);
        self.pump();
    }

    /// Type at the end of a field, tapping it first when it is not focused
    pub fn type_text(&mut self, field: LoginField, text: &str) {
        if !self.accepts("type", field) {
            return;
        }
        if self.focused != Some(field) {
            self.tap(field);
        }
        let mut value = self.form.value(field);
        value.push_str(text);
        let target = self.target(field);
        self.dispatch(Event::text_change(target, value));
    }

    /// Erase a field's content
    pub fn clear(&mut self, field: LoginField) {
        if !self.accepts("clear", field) {
            return;
        }
        if self.focused != Some(field) {
            self.tap(field);
        }
        let target = self.target(field);
        self.dispatch(Event::text_change(target, ""));
    }

    /// Press the return key on `field`
    pub fn submit_editing(&mut self, field: LoginField) {
        if !self.accepts("submit_editing", field) {
            return;
        }
        let (target, ts) = (self.target(field), self.tick());
        self.dispatch(Event::submit_editing(target).at(ts));
    }

    /// Hide the keyboard, blurring whichever field had focus
    pub fn dismiss_keyboard(&mut self) {
        if let Some(previous) = self.focused.take() {
            let (target, ts) = (self.target(previous), self.tick());
            self.dispatch(Event::blur(target, ts));
        }
    }

    /// Press the login button. Returns whether the login action ran.
    pub fn press_login(&mut self) -> bool {
        let clicked = self.form.press_login();
        self.pump();
        clicked
    }

    pub fn render(&self) -> Element {
        self.form.render()
    }
}
