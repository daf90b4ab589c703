//! formkit application layer
//!
//! - [`LoginForm`]: the login screen, composing two [`LabeledInput`]s and a
//!   submit [`Button`] over shared form state
//! - [`headless`]: a deterministic host that mounts the form, simulates the
//!   platform's focus handling, and runs JSON scenarios against it
//!
//! [`LabeledInput`]: formkit_widgets::LabeledInput
//! [`Button`]: formkit_widgets::Button

pub mod headless;
pub mod login_form;

pub use login_form::{field_error, FieldState, LoginField, LoginForm, LoginState};
