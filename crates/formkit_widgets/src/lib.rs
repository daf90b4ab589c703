//! formkit Widget Library
//!
//! Form controls with FSM-driven interactions, rendered into a plain
//! [`Element`] tree that a host platform (or the headless host) displays.

pub mod button;
pub mod element;
pub mod field_ref;
pub mod labeled_input;
pub mod widget;

pub use button::{button, Button, ButtonConfig};
pub use element::{Element, ElementKind, TextFieldSpec};
pub use field_ref::{FieldRef, NativeTextField};
pub use labeled_input::{KeyboardType, LabeledInput, LabeledInputProps, ReturnKeyType};
pub use widget::{Widget, WidgetId};
