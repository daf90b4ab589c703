//! Handles to native text fields
//!
//! A [`FieldRef`] is created by whoever needs to focus a field later (a form
//! moving focus to the next input) and handed to the widget at construction.
//! The host attaches the native field when it mounts the widget and detaches
//! it on unmount. Requests made while nothing is attached are dropped.

use std::fmt;
use std::sync::{Arc, Mutex};

/// Native text-entry capability supplied by the host platform
pub trait NativeTextField: Send {
    /// Ask the platform to focus this field
    fn focus(&mut self);
}

type Slot = Arc<Mutex<Option<Box<dyn NativeTextField>>>>;

/// Shared, clonable handle to a (possibly not yet mounted) native field
#[derive(Clone, Default)]
pub struct FieldRef {
    inner: Slot,
}

impl FieldRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the mounted native field, replacing any previous one
    pub fn attach(&self, native: Box<dyn NativeTextField>) {
        match self.inner.lock() {
            Ok(mut slot) => *slot = Some(native),
            Err(_) => tracing::warn!("FieldRef lock poisoned, native field not attached"),
        }
    }

    /// Detach the native field (on unmount)
    pub fn detach(&self) -> Option<Box<dyn NativeTextField>> {
        self.inner.lock().ok().and_then(|mut slot| slot.take())
    }

    pub fn is_mounted(&self) -> bool {
        self.inner
            .lock()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    /// Focus the native field.
    ///
    /// Returns whether the request reached a mounted field. Never panics.
    pub fn focus(&self) -> bool {
        let Ok(mut slot) = self.inner.lock() else {
            return false;
        };
        match slot.as_mut() {
            Some(native) => {
                native.focus();
                true
            }
            None => {
                tracing::trace!("focus requested on unmounted field, ignoring");
                false
            }
        }
    }

    /// Whether two handles point at the same slot
    pub fn ptr_eq(&self, other: &FieldRef) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRef")
            .field("mounted", &self.is_mounted())
            .finish()
    }
}
