//! Base widget trait and types

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use formkit_core::Event;

use crate::element::Element;

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique widget identifier, used as the target of host events
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Allocate a fresh id
    pub fn next() -> Self {
        Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

/// Base trait for all widgets
pub trait Widget {
    /// Get the widget's unique ID
    fn id(&self) -> WidgetId;

    /// Render the widget from its current props and internal state
    fn render(&self) -> Element;

    /// Handle an event; returns `false` when the event is not addressed to
    /// this widget or not understood by it
    fn handle_event(&mut self, event: &Event) -> bool;
}
