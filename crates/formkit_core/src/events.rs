//! Event types
//!
//! Events are produced by the host platform (or the headless host) and
//! dispatched to widgets by target id.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    /// Pointer left the control or the gesture was aborted by the system
    pub const POINTER_CANCEL: EventType = 3;
    pub const FOCUS: EventType = 10;
    pub const BLUR: EventType = 11;
    /// The text content of a field changed
    pub const TEXT_CHANGE: EventType = 22;
    /// The return key of the soft keyboard was pressed
    pub const SUBMIT_EDITING: EventType = 23;
}

/// A UI event with associated data
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub event_type: EventType,
    /// Raw id of the widget the event is addressed to
    pub target: u64,
    pub data: EventData,
    pub timestamp: u64,
}

/// Event-specific data
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    Focus(FocusEvent),
    Text {
        /// Full field content after the change
        text: String,
    },
    None,
}

/// Payload of focus and blur notifications.
///
/// Widgets forward this value to caller handlers unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusEvent {
    pub target: u64,
    pub timestamp: u64,
}

impl Event {
    pub fn new(event_type: EventType, target: u64, data: EventData) -> Self {
        Self {
            event_type,
            target,
            data,
            timestamp: 0,
        }
    }

    pub fn focus(target: u64, timestamp: u64) -> Self {
        Self {
            event_type: event_types::FOCUS,
            target,
            data: EventData::Focus(FocusEvent { target, timestamp }),
            timestamp,
        }
    }

    pub fn blur(target: u64, timestamp: u64) -> Self {
        Self {
            event_type: event_types::BLUR,
            target,
            data: EventData::Focus(FocusEvent { target, timestamp }),
            timestamp,
        }
    }

    pub fn text_change(target: u64, text: impl Into<String>) -> Self {
        Self::new(
            event_types::TEXT_CHANGE,
            target,
            EventData::Text { text: text.into() },
        )
    }

    pub fn submit_editing(target: u64) -> Self {
        Self::new(event_types::SUBMIT_EDITING, target, EventData::None)
    }

    pub fn pointer(event_type: EventType, target: u64) -> Self {
        Self::new(event_type, target, EventData::None)
    }

    /// Set the timestamp
    pub fn at(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        if let EventData::Focus(ref mut focus) = self.data {
            focus.timestamp = timestamp;
        }
        self
    }

    /// Focus payload for FOCUS/BLUR events.
    ///
    /// Events built without a focus payload still yield one derived from the
    /// envelope so handlers always receive a value.
    pub fn focus_payload(&self) -> FocusEvent {
        match self.data {
            EventData::Focus(focus) => focus,
            _ => FocusEvent {
                target: self.target,
                timestamp: self.timestamp,
            },
        }
    }

    /// Text payload for TEXT_CHANGE events
    pub fn text(&self) -> Option<&str> {
        match &self.data {
            EventData::Text { text } => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_event_carries_payload() {
        let event = Event::focus(7, 42);
        assert_eq!(event.event_type, event_types::FOCUS);
        assert_eq!(
            event.focus_payload(),
            FocusEvent {
                target: 7,
                timestamp: 42
            }
        );
    }

    #[test]
    fn test_focus_payload_falls_back_to_envelope() {
        let event = Event::new(event_types::BLUR, 3, EventData::None).at(9);
        assert_eq!(
            event.focus_payload(),
            FocusEvent {
                target: 3,
                timestamp: 9
            }
        );
    }

    #[test]
    fn test_text_payload() {
        let event = Event::text_change(1, "a@b.com");
        assert_eq!(event.text(), Some("a@b.com"));
        assert_eq!(Event::submit_editing(1).text(), None);
    }
}
