//! State Machine Runtime
//!
//! Flat statecharts for widget interaction states (focus, touched, pressed).
//! A machine is a fixed `(state, event) -> state` table built once; events
//! without an entry leave the machine where it is.

use rustc_hash::FxHashMap;

use crate::events::EventType;

/// Identifier for a state within a state machine
pub type StateId = u32;

/// Builder for creating state machines
pub struct StateMachineBuilder {
    initial_state: StateId,
    transitions: FxHashMap<(StateId, EventType), StateId>,
}

impl StateMachineBuilder {
    pub fn new(initial_state: StateId) -> Self {
        Self {
            initial_state,
            transitions: FxHashMap::default(),
        }
    }

    /// Add a transition (from, event, to). A later entry for the same
    /// `(from, event)` pair replaces the earlier one.
    pub fn on(mut self, from: StateId, event: EventType, to: StateId) -> Self {
        self.transitions.insert((from, event), to);
        self
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine {
        StateMachine {
            current_state: self.initial_state,
            transitions: self.transitions,
        }
    }
}

/// A state machine instance
pub struct StateMachine {
    current_state: StateId,
    transitions: FxHashMap<(StateId, EventType), StateId>,
}

impl StateMachine {
    /// Create a builder for a state machine
    pub fn builder(initial_state: StateId) -> StateMachineBuilder {
        StateMachineBuilder::new(initial_state)
    }

    /// Get the current state
    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: StateId) -> bool {
        self.current_state == state
    }

    /// Send an event, returning the state after it.
    pub fn send(&mut self, event: EventType) -> StateId {
        let from = self.current_state;
        if let Some(&to) = self.transitions.get(&(from, event)) {
            self.current_state = to;
            tracing::trace!(from, event, to, "fsm transition");
        }
        self.current_state
    }
}

impl std::fmt::Debug for StateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("current_state", &self.current_state)
            .field("transitions", &self.transitions.len())
            .finish()
    }
}
