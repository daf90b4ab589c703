//! formkit Core Runtime
//!
//! This crate provides the foundational primitives shared by every formkit
//! widget:
//!
//! - **Colors**: RGBA colors with hex parsing for theme files
//! - **Events**: Focus, text, submit and pointer events delivered by the host
//! - **State Machines**: Flat statecharts for widget interaction states
//! - **Platform**: Identity of the host platform, used to branch styling
//! - **Style**: Optional style properties and right-wins style composition
//!
//! # Example
//!
//! ```rust
//! use formkit_core::fsm::StateMachine;
//! use formkit_core::events::event_types;
//!
//! const BLURRED: u32 = 0;
//! const FOCUSED: u32 = 1;
//!
//! let mut fsm = StateMachine::builder(BLURRED)
//!     .on(BLURRED, event_types::FOCUS, FOCUSED)
//!     .on(FOCUSED, event_types::BLUR, BLURRED)
//!     .build();
//!
//! fsm.send(event_types::FOCUS);
//! assert!(fsm.is_in(FOCUSED));
//! ```

pub mod color;
pub mod error;
pub mod events;
pub mod fsm;
pub mod platform;
pub mod style;

pub use color::Color;
pub use error::{CoreError, Result};
pub use events::{Event, EventData, EventType, FocusEvent};
pub use fsm::{StateId, StateMachine, StateMachineBuilder};
pub use platform::Platform;
pub use style::{Align, Style};
