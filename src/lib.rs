//! Doorstate: a door as a pure finite-state machine
//!
//! A door is always exactly one of `Open`, `Closed` or `Locked`, and the
//! operations it accepts depend on which. The crate follows a "pure core,
//! imperative shell" split: the transition table and its side effects are
//! plain data, and [`Door`] is the only thing that mutates.
//!
//! # Core Concepts
//!
//! - **State**: [`DoorState`], with the transition operations legal from it
//! - **Transition table**: one `(state, operation)` lookup shared by every
//!   variant; anything missing is a [`DoorError::IllegalTransition`]
//! - **Door**: commits transitions and keeps the visitor and lock counters
//!
//! # Example
//!
//! ```rust
//! use doorstate::{Door, DoorError, DoorState};
//!
//! let mut door = Door::new(DoorState::Locked);
//!
//! door.unlock()?;
//! assert!(door.close().is_err()); // already closed
//! door.open()?;
//!
//! assert!(door.is_open());
//! assert_eq!(door.visitor_count(), 1);
//! assert!(door.can_transition_to(DoorState::Closed));
//! # Ok::<(), DoorError>(())
//! ```

pub mod core;
pub mod door;
pub mod error;
pub mod visualization;

// Re-export commonly used types
pub use crate::core::{DoorState, Operation, SideEffect, Transition};
pub use crate::door::Door;
pub use crate::error::DoorError;
pub use crate::visualization::render_dot;
