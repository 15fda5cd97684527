//! Core door state machine types and logic.
//!
//! This module contains the pure functional core of the door:
//! - State variants via [`DoorState`]
//! - The [`Operation`]s a caller can attempt
//! - The transition table and the side effects it describes
//! - The reachability guard
//!
//! Nothing here mutates anything; committing a transition is the job of
//! [`Door`](crate::Door).

mod guard;
mod operation;
mod state;
mod transition;

pub use guard::is_reachable;
pub use operation::Operation;
pub use state::DoorState;
pub use transition::{transition, transitions, SideEffect, Transition};
