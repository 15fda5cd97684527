//! Reachability guard for door transitions.
//!
//! The guard is a pure predicate over the transition table: it answers
//! whether a direct edge exists between two states without performing it.

use super::state::DoorState;
use super::transition::transitions;

/// Check whether the table defines a direct transition `from -> to`.
///
/// # Example
///
/// ```rust
/// use doorstate::core::{is_reachable, DoorState};
///
/// assert!(is_reachable(DoorState::Closed, DoorState::Locked));
/// assert!(!is_reachable(DoorState::Open, DoorState::Locked));
/// assert!(!is_reachable(DoorState::Closed, DoorState::Closed));
/// ```
pub fn is_reachable(from: DoorState, to: DoorState) -> bool {
    transitions().any(|t| t.from == from && t.to == to)
}
