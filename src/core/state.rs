//! The door's state variants.
//!
//! A `DoorState` is an immutable tag. Each variant exposes the four
//! transition operations and the reachability guard; which of them succeed
//! is decided by the shared transition table, so no variant carries its own
//! copy of the "illegal transition" fallback.

use super::guard;
use super::operation::Operation;
use super::transition::{self, Transition};
use crate::error::DoorError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The condition a door occupies at any instant.
///
/// All methods are pure. Transition methods return the [`Transition`] that
/// would be taken, leaving the caller to commit it.
///
/// # Example
///
/// ```rust
/// use doorstate::core::{DoorState, SideEffect};
///
/// let transition = DoorState::Closed.open().unwrap();
/// assert_eq!(transition.to, DoorState::Open);
/// assert_eq!(transition.effect, Some(SideEffect::AdmitVisitor));
///
/// assert!(DoorState::Locked.open().is_err());
/// assert!(DoorState::Locked.can_transition_to(DoorState::Closed));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum DoorState {
    Open,
    Closed,
    Locked,
}

impl DoorState {
    /// Every variant, in declaration order.
    pub const ALL: [DoorState; 3] = [Self::Open, Self::Closed, Self::Locked];

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
            Self::Locked => "Locked",
        }
    }

    /// Check whether a direct transition to `target` exists.
    ///
    /// This is a static reachability check against the transition table;
    /// self-transitions are never reachable.
    pub fn can_transition_to(&self, target: DoorState) -> bool {
        guard::is_reachable(*self, target)
    }

    /// Look up the transition taken by `operation` from this state.
    pub fn apply(self, operation: Operation) -> Result<Transition, DoorError> {
        transition::transition(self, operation)
    }

    /// Open the door. Only legal from `Closed`.
    pub fn open(self) -> Result<Transition, DoorError> {
        self.apply(Operation::Open)
    }

    /// Close the door. Only legal from `Open`.
    pub fn close(self) -> Result<Transition, DoorError> {
        self.apply(Operation::Close)
    }

    /// Lock the door. Only legal from `Closed`.
    pub fn lock(self) -> Result<Transition, DoorError> {
        self.apply(Operation::Lock)
    }

    /// Unlock the door. Only legal from `Locked`.
    pub fn unlock(self) -> Result<Transition, DoorError> {
        self.apply(Operation::Unlock)
    }
}

impl fmt::Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
