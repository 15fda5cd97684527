//! The door's transition table.
//!
//! One table maps `(DoorState, Operation)` to the resulting [`Transition`].
//! Only legal edges are listed; any pair missing from the table is an
//! illegal transition. Side effects are described as data so the owner of
//! the counters can apply them after committing the new state.

use super::operation::Operation;
use super::state::DoorState;
use crate::error::DoorError;
use serde::{Deserialize, Serialize};

/// Counter change produced by a transition.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum SideEffect {
    /// Increment the visitor count (Closed -> Open)
    AdmitVisitor,
    /// Increment the lock count (Closed -> Locked)
    EngageLock,
}

impl SideEffect {
    /// Short label used in diagrams.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AdmitVisitor => "visitors+1",
            Self::EngageLock => "locks+1",
        }
    }
}

/// A legal edge of the door state machine.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Transition {
    /// The state being transitioned from
    pub from: DoorState,
    /// The operation that triggers the transition
    pub operation: Operation,
    /// The state being transitioned to
    pub to: DoorState,
    /// Counter change applied when the transition is committed
    pub effect: Option<SideEffect>,
}

const TABLE: [Transition; 4] = [
    Transition {
        from: DoorState::Open,
        operation: Operation::Close,
        to: DoorState::Closed,
        effect: None,
    },
    Transition {
        from: DoorState::Closed,
        operation: Operation::Open,
        to: DoorState::Open,
        effect: Some(SideEffect::AdmitVisitor),
    },
    Transition {
        from: DoorState::Closed,
        operation: Operation::Lock,
        to: DoorState::Locked,
        effect: Some(SideEffect::EngageLock),
    },
    Transition {
        from: DoorState::Locked,
        operation: Operation::Unlock,
        to: DoorState::Closed,
        effect: None,
    },
];

/// Iterate over every legal transition.
pub fn transitions() -> impl Iterator<Item = Transition> {
    TABLE.iter().copied()
}

/// Look up the transition for `operation` from `from`.
///
/// # Example
///
/// ```rust
/// use doorstate::core::{transition, DoorState, Operation};
/// use doorstate::DoorError;
///
/// let t = transition(DoorState::Locked, Operation::Unlock).unwrap();
/// assert_eq!(t.to, DoorState::Closed);
///
/// assert_eq!(
///     transition(DoorState::Open, Operation::Lock),
///     Err(DoorError::IllegalTransition {
///         from: DoorState::Open,
///         operation: Operation::Lock,
///     })
/// );
/// ```
pub fn transition(from: DoorState, operation: Operation) -> Result<Transition, DoorError> {
    transitions()
        .find(|t| t.from == from && t.operation == operation)
        .ok_or(DoorError::IllegalTransition { from, operation })
}
