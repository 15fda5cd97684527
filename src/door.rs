//! The door: owner of the current state and the two counters.
//!
//! `Door` is the imperative shell around the pure core. Every operation
//! asks the current [`DoorState`] for the transition, then commits the new
//! state and its side effect together. A rejected operation changes nothing.
//!
//! `Door` has no internal synchronisation. Callers sharing one between
//! threads must guard all operations with a single lock (e.g. `Mutex<Door>`).

use crate::core::{DoorState, Operation, SideEffect, Transition};
use crate::error::DoorError;
use serde::Serialize;
use tracing::{debug, trace};

/// A single door with a visitor count and a lock count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Door {
    state: DoorState,
    visitor_count: u64,
    lock_count: u64,
}

impl Door {
    /// Create a door in the given state with both counters at zero.
    pub fn new(initial: DoorState) -> Self {
        trace!(state = %initial, "Door created");
        Self {
            state: initial,
            visitor_count: 0,
            lock_count: 0,
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> DoorState {
        self.state
    }

    /// Number of times the door has been opened from `Closed`
    pub fn visitor_count(&self) -> u64 {
        self.visitor_count
    }

    /// Number of times the door has been locked
    pub fn lock_count(&self) -> u64 {
        self.lock_count
    }

    pub fn is_open(&self) -> bool {
        self.state == DoorState::Open
    }

    pub fn is_closed(&self) -> bool {
        self.state == DoorState::Closed
    }

    pub fn is_locked(&self) -> bool {
        self.state == DoorState::Locked
    }

    /// Check whether a direct transition to `target` exists (pure)
    pub fn can_transition_to(&self, target: DoorState) -> bool {
        self.state.can_transition_to(target)
    }

    /// Attempt `operation` and commit the resulting transition.
    ///
    /// On success the new state and its counter change are applied together
    /// and the committed transition is returned. On failure the door is left
    /// exactly as it was.
    pub fn apply(&mut self, operation: Operation) -> Result<Transition, DoorError> {
        let transition = self.state.apply(operation).map_err(|err| {
            debug!(
                from = %self.state,
                operation = %operation,
                "Rejected illegal door transition"
            );
            err
        })?;

        self.commit(&transition);
        Ok(transition)
    }

    pub fn open(&mut self) -> Result<(), DoorError> {
        self.apply(Operation::Open).map(|_| ())
    }

    pub fn close(&mut self) -> Result<(), DoorError> {
        self.apply(Operation::Close).map(|_| ())
    }

    pub fn lock(&mut self) -> Result<(), DoorError> {
        self.apply(Operation::Lock).map(|_| ())
    }

    pub fn unlock(&mut self) -> Result<(), DoorError> {
        self.apply(Operation::Unlock).map(|_| ())
    }

    /// Render the state diagram with the current state highlighted.
    pub fn to_dot(&self) -> String {
        crate::visualization::render_dot(Some(self.state))
    }

    fn commit(&mut self, transition: &Transition) {
        self.state = transition.to;
        match transition.effect {
            Some(SideEffect::AdmitVisitor) => self.visitor_count += 1,
            Some(SideEffect::EngageLock) => self.lock_count += 1,
            None => {}
        }

        debug!(
            from = %transition.from,
            operation = %transition.operation,
            to = %transition.to,
            visitor_count = self.visitor_count,
            lock_count = self.lock_count,
            "Door transitioned"
        );
    }
}


#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn opening_closed_door_admits_a_visitor() {
        let mut door = Door::new(DoorState::Closed);

        assert!(door.open().is_ok());

        assert!(door.is_open());
        assert_eq!(door.visitor_count(), 1);
        assert_eq!(door.lock_count(), 0);
    }

    #[test]
    fn locking_closed_door_counts_the_lock() {
        let mut door = Door::new(DoorState::Closed);

        assert!(door.lock().is_ok());

        assert!(door.is_locked());
        assert_eq!(door.lock_count(), 1);
        assert_eq!(door.visitor_count(), 0);
    }

    #[test]
    fn open_door_cannot_be_locked() {
        let mut door = Door::new(DoorState::Open);

        let result = door.lock();

        assert_eq!(
            result,
            Err(DoorError::IllegalTransition {
                from: DoorState::Open,
                operation: Operation::Lock,
            })
        );
        assert!(door.is_open());
        assert_eq!(door.visitor_count(), 0);
        assert_eq!(door.lock_count(), 0);
    }

    #[test]
    fn locked_door_unlocks_then_opens() {
        let mut door = Door::new(DoorState::Locked);

        assert!(door.unlock().is_ok());
        assert!(door.is_closed());

        // Closed cannot re-close
        assert!(matches!(
            door.close(),
            Err(DoorError::IllegalTransition { .. })
        ));
        assert!(door.is_closed());

        assert!(door.open().is_ok());
        assert!(door.is_open());
        assert_eq!(door.visitor_count(), 1);
        assert_eq!(door.lock_count(), 0);
    }

    #[test]
    fn counters_accumulate_over_a_day() {
        let mut door = Door::new(DoorState::Locked);

        door.unlock().unwrap();
        for _ in 0..3 {
            door.open().unwrap();
            door.close().unwrap();
        }
        door.lock().unwrap();

        assert!(door.is_locked());
        assert_eq!(door.visitor_count(), 3);
        assert_eq!(door.lock_count(), 1);
    }
}
