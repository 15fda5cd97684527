//! Door error types.

use crate::core::{DoorState, Operation};
use thiserror::Error;

/// Errors that can occur when operating a door
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DoorError {
    /// The operation has no transition defined from the current state
    #[error("Illegal state transition: cannot {operation} from '{from}'")]
    IllegalTransition { from: DoorState, operation: Operation },
}
