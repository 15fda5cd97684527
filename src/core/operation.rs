//! The operations a caller can attempt on a door.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A transition operation. Whether it is legal depends on the current state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operation {
    Open,
    Close,
    Lock,
    Unlock,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 4] = [Self::Open, Self::Close, Self::Lock, Self::Unlock];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::Lock => "lock",
            Self::Unlock => "unlock",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
