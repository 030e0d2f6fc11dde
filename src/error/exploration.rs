//! Exploration error module.
//!
//! Error types raised by the exploration session state machine. A missing
//! path is recoverable and leaves the session state unchanged; commands
//! issued after the session has stopped are rejected.

use crate::data_structures::manor_map::Direction;
use thiserror::Error;

/// Errors that can occur while driving an exploration session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExplorationError {
    /// The current room has no child in the requested direction.
    #[error("No exit to the {direction} from the current room")]
    NoSuchPath {
        /// The direction that was requested
        direction: Direction,
    },

    /// A movement command was issued after the session reached its terminal state.
    #[error("The exploration session has already stopped")]
    SessionStopped,
}
