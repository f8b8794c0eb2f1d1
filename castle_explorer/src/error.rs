//! Errors that can interrupt a play session.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayError {
    /// The input stream reached its end while a prompt was waiting.
    #[error("input stream closed")]
    InputClosed,

    /// The player aborted a read.
    #[error("input interrupted")]
    Interrupted,

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl PlayError {
    /// True for the ways a player can walk away from the game.
    pub fn is_interruption(&self) -> bool {
        matches!(self, PlayError::InputClosed | PlayError::Interrupted)
    }
}
