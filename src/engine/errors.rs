//! Step error types for the stepper engine
//!
//! This module defines [`StepError`], the reason a stepper operation was
//! refused. None of these are fatal: every one of them leaves the stepper
//! exactly as it was before the call, and the presentation layer decides how
//! to tell the user.

use thiserror::Error;

/// Reasons a step, command or undo could not be applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    /// The algorithm has already finished
    #[error("already finished; reset to run again")]
    AlreadyTerminal,

    /// Undo was requested with no steps in history
    #[error("no previous steps to undo")]
    NothingToUndo,

    /// A bounded structure is full
    #[error("overflow: capacity of {capacity} reached")]
    Overflow { capacity: usize },

    /// Removal from an empty structure
    #[error("underflow: {structure} is empty")]
    Underflow { structure: &'static str },

    /// Input rejected at reset or while parsing a command
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// A motion from the previous step has not settled yet
    #[error("an animation is still in progress")]
    AnimationInFlight,

    /// The algorithm only advances through explicit commands
    #[error("{algorithm} needs a command, not a plain step")]
    NeedsCommand { algorithm: &'static str },

    /// A command string that the algorithm does not understand
    #[error("unknown command '{command}' for {algorithm}")]
    UnknownCommand {
        command: String,
        algorithm: &'static str,
    },
}

impl StepError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        StepError::InvalidInput {
            message: message.into(),
        }
    }

    /// Whether retrying later (after an animation settles) can succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, StepError::AnimationInFlight)
    }
}
