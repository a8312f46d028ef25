// Generic step-indexed driver for algorithm state machines

use super::animation::Motion;
use super::errors::StepError;
use super::history::History;
use super::trace::TraceLog;
use super::view::StateView;
use std::fmt::Debug;
use tracing::{debug, trace, warn};

/// Result of a transition function: the next state plus what happened
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S> {
    pub state: S,
    pub message: String,
    pub motion: Option<Motion>,
}

impl<S> Transition<S> {
    pub fn new(state: S, message: impl Into<String>) -> Self {
        Transition {
            state,
            message: message.into(),
            motion: None,
        }
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = Some(motion);
        self
    }
}

/// An algorithm expressed as a pure state machine
///
/// Implementations never mutate the state passed to [`Algorithm::transition`];
/// they return a new one. Given the same state and op the result is always
/// the same.
pub trait Algorithm {
    /// Display name, also used in log output
    const NAME: &'static str;

    /// What `reset` accepts
    type Input;

    /// Working data plus cursors and result
    type State: Clone + PartialEq + Debug;

    /// What drives one transition; `()` for algorithms that just step
    type Op: Clone + Debug;

    /// Build a fresh state from user input
    fn init(input: Self::Input) -> Result<Self::State, StepError>;

    /// Whether no further steps are valid
    fn is_terminal(state: &Self::State) -> bool;

    /// Compute the next state. Errors leave the caller's state untouched.
    fn transition(state: &Self::State, op: &Self::Op) -> Result<Transition<Self::State>, StepError>;

    /// The op a plain `step()` applies, or `None` if the algorithm is
    /// command-driven.
    fn auto_op(state: &Self::State) -> Option<Self::Op>;

    /// Parse a textual command
    fn parse_op(text: &str) -> Result<Self::Op, StepError> {
        Err(StepError::UnknownCommand {
            command: text.to_string(),
            algorithm: Self::NAME,
        })
    }

    fn view(state: &Self::State) -> StateView;
}

/// Emitted after every successful step or undo
#[derive(Debug, Clone, PartialEq)]
pub struct StepEvent<S> {
    pub state_after: S,
    pub message: String,
    pub terminal: bool,
    pub motion: Option<Motion>,
}

/// Drives one [`Algorithm`] a step at a time with undo
///
/// Owns the current state, the trace log and the history of pre-step
/// snapshots. After every public call `log.len() == history.len()`.
#[derive(Debug)]
pub struct Stepper<A: Algorithm> {
    state: A::State,
    history: History<A::State>,
    log: TraceLog<A::State>,
    animated: bool,
    in_flight: Option<Motion>,
}

impl<A: Algorithm> Stepper<A> {
    /// Create a stepper from initial input
    pub fn new(input: A::Input) -> Result<Self, StepError> {
        let state = A::init(input)?;
        debug!(algorithm = A::NAME, "stepper created");
        Ok(Stepper {
            state,
            history: History::new(),
            log: TraceLog::new(),
            animated: false,
            in_flight: None,
        })
    }

    /// Hold motions in flight until `settle()` is called
    pub fn with_animation(mut self) -> Self {
        self.animated = true;
        self
    }

    /// Replace the state from new input, clearing log and history
    pub fn reset(&mut self, input: A::Input) -> Result<(), StepError> {
        let state = A::init(input)?;
        self.state = state;
        self.history.clear();
        self.log.clear();
        self.in_flight = None;
        debug!(algorithm = A::NAME, "stepper reset");
        Ok(())
    }

    /// Advance by the algorithm's own next op
    pub fn step(&mut self) -> Result<StepEvent<A::State>, StepError> {
        self.check_can_advance()?;
        let op = A::auto_op(&self.state).ok_or(StepError::NeedsCommand {
            algorithm: A::NAME,
        })?;
        self.advance(&op)
    }

    /// Advance by an explicit op
    pub fn apply(&mut self, op: A::Op) -> Result<StepEvent<A::State>, StepError> {
        self.check_can_advance()?;
        self.advance(&op)
    }

    /// Parse and apply a textual command
    pub fn command(&mut self, text: &str) -> Result<StepEvent<A::State>, StepError> {
        let op = A::parse_op(text)?;
        self.apply(op)
    }

    /// Restore the state from before the most recent step
    pub fn undo(&mut self) -> Result<StepEvent<A::State>, StepError> {
        if self.in_flight.is_some() {
            warn!(algorithm = A::NAME, "undo rejected while animating");
            return Err(StepError::AnimationInFlight);
        }
        let entry = self.history.pop().ok_or(StepError::NothingToUndo)?;
        self.state = entry.state;
        self.log.truncate(entry.log_len);
        debug!(algorithm = A::NAME, steps = self.history.len(), "step undone");
        Ok(StepEvent {
            state_after: self.state.clone(),
            message: "Reverted to previous step".to_string(),
            terminal: A::is_terminal(&self.state),
            motion: None,
        })
    }

    /// Mark the in-flight motion (if any) as finished
    pub fn settle(&mut self) -> Option<Motion> {
        self.in_flight.take()
    }

    /// Step until terminal or `max_steps`, settling motions along the way
    pub fn run_to_completion(&mut self, max_steps: usize) -> Result<usize, StepError> {
        let mut taken = 0;
        while !self.is_terminal() && taken < max_steps {
            self.settle();
            self.step()?;
            taken += 1;
        }
        self.settle();
        Ok(taken)
    }

    pub fn is_terminal(&self) -> bool {
        A::is_terminal(&self.state)
    }

    pub fn state(&self) -> &A::State {
        &self.state
    }

    pub fn log(&self) -> &TraceLog<A::State> {
        &self.log
    }

    pub fn history(&self) -> &History<A::State> {
        &self.history
    }

    pub fn in_flight(&self) -> Option<&Motion> {
        self.in_flight.as_ref()
    }

    /// Number of applied steps that have not been undone
    pub fn steps_taken(&self) -> usize {
        self.history.len()
    }

    pub fn view(&self) -> StateView {
        A::view(&self.state)
    }

    fn check_can_advance(&self) -> Result<(), StepError> {
        if self.in_flight.is_some() {
            return Err(StepError::AnimationInFlight);
        }
        if A::is_terminal(&self.state) {
            return Err(StepError::AlreadyTerminal);
        }
        Ok(())
    }

    fn advance(&mut self, op: &A::Op) -> Result<StepEvent<A::State>, StepError> {
        let transition = A::transition(&self.state, op).inspect_err(|e| {
            warn!(algorithm = A::NAME, error = %e, "step rejected");
        })?;

        let previous = std::mem::replace(&mut self.state, transition.state);
        self.history.push(previous, self.log.len());
        self.log.push(transition.message.clone(), self.state.clone());

        if self.animated {
            self.in_flight = transition.motion.clone();
        }

        let terminal = A::is_terminal(&self.state);
        trace!(algorithm = A::NAME, ?op, "transition applied");
        debug!(
            algorithm = A::NAME,
            step = self.log.len(),
            terminal,
            message = %transition.message,
            "step"
        );

        Ok(StepEvent {
            state_after: self.state.clone(),
            message: transition.message,
            terminal,
            motion: transition.motion,
        })
    }
}
