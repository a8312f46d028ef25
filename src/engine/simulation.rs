// Object-safe facade over any stepper

use super::animation::Motion;
use super::errors::StepError;
use super::stepper::{Algorithm, StepEvent, Stepper};
use super::view::StateView;

/// What presentation code holds: a stepper with its algorithm erased
pub trait Simulation {
    fn name(&self) -> &'static str;

    /// Whether the simulation advances through typed commands
    fn is_interactive(&self) -> bool;

    fn step(&mut self) -> Result<StepEvent<StateView>, StepError>;

    fn command(&mut self, text: &str) -> Result<StepEvent<StateView>, StepError>;

    fn undo(&mut self) -> Result<StepEvent<StateView>, StepError>;

    fn is_terminal(&self) -> bool;

    fn in_flight(&self) -> Option<&Motion>;

    fn settle(&mut self) -> Option<Motion>;

    fn steps_taken(&self) -> usize;

    fn log_lines(&self) -> Vec<&str>;

    /// Numbered trace for copying out
    fn export_log(&self) -> String;

    fn view(&self) -> StateView;
}

fn project<A: Algorithm>(event: StepEvent<A::State>) -> StepEvent<StateView> {
    StepEvent {
        state_after: A::view(&event.state_after),
        message: event.message,
        terminal: event.terminal,
        motion: event.motion,
    }
}

impl<A: Algorithm> Simulation for Stepper<A> {
    fn name(&self) -> &'static str {
        A::NAME
    }

    fn is_interactive(&self) -> bool {
        A::auto_op(self.state()).is_none()
    }

    fn step(&mut self) -> Result<StepEvent<StateView>, StepError> {
        Stepper::step(self).map(project::<A>)
    }

    fn command(&mut self, text: &str) -> Result<StepEvent<StateView>, StepError> {
        Stepper::command(self, text).map(project::<A>)
    }

    fn undo(&mut self) -> Result<StepEvent<StateView>, StepError> {
        Stepper::undo(self).map(project::<A>)
    }

    fn is_terminal(&self) -> bool {
        Stepper::is_terminal(self)
    }

    fn in_flight(&self) -> Option<&Motion> {
        Stepper::in_flight(self)
    }

    fn settle(&mut self) -> Option<Motion> {
        Stepper::settle(self)
    }

    fn steps_taken(&self) -> usize {
        Stepper::steps_taken(self)
    }

    fn log_lines(&self) -> Vec<&str> {
        self.log().messages().collect()
    }

    fn export_log(&self) -> String {
        self.log().export()
    }

    fn view(&self) -> StateView {
        Stepper::view(self)
    }
}
