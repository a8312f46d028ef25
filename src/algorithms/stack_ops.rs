// Bounded LIFO stack driven by user commands

use super::split_command;
use crate::engine::{
    Algorithm, Cell, Mark, Motion, StateView, StepError, Transition, ViewLayout,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOp {
    Push(i64),
    Pop,
    Peek,
    Size,
    IsEmpty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackState {
    pub items: Vec<i64>,
    pub capacity: usize,
    /// Value removed by the most recent pop
    pub popped: Option<i64>,
}

#[derive(Debug)]
pub struct StackOperations;

impl Algorithm for StackOperations {
    const NAME: &'static str = "Stack";
    type Input = usize;
    type State = StackState;
    type Op = StackOp;

    fn init(capacity: usize) -> Result<StackState, StepError> {
        if capacity == 0 {
            return Err(StepError::invalid_input("stack capacity must be positive"));
        }
        Ok(StackState {
            items: Vec::with_capacity(capacity),
            capacity,
            popped: None,
        })
    }

    fn is_terminal(_: &StackState) -> bool {
        false
    }

    fn transition(state: &StackState, op: &StackOp) -> Result<Transition<StackState>, StepError> {
        let mut next = state.clone();
        next.popped = None;
        let underflow = StepError::Underflow { structure: "stack" };

        Ok(match *op {
            StackOp::Push(value) => {
                if next.items.len() >= next.capacity {
                    return Err(StepError::Overflow {
                        capacity: next.capacity,
                    });
                }
                next.items.push(value);
                Transition::new(next, format!("Pushed {}", value))
                    .with_motion(Motion::Push(value.to_string()))
            }
            StackOp::Pop => {
                let value = next.items.pop().ok_or(underflow)?;
                next.popped = Some(value);
                Transition::new(next, format!("Popped {}", value))
                    .with_motion(Motion::Pop(value.to_string()))
            }
            StackOp::Peek => {
                let top = *next.items.last().ok_or(underflow)?;
                Transition::new(next, format!("Peeked: {}", top))
            }
            StackOp::Size => {
                let message = format!("Size of Stack: {}", next.items.len());
                Transition::new(next, message)
            }
            StackOp::IsEmpty => {
                let message = if next.items.is_empty() {
                    "Stack is Empty"
                } else {
                    "Stack is Not Empty"
                };
                Transition::new(next, message)
            }
        })
    }

    fn auto_op(_: &StackState) -> Option<StackOp> {
        None
    }

    fn parse_op(text: &str) -> Result<StackOp, StepError> {
        let (verb, value) = split_command(text)?;
        match (verb.as_str(), value) {
            ("push", Some(v)) => Ok(StackOp::Push(v)),
            ("push", None) => Err(StepError::invalid_input("push needs a value")),
            ("pop", _) => Ok(StackOp::Pop),
            ("peek" | "top", _) => Ok(StackOp::Peek),
            ("size", _) => Ok(StackOp::Size),
            ("empty" | "is_empty" | "isempty", _) => Ok(StackOp::IsEmpty),
            _ => Err(StepError::UnknownCommand {
                command: text.to_string(),
                algorithm: Self::NAME,
            }),
        }
    }

    fn view(state: &StackState) -> StateView {
        let top = state.items.len().saturating_sub(1);
        let cells = state.items.iter().enumerate().map(|(k, &v)| {
            Cell::number(v, if k == top { Mark::Active } else { Mark::Normal })
        });
        let mut view = StateView::new(Self::NAME, ViewLayout::Stack)
            .cells(cells)
            .note(
                "Size",
                format!("{}/{}", state.items.len(), state.capacity),
            );
        if !state.items.is_empty() {
            view = view.pointer("top", top);
        }
        if let Some(popped) = state.popped {
            view = view.note("Popped", popped.to_string());
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::DEFAULT_STRUCTURE_CAPACITY;
    use crate::engine::Stepper;

    #[test]
    fn last_in_first_out() {
        let mut stepper = Stepper::<StackOperations>::new(DEFAULT_STRUCTURE_CAPACITY).unwrap();
        stepper.apply(StackOp::Push(1)).unwrap();
        stepper.apply(StackOp::Push(2)).unwrap();
        let pop = stepper.apply(StackOp::Pop).unwrap();

        assert_eq!(pop.message, "Popped 2");
        assert_eq!(pop.state_after.popped, Some(2));
        assert_eq!(stepper.state().items, vec![1]);
    }

    #[test]
    fn push_past_capacity_overflows() {
        let mut stepper = Stepper::<StackOperations>::new(1).unwrap();
        stepper.command("push 4").unwrap();
        assert_eq!(
            stepper.command("push 5"),
            Err(StepError::Overflow { capacity: 1 })
        );
        assert_eq!(stepper.state().items, vec![4]);
    }

    #[test]
    fn pop_on_empty_underflows() {
        let mut stepper = Stepper::<StackOperations>::new(3).unwrap();
        assert_eq!(
            stepper.command("pop"),
            Err(StepError::Underflow { structure: "stack" })
        );
        assert!(stepper.log().is_empty());
    }
}
