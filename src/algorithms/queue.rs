// Bounded FIFO queue driven by user commands

use super::split_command;
use crate::engine::{
    Algorithm, Cell, Mark, Motion, StateView, StepError, Transition, ViewLayout,
};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueOp {
    Enqueue(i64),
    Dequeue,
    Peek,
    Size,
    IsEmpty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueState {
    pub items: VecDeque<i64>,
    pub capacity: usize,
    /// Value removed by the most recent dequeue
    pub removed: Option<i64>,
}

impl QueueState {
    pub fn front(&self) -> Option<i64> {
        self.items.front().copied()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }
}

#[derive(Debug)]
pub struct Queue;

impl Algorithm for Queue {
    const NAME: &'static str = "Queue";
    type Input = usize;
    type State = QueueState;
    type Op = QueueOp;

    fn init(capacity: usize) -> Result<QueueState, StepError> {
        if capacity == 0 {
            return Err(StepError::invalid_input("queue capacity must be positive"));
        }
        Ok(QueueState {
            items: VecDeque::with_capacity(capacity),
            capacity,
            removed: None,
        })
    }

    fn is_terminal(_: &QueueState) -> bool {
        false
    }

    fn transition(state: &QueueState, op: &QueueOp) -> Result<Transition<QueueState>, StepError> {
        let mut next = state.clone();
        next.removed = None;

        let transition = match *op {
            QueueOp::Enqueue(value) => {
                if next.is_full() {
                    return Err(StepError::Overflow {
                        capacity: next.capacity,
                    });
                }
                next.items.push_back(value);
                let slot = next.items.len() - 1;
                Transition::new(next, format!("Enqueued {}", value))
                    .with_motion(Motion::Enqueue { slot })
            }
            QueueOp::Dequeue => {
                let value = next
                    .items
                    .pop_front()
                    .ok_or(StepError::Underflow { structure: "queue" })?;
                next.removed = Some(value);
                Transition::new(next, format!("Dequeued {}", value))
                    .with_motion(Motion::Dequeue { slot: 0 })
            }
            QueueOp::Peek => {
                let front = next.front().ok_or(StepError::Underflow { structure: "queue" })?;
                Transition::new(next, format!("Peeked front: {}", front))
            }
            QueueOp::Size => {
                let message = format!("Size of Queue: {}", next.items.len());
                Transition::new(next, message)
            }
            QueueOp::IsEmpty => {
                let message = if next.items.is_empty() {
                    "Queue is Empty"
                } else {
                    "Queue is Not Empty"
                };
                Transition::new(next, message)
            }
        };
        Ok(transition)
    }

    fn auto_op(_: &QueueState) -> Option<QueueOp> {
        None
    }

    fn parse_op(text: &str) -> Result<QueueOp, StepError> {
        let (verb, value) = split_command(text)?;
        match (verb.as_str(), value) {
            ("enqueue" | "e" | "add", Some(v)) => Ok(QueueOp::Enqueue(v)),
            ("enqueue" | "e" | "add", None) => {
                Err(StepError::invalid_input("enqueue needs a value"))
            }
            ("dequeue" | "d" | "remove", _) => Ok(QueueOp::Dequeue),
            ("peek" | "front", _) => Ok(QueueOp::Peek),
            ("size", _) => Ok(QueueOp::Size),
            ("empty" | "is_empty" | "isempty", _) => Ok(QueueOp::IsEmpty),
            _ => Err(StepError::UnknownCommand {
                command: text.to_string(),
                algorithm: Self::NAME,
            }),
        }
    }

    fn view(state: &QueueState) -> StateView {
        let cells = state.items.iter().map(|&v| Cell::number(v, Mark::Normal));
        let mut view = StateView::new(Self::NAME, ViewLayout::Row)
            .cells(cells)
            .note(
                "Size",
                format!("{}/{}", state.items.len(), state.capacity),
            );
        if !state.items.is_empty() {
            view = view
                .pointer("front", 0)
                .pointer("rear", state.items.len() - 1);
        }
        if let Some(removed) = state.removed {
            view = view.note("Dequeued", removed.to_string());
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Stepper;

    #[test]
    fn plain_step_needs_a_command() {
        let mut stepper = Stepper::<Queue>::new(4).unwrap();
        assert_eq!(
            stepper.step(),
            Err(StepError::NeedsCommand { algorithm: "Queue" })
        );
    }

    #[test]
    fn commands_parse() {
        assert_eq!(Queue::parse_op("enqueue 12"), Ok(QueueOp::Enqueue(12)));
        assert_eq!(Queue::parse_op("  DEQUEUE "), Ok(QueueOp::Dequeue));
        assert_eq!(Queue::parse_op("e -3"), Ok(QueueOp::Enqueue(-3)));
        assert!(Queue::parse_op("enqueue").is_err());
        assert!(matches!(
            Queue::parse_op("rotate"),
            Err(StepError::UnknownCommand { .. })
        ));
    }

    #[test]
    fn queries_are_logged_without_changing_items() {
        let mut stepper = Stepper::<Queue>::new(4).unwrap();
        stepper.command("enqueue 7").unwrap();
        let peek = stepper.command("peek").unwrap();
        assert_eq!(peek.message, "Peeked front: 7");
        assert_eq!(stepper.command("size").unwrap().message, "Size of Queue: 1");
        assert_eq!(stepper.state().items, VecDeque::from(vec![7]));
        assert_eq!(stepper.log().len(), 3);
    }

    #[test]
    fn peek_on_empty_underflows() {
        let mut stepper = Stepper::<Queue>::new(2).unwrap();
        assert_eq!(
            stepper.apply(QueueOp::Peek),
            Err(StepError::Underflow { structure: "queue" })
        );
    }
}
