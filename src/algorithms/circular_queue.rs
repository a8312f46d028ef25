//! Circular queue over a fixed slot array
//!
//! `front` and `rear` are slot indices, both `None` while the queue is empty.
//! The queue is full when advancing `rear` would land on `front`.

use super::split_command;
use crate::engine::{
    Algorithm, Cell, Mark, Motion, StateView, StepError, Transition, ViewLayout,
};

/// Default number of slots
pub const DEFAULT_SLOTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircularOp {
    Enqueue(i64),
    Dequeue,
    Peek,
    IsEmpty,
    IsFull,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircularState {
    pub slots: Vec<Option<i64>>,
    pub front: Option<usize>,
    pub rear: Option<usize>,
    pub removed: Option<i64>,
}

impl CircularState {
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    pub fn is_full(&self) -> bool {
        match (self.front, self.rear) {
            (Some(front), Some(rear)) => (rear + 1) % self.capacity() == front,
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

#[derive(Debug)]
pub struct CircularQueue;

impl Algorithm for CircularQueue {
    const NAME: &'static str = "Circular Queue";
    type Input = usize;
    type State = CircularState;
    type Op = CircularOp;

    fn init(capacity: usize) -> Result<CircularState, StepError> {
        if capacity == 0 {
            return Err(StepError::invalid_input("queue size must be positive"));
        }
        Ok(CircularState {
            slots: vec![None; capacity],
            front: None,
            rear: None,
            removed: None,
        })
    }

    fn is_terminal(_: &CircularState) -> bool {
        false
    }

    fn transition(
        state: &CircularState,
        op: &CircularOp,
    ) -> Result<Transition<CircularState>, StepError> {
        let mut next = state.clone();
        next.removed = None;
        let cap = next.capacity();

        let transition = match (*op, next.front, next.rear) {
            (CircularOp::Enqueue(_), _, _) if next.is_full() => {
                return Err(StepError::Overflow { capacity: cap });
            }
            (CircularOp::Enqueue(value), front, rear) => {
                let slot = match (front, rear) {
                    (Some(_), Some(rear)) => (rear + 1) % cap,
                    _ => {
                        next.front = Some(0);
                        0
                    }
                };
                next.rear = Some(slot);
                next.slots[slot] = Some(value);
                Transition::new(next, format!("Enqueued \"{}\" at index {}", value, slot))
                    .with_motion(Motion::Enqueue { slot })
            }
            (CircularOp::Dequeue | CircularOp::Peek, None, _) => {
                return Err(StepError::Underflow {
                    structure: "circular queue",
                });
            }
            (CircularOp::Dequeue, Some(front), rear) => {
                let value = next.slots[front].take().unwrap_or_default();
                next.removed = Some(value);
                let message = if Some(front) == rear {
                    next.front = None;
                    next.rear = None;
                    format!("Dequeued \"{}\". Queue is now empty.", value)
                } else {
                    next.front = Some((front + 1) % cap);
                    format!("Dequeued \"{}\" from index {}", value, front)
                };
                Transition::new(next, message).with_motion(Motion::Dequeue { slot: front })
            }
            (CircularOp::Peek, Some(front), _) => {
                let value = next.slots[front].unwrap_or_default();
                Transition::new(next, format!("Front is: \"{}\" at index {}", value, front))
            }
            (CircularOp::IsEmpty, _, _) => {
                let message = format!("Is Empty? {}", next.is_empty());
                Transition::new(next, message)
            }
            (CircularOp::IsFull, _, _) => {
                let message = format!("Is Full? {}", next.is_full());
                Transition::new(next, message)
            }
        };
        Ok(transition)
    }

    fn auto_op(_: &CircularState) -> Option<CircularOp> {
        None
    }

    fn parse_op(text: &str) -> Result<CircularOp, StepError> {
        let (verb, value) = split_command(text)?;
        match (verb.as_str(), value) {
            ("enqueue" | "e" | "add", Some(v)) => Ok(CircularOp::Enqueue(v)),
            ("enqueue" | "e" | "add", None) => {
                Err(StepError::invalid_input("enqueue needs a value"))
            }
            ("dequeue" | "d" | "remove", _) => Ok(CircularOp::Dequeue),
            ("peek" | "front", _) => Ok(CircularOp::Peek),
            ("empty" | "is_empty" | "isempty", _) => Ok(CircularOp::IsEmpty),
            ("full" | "is_full" | "isfull", _) => Ok(CircularOp::IsFull),
            _ => Err(StepError::UnknownCommand {
                command: text.to_string(),
                algorithm: Self::NAME,
            }),
        }
    }

    fn view(state: &CircularState) -> StateView {
        let cells = state.slots.iter().map(|slot| match slot {
            Some(v) => Cell::number(*v, Mark::Normal),
            None => Cell::new("·", Mark::Discarded),
        });
        let mut view = StateView::new(Self::NAME, ViewLayout::Row)
            .cells(cells)
            .note("Size", format!("{}/{}", state.len(), state.capacity()));
        if let (Some(front), Some(rear)) = (state.front, state.rear) {
            view = view.pointer("front", front).pointer("rear", rear);
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
    fn rear_wraps_around() {
        let mut stepper = Stepper::<CircularQueue>::new(3).unwrap();
        for v in [1, 2, 3] {
            stepper.apply(CircularOp::Enqueue(v)).unwrap();
        }
        assert!(stepper.state().is_full());
        assert_eq!(
            stepper.apply(CircularOp::Enqueue(4)),
            Err(StepError::Overflow { capacity: 3 })
        );

        let event = stepper.apply(CircularOp::Dequeue).unwrap();
        assert_eq!(event.message, "Dequeued \"1\" from index 0");
        let event = stepper.apply(CircularOp::Enqueue(4)).unwrap();
        assert_eq!(event.message, "Enqueued \"4\" at index 0");
        assert_eq!(stepper.state().front, Some(1));
        assert_eq!(stepper.state().rear, Some(0));
    }

    #[test]
    fn last_dequeue_resets_pointers() {
        let mut stepper = Stepper::<CircularQueue>::new(2).unwrap();
        stepper.command("enqueue 9").unwrap();
        let event = stepper.command("dequeue").unwrap();
        assert_eq!(event.message, "Dequeued \"9\". Queue is now empty.");
        assert_eq!(stepper.state().front, None);
        assert_eq!(stepper.state().rear, None);
        assert_eq!(
            stepper.command("dequeue"),
            Err(StepError::Underflow {
                structure: "circular queue"
            })
        );
    }

    #[test]
    fn queries_report_flags() {
        let mut stepper = Stepper::<CircularQueue>::new(1).unwrap();
        assert_eq!(stepper.command("is_empty").unwrap().message, "Is Empty? true");
        stepper.command("e 5").unwrap();
        assert_eq!(stepper.command("full").unwrap().message, "Is Full? true");
        assert_eq!(
            stepper.command("peek").unwrap().message,
            "Front is: \"5\" at index 0"
        );
    }
}
