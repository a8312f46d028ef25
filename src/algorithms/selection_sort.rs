// Selection sort: scan for the running minimum, then place it

use crate::engine::{Algorithm, Cell, Mark, Motion, StateView, StepError, Transition, ViewLayout};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub arr: Vec<i64>,
    /// Slot being filled
    pub i: usize,
    /// Next index to compare against the minimum
    pub j: usize,
    pub min_index: usize,
}

#[derive(Debug)]
pub struct SelectionSort;

impl Algorithm for SelectionSort {
    const NAME: &'static str = "Selection Sort";
    type Input = Vec<i64>;
    type State = SelectionState;
    type Op = ();

    fn init(arr: Vec<i64>) -> Result<SelectionState, StepError> {
        Ok(SelectionState {
            arr,
            i: 0,
            j: 1,
            min_index: 0,
        })
    }

    fn is_terminal(state: &SelectionState) -> bool {
        state.i + 1 >= state.arr.len()
    }

    fn transition(
        state: &SelectionState,
        _: &(),
    ) -> Result<Transition<SelectionState>, StepError> {
        let mut next = state.clone();

        if next.j < next.arr.len() {
            let candidate = next.arr[next.j];
            let message = if candidate < next.arr[next.min_index] {
                next.min_index = next.j;
                format!("New minimum found: {}", candidate)
            } else {
                format!(
                    "Comparing {} with current minimum {}",
                    candidate, next.arr[next.min_index]
                )
            };
            next.j += 1;
            return Ok(Transition::new(next, message));
        }

        let (i, min) = (next.i, next.min_index);
        let (message, motion) = if min != i {
            let message = format!(
                "Swapping minimum {} with element {}",
                next.arr[min], next.arr[i]
            );
            next.arr.swap(i, min);
            (message, Some(Motion::Swap { from: i, to: min }))
        } else {
            (
                format!("Element {} is already in correct place.", next.arr[i]),
                None,
            )
        };

        next.i += 1;
        next.j = next.i + 1;
        next.min_index = next.i;
        Ok(Transition {
            state: next,
            message,
            motion,
        })
    }

    fn auto_op(_: &SelectionState) -> Option<()> {
        Some(())
    }

    fn view(state: &SelectionState) -> StateView {
        let done = Self::is_terminal(state);
        let cells = state.arr.iter().enumerate().map(|(k, &v)| {
            let mark = if done || k < state.i {
                Mark::Settled
            } else if k == state.min_index {
                Mark::Found
            } else if k + 1 == state.j {
                Mark::Active
            } else {
                Mark::Normal
            };
            Cell::number(v, mark)
        });

        let mut view = StateView::new(Self::NAME, ViewLayout::Bars).cells(cells);
        if !done {
            view = view.pointer("i", state.i).pointer("min", state.min_index);
            if let Some(&m) = state.arr.get(state.min_index) {
                view = view.note("Current minimum", m.to_string());
            }
        } else {
            view = view.note("Result", "Sorted");
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Stepper;

    #[test]
    fn finds_minimum_then_swaps() {
        let mut stepper = Stepper::<SelectionSort>::new(vec![4, 2, 3]).unwrap();

        assert_eq!(stepper.step().unwrap().message, "New minimum found: 2");
        assert_eq!(
            stepper.step().unwrap().message,
            "Comparing 3 with current minimum 2"
        );

        let swap = stepper.step().unwrap();
        assert_eq!(swap.message, "Swapping minimum 2 with element 4");
        assert_eq!(swap.motion, Some(Motion::Swap { from: 0, to: 1 }));
        assert_eq!(stepper.state().arr, vec![2, 4, 3]);
        assert_eq!(stepper.state().i, 1);
        assert_eq!(stepper.state().j, 2);
    }

    #[test]
    fn element_in_place_is_not_swapped() {
        let mut stepper = Stepper::<SelectionSort>::new(vec![1, 2]).unwrap();
        stepper.step().unwrap();
        let event = stepper.step().unwrap();
        assert_eq!(event.message, "Element 1 is already in correct place.");
        assert!(event.motion.is_none());
        assert!(event.terminal);
    }
}
