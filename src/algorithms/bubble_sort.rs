//! Bubble sort, one comparison per step
//!
//! A comparison that finds an inversion does not swap immediately. It marks
//! the pair as pending and emits a [`Motion::Swap`]; the following step commits
//! the exchange. This lets a renderer tween the two bars between the steps.

use crate::engine::{Algorithm, Cell, Mark, Motion, StateView, StepError, Transition, ViewLayout};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BubbleState {
    pub arr: Vec<i64>,
    /// Completed passes
    pub i: usize,
    /// Left index of the pair under comparison
    pub j: usize,
    /// `arr[j]` and `arr[j + 1]` are about to be exchanged
    pub pending_swap: bool,
}

#[derive(Debug)]
pub struct BubbleSort;

impl Algorithm for BubbleSort {
    const NAME: &'static str = "Bubble Sort";
    type Input = Vec<i64>;
    type State = BubbleState;
    type Op = ();

    fn init(arr: Vec<i64>) -> Result<BubbleState, StepError> {
        Ok(BubbleState {
            arr,
            i: 0,
            j: 0,
            pending_swap: false,
        })
    }

    fn is_terminal(state: &BubbleState) -> bool {
        state.i + 1 >= state.arr.len()
    }

    fn transition(state: &BubbleState, _: &()) -> Result<Transition<BubbleState>, StepError> {
        let mut next = state.clone();
        let n = next.arr.len();
        let j = next.j;

        if next.pending_swap {
            let (a, b) = (next.arr[j], next.arr[j + 1]);
            next.arr.swap(j, j + 1);
            next.pending_swap = false;
            next.j += 1;
            return Ok(Transition::new(next, format!("Swapped {} and {}.", a, b)));
        }

        if j + 1 < n - next.i {
            let (a, b) = (next.arr[j], next.arr[j + 1]);
            if a > b {
                next.pending_swap = true;
                return Ok(
                    Transition::new(next, format!("Comparing {} and {}. Swapping.", a, b))
                        .with_motion(Motion::Swap { from: j, to: j + 1 }),
                );
            }
            next.j += 1;
            return Ok(Transition::new(
                next,
                format!("Comparing {} and {}. No swap.", a, b),
            ));
        }

        next.j = 0;
        next.i += 1;
        let message = if next.i + 1 >= n {
            format!("Pass {} complete. Sorting complete.", next.i)
        } else {
            format!("Pass {} complete. Starting next pass.", next.i)
        };
        Ok(Transition::new(next, message))
    }

    fn auto_op(_: &BubbleState) -> Option<()> {
        Some(())
    }

    fn view(state: &BubbleState) -> StateView {
        let n = state.arr.len();
        let done = Self::is_terminal(state);
        let cells = state.arr.iter().enumerate().map(|(k, &v)| {
            let mark = if done || k >= n - state.i {
                Mark::Settled
            } else if k == state.j || k == state.j + 1 {
                if state.pending_swap {
                    Mark::Swapping
                } else {
                    Mark::Active
                }
            } else {
                Mark::Normal
            };
            Cell::number(v, mark)
        });

        let mut view = StateView::new(Self::NAME, ViewLayout::Bars)
            .cells(cells)
            .note("Pass", (state.i + 1).min(n.max(1)).to_string());
        if !done {
            view = view.pointer("j", state.j);
        }
        if done {
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
    fn inversion_takes_two_steps() {
        let mut stepper = Stepper::<BubbleSort>::new(vec![3, 1]).unwrap();

        let compare = stepper.step().unwrap();
        assert_eq!(compare.message, "Comparing 3 and 1. Swapping.");
        assert_eq!(compare.motion, Some(Motion::Swap { from: 0, to: 1 }));
        assert_eq!(stepper.state().arr, vec![3, 1]);

        let commit = stepper.step().unwrap();
        assert_eq!(commit.message, "Swapped 3 and 1.");
        assert_eq!(stepper.state().arr, vec![1, 3]);

        let pass = stepper.step().unwrap();
        assert_eq!(pass.message, "Pass 1 complete. Sorting complete.");
        assert!(pass.terminal);
    }

    #[test]
    fn short_arrays_start_terminal() {
        assert!(Stepper::<BubbleSort>::new(vec![]).unwrap().is_terminal());
        assert!(Stepper::<BubbleSort>::new(vec![7]).unwrap().is_terminal());
    }

    #[test]
    fn undo_between_compare_and_commit() {
        let mut stepper = Stepper::<BubbleSort>::new(vec![2, 1, 3]).unwrap();
        stepper.step().unwrap();
        assert!(stepper.state().pending_swap);
        stepper.undo().unwrap();
        assert!(!stepper.state().pending_swap);
        assert_eq!(stepper.state().j, 0);
    }

    #[test]
    fn view_marks_pending_pair() {
        let mut stepper = Stepper::<BubbleSort>::new(vec![5, 4, 9]).unwrap();
        stepper.step().unwrap();
        let view = stepper.view();
        assert_eq!(view.cells[0].mark, Mark::Swapping);
        assert_eq!(view.cells[1].mark, Mark::Swapping);
        assert_eq!(view.cells[2].mark, Mark::Normal);
    }
}
