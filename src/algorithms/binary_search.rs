//! Binary search, one midpoint probe per step
//!
//! Sorted input is a precondition that is checked but not enforced: an
//! unsorted array only produces a warning and the search runs anyway, which
//! can report "not found" for a value that is present.

use super::{is_sorted, SearchInput, SearchOutcome};
use crate::engine::{Algorithm, Cell, Mark, StateView, StepError, Transition, ViewLayout};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryState {
    pub arr: Vec<i64>,
    pub target: i64,
    pub low: isize,
    pub high: isize,
    /// Most recent probe
    pub mid: Option<usize>,
    pub outcome: SearchOutcome,
    /// Set when the input violated the sorted precondition
    pub warning: Option<String>,
}

#[derive(Debug)]
pub struct BinarySearch;

impl Algorithm for BinarySearch {
    const NAME: &'static str = "Binary Search";
    type Input = SearchInput;
    type State = BinaryState;
    type Op = ();

    fn init(input: SearchInput) -> Result<BinaryState, StepError> {
        let warning = if is_sorted(&input.array) {
            None
        } else {
            warn!(array = ?input.array, "binary search input is not sorted");
            Some("Array is not sorted. Binary search may fail.".to_string())
        };

        let high = input.array.len() as isize - 1;
        let outcome = if high < 0 {
            SearchOutcome::NotFound
        } else {
            SearchOutcome::Searching
        };

        Ok(BinaryState {
            arr: input.array,
            target: input.target,
            low: 0,
            high,
            mid: None,
            outcome,
            warning,
        })
    }

    fn is_terminal(state: &BinaryState) -> bool {
        state.outcome.is_done()
    }

    fn transition(state: &BinaryState, _: &()) -> Result<Transition<BinaryState>, StepError> {
        let mut next = state.clone();
        let mid = ((next.low + next.high) / 2) as usize;
        let value = next.arr[mid];
        let target = next.target;
        next.mid = Some(mid);

        let mut message = format!("Probing index {} (value {})", mid, value);
        if value == target {
            next.outcome = SearchOutcome::Found(mid);
            message.push_str(&format!(": found {}", target));
            return Ok(Transition::new(next, message));
        }

        if value < target {
            next.low = mid as isize + 1;
            message.push_str(&format!(": {} > {}, searching right", target, value));
        } else {
            next.high = mid as isize - 1;
            message.push_str(&format!(": {} < {}, searching left", target, value));
        }

        if next.low > next.high {
            next.outcome = SearchOutcome::NotFound;
            message.push_str(&format!(". {} not found", target));
        }
        Ok(Transition::new(next, message))
    }

    fn auto_op(_: &BinaryState) -> Option<()> {
        Some(())
    }

    fn view(state: &BinaryState) -> StateView {
        let in_range = |k: usize| (k as isize) >= state.low && (k as isize) <= state.high;
        let cells = state.arr.iter().enumerate().map(|(k, &v)| {
            let mark = match state.outcome {
                SearchOutcome::Found(f) if f == k => Mark::Found,
                _ if state.mid == Some(k) => Mark::Active,
                _ if !in_range(k) => Mark::Discarded,
                _ => Mark::Normal,
            };
            Cell::number(v, mark)
        });

        let mut view = StateView::new(Self::NAME, ViewLayout::Row)
            .cells(cells)
            .note("Target", state.target.to_string())
            .note("Result", state.outcome.to_string());
        if !state.outcome.is_done() {
            view = view
                .pointer("low", state.low as usize)
                .pointer("high", state.high as usize);
        }
        if let Some(mid) = state.mid {
            view = view.pointer("mid", mid);
        }
        if let Some(warning) = &state.warning {
            view = view.note("Warning", warning.clone());
        }
        view
    }
}
