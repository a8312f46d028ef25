// Linear search: one index checked per step

use super::{SearchInput, SearchOutcome};
use crate::engine::{Algorithm, Cell, Mark, StateView, StepError, Transition, ViewLayout};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearState {
    pub arr: Vec<i64>,
    pub target: i64,
    /// Last index checked
    pub cursor: Option<usize>,
    pub outcome: SearchOutcome,
}

#[derive(Debug)]
pub struct LinearSearch;

impl Algorithm for LinearSearch {
    const NAME: &'static str = "Linear Search";
    type Input = SearchInput;
    type State = LinearState;
    type Op = ();

    fn init(input: SearchInput) -> Result<LinearState, StepError> {
        Ok(LinearState {
            arr: input.array,
            target: input.target,
            cursor: None,
            outcome: SearchOutcome::Searching,
        })
    }

    fn is_terminal(state: &LinearState) -> bool {
        state.outcome.is_done()
    }

    fn transition(state: &LinearState, _: &()) -> Result<Transition<LinearState>, StepError> {
        let mut next = state.clone();
        let index = next.cursor.map_or(0, |c| c + 1);
        next.cursor = Some(index);

        let Some(&value) = next.arr.get(index) else {
            next.outcome = SearchOutcome::NotFound;
            let message = format!("Target {} not found", next.target);
            return Ok(Transition::new(next, message));
        };

        let mut message = format!("Checking index {} (value {})", index, value);
        if value == next.target {
            next.outcome = SearchOutcome::Found(index);
            message.push_str(&format!(". Found target at index {}", index));
        }
        Ok(Transition::new(next, message))
    }

    fn auto_op(_: &LinearState) -> Option<()> {
        Some(())
    }

    fn view(state: &LinearState) -> StateView {
        let cells = state.arr.iter().enumerate().map(|(k, &v)| {
            let mark = match (state.outcome, state.cursor) {
                (SearchOutcome::Found(f), _) if f == k => Mark::Found,
                (_, Some(c)) if c == k => Mark::Active,
                (_, Some(c)) if k < c => Mark::Discarded,
                (SearchOutcome::NotFound, _) => Mark::Discarded,
                _ => Mark::Normal,
            };
            Cell::number(v, mark)
        });

        let mut view = StateView::new(Self::NAME, ViewLayout::Row)
            .cells(cells)
            .note("Target", state.target.to_string())
            .note("Result", state.outcome.to_string());
        if let Some(c) = state.cursor.filter(|&c| c < state.arr.len()) {
            view = view.pointer("i", c);
        }
        view
    }
}
