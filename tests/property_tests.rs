// Property tests: sort correctness, determinism and the undo inverse law

use dsa_lab::algorithms::{
    BinarySearch, BracketInput, BracketValidation, BubbleSort, InfixToPostfix, SearchInput,
    SearchOutcome, SelectionSort,
};
use dsa_lab::engine::{Algorithm, Stepper};
use proptest::prelude::*;

const MAX_STEPS: usize = 100_000;

fn sorted_copy(values: &[i64]) -> Vec<i64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
}

/// Run to the end and return every message plus the final state
fn full_run<A: Algorithm<Op = ()>>(input: A::Input) -> (Vec<String>, A::State) {
    let mut stepper = Stepper::<A>::new(input).expect("valid input");
    stepper.run_to_completion(MAX_STEPS).expect("run failed");
    let messages = stepper.log().messages().map(str::to_string).collect();
    (messages, stepper.state().clone())
}

/// Two runs over the same input log the same messages and end equal
fn check_deterministic<A>(input: A::Input) -> Result<(), TestCaseError>
where
    A: Algorithm<Op = ()>,
    A::Input: Clone,
{
    let first = full_run::<A>(input.clone());
    let second = full_run::<A>(input);
    prop_assert_eq!(first, second);
    Ok(())
}

/// Step, undo, check nothing changed, then step again, up to `steps` times
///
/// A refused step must leave the stepper untouched and ends the walk.
fn check_undo_inverse<A: Algorithm<Op = ()>>(
    input: A::Input,
    steps: usize,
) -> Result<(), TestCaseError> {
    let mut stepper = Stepper::<A>::new(input).unwrap();
    for _ in 0..steps {
        if stepper.is_terminal() {
            break;
        }
        let before = stepper.state().clone();
        let log_len = stepper.log().len();

        if stepper.step().is_err() {
            prop_assert_eq!(stepper.state(), &before);
            prop_assert_eq!(stepper.log().len(), log_len);
            break;
        }
        stepper.undo().unwrap();
        prop_assert_eq!(stepper.state(), &before);
        prop_assert_eq!(stepper.log().len(), log_len);

        stepper.step().unwrap();
        prop_assert_eq!(stepper.log().len(), stepper.history().len());
    }
    Ok(())
}

fn sorted_unique(values: &[i64]) -> Vec<i64> {
    let mut sorted = sorted_copy(values);
    sorted.dedup();
    sorted
}

proptest! {
    #[test]
    fn bubble_sort_yields_sorted_permutation(values in prop::collection::vec(-99i64..100, 0..20)) {
        let (_, state) = full_run::<BubbleSort>(values.clone());
        prop_assert_eq!(state.arr, sorted_copy(&values));
    }

    #[test]
    fn selection_sort_yields_sorted_permutation(values in prop::collection::vec(-99i64..100, 0..20)) {
        let (_, state) = full_run::<SelectionSort>(values.clone());
        prop_assert_eq!(state.arr, sorted_copy(&values));
    }

    #[test]
    fn sorts_are_deterministic(values in prop::collection::vec(1i64..100, 1..12)) {
        check_deterministic::<BubbleSort>(values.clone())?;
        check_deterministic::<SelectionSort>(values)?;
    }

    #[test]
    fn expression_runs_are_deterministic(
        infix in "[A-D+*/^()-]{1,16}",
        brackets in "[()\\[\\]{}x]{1,8}",
    ) {
        check_deterministic::<InfixToPostfix>(infix)?;
        check_deterministic::<BracketValidation>(BracketInput::new(brackets))?;
    }

    #[test]
    fn binary_search_is_deterministic(
        values in prop::collection::vec(1i64..100, 1..20),
        target in 1i64..100,
    ) {
        check_deterministic::<BinarySearch>(SearchInput::new(sorted_unique(&values), target))?;
    }

    #[test]
    fn undo_after_sort_step_is_identity(
        values in prop::collection::vec(1i64..100, 2..12),
        steps in 1usize..40,
    ) {
        check_undo_inverse::<SelectionSort>(values.clone(), steps)?;
        check_undo_inverse::<BubbleSort>(values, steps)?;
    }

    #[test]
    fn undo_after_expression_step_is_identity(
        infix in "[A-D+*/^()-]{1,16}",
        brackets in "[()\\[\\]{}x]{1,8}",
        steps in 1usize..40,
    ) {
        check_undo_inverse::<InfixToPostfix>(infix, steps)?;
        check_undo_inverse::<BracketValidation>(BracketInput::new(brackets), steps)?;
    }

    #[test]
    fn undo_after_search_step_is_identity(
        values in prop::collection::vec(1i64..100, 1..20),
        target in 1i64..100,
        steps in 1usize..10,
    ) {
        let input = SearchInput::new(sorted_unique(&values), target);
        check_undo_inverse::<BinarySearch>(input, steps)?;
    }

    #[test]
    fn binary_search_agrees_with_slice_search(
        values in prop::collection::vec(1i64..100, 1..20),
        target in 1i64..100,
    ) {
        let sorted = sorted_unique(&values);
        let expected = match sorted.binary_search(&target) {
            Ok(i) => SearchOutcome::Found(i),
            Err(_) => SearchOutcome::NotFound,
        };
        let (_, state) = full_run::<BinarySearch>(SearchInput::new(sorted, target));
        prop_assert_eq!(state.outcome, expected);
    }

    #[test]
    fn postfix_keeps_operands_in_order(operands in prop::collection::vec("[A-Z]", 1..8)) {
        let infix = operands.join("+");
        let (_, state) = full_run::<InfixToPostfix>(infix);
        let emitted: String = state.output.chars().filter(|c| c.is_ascii_alphabetic()).collect();
        prop_assert_eq!(emitted, operands.concat());
        prop_assert_eq!(state.output.matches('+').count(), operands.len() - 1);
    }
}
