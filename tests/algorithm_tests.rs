// Integration tests for the lesson algorithms

use dsa_lab::algorithms::{
    BinarySearch, BracketInput, BracketValidation, BubbleSort, InfixToPostfix, LinearSearch,
    Queue, QueueOp, SearchInput, SearchOutcome, SelectionSort, Validity,
};
use dsa_lab::engine::{StepError, Stepper};
use test_case::test_case;

const MAX_STEPS: usize = 10_000;

#[test_case(vec![64, 34, 25, 12, 22, 11, 90], vec![11, 12, 22, 25, 34, 64, 90] ; "lesson example")]
#[test_case(vec![3, 3, 1], vec![1, 3, 3] ; "duplicates")]
#[test_case(vec![-5, 0, -10], vec![-10, -5, 0] ; "negatives")]
#[test_case(vec![7], vec![7] ; "single element")]
#[test_case(vec![], vec![] ; "empty")]
fn test_bubble_sort_sorts(input: Vec<i64>, expected: Vec<i64>) {
    let mut stepper = Stepper::<BubbleSort>::new(input).expect("valid input");
    stepper.run_to_completion(MAX_STEPS).expect("run failed");

    assert!(stepper.is_terminal());
    assert_eq!(stepper.state().arr, expected);
}

#[test_case(vec![64, 34, 25, 12, 22, 11, 90], vec![11, 12, 22, 25, 34, 64, 90] ; "lesson example")]
#[test_case(vec![2, 1], vec![1, 2] ; "pair")]
#[test_case(vec![1, 2, 3], vec![1, 2, 3] ; "already sorted")]
fn test_selection_sort_sorts(input: Vec<i64>, expected: Vec<i64>) {
    let mut stepper = Stepper::<SelectionSort>::new(input).expect("valid input");
    stepper.run_to_completion(MAX_STEPS).expect("run failed");

    assert!(stepper.is_terminal());
    assert_eq!(stepper.state().arr, expected);
}

#[test]
fn test_bubble_sort_compare_then_commit() {
    let mut stepper = Stepper::<BubbleSort>::new(vec![2, 1]).unwrap();

    let compare = stepper.step().unwrap();
    assert_eq!(compare.message, "Comparing 2 and 1. Swapping.");
    assert_eq!(compare.state_after.arr, vec![2, 1]);
    assert!(compare.motion.is_some());

    let commit = stepper.step().unwrap();
    assert_eq!(commit.message, "Swapped 2 and 1.");
    assert_eq!(commit.state_after.arr, vec![1, 2]);

    let pass = stepper.step().unwrap();
    assert_eq!(pass.message, "Pass 1 complete. Sorting complete.");
    assert!(pass.terminal);
}

#[test_case(23, SearchOutcome::Found(5), 2 ; "present")]
#[test_case(24, SearchOutcome::NotFound, 3 ; "absent")]
#[test_case(2, SearchOutcome::Found(0), 3 ; "first element")]
fn test_binary_search(target: i64, expected: SearchOutcome, steps: usize) {
    let input = SearchInput::new(vec![2, 5, 8, 12, 16, 23, 38, 56], target);
    let mut stepper = Stepper::<BinarySearch>::new(input).unwrap();
    let taken = stepper.run_to_completion(MAX_STEPS).unwrap();

    assert_eq!(stepper.state().outcome, expected);
    assert_eq!(taken, steps);
    assert!(stepper.state().warning.is_none());
}

#[test]
fn test_binary_search_not_found_message() {
    let input = SearchInput::new(vec![2, 5, 8, 12, 16, 23, 38, 56], 24);
    let mut stepper = Stepper::<BinarySearch>::new(input).unwrap();
    stepper.run_to_completion(MAX_STEPS).unwrap();

    let last = stepper.log().last().expect("at least one step");
    assert_eq!(
        last.message,
        "Probing index 6 (value 38): 24 < 38, searching left. 24 not found"
    );
    assert_eq!(stepper.state().outcome.as_signed_index(), -1);
}

#[test]
fn test_binary_search_unsorted_input_warns_but_runs() {
    let input = SearchInput::new(vec![9, 1, 5], 5);
    let mut stepper = Stepper::<BinarySearch>::new(input).unwrap();
    assert_eq!(
        stepper.state().warning.as_deref(),
        Some("Array is not sorted. Binary search may fail.")
    );

    stepper.run_to_completion(MAX_STEPS).unwrap();
    assert!(stepper.is_terminal());
}

#[test]
fn test_linear_search_visits_every_index_when_absent() {
    let input = SearchInput::new(vec![4, 8, 15], 16);
    let mut stepper = Stepper::<LinearSearch>::new(input).unwrap();
    let taken = stepper.run_to_completion(MAX_STEPS).unwrap();

    assert_eq!(taken, 4);
    assert_eq!(stepper.state().outcome, SearchOutcome::NotFound);
    let messages: Vec<&str> = stepper.log().messages().collect();
    assert_eq!(
        messages,
        vec![
            "Checking index 0 (value 4)",
            "Checking index 1 (value 8)",
            "Checking index 2 (value 15)",
            "Target 16 not found",
        ]
    );
}

#[test_case("{[()]}", Validity::Valid, 6 ; "nested")]
#[test_case("([)]", Validity::Invalid, 3 ; "crossed pairs short circuit")]
#[test_case(")(", Validity::Invalid, 1 ; "closer first")]
#[test_case("((", Validity::Invalid, 2 ; "unclosed")]
#[test_case("a(b)c", Validity::Valid, 5 ; "skips other characters")]
fn test_bracket_validation(expression: &str, expected: Validity, steps: usize) {
    let mut stepper = Stepper::<BracketValidation>::new(BracketInput::new(expression)).unwrap();
    let taken = stepper.run_to_completion(MAX_STEPS).unwrap();

    assert_eq!(stepper.state().verdict, Some(expected));
    assert_eq!(taken, steps);
}

#[test]
fn test_bracket_mismatch_message() {
    let mut stepper = Stepper::<BracketValidation>::new(BracketInput::new("([)]")).unwrap();
    stepper.run_to_completion(MAX_STEPS).unwrap();

    assert_eq!(
        stepper.log().last().unwrap().message,
        "Mismatch! Stack top: '[', current: ')'."
    );
    assert_eq!(stepper.state().mismatch_at, Some(2));
}

#[test]
fn test_bracket_stack_overflow_leaves_state_unchanged() {
    let input = BracketInput::new("(((").with_capacity(2);
    let mut stepper = Stepper::<BracketValidation>::new(input).unwrap();
    stepper.step().unwrap();
    stepper.step().unwrap();
    let before = stepper.state().clone();

    assert_eq!(stepper.step(), Err(StepError::Overflow { capacity: 2 }));
    assert_eq!(stepper.state(), &before);
    assert_eq!(stepper.log().len(), 2);
}

#[test]
fn test_bracket_empty_expression_is_rejected() {
    assert!(matches!(
        Stepper::<BracketValidation>::new(BracketInput::new("   ")),
        Err(StepError::InvalidInput { .. })
    ));
}

#[test_case("A+B*C", "ABC*+" ; "precedence")]
#[test_case("A+(B-C)*D/E^F", "ABC-D*EF^/+" ; "lesson expression")]
#[test_case("A+B*(C-D)", "ABCD-*+" ; "default expression")]
#[test_case("(A+B)*C", "AB+C*" ; "leading group")]
#[test_case("A-B-C", "AB-C-" ; "left to right")]
fn test_infix_to_postfix(infix: &str, postfix: &str) {
    let mut stepper = Stepper::<InfixToPostfix>::new(infix.to_string()).unwrap();
    stepper.run_to_completion(MAX_STEPS).unwrap();

    assert!(stepper.is_terminal());
    assert_eq!(stepper.state().output, postfix);
    assert!(stepper.state().stack.is_empty());
}

#[test]
fn test_infix_to_postfix_keeps_every_token_once() {
    let infix = "A+(B-C)*D/E^F";
    let mut stepper = Stepper::<InfixToPostfix>::new(infix.to_string()).unwrap();
    stepper.run_to_completion(MAX_STEPS).unwrap();

    let mut expected: Vec<char> = infix.chars().filter(|c| !"()".contains(*c)).collect();
    let mut actual: Vec<char> = stepper.state().output.chars().collect();
    expected.sort_unstable();
    actual.sort_unstable();
    assert_eq!(actual, expected);
    assert!(stepper
        .log()
        .last()
        .unwrap()
        .message
        .ends_with("Conversion complete: ABC-D*EF^/+"));
}

#[test]
fn test_queue_is_first_in_first_out() {
    let mut stepper = Stepper::<Queue>::new(8).unwrap();
    stepper.apply(QueueOp::Enqueue(1)).unwrap();
    stepper.apply(QueueOp::Enqueue(2)).unwrap();
    let event = stepper.apply(QueueOp::Dequeue).unwrap();

    assert_eq!(event.message, "Dequeued 1");
    assert_eq!(event.state_after.removed, Some(1));
    assert_eq!(stepper.state().front(), Some(2));
}

#[test]
fn test_queue_overflow_and_underflow_leave_state_unchanged() {
    let mut stepper = Stepper::<Queue>::new(2).unwrap();
    assert_eq!(
        stepper.apply(QueueOp::Dequeue),
        Err(StepError::Underflow { structure: "queue" })
    );
    assert!(stepper.log().is_empty());

    stepper.apply(QueueOp::Enqueue(10)).unwrap();
    stepper.apply(QueueOp::Enqueue(20)).unwrap();
    let before = stepper.state().clone();

    assert_eq!(
        stepper.apply(QueueOp::Enqueue(30)),
        Err(StepError::Overflow { capacity: 2 })
    );
    assert_eq!(stepper.state(), &before);
    assert_eq!(stepper.log().len(), 2);
    assert_eq!(stepper.history().len(), 2);
}

#[test]
fn test_queue_queries_are_logged_without_changing_data() {
    let mut stepper = Stepper::<Queue>::new(4).unwrap();
    stepper.command("enqueue 7").unwrap();
    let items = stepper.state().items.clone();

    assert_eq!(stepper.command("peek").unwrap().message, "Peeked front: 7");
    assert_eq!(stepper.command("size").unwrap().message, "Size of Queue: 1");
    assert_eq!(stepper.command("is_empty").unwrap().message, "Queue is Not Empty");
    assert_eq!(stepper.state().items, items);
    assert_eq!(stepper.log().len(), 4);
}

#[test]
fn test_queue_plain_step_needs_a_command() {
    let mut stepper = Stepper::<Queue>::new(4).unwrap();
    assert_eq!(
        stepper.step(),
        Err(StepError::NeedsCommand { algorithm: "Queue" })
    );
    assert!(matches!(
        stepper.command("jump"),
        Err(StepError::UnknownCommand { .. })
    ));
}
