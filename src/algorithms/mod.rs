//! Transition functions for every lab
//!
//! Each submodule implements [`Algorithm`](crate::engine::Algorithm) for one
//! lesson:
//! - Arrays: [`bubble_sort`], [`selection_sort`], [`linear_search`],
//!   [`binary_search`]
//! - Stacks: [`brackets`], [`infix_postfix`], [`stack_ops`]
//! - Queues: [`queue`], [`circular_queue`]
//! - Trees: [`traversal`] (BFS and depth-limited search)
//!
//! [`input`] builds initial inputs (manual parsing and random arrays); it is
//! deliberately kept out of the transition functions.

pub mod binary_search;
pub mod brackets;
pub mod bubble_sort;
pub mod circular_queue;
pub mod infix_postfix;
pub mod input;
pub mod linear_search;
pub mod queue;
pub mod selection_sort;
pub mod stack_ops;
pub mod traversal;

pub use binary_search::BinarySearch;
pub use brackets::{BracketInput, BracketValidation, Validity};
pub use bubble_sort::BubbleSort;
pub use circular_queue::{CircularOp, CircularQueue};
pub use infix_postfix::InfixToPostfix;
pub use linear_search::LinearSearch;
pub use queue::{Queue, QueueOp};
pub use selection_sort::SelectionSort;
pub use stack_ops::{StackOp, StackOperations};
pub use traversal::{BreadthFirst, DepthLimited, TraversalOutcome, TreeInput};

use crate::engine::StepError;
use std::fmt;

/// Default bound for the queue and stack labs
pub const DEFAULT_STRUCTURE_CAPACITY: usize = 8;

/// Array plus the value to look for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInput {
    pub array: Vec<i64>,
    pub target: i64,
}

impl SearchInput {
    pub fn new(array: Vec<i64>, target: i64) -> Self {
        SearchInput { array, target }
    }
}

/// Progress of an array search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Searching,
    Found(usize),
    NotFound,
}

impl SearchOutcome {
    pub fn is_done(&self) -> bool {
        !matches!(self, SearchOutcome::Searching)
    }

    pub fn found_index(&self) -> Option<usize> {
        match self {
            SearchOutcome::Found(i) => Some(*i),
            _ => None,
        }
    }

    /// Found index, or -1 when the search failed or is still running
    pub fn as_signed_index(&self) -> i64 {
        self.found_index().map_or(-1, |i| i as i64)
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Searching => write!(f, "Searching"),
            SearchOutcome::Found(i) => write!(f, "Found at index {}", i),
            SearchOutcome::NotFound => write!(f, "Not found"),
        }
    }
}

pub fn is_sorted(arr: &[i64]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}

/// Split `"verb [number]"`, lowercasing the verb
pub(crate) fn split_command(text: &str) -> Result<(String, Option<i64>), StepError> {
    let mut parts = text.split_whitespace();
    let verb = parts
        .next()
        .ok_or_else(|| StepError::invalid_input("empty command"))?
        .to_ascii_lowercase();
    let value = match parts.next() {
        Some(raw) => Some(raw.parse::<i64>().map_err(|_| {
            StepError::invalid_input(format!("'{}' is not a number", raw))
        })?),
        None => None,
    };
    if parts.next().is_some() {
        return Err(StepError::invalid_input(format!(
            "too many arguments in '{}'",
            text.trim()
        )));
    }
    Ok((verb, value))
}
