//! Stack-based bracket validation
//!
//! One input character per step. Opening brackets are pushed; a closing
//! bracket must match the top of the stack or the whole validation ends as
//! invalid on that character. The expression is valid iff every character was
//! consumed and the stack is empty.

use crate::engine::{
    Algorithm, Cell, Mark, Motion, StateView, StepError, Transition, ViewLayout,
};

/// Default bound on stack depth
pub const DEFAULT_STACK_CAPACITY: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketInput {
    pub expression: String,
    pub capacity: usize,
}

impl BracketInput {
    pub fn new(expression: impl Into<String>) -> Self {
        BracketInput {
            expression: expression.into(),
            capacity: DEFAULT_STACK_CAPACITY,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketState {
    pub tokens: Vec<char>,
    pub index: usize,
    pub stack: Vec<char>,
    pub capacity: usize,
    pub verdict: Option<Validity>,
    /// Index of the closing bracket that failed to match
    pub mismatch_at: Option<usize>,
}

fn opener_for(close: char) -> Option<char> {
    match close {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

fn is_opener(c: char) -> bool {
    matches!(c, '(' | '[' | '{')
}

#[derive(Debug)]
pub struct BracketValidation;

impl Algorithm for BracketValidation {
    const NAME: &'static str = "Valid Parentheses";
    type Input = BracketInput;
    type State = BracketState;
    type Op = ();

    fn init(input: BracketInput) -> Result<BracketState, StepError> {
        if input.expression.trim().is_empty() {
            return Err(StepError::invalid_input("please enter an expression"));
        }
        if input.capacity == 0 {
            return Err(StepError::invalid_input("stack capacity must be positive"));
        }
        Ok(BracketState {
            tokens: input.expression.chars().collect(),
            index: 0,
            stack: Vec::new(),
            capacity: input.capacity,
            verdict: None,
            mismatch_at: None,
        })
    }

    fn is_terminal(state: &BracketState) -> bool {
        state.verdict.is_some()
    }

    fn transition(state: &BracketState, _: &()) -> Result<Transition<BracketState>, StepError> {
        let mut next = state.clone();
        let token = next.tokens[next.index];
        let mut motion = None;

        let mut message = if is_opener(token) {
            if next.stack.len() >= next.capacity {
                return Err(StepError::Overflow {
                    capacity: next.capacity,
                });
            }
            next.stack.push(token);
            motion = Some(Motion::Push(token.to_string()));
            format!("Pushed '{}' to stack.", token)
        } else if let Some(expected) = opener_for(token) {
            match next.stack.last().copied() {
                Some(top) if top == expected => {
                    next.stack.pop();
                    motion = Some(Motion::Pop(top.to_string()));
                    format!("Matched '{}' with '{}'. Popping.", top, token)
                }
                top => {
                    next.verdict = Some(Validity::Invalid);
                    next.mismatch_at = Some(next.index);
                    next.index += 1;
                    let message = match top {
                        Some(top) => {
                            format!("Mismatch! Stack top: '{}', current: '{}'.", top, token)
                        }
                        None => format!("Mismatch! Stack is empty, current: '{}'.", token),
                    };
                    return Ok(Transition::new(next, message));
                }
            }
        } else {
            format!("Skipping non-bracket character: '{}'", token)
        };

        next.index += 1;
        if next.index >= next.tokens.len() {
            if next.stack.is_empty() {
                next.verdict = Some(Validity::Valid);
                message.push_str(" Expression is valid.");
            } else {
                next.verdict = Some(Validity::Invalid);
                message.push_str(&format!(
                    " Expression is invalid: {} unmatched bracket(s).",
                    next.stack.len()
                ));
            }
        }

        Ok(Transition {
            state: next,
            message,
            motion,
        })
    }

    fn auto_op(_: &BracketState) -> Option<()> {
        Some(())
    }

    fn view(state: &BracketState) -> StateView {
        let top = state.stack.len().saturating_sub(1);
        let cells = state.stack.iter().enumerate().map(|(k, c)| {
            let mark = if k == top { Mark::Active } else { Mark::Normal };
            Cell::new(c.to_string(), mark)
        });

        let remaining: String = state.tokens[state.index.min(state.tokens.len())..]
            .iter()
            .collect();
        let verdict = match state.verdict {
            None => "Checking",
            Some(Validity::Valid) => "Valid",
            Some(Validity::Invalid) => "Invalid",
        };

        StateView::new(Self::NAME, ViewLayout::Stack)
            .cells(cells)
            .note("Expression", state.tokens.iter().collect::<String>())
            .note("Remaining", remaining)
            .note(
                "Capacity",
                format!("{}/{}", state.stack.len(), state.capacity),
            )
            .note("Result", verdict)
    }
}
