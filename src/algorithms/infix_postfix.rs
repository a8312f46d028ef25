//! Infix to postfix conversion (Shunting-Yard)
//!
//! Every stack pop is its own step: popping for precedence, unwinding to a
//! `(` on `)`, and the final flush once input is exhausted. A token only
//! advances the input cursor once nothing more needs popping for it, so each
//! step can be undone individually.

use crate::engine::{
    Algorithm, Cell, Mark, Motion, StateView, StepError, Transition, ViewLayout,
};

/// Operator precedence; `None` for non-operators
pub fn precedence(op: char) -> Option<u8> {
    match op {
        '+' | '-' => Some(1),
        '*' | '/' => Some(2),
        '^' => Some(3),
        _ => None,
    }
}

fn is_operand(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfixState {
    pub tokens: Vec<char>,
    pub index: usize,
    pub stack: Vec<char>,
    pub output: String,
}

impl InfixState {
    /// Input exhausted and operators still waiting on the stack
    pub fn is_flushing(&self) -> bool {
        self.index >= self.tokens.len() && !self.stack.is_empty()
    }
}

#[derive(Debug)]
pub struct InfixToPostfix;

impl Algorithm for InfixToPostfix {
    const NAME: &'static str = "Infix to Postfix";
    type Input = String;
    type State = InfixState;
    type Op = ();

    fn init(expression: String) -> Result<InfixState, StepError> {
        if expression.trim().is_empty() {
            return Err(StepError::invalid_input("please enter an expression"));
        }
        Ok(InfixState {
            tokens: expression.chars().collect(),
            index: 0,
            stack: Vec::new(),
            output: String::new(),
        })
    }

    fn is_terminal(state: &InfixState) -> bool {
        state.index >= state.tokens.len() && state.stack.is_empty()
    }

    fn transition(state: &InfixState, _: &()) -> Result<Transition<InfixState>, StepError> {
        let mut next = state.clone();
        let mut motion = None;

        let mut message = if let Some(&token) = next.tokens.get(next.index) {
            scan(&mut next, token, &mut motion)
        } else {
            // final flush, one operator per step
            let top = next.stack.pop().unwrap_or_default();
            motion = Some(Motion::Pop(top.to_string()));
            if top == '(' {
                "Discarded unmatched '(' (final flush).".to_string()
            } else {
                next.output.push(top);
                format!("Popped '{}' from stack (final flush).", top)
            }
        };

        if Self::is_terminal(&next) {
            message.push_str(&format!(" Conversion complete: {}", next.output));
        }

        Ok(Transition {
            state: next,
            message,
            motion,
        })
    }

    fn auto_op(_: &InfixState) -> Option<()> {
        Some(())
    }

    fn view(state: &InfixState) -> StateView {
        let top = state.stack.len().saturating_sub(1);
        let cells = state.stack.iter().enumerate().map(|(k, c)| {
            let mark = if k == top { Mark::Active } else { Mark::Normal };
            Cell::new(c.to_string(), mark)
        });

        let remaining: String = state.tokens[state.index.min(state.tokens.len())..]
            .iter()
            .collect();

        let mut view = StateView::new(Self::NAME, ViewLayout::Stack)
            .cells(cells)
            .note("Infix", state.tokens.iter().collect::<String>())
            .note("Remaining", remaining)
            .note("Postfix", state.output.clone());
        if state.is_flushing() {
            view = view.note("Phase", "Final flush");
        }
        view
    }
}

/// Handle the token under the cursor
fn scan(next: &mut InfixState, token: char, motion: &mut Option<Motion>) -> String {
    if is_operand(token) {
        next.output.push(token);
        next.index += 1;
        return format!("Operand '{}' added to output.", token);
    }

    if token == '(' {
        next.stack.push(token);
        next.index += 1;
        *motion = Some(Motion::Push(token.to_string()));
        return format!("Pushed '{}' to stack.", token);
    }

    if token == ')' {
        return match next.stack.last().copied() {
            Some('(') => {
                next.stack.pop();
                next.index += 1;
                *motion = Some(Motion::Pop("(".to_string()));
                "Found ')': discarded matching '('.".to_string()
            }
            Some(top) => {
                next.stack.pop();
                next.output.push(top);
                *motion = Some(Motion::Pop(top.to_string()));
                format!("Popped '{}' to output (unwinding to '(').", top)
            }
            None => {
                next.index += 1;
                "Skipping unmatched ')'.".to_string()
            }
        };
    }

    if let Some(incoming) = precedence(token) {
        if let Some(&top) = next.stack.last() {
            if precedence(top).is_some_and(|p| p >= incoming) {
                next.stack.pop();
                next.output.push(top);
                *motion = Some(Motion::Pop(top.to_string()));
                return format!("Popped '{}' (precedence).", top);
            }
        }
        next.stack.push(token);
        next.index += 1;
        *motion = Some(Motion::Push(token.to_string()));
        return format!("Pushed operator '{}' to stack.", token);
    }

    next.index += 1;
    format!("Skipping character '{}'.", token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Stepper;

    #[test]
    fn precedence_pops_are_separate_steps() {
        let mut stepper = Stepper::<InfixToPostfix>::new("A*B+C".to_string()).unwrap();
        stepper.run_to_completion(50).unwrap();

        let messages: Vec<_> = stepper.log().messages().collect();
        assert_eq!(
            messages,
            vec![
                "Operand 'A' added to output.",
                "Pushed operator '*' to stack.",
                "Operand 'B' added to output.",
                "Popped '*' (precedence).",
                "Pushed operator '+' to stack.",
                "Operand 'C' added to output.",
                "Popped '+' from stack (final flush). Conversion complete: AB*C+",
            ]
        );
    }

    #[test]
    fn parentheses_unwind_one_pop_at_a_time() {
        let mut stepper = Stepper::<InfixToPostfix>::new("(A-B)".to_string()).unwrap();
        stepper.run_to_completion(50).unwrap();
        assert_eq!(stepper.state().output, "AB-");
        let messages: Vec<_> = stepper.log().messages().collect();
        assert_eq!(messages[4], "Popped '-' to output (unwinding to '(').");
        assert_eq!(
            messages[5],
            "Found ')': discarded matching '('. Conversion complete: AB-"
        );
    }

    #[test]
    fn unmatched_open_paren_is_discarded_on_flush() {
        let mut stepper = Stepper::<InfixToPostfix>::new("(A".to_string()).unwrap();
        stepper.run_to_completion(50).unwrap();
        assert_eq!(stepper.state().output, "A");
        assert!(stepper.is_terminal());
    }

    #[test]
    fn flush_steps_undo_individually() {
        let mut stepper = Stepper::<InfixToPostfix>::new("A+B*C".to_string()).unwrap();
        for _ in 0..5 {
            stepper.step().unwrap();
        }
        assert!(stepper.state().is_flushing());
        stepper.step().unwrap();
        assert_eq!(stepper.state().output, "ABC*");
        stepper.undo().unwrap();
        assert_eq!(stepper.state().output, "ABC");
        assert_eq!(stepper.state().stack, vec!['+', '*']);
    }
}
