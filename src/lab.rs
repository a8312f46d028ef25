//! Lab registry
//!
//! Maps a [`LabKind`] plus the user's request onto a boxed [`Simulation`],
//! applying configured limits and filling in defaults for anything the user
//! left out (random arrays, sample expressions, the sample tree).

use crate::algorithms::input::{
    clamp_size, parse_array, parse_tree, random_array, random_sorted_array, sample_tree,
};
use crate::algorithms::{
    BinarySearch, BracketInput, BracketValidation, BreadthFirst, BubbleSort, CircularQueue,
    DepthLimited, InfixToPostfix, LinearSearch, Queue, SearchInput, SelectionSort,
    StackOperations,
};
use crate::config::LabConfig;
use crate::engine::{Algorithm, Simulation, StepError, Stepper};
use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::info;

pub const DEFAULT_BRACKET_EXPRESSION: &str = "({[]})";
pub const DEFAULT_INFIX_EXPRESSION: &str = "A+B*(C-D)";
pub const DEFAULT_TREE_TARGET: &str = "G";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum LabKind {
    BubbleSort,
    SelectionSort,
    LinearSearch,
    BinarySearch,
    Brackets,
    InfixPostfix,
    Queue,
    CircularQueue,
    Stack,
    Bfs,
    Dls,
}

impl LabKind {
    pub const ALL: [LabKind; 11] = [
        LabKind::BubbleSort,
        LabKind::SelectionSort,
        LabKind::LinearSearch,
        LabKind::BinarySearch,
        LabKind::Brackets,
        LabKind::InfixPostfix,
        LabKind::Queue,
        LabKind::CircularQueue,
        LabKind::Stack,
        LabKind::Bfs,
        LabKind::Dls,
    ];

    /// Whether the lab is driven by typed commands rather than plain steps
    pub fn is_interactive(self) -> bool {
        matches!(self, LabKind::Queue | LabKind::CircularQueue | LabKind::Stack)
    }

    /// Command syntax shown to the user for interactive labs
    pub fn command_help(self) -> Option<&'static str> {
        match self {
            LabKind::Queue => Some("enqueue N | dequeue | peek | size | is_empty"),
            LabKind::CircularQueue => Some("enqueue N | dequeue | peek | is_empty | is_full"),
            LabKind::Stack => Some("push N | pop | peek | size | is_empty"),
            _ => None,
        }
    }
}

impl fmt::Display for LabKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default();
        f.write_str(&name)
    }
}

/// Everything the user supplied for one lab; unset fields get defaults
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabRequest {
    /// Array values, expression, or tree node labels
    pub input: Option<String>,
    /// Search target (a number, or a node label for traversals)
    pub target: Option<String>,
    /// Tree edges as `parent-child` pairs
    pub edges: Option<String>,
    pub depth_limit: Option<usize>,
    /// Generated array size
    pub size: Option<usize>,
    /// Seed for generated arrays
    pub seed: Option<u64>,
}

impl LabRequest {
    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn array(&self, config: &LabConfig, sorted: bool) -> Result<Vec<i64>, StepError> {
        match &self.input {
            Some(text) => {
                let expected = self.size;
                let values = parse_array(text, expected)?;
                if values.is_empty() {
                    return Err(StepError::invalid_input("array must not be empty"));
                }
                if values.len() > config.limits.max_array_size {
                    return Err(StepError::invalid_input(format!(
                        "at most {} values are supported",
                        config.limits.max_array_size
                    )));
                }
                Ok(values)
            }
            None => {
                let size = clamp_size(
                    self.size.unwrap_or(config.defaults.array_size),
                    config.limits.max_array_size,
                );
                let mut rng = self.rng();
                Ok(if sorted {
                    random_sorted_array(&mut rng, size)
                } else {
                    random_array(&mut rng, size)
                })
            }
        }
    }

    fn search(&self, config: &LabConfig, sorted: bool) -> Result<SearchInput, StepError> {
        let array = self.array(config, sorted)?;
        let target = match &self.target {
            Some(text) => text.trim().parse::<i64>().map_err(|_| {
                StepError::invalid_input(format!("'{}' is not a number", text.trim()))
            })?,
            // Pick an element so the default run ends in a hit
            None => array[self.rng().gen_range(0..array.len())],
        };
        Ok(SearchInput::new(array, target))
    }

    fn text_or(&self, default: &str) -> String {
        self.input.clone().unwrap_or_else(|| default.to_string())
    }

    fn tree(&self) -> Result<crate::algorithms::TreeInput, StepError> {
        let target = self.target.as_deref().unwrap_or(DEFAULT_TREE_TARGET);
        match (&self.input, &self.edges) {
            (Some(nodes), Some(edges)) => parse_tree(nodes, edges, target, self.depth_limit),
            (None, None) => Ok(sample_tree(target, self.depth_limit)),
            _ => Err(StepError::invalid_input(
                "a tree needs both node labels and edges",
            )),
        }
    }
}

/// Build a ready-to-run simulation for `kind`
///
/// With `animated` set the stepper holds motions until they are settled.
pub fn open_lab(
    kind: LabKind,
    config: &LabConfig,
    request: &LabRequest,
    animated: bool,
) -> Result<Box<dyn Simulation>, StepError> {
    let limits = &config.limits;
    let sim = match kind {
        LabKind::BubbleSort => boxed::<BubbleSort>(request.array(config, false)?, animated)?,
        LabKind::SelectionSort => {
            boxed::<SelectionSort>(request.array(config, false)?, animated)?
        }
        LabKind::LinearSearch => {
            boxed::<LinearSearch>(request.search(config, false)?, animated)?
        }
        LabKind::BinarySearch => {
            boxed::<BinarySearch>(request.search(config, true)?, animated)?
        }
        LabKind::Brackets => {
            let input = BracketInput::new(request.text_or(DEFAULT_BRACKET_EXPRESSION))
                .with_capacity(limits.bracket_stack_capacity);
            boxed::<BracketValidation>(input, animated)?
        }
        LabKind::InfixPostfix => {
            boxed::<InfixToPostfix>(request.text_or(DEFAULT_INFIX_EXPRESSION), animated)?
        }
        LabKind::Queue => boxed::<Queue>(limits.queue_capacity, animated)?,
        LabKind::CircularQueue => {
            boxed::<CircularQueue>(limits.circular_queue_capacity, animated)?
        }
        LabKind::Stack => boxed::<StackOperations>(limits.stack_capacity, animated)?,
        LabKind::Bfs => boxed::<BreadthFirst>(request.tree()?, animated)?,
        LabKind::Dls => boxed::<DepthLimited>(request.tree()?, animated)?,
    };
    info!(lab = %kind, simulation = sim.name(), "lab opened");
    Ok(sim)
}

fn boxed<A>(input: A::Input, animated: bool) -> Result<Box<dyn Simulation>, StepError>
where
    A: Algorithm + 'static,
{
    let stepper = Stepper::<A>::new(input)?;
    Ok(if animated {
        Box::new(stepper.with_animation())
    } else {
        Box::new(stepper)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_opens_with_defaults() {
        let config = LabConfig::default();
        let request = LabRequest {
            seed: Some(3),
            ..LabRequest::default()
        };
        for kind in LabKind::ALL {
            let sim = open_lab(kind, &config, &request, false).unwrap();
            assert_eq!(sim.is_interactive(), kind.is_interactive(), "{}", kind);
            assert_eq!(kind.command_help().is_some(), kind.is_interactive());
        }
    }

    #[test]
    fn seeded_arrays_are_reproducible() {
        let config = LabConfig::default();
        let request = LabRequest {
            seed: Some(42),
            size: Some(6),
            ..LabRequest::default()
        };
        let a = open_lab(LabKind::BubbleSort, &config, &request, false).unwrap();
        let b = open_lab(LabKind::BubbleSort, &config, &request, false).unwrap();
        assert_eq!(a.view(), b.view());
        assert_eq!(a.view().cells.len(), 6);
    }

    #[test]
    fn oversized_manual_array_is_rejected() {
        let mut config = LabConfig::default();
        config.limits.max_array_size = 3;
        let request = LabRequest {
            input: Some("1,2,3,4".into()),
            ..LabRequest::default()
        };
        assert!(matches!(
            open_lab(LabKind::SelectionSort, &config, &request, false),
            Err(StepError::InvalidInput { .. })
        ));
    }

    #[test]
    fn unsorted_binary_search_is_flagged_once() {
        let request = LabRequest {
            input: Some("9,3,5".into()),
            target: Some("5".into()),
            ..LabRequest::default()
        };
        let sim = open_lab(LabKind::BinarySearch, &LabConfig::default(), &request, false).unwrap();
        let warnings = sim.view().notes.iter().filter(|(k, _)| k == "Warning").count();
        assert_eq!(warnings, 1);
    }

    #[test]
    fn display_uses_cli_names() {
        assert_eq!(LabKind::InfixPostfix.to_string(), "infix-postfix");
        assert_eq!(LabKind::Bfs.to_string(), "bfs");
    }
}
