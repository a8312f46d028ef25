//! Building initial inputs
//!
//! Manual entry is parsed here with the same rules the lessons enforce (an
//! exact element count, numbers only). Random arrays are generated here too so
//! that transition functions stay deterministic.

use super::traversal::TreeInput;
use crate::engine::StepError;
use rand::Rng;

/// Smallest and largest array size offered by the array labs
pub const MIN_ARRAY_SIZE: usize = 1;
pub const MAX_ARRAY_SIZE: usize = 20;

/// Parse comma- or whitespace-separated integers
///
/// With `expected` set, the count must match exactly.
pub fn parse_array(text: &str, expected: Option<usize>) -> Result<Vec<i64>, StepError> {
    let values = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| StepError::invalid_input(format!("'{}' is not a number", s)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(expected) = expected {
        if values.len() != expected {
            return Err(StepError::invalid_input(format!(
                "please enter exactly {} valid numbers (got {})",
                expected,
                values.len()
            )));
        }
    }
    Ok(values)
}

/// Clamp a requested array size to the supported range
pub fn clamp_size(size: usize, max: usize) -> usize {
    size.clamp(MIN_ARRAY_SIZE, max.max(MIN_ARRAY_SIZE))
}

/// Random values in `1..=99`
pub fn random_array<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Vec<i64> {
    (0..size).map(|_| rng.gen_range(1..=99)).collect()
}

/// Random values in `1..=99`, sorted for binary search
pub fn random_sorted_array<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Vec<i64> {
    let mut arr = random_array(rng, size);
    arr.sort_unstable();
    arr
}

/// Parse a tree description
///
/// `nodes` is a comma-separated label list (node 0 is the root) and `edges`
/// a comma-separated list of `parent-child` index pairs, e.g. `"0-1,0-2"`.
pub fn parse_tree(
    nodes: &str,
    edges: &str,
    target: &str,
    depth_limit: Option<usize>,
) -> Result<TreeInput, StepError> {
    let labels: Vec<String> = nodes
        .split(',')
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect();

    let edges = edges
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|pair| {
            let (p, c) = pair
                .split_once('-')
                .ok_or_else(|| StepError::invalid_input(format!("bad edge '{}'", pair)))?;
            let parse = |s: &str| {
                s.trim()
                    .parse::<usize>()
                    .map_err(|_| StepError::invalid_input(format!("bad edge '{}'", pair)))
            };
            Ok((parse(p)?, parse(c)?))
        })
        .collect::<Result<Vec<_>, StepError>>()?;

    Ok(TreeInput {
        labels,
        edges,
        target: target.trim().to_uppercase(),
        depth_limit,
    })
}

/// The seven-node sample tree used when no tree is given
pub fn sample_tree(target: &str, depth_limit: Option<usize>) -> TreeInput {
    TreeInput {
        labels: ["A", "B", "C", "D", "E", "F", "G"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        edges: vec![(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)],
        target: target.trim().to_uppercase(),
        depth_limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn parses_mixed_separators() {
        assert_eq!(parse_array("3, 1  2,-4", None).unwrap(), vec![3, 1, 2, -4]);
    }

    #[test]
    fn count_mismatch_is_invalid_input() {
        let err = parse_array("1,2", Some(3)).unwrap_err();
        assert_eq!(
            err,
            StepError::invalid_input("please enter exactly 3 valid numbers (got 2)")
        );
    }

    #[test]
    fn non_numbers_are_rejected() {
        assert!(parse_array("1,two,3", None).is_err());
    }

    #[test]
    fn random_arrays_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let arr = random_array(&mut rng, 20);
        assert_eq!(arr.len(), 20);
        assert!(arr.iter().all(|v| (1..=99).contains(v)));
        assert!(super::super::is_sorted(&random_sorted_array(&mut rng, 12)));
    }

    #[test]
    fn clamp_size_bounds() {
        assert_eq!(clamp_size(0, MAX_ARRAY_SIZE), 1);
        assert_eq!(clamp_size(50, MAX_ARRAY_SIZE), 20);
        assert_eq!(clamp_size(7, MAX_ARRAY_SIZE), 7);
    }

    #[test]
    fn tree_description_parses() {
        let tree = parse_tree("a, b, c", "0-1, 0-2", "c", Some(1)).unwrap();
        assert_eq!(tree.labels, vec!["A", "B", "C"]);
        assert_eq!(tree.edges, vec![(0, 1), (0, 2)]);
        assert_eq!(tree.target, "C");
        assert!(parse_tree("a,b", "0>1", "b", None).is_err());
    }
}
