//! Candidate Path Space Generation
//!
//! Expands the base path templates into the full, ordered candidate list:
//! for each template (in priority order), indexes 0..depth in ascending
//! order. The output ordering is an invariant - it decides which path is
//! reported when more than one candidate could produce the same address.
//!
//! The list is generated exactly once per run and shared, read-only, by
//! every target's search.

use crate::hdpath::CandidatePath;

/// Expand templates x indexes into the ordered candidate sequence.
///
/// A depth of zero or less yields an empty sequence; it is never an error.
/// Pure function: same inputs, same output, no side effects.
pub fn generate(templates: &[String], depth: i64) -> Vec<CandidatePath> {
    // clamp, never wrap: a depth beyond u32::MAX is rejected upstream as an
    // input error, but a direct caller must not get a truncated space
    let depth = u32::try_from(depth.max(0)).unwrap_or(u32::MAX);
    let mut candidates = Vec::with_capacity(templates.len() * depth as usize);
    for template in templates {
        for index in 0..depth {
            candidates.push(CandidatePath::new(template, index));
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn templates(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ordering_template_outer_index_inner() {
        let out = generate(&templates(&["T1", "T2"]), 2);
        let strings: Vec<&str> = out.iter().map(|p| p.as_str()).collect();
        assert_eq!(strings, vec!["T1/0", "T1/1", "T2/0", "T2/1"]);
    }

    #[test]
    fn test_cardinality() {
        let base = templates(&["a", "b", "c"]);
        assert_eq!(generate(&base, 7).len(), 21);
        assert_eq!(generate(&base, 1).len(), 3);
        assert_eq!(generate(&base, 0).len(), 0);
        assert_eq!(generate(&base, -5).len(), 0);
        assert_eq!(generate(&[], 10).len(), 0);
    }

    #[test]
    fn test_deterministic_across_calls() {
        let base = templates(&["44'/60'/0'", "44'/61'/0'/0"]);
        let first = generate(&base, 5);
        let second = generate(&base, 5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_depth_is_empty_not_error() {
        let out = generate(&templates(&["44'/60'/0'"]), i64::MIN);
        assert!(out.is_empty());
    }
}
