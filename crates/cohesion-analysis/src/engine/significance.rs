//! Conditional-frequency filtering of co-occurrence pairs.

use cohesion_core::types::collections::BTreeMap;

use super::cooccurrence::CooccurrenceMatrix;

/// `(given, also) -> P(also referenced | given referenced)`.
pub type SignificantPairs = BTreeMap<(String, String), f64>;

/// Pairs whose conditional frequency exceeds `threshold`.
///
/// For each cell `(v1, v2)` the frequency is `m[(v1,v2)] / m[(v1,v1)]`. Fields
/// referenced by fewer than `min_count` methods are skipped entirely. The
/// result is directional: `(a, b)` and `(b, a)` are normalized by different
/// diagonals.
pub fn significant(matrix: &CooccurrenceMatrix, min_count: u32, threshold: f64) -> SignificantPairs {
    let mut pairs = SignificantPairs::new();
    for (v1, v2, count) in matrix.iter() {
        let total = matrix.diagonal(v1);
        if total == 0 || total < min_count {
            continue;
        }
        let p = f64::from(count) / f64::from(total);
        if p > threshold {
            pairs.insert((v1.to_string(), v2.to_string()), p);
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::cooccurrence::aggregate;
    use crate::engine::tally::MemberTally;

    fn matrix(refs: &[(&str, &[&str])]) -> CooccurrenceMatrix {
        let mut tally = MemberTally::default();
        for (method, fields) in refs {
            tally.record(method, fields.iter().map(|f| f.to_string()).collect());
        }
        aggregate(&tally)
    }

    fn key(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn rare_fields_are_excluded_even_when_frequent_together() {
        // b appears in one method, always with a: P(a|b) = 1.0 but diag(b) = 1.
        let m = matrix(&[("m1", &["a", "b"]), ("m2", &["a"])]);
        let pairs = significant(&m, 2, 0.4);

        assert!(pairs.keys().all(|(v1, _)| v1 != "b"));
        assert_eq!(pairs.get(&key("a", "a")), Some(&1.0));
        assert_eq!(pairs.get(&key("a", "b")), Some(&0.5));
    }

    #[test]
    fn threshold_is_strict_and_directional() {
        let m = matrix(&[("m1", &["a", "b"]), ("m2", &["a"])]);
        let pairs = significant(&m, 1, 0.5);

        // P(b|a) = 0.5 is not above 0.5; P(a|b) = 1.0 is.
        assert!(!pairs.contains_key(&key("a", "b")));
        assert_eq!(pairs.get(&key("b", "a")), Some(&1.0));
    }

    #[test]
    fn zero_min_count_on_empty_matrix_is_empty() {
        assert!(significant(&CooccurrenceMatrix::new(), 0, 0.0).is_empty());
    }
}
