//! Pairwise field co-occurrence.

use cohesion_core::types::collections::{BTreeMap, BTreeSet};

use crate::ast::{AstTree, NodeId};

use super::scope::ChildScope;
use super::tally::{tally_members, MemberTally};

/// `(field_a, field_b) -> number of methods referencing both`.
///
/// Built by [`aggregate`], the matrix is symmetric and its diagonal counts the
/// methods referencing each field. Absent pairs read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CooccurrenceMatrix {
    counts: BTreeMap<(String, String), u32>,
}

impl CooccurrenceMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one to the `(a, b)` cell. Only this cell changes.
    pub fn increment(&mut self, a: &str, b: &str) {
        *self.counts.entry((a.to_string(), b.to_string())).or_insert(0) += 1;
    }

    pub fn get(&self, a: &str, b: &str) -> u32 {
        // BTreeMap lookups need an owned tuple key.
        self.counts
            .get(&(a.to_string(), b.to_string()))
            .copied()
            .unwrap_or(0)
    }

    pub fn diagonal(&self, field: &str) -> u32 {
        self.get(field, field)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of non-zero cells.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Non-zero cells in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, u32)> + '_ {
        self.counts
            .iter()
            .map(|((a, b), &count)| (a.as_str(), b.as_str(), count))
    }

    /// Fields appearing as the first component of some cell.
    pub fn row_fields(&self) -> BTreeSet<&str> {
        self.counts.keys().map(|(a, _)| a.as_str()).collect()
    }

    /// Fields appearing as the second component of some cell.
    pub fn column_fields(&self) -> BTreeSet<&str> {
        self.counts.keys().map(|(_, b)| b.as_str()).collect()
    }

    /// First `(a, b)` whose count differs from `(b, a)`.
    pub fn asymmetric_pair(&self) -> Option<(&str, &str)> {
        self.iter()
            .find(|&(a, b, count)| self.get(b, a) != count)
            .map(|(a, b, _)| (a, b))
    }

    pub fn is_symmetric(&self) -> bool {
        self.asymmetric_pair().is_none()
    }
}

/// Turn a tally into a co-occurrence matrix.
///
/// For every field, every method referencing it, and every field that method
/// references (the field itself included), bump that cell once.
pub fn aggregate(tally: &MemberTally) -> CooccurrenceMatrix {
    let mut matrix = CooccurrenceMatrix::new();
    for (v1, methods) in &tally.field_to_methods {
        for method in methods {
            let Some(fields) = tally.method_to_fields.get(method) else {
                continue;
            };
            for v2 in fields {
                matrix.increment(v1, v2);
            }
        }
    }
    matrix
}

/// Tally `class` under `scope` and aggregate the result.
pub fn build_matrix<S>(tree: &AstTree, class: NodeId, scope: &S) -> CooccurrenceMatrix
where
    S: ChildScope + ?Sized,
{
    aggregate(&tally_members(tree, class, scope))
}
