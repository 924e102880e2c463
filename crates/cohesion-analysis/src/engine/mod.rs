//! Field co-occurrence engine.
//!
//! Scoped tree search, qualified names, per-class member tallies, pairwise
//! co-occurrence aggregation and conditional-frequency filtering. The engine
//! only reads an [`AstTree`](crate::ast::AstTree); it never parses.

pub mod cooccurrence;
pub mod extract;
pub mod naming;
pub mod scope;
pub mod search;
pub mod significance;
pub mod tally;

pub use cooccurrence::{aggregate, build_matrix, CooccurrenceMatrix};
pub use extract::{analyze_tree, enumerate_classes, ClassReport};
pub use naming::qualified_name;
pub use scope::{AllChildren, ChildScope, ExcludeNestedTypes, SameFile};
pub use search::{find_all, find_first};
pub use significance::{significant, SignificantPairs};
pub use tally::{tally_members, MemberTally};
