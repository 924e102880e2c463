//! Per-class method/field reference tally.

use cohesion_core::types::collections::{BTreeMap, BTreeSet};
use tracing::trace;

use crate::ast::{AstTree, NodeId, NodeKind};

use super::scope::{ChildScope, ExcludeNestedTypes};
use super::search::find_all;

/// Which of a class's own fields each of its methods references, and the
/// inverse relation.
///
/// Methods are identified by spelling, so overloads share one entry whose
/// field set is the union of theirs. Fields are matched by name only: a
/// member reference counts when its spelling equals a field's spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberTally {
    /// Method spellings in declaration order, without duplicates.
    pub methods: Vec<String>,
    pub field_names: BTreeSet<String>,
    pub method_to_fields: BTreeMap<String, BTreeSet<String>>,
    pub field_to_methods: BTreeMap<String, BTreeSet<String>>,
}

impl MemberTally {
    /// Record that `method` references `fields`. Empty sets still register
    /// the method.
    pub fn record(&mut self, method: &str, fields: BTreeSet<String>) {
        if !self.method_to_fields.contains_key(method) {
            self.methods.push(method.to_string());
        }
        for field in &fields {
            self.field_to_methods
                .entry(field.clone())
                .or_default()
                .insert(method.to_string());
        }
        self.method_to_fields
            .entry(method.to_string())
            .or_default()
            .extend(fields);
    }
}

/// Tally the methods and fields declared in `class` itself.
///
/// Descent goes through `scope` with nested classes and structs hidden, both
/// when collecting members and when scanning method bodies.
pub fn tally_members<S>(tree: &AstTree, class: NodeId, scope: &S) -> MemberTally
where
    S: ChildScope + ?Sized,
{
    let own = ExcludeNestedTypes::new(scope);

    let methods = find_all(tree, class, |n| n.kind == NodeKind::Method, &own);
    let field_names: BTreeSet<String> = find_all(tree, class, |n| n.kind == NodeKind::Field, &own)
        .into_iter()
        .map(|id| tree.node(id).spelling.clone())
        .collect();

    let mut tally = MemberTally {
        field_names,
        ..MemberTally::default()
    };

    for method in methods {
        let referenced: BTreeSet<String> =
            find_all(tree, method, |n| n.kind == NodeKind::MemberRefExpr, &own)
                .into_iter()
                .map(|id| tree.node(id).spelling.as_str())
                .filter(|name| tally.field_names.contains(*name))
                .map(str::to_string)
                .collect();

        let name = &tree.node(method).spelling;
        trace!(method = %name, fields = ?referenced, "method member references");
        tally.record(name, referenced);
    }

    tally
}
