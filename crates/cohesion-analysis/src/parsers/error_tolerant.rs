//! Error-tolerant parsing: measure the damage in trees with ERROR nodes.

use tree_sitter::Node;

/// Count ERROR and MISSING nodes in a tree-sitter tree, with the 1-based
/// line of each.
pub fn count_errors(root: Node<'_>) -> (u32, Vec<u32>) {
    let mut count = 0u32;
    let mut lines = Vec::new();
    if !root.has_error() {
        return (count, lines);
    }

    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            count += 1;
            lines.push(node.start_position().row as u32 + 1);
        }
        let mut cursor = node.walk();
        let children: Vec<Node<'_>> = node
            .children(&mut cursor)
            .filter(|child| child.has_error())
            .collect();
        stack.extend(children.into_iter().rev());
    }
    (count, lines)
}
