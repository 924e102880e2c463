//! C++ AST provider using native tree-sitter.
//!
//! Lowers the concrete syntax tree into clang-style cursors: namespaces,
//! classes, methods, fields and member references, each attached to its
//! lexical parent. Punctuation and purely syntactic wrappers are dropped, so
//! a nested class's parent is the enclosing class itself.

use std::path::Path;
use std::time::Instant;

use cohesion_core::errors::ParseError;
use cohesion_core::types::collections::FxHashMap;
use tracing::debug;
use tree_sitter::{Node, Parser};

use super::error_tolerant::count_errors;
use super::traits::AstProvider;
use crate::ast::{AstTree, NodeId, NodeKind, SourceLocation};

/// C++ provider
pub struct CppAstProvider {
    parser: Parser,
}

impl CppAstProvider {
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_cpp::LANGUAGE.into())
            .map_err(|e| ParseError::GrammarLoad {
                language: "cpp".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { parser })
    }
}

impl AstProvider for CppAstProvider {
    fn language(&self) -> &'static str {
        "cpp"
    }

    fn parse(&mut self, source: &[u8], path: &Path) -> Result<AstTree, ParseError> {
        let start = Instant::now();

        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ParseError::TreeSitter {
                path: path.to_path_buf(),
                message: "parser returned no tree".to_string(),
            })?;
        let root = tree.root_node();

        // Syntax errors are tolerated: the partial tree is analyzed as is.
        let (errors, lines) = count_errors(root);
        if errors > 0 {
            debug!(
                path = %path.display(),
                errors,
                first_error_line = ?lines.first(),
                "syntax errors in source, continuing with recovered tree"
            );
        }

        let ast = TreeBuilder::new(source, path).build(root);
        debug!(
            path = %path.display(),
            language = self.language(),
            nodes = ast.len(),
            parse_time_us = start.elapsed().as_micros() as u64,
            "built AST"
        );
        Ok(ast)
    }
}

/// Where the builder currently is, lexically.
#[derive(Debug, Clone, Copy)]
enum Context {
    /// Translation unit or namespace.
    Scope,
    /// Body of the given class, struct or union.
    Record(NodeId),
    /// Body of the given function.
    Body(NodeId),
}

enum Task<'t> {
    Visit {
        node: Node<'t>,
        parent: NodeId,
        context: Context,
    },
    /// Declarators of a member declaration. Queued behind the declaration's
    /// inline type so `struct { .. } s;` yields the struct before `s`.
    Members {
        node: Node<'t>,
        parent: NodeId,
        record: NodeId,
    },
}

struct TreeBuilder<'s> {
    source: &'s [u8],
    path: &'s Path,
    tree: AstTree,
    /// Names declared directly by each scope node (keyed by tree-sitter node
    /// id), with the byte offset from which each name is visible.
    scopes: FxHashMap<usize, FxHashMap<String, usize>>,
}

impl<'s> TreeBuilder<'s> {
    fn new(source: &'s [u8], path: &'s Path) -> Self {
        Self {
            source,
            path,
            tree: AstTree::new(path),
            scopes: FxHashMap::default(),
        }
    }

    fn build(mut self, root: Node<'_>) -> AstTree {
        let mut stack = Vec::new();
        push_children(&mut stack, root, self.tree.root(), Context::Scope);

        while let Some(task) = stack.pop() {
            match task {
                Task::Visit {
                    node,
                    parent,
                    context,
                } => self.visit(node, parent, context, &mut stack),
                Task::Members {
                    node,
                    parent,
                    record,
                } => self.emit_members(node, parent, record),
            }
        }
        self.tree
    }

    fn add(&mut self, parent: NodeId, kind: NodeKind, spelling: &str, at: Node<'_>) -> NodeId {
        let location = SourceLocation::new(self.path, line_of(at));
        self.tree.add_node(parent, kind, spelling, location)
    }

    fn visit<'t>(
        &mut self,
        node: Node<'t>,
        parent: NodeId,
        context: Context,
        stack: &mut Vec<Task<'t>>,
    ) {
        let source = self.source;
        match (node.kind(), context) {
            ("namespace_definition", _) => {
                let name = node
                    .child_by_field_name("name")
                    .map_or("", |n| text(n, source));
                let id = self.add(parent, NodeKind::Namespace, name, node);
                if let Some(body) = node.child_by_field_name("body") {
                    push_children(stack, body, id, Context::Scope);
                }
            }
            ("class_specifier" | "struct_specifier" | "union_specifier", _) => {
                self.visit_record(node, parent, stack);
            }
            ("function_definition", _) => self.visit_function(node, parent, context, stack),
            ("field_declaration" | "declaration", Context::Record(record)) => {
                stack.push(Task::Members {
                    node,
                    parent,
                    record,
                });
                if let Some(ty) = node.child_by_field_name("type") {
                    if is_record_specifier(ty) {
                        stack.push(Task::Visit {
                            node: ty,
                            parent,
                            context,
                        });
                    }
                }
            }
            ("friend_declaration", _) => {}
            ("field_expression", Context::Body(_)) => {
                let field = node
                    .child_by_field_name("field")
                    .map_or("", |f| name_spelling(f, source));
                let id = self.add(parent, NodeKind::MemberRefExpr, field, node);
                if let Some(argument) = node.child_by_field_name("argument") {
                    stack.push(Task::Visit {
                        node: argument,
                        parent: id,
                        context,
                    });
                }
            }
            ("identifier", Context::Body(_)) => {
                let name = text(node, source);
                if !self.is_local(node, name) {
                    self.add(parent, NodeKind::MemberRefExpr, name, node);
                }
            }
            // `Base::x` and `ns::f` name something explicitly; no implicit member.
            ("qualified_identifier", Context::Body(_)) => {}
            _ => push_children(stack, node, parent, context),
        }
    }

    fn visit_record<'t>(&mut self, node: Node<'t>, parent: NodeId, stack: &mut Vec<Task<'t>>) {
        // Forward declarations and elaborated type names have no body.
        let Some(body) = node.child_by_field_name("body") else {
            return;
        };
        let name = node
            .child_by_field_name("name")
            .map_or("", |n| name_spelling(n, self.source));
        let kind = match (node.kind(), is_templated(node)) {
            ("union_specifier", _) => NodeKind::UnionDecl,
            (_, true) => NodeKind::ClassTemplate,
            ("class_specifier", false) => NodeKind::ClassDecl,
            _ => NodeKind::StructDecl,
        };
        let id = self.add(parent, kind, name, node);
        push_children(stack, body, id, Context::Record(id));
    }

    fn visit_function<'t>(
        &mut self,
        node: Node<'t>,
        parent: NodeId,
        context: Context,
        stack: &mut Vec<Task<'t>>,
    ) {
        let source = self.source;
        let declarator = node.child_by_field_name("declarator");
        let name = declarator
            .and_then(function_declarator)
            .and_then(|f| f.child_by_field_name("declarator"));
        let spelling = match (name, declarator) {
            (Some(name), _) => name_spelling(name, source),
            // Conversion operators.
            (None, Some(declarator)) => text(declarator, source),
            (None, None) => "",
        };
        let kind = self.function_kind(name, spelling, context, is_templated(node));
        let id = self.add(parent, kind, spelling, node);

        if let Some(body) = node.child_by_field_name("body") {
            push_children(stack, body, id, Context::Body(id));
        }
    }

    /// Whether `ident` names a parameter or local visible at its position.
    ///
    /// Walks the enclosing scopes out to the function definition. A local
    /// hides a member only inside its own block and only after its point of
    /// declaration, so `{ int n; } n++;` still references the member `n`.
    fn is_local(&mut self, ident: Node<'_>, name: &str) -> bool {
        let source = self.source;
        let at = ident.start_byte();
        let mut current = ident.parent();
        while let Some(scope) = current {
            if opens_scope(scope) {
                let declared = self
                    .scopes
                    .entry(scope.id())
                    .or_insert_with(|| scope_declarations(scope, source));
                if declared.get(name).is_some_and(|&from| from <= at) {
                    return true;
                }
                if scope.kind() == "function_definition" {
                    return false;
                }
            }
            current = scope.parent();
        }
        false
    }

    fn emit_members(&mut self, node: Node<'_>, parent: NodeId, record: NodeId) {
        let source = self.source;
        let templated = is_templated(node);
        let is_static = has_static_storage(node, source);

        let mut cursor = node.walk();
        let declarators: Vec<Node<'_>> = node
            .children_by_field_name("declarator", &mut cursor)
            .collect();

        for declarator in declarators {
            if let Some(function) = function_declarator(declarator) {
                let name = function.child_by_field_name("declarator");
                let spelling = name.map_or("", |n| name_spelling(n, source));
                let kind = self.function_kind(name, spelling, Context::Record(record), templated);
                self.add(parent, kind, spelling, declarator);
            } else if let Some(name) = declarator_identifier(declarator) {
                let name = text(name, source);
                let kind = if is_static {
                    NodeKind::Variable
                } else {
                    NodeKind::Field
                };
                self.add(parent, kind, name, declarator);
            }
        }
    }

    fn function_kind(
        &self,
        name: Option<Node<'_>>,
        spelling: &str,
        context: Context,
        templated: bool,
    ) -> NodeKind {
        let Some(name) = name else {
            return NodeKind::Other;
        };
        if templated {
            return NodeKind::FunctionTemplate;
        }
        let is_destructor = unqualified(name).kind() == "destructor_name";
        match context {
            Context::Record(record) => {
                if is_destructor {
                    NodeKind::Destructor
                } else if spelling == self.tree.node(record).spelling {
                    NodeKind::Constructor
                } else {
                    NodeKind::Method
                }
            }
            // Out-of-line member definition: `void Foo::bar() { .. }`.
            _ if name.kind() == "qualified_identifier" => {
                let scope = name
                    .child_by_field_name("scope")
                    .map_or("", |s| name_spelling(s, self.source));
                if is_destructor {
                    NodeKind::Destructor
                } else if scope == spelling {
                    NodeKind::Constructor
                } else {
                    NodeKind::Method
                }
            }
            _ => NodeKind::Function,
        }
    }
}

fn push_children<'t>(stack: &mut Vec<Task<'t>>, node: Node<'t>, parent: NodeId, context: Context) {
    let mut cursor = node.walk();
    let children: Vec<Node<'t>> = node.named_children(&mut cursor).collect();
    stack.extend(children.into_iter().rev().map(|node| Task::Visit {
        node,
        parent,
        context,
    }));
}

fn text<'a>(node: Node<'_>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

fn line_of(node: Node<'_>) -> u32 {
    node.start_position().row as u32 + 1
}

fn is_record_specifier(node: Node<'_>) -> bool {
    matches!(
        node.kind(),
        "class_specifier" | "struct_specifier" | "union_specifier"
    )
}

/// Declared under `template <..>` with at least one parameter. Explicit full
/// specializations (`template <> struct H<int>`) are ordinary classes.
fn is_templated(node: Node<'_>) -> bool {
    node.parent()
        .filter(|p| p.kind() == "template_declaration")
        .and_then(|p| p.child_by_field_name("parameters"))
        .is_some_and(|params| params.named_child_count() > 0)
}

fn has_static_storage(node: Node<'_>, source: &[u8]) -> bool {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .any(|child| child.kind() == "storage_class_specifier" && text(child, source) == "static");
    found
}

/// Strip scopes and template arguments: `ns::Foo<int>` -> `Foo`.
fn unqualified(mut node: Node<'_>) -> Node<'_> {
    while matches!(
        node.kind(),
        "qualified_identifier" | "template_function" | "template_method" | "template_type"
    ) {
        match node.child_by_field_name("name") {
            Some(name) => node = name,
            None => break,
        }
    }
    node
}

fn name_spelling<'a>(node: Node<'_>, source: &'a [u8]) -> &'a str {
    text(unqualified(node), source)
}

/// The function declarator inside a declarator chain, if the chain declares
/// a function. `int (*fp)(int)` declares a pointer and yields `None`.
fn function_declarator(mut node: Node<'_>) -> Option<Node<'_>> {
    loop {
        match node.kind() {
            "function_declarator" => {
                let inner = node.child_by_field_name("declarator")?;
                return (inner.kind() != "parenthesized_declarator").then_some(node);
            }
            "pointer_declarator" | "reference_declarator" | "attributed_declarator" => {
                let next = node
                    .child_by_field_name("declarator")
                    .or_else(|| node.named_child(0))?;
                node = next;
            }
            _ => return None,
        }
    }
}

/// Identifier introduced by a (possibly nested) declarator: `*a`, `b[4]`,
/// `c = 1`.
fn declarator_identifier(mut node: Node<'_>) -> Option<Node<'_>> {
    loop {
        match node.kind() {
            "identifier" | "field_identifier" => return Some(node),
            _ => {
                let next = node
                    .child_by_field_name("declarator")
                    .or_else(|| node.named_child(0))?;
                node = next;
            }
        }
    }
}

fn named_children_of(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    let children = node.named_children(&mut cursor).collect();
    children
}

fn opens_scope(node: Node<'_>) -> bool {
    matches!(
        node.kind(),
        "function_definition"
            | "lambda_expression"
            | "compound_statement"
            | "for_statement"
            | "for_range_loop"
            | "catch_clause"
            | "if_statement"
            | "while_statement"
            | "switch_statement"
    )
}

/// Identifiers declared by the `declarator` fields of `declaration`.
fn declared_identifiers<'t>(declaration: Node<'t>, out: &mut Vec<Node<'t>>) {
    let mut cursor = declaration.walk();
    for declarator in declaration.children_by_field_name("declarator", &mut cursor) {
        if declarator.kind() == "structured_binding_declarator" {
            out.extend(
                named_children_of(declarator)
                    .into_iter()
                    .filter(|n| n.kind() == "identifier"),
            );
        } else if let Some(name) = declarator_identifier(declarator) {
            out.push(name);
        }
    }
}

/// Names `scope` declares itself (not in nested scopes), each visible from
/// its point of declaration. Parameters are visible throughout.
fn scope_declarations(scope: Node<'_>, source: &[u8]) -> FxHashMap<String, usize> {
    let mut parameters = None;
    let mut names = Vec::new();

    match scope.kind() {
        "function_definition" => {
            parameters = scope
                .child_by_field_name("declarator")
                .and_then(function_declarator)
                .and_then(|f| f.child_by_field_name("parameters"));
        }
        "lambda_expression" => {
            parameters = scope
                .child_by_field_name("declarator")
                .and_then(|d| d.child_by_field_name("parameters"));
        }
        "catch_clause" => parameters = scope.child_by_field_name("parameters"),
        "for_range_loop" => declared_identifiers(scope, &mut names),
        "for_statement" => {
            if let Some(init) = scope.child_by_field_name("initializer") {
                if init.kind() == "declaration" {
                    declared_identifiers(init, &mut names);
                }
            }
        }
        // `if (auto p = f())`, `switch (int k = g(); k)`.
        "if_statement" | "while_statement" | "switch_statement" => {
            if let Some(condition) = scope.child_by_field_name("condition") {
                collect_block_declarations(condition, &mut names);
            }
        }
        "compound_statement" => collect_block_declarations(scope, &mut names),
        _ => {}
    }

    let mut declared = FxHashMap::default();
    if let Some(parameters) = parameters {
        for parameter in named_children_of(parameters) {
            if let Some(name) = parameter
                .child_by_field_name("declarator")
                .and_then(declarator_identifier)
            {
                declared.insert(text(name, source).to_string(), 0);
            }
        }
    }
    for name in names {
        declared
            .entry(text(name, source).to_string())
            .or_insert(name.start_byte());
    }
    declared
}

/// Declarations that are direct statements of `block`, including those under
/// `case` and goto labels, which share the enclosing block's scope.
fn collect_block_declarations<'t>(block: Node<'t>, out: &mut Vec<Node<'t>>) {
    for child in named_children_of(block) {
        match child.kind() {
            "declaration" => declared_identifiers(child, out),
            "case_statement" | "labeled_statement" | "init_statement" => {
                for inner in named_children_of(child) {
                    if inner.kind() == "declaration" {
                        declared_identifiers(inner, out);
                    }
                }
            }
            _ => {}
        }
    }
}
