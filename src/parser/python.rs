// SPDX-License-Identifier: MIT OR Apache-2.0

//! tree-sitter-python backend for [`SyntaxNode`].

use std::path::Path;

use tree_sitter::{Node, Parser, Tree};

use crate::errors::{Error, Result};
use crate::parser::node::SyntaxNode;

/// Reusable Python parser. One instance is shared across all files of a run.
pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_python::LANGUAGE.into())?;
        Ok(Self { parser })
    }

    /// Parse one file's text. Any syntax error fails the whole file.
    pub fn parse(&mut self, source: String, path: &Path) -> Result<ParsedSource> {
        let Some(tree) = self.parser.parse(&source, None) else {
            return Err(Error::Parse {
                path: path.to_path_buf(),
                line: 1,
                column: 1,
            });
        };

        if let Some(bad) = first_error(tree.root_node()) {
            let position = bad.start_position();
            return Err(Error::Parse {
                path: path.to_path_buf(),
                line: position.row + 1,
                column: position.column + 1,
            });
        }

        Ok(ParsedSource { source, tree })
    }
}

/// A successfully parsed file: the text and the tree that points into it.
pub struct ParsedSource {
    source: String,
    tree: Tree,
}

impl ParsedSource {
    pub fn root(&self) -> PythonNode<'_> {
        PythonNode {
            node: self.tree.root_node(),
            source: self.source.as_bytes(),
        }
    }
}

/// A tree-sitter node bound to the source bytes it was parsed from.
#[derive(Clone, Copy)]
pub struct PythonNode<'tree> {
    node: Node<'tree>,
    source: &'tree [u8],
}

impl<'tree> PythonNode<'tree> {
    fn wrap(&self, node: Node<'tree>) -> Self {
        Self {
            node,
            source: self.source,
        }
    }

    fn text(&self, node: Node<'tree>) -> Option<String> {
        node.utf8_text(self.source)
            .ok()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    }
}

impl SyntaxNode for PythonNode<'_> {
    fn is_function_definition(&self) -> bool {
        // `async def` shares the node kind but starts with an `async` token;
        // coroutines are not indexed.
        self.node.kind() == "function_definition"
            && self.node.child(0).map(|first| first.kind()) != Some("async")
    }

    fn name(&self) -> Option<String> {
        let name = self.node.child_by_field_name("name")?;
        self.text(name)
    }

    fn args(&self) -> Vec<String> {
        let Some(parameters) = self.node.child_by_field_name("parameters") else {
            return Vec::new();
        };

        let mut args = Vec::new();
        let mut cursor = parameters.walk();
        for param in parameters.named_children(&mut cursor) {
            match param.kind() {
                "identifier" => args.extend(self.text(param)),
                "default_parameter" | "typed_default_parameter" => {
                    if let Some(name) = param.child_by_field_name("name") {
                        args.extend(self.text(name));
                    }
                }
                "typed_parameter" => match param.named_child(0) {
                    Some(inner) if inner.kind() == "identifier" => args.extend(self.text(inner)),
                    // `*args: T` opens the keyword-only section.
                    Some(inner) if inner.kind() == "list_splat_pattern" => break,
                    _ => {}
                },
                // Everything after `*` or `*args` is keyword-only.
                "list_splat_pattern" | "keyword_separator" => break,
                _ => {}
            }
        }
        args
    }

    fn line(&self) -> usize {
        self.node.start_position().row + 1
    }

    fn children(&self) -> Vec<Self> {
        let mut cursor = self.node.walk();
        self.node
            .named_children(&mut cursor)
            .map(|child| self.wrap(child))
            .collect()
    }
}

/// Statements the grammar accepts for Python 2 compatibility but Python 3 rejects.
const PYTHON2_ONLY_KINDS: &[&str] = &["print_statement", "exec_statement"];

fn first_error<'tree>(node: Node<'tree>) -> Option<Node<'tree>> {
    if node.is_error() || node.is_missing() || PYTHON2_ONLY_KINDS.contains(&node.kind()) {
        return Some(node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error(child) {
            return Some(found);
        }
    }
    // has_error() with no offending descendant: report the node itself.
    node.has_error().then_some(node)
}
