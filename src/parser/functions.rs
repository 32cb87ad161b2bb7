// SPDX-License-Identifier: MIT OR Apache-2.0

//! Function extraction from a parsed tree via node traversal

use std::path::Path;

use crate::errors::{Error, Result};
use crate::models::FunctionRecord;
use crate::parser::node::SyntaxNode;

/// Prefix of dunder methods (`__init__`, `__repr__`, ...), which are never indexed.
const RESERVED_PREFIX: &str = "__";

/// Walks a whole tree, including nested functions and methods, and emits
/// one [`FunctionRecord`] per non-dunder function definition.
#[derive(Debug, Default, Clone, Copy)]
pub struct FunctionExtractor {
    use_absolute_path: bool,
}

impl FunctionExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the absolute form of the origin path instead of the path as given.
    pub fn with_absolute_paths(mut self, enabled: bool) -> Self {
        self.use_absolute_path = enabled;
        self
    }

    /// Extract function records from `root`, attributing them to `origin`.
    pub fn extract<N: SyntaxNode>(&self, root: N, origin: &Path) -> Result<Vec<FunctionRecord>> {
        let filename = if self.use_absolute_path {
            std::path::absolute(origin)
                .map_err(|err| Error::io(origin, err))?
                .to_string_lossy()
                .into_owned()
        } else {
            origin.to_string_lossy().into_owned()
        };

        let mut functions = Vec::new();
        self.traverse_node(root, &filename, &mut functions);
        Ok(functions)
    }

    fn traverse_node<N: SyntaxNode>(
        &self,
        node: N,
        filename: &str,
        functions: &mut Vec<FunctionRecord>,
    ) {
        if node.is_function_definition() {
            if let Some(name) = node.name() {
                if !name.starts_with(RESERVED_PREFIX) {
                    functions.push(FunctionRecord::new(
                        name,
                        node.args(),
                        filename,
                        node.line(),
                    ));
                }
            }
        }

        for child in node.children() {
            self.traverse_node(child, filename, functions);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::python::PythonParser;

    /// Minimal in-memory tree for exercising the walk without a grammar.
    #[derive(Clone)]
    struct FakeNode {
        function: bool,
        name: Option<&'static str>,
        args: Vec<&'static str>,
        line: usize,
        children: Vec<FakeNode>,
    }

    impl FakeNode {
        fn block(children: Vec<FakeNode>) -> Self {
            Self {
                function: false,
                name: None,
                args: Vec::new(),
                line: 1,
                children,
            }
        }

        fn def(name: &'static str, args: &[&'static str], line: usize) -> Self {
            Self {
                function: true,
                name: Some(name),
                args: args.to_vec(),
                line,
                children: Vec::new(),
            }
        }

        fn with_children(mut self, children: Vec<FakeNode>) -> Self {
            self.children = children;
            self
        }
    }

    impl SyntaxNode for FakeNode {
        fn is_function_definition(&self) -> bool {
            self.function
        }

        fn name(&self) -> Option<String> {
            self.name.map(str::to_string)
        }

        fn args(&self) -> Vec<String> {
            self.args.iter().map(|a| a.to_string()).collect()
        }

        fn line(&self) -> usize {
            self.line
        }

        fn children(&self) -> Vec<Self> {
            self.children.clone()
        }
    }

    fn names(records: &[FunctionRecord]) -> Vec<&str> {
        let mut names: Vec<&str> = records.iter().map(|r| r.name()).collect();
        names.sort_unstable();
        names
    }

    #[test]
    fn test_walks_nested_definitions() {
        let tree = FakeNode::block(vec![
            FakeNode::def("outer", &["x"], 1).with_children(vec![FakeNode::def("inner", &[], 2)]),
            FakeNode::block(vec![FakeNode::def("method", &["self"], 5)]),
        ]);
        let records = FunctionExtractor::new()
            .extract(tree, Path::new("mod.py"))
            .unwrap();
        assert_eq!(names(&records), ["inner", "method", "outer"]);
    }

    #[test]
    fn test_dunder_excluded_but_children_still_walked() {
        let tree = FakeNode::block(vec![
            FakeNode::def("__init__", &["self"], 2).with_children(vec![FakeNode::def("helper", &[], 3)])
        ]);
        let records = FunctionExtractor::new()
            .extract(tree, Path::new("mod.py"))
            .unwrap();
        assert_eq!(names(&records), ["helper"]);
    }

    #[test]
    fn test_unnamed_definition_is_skipped() {
        let mut anonymous = FakeNode::def("x", &[], 1);
        anonymous.name = None;
        let records = FunctionExtractor::new()
            .extract(FakeNode::block(vec![anonymous]), Path::new("mod.py"))
            .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_python_source_extraction() {
        let source = r#"
import os

def _private(a, b, c):
    return a

class Archive:
    def __init__(self, path):
        self.path = path

    def open(self, mode='r'):
        def inner(x):
            return x
        return inner

async def fetch(url, *, timeout=3):
    pass
"#;
        let parsed = PythonParser::new()
            .unwrap()
            .parse(source.to_string(), Path::new("pkg/archive.py"))
            .unwrap();
        let records = FunctionExtractor::new()
            .extract(parsed.root(), Path::new("pkg/archive.py"))
            .unwrap();

        assert_eq!(names(&records), ["_private", "inner", "open"]);
        assert!(records.iter().all(|r| !r.name().starts_with("__")));

        let private = records.iter().find(|r| r.name() == "_private").unwrap();
        assert_eq!(private.args(), ["a", "b", "c"]);
        assert_eq!(private.line(), 4);
        assert_eq!(private.filename(), "pkg/archive.py");

        let open = records.iter().find(|r| r.name() == "open").unwrap();
        assert_eq!(open.args(), ["self", "mode"]);
        assert_eq!(open.line(), 11);

        assert!(records.iter().all(|r| r.name() != "fetch"));
    }

    #[test]
    fn test_absolute_paths() {
        let tree = FakeNode::block(vec![FakeNode::def("f", &[], 1)]);
        let records = FunctionExtractor::new()
            .with_absolute_paths(true)
            .extract(tree, Path::new("pkg/mod.py"))
            .unwrap();
        let filename = Path::new(records[0].filename());
        assert!(filename.is_absolute());
        assert!(filename.ends_with("pkg/mod.py"));
    }
}
