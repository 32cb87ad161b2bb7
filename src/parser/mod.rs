// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parser module - AST parsing using tree-sitter

pub mod functions;
pub mod node;
pub mod python;

pub use functions::FunctionExtractor;
pub use node::SyntaxNode;
pub use python::{ParsedSource, PythonNode, PythonParser};
