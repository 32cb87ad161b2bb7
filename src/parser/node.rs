// SPDX-License-Identifier: MIT OR Apache-2.0

//! Language-neutral view of a syntax tree node.

/// The capabilities the function extractor needs from a parsed tree.
///
/// Implemented once per parsing backend so extraction never inspects
/// backend-specific node kinds directly.
pub trait SyntaxNode: Sized {
    /// True when this node is a function (or method) definition.
    fn is_function_definition(&self) -> bool;

    /// Declared name, when the node has one.
    fn name(&self) -> Option<String>;

    /// Plain positional parameter names in declaration order.
    fn args(&self) -> Vec<String>;

    /// 1-based line where the node starts.
    fn line(&self) -> usize;

    /// Direct children that may contain further definitions.
    fn children(&self) -> Vec<Self>;
}
