// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared record types used across extraction, caching and ranking.

use serde::{Deserialize, Serialize};

/// One discovered function definition.
///
/// Records are built once by the extractor and never mutated afterwards, so
/// the fields are only readable through accessors. The serialized field order
/// (`name`, `args`, `filename`, `line`) is the cache document layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    name: String,
    args: Vec<String>,
    filename: String,
    line: usize,
}

impl FunctionRecord {
    pub fn new(
        name: impl Into<String>,
        args: Vec<String>,
        filename: impl Into<String>,
        line: usize,
    ) -> Self {
        Self {
            name: name.into(),
            args,
            filename: filename.into(),
            line,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter names in declaration order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// 1-based line of the `def`.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Render `name(arg1, arg2)`, optionally prefixed with `filename:line `.
    ///
    /// The plain form feeds the normalizer; the origin form is for display only.
    pub fn render_signature(&self, include_origin: bool) -> String {
        let signature = format!("{}({})", self.name, self.args.join(", "));
        if include_origin {
            format!("{}:{} {}", self.filename, self.line, signature)
        } else {
            signature
        }
    }
}

/// A record paired with its edit distance to the query. Lower is closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedResult<'a> {
    pub score: usize,
    pub record: &'a FunctionRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, args: &[&str]) -> FunctionRecord {
        FunctionRecord::new(
            name,
            args.iter().map(|a| a.to_string()).collect(),
            "./stdlib/zipfile.py",
            212,
        )
    }

    #[test]
    fn render_signature_without_origin() {
        let rec = record("is_zipfile", &["filename"]);
        assert_eq!(rec.render_signature(false), "is_zipfile(filename)");
    }

    #[test]
    fn render_signature_with_origin() {
        let rec = record("main", &["self", "argv"]);
        assert_eq!(
            rec.render_signature(true),
            "./stdlib/zipfile.py:212 main(self, argv)"
        );
    }

    #[test]
    fn render_signature_no_args() {
        assert_eq!(record("mainloop", &[]).render_signature(false), "mainloop()");
    }

    #[test]
    fn serialized_field_order_is_stable() {
        let json = serde_json::to_string(&record("f", &["a"])).unwrap();
        assert_eq!(
            json,
            r#"{"name":"f","args":["a"],"filename":"./stdlib/zipfile.py","line":212}"#
        );
    }
}
