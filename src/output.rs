// SPDX-License-Identifier: MIT OR Apache-2.0

//! Presentation of ranked results

use colored::Colorize;
use serde::Serialize;

use crate::models::RankedResult;

/// One ranked function as emitted by `--format json`.
#[derive(Debug, Serialize)]
pub struct RankedEntry<'a> {
    pub score: usize,
    pub name: &'a str,
    pub args: &'a [String],
    pub filename: &'a str,
    pub line: usize,
    pub signature: String,
}

impl<'a> From<&RankedResult<'a>> for RankedEntry<'a> {
    fn from(result: &RankedResult<'a>) -> Self {
        let record = result.record;
        Self {
            score: result.score,
            name: record.name(),
            args: record.args(),
            filename: record.filename(),
            line: record.line(),
            signature: record.render_signature(false),
        }
    }
}

/// Print any serializable value as JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> serde_json::Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}

/// `filename:line name(args)`, optionally preceded by the score.
pub fn format_text_line(result: &RankedResult<'_>, show_score: bool) -> String {
    let rendered = result.record.render_signature(true);
    if show_score {
        format!("{} {}", format!("[{:>3}]", result.score).yellow(), rendered)
    } else {
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FunctionRecord;

    fn record() -> FunctionRecord {
        FunctionRecord::new("mainloop", vec!["n".into()], "./tkinter/__init__.py", 1420)
    }

    #[test]
    fn test_text_line_is_origin_rendering() {
        let rec = record();
        let result = RankedResult {
            score: 4,
            record: &rec,
        };
        assert_eq!(
            format_text_line(&result, false),
            "./tkinter/__init__.py:1420 mainloop(n)"
        );
        let scored = format_text_line(&result, true);
        assert!(scored.contains("4]"));
        assert!(scored.ends_with("./tkinter/__init__.py:1420 mainloop(n)"));
    }

    #[test]
    fn test_json_entry() {
        let rec = record();
        let result = RankedResult {
            score: 2,
            record: &rec,
        };
        let value = serde_json::to_value(RankedEntry::from(&result)).unwrap();
        assert_eq!(value["score"], 2);
        assert_eq!(value["name"], "mainloop");
        assert_eq!(value["args"][0], "n");
        assert_eq!(value["line"], 1420);
        assert_eq!(value["signature"], "mainloop(n)");
    }
}
