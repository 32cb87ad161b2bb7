// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canonical signature form shared by indexed functions and user queries.
//!
//! Both sides of a comparison go through [`normalize`], which produces
//! `name ( arg1, arg2 )`: words of the name joined with `_`, a single space
//! around the parentheses and `", "` between arguments. An argument portion
//! that is empty or all whitespace renders as zero arguments, `name (  )`.

use crate::errors::{Error, Result};

/// Normalize a raw signature such as `is  zipfile ( filename)`.
pub fn normalize(raw: &str) -> Result<String> {
    let Some((name_part, args_part)) = raw.split_once('(') else {
        return Err(Error::MalformedSignature {
            input: raw.to_string(),
        });
    };

    let name = name_part.split_whitespace().collect::<Vec<_>>().join("_");

    let args_part = args_part.trim_end();
    let args_part = args_part.strip_suffix(')').unwrap_or(args_part);
    let args = if args_part.trim().is_empty() {
        String::new()
    } else {
        args_part
            .split(',')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(", ")
    };

    Ok(format!("{name} ( {args} )"))
}
