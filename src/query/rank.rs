// SPDX-License-Identifier: MIT OR Apache-2.0

//! Edit-distance ranking of normalized signatures.

use crate::errors::Result;
use crate::models::{FunctionRecord, RankedResult};
use crate::signature::normalize;

/// Unweighted Levenshtein distance over characters.
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Score every record against `query` and sort closest first.
///
/// Equal scores keep their input order, so the result is fully determined by
/// the query and the order of `records`.
pub fn rank<'a>(query: &str, records: &'a [FunctionRecord]) -> Result<Vec<RankedResult<'a>>> {
    let query = normalize(query)?;

    let mut ranked = records
        .iter()
        .map(|record| {
            let signature = normalize(&record.render_signature(false))?;
            Ok(RankedResult {
                score: edit_distance(&query, &signature),
                record,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    ranked.sort_by_key(|result| result.score);
    Ok(ranked)
}
