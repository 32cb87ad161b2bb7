// SPDX-License-Identifier: MIT OR Apache-2.0

//! fnfind - Fuzzy function search library
//!
//! Two stages: extract function signatures from Python sources into a
//! cached flat list ([`indexer`]), then rank them against a query by edit
//! distance between normalized signatures ([`query`]).

pub mod config;
pub mod errors;
pub mod indexer;
pub mod logging;
pub mod models;
pub mod output;
pub mod parser;
pub mod query;
pub mod signature;

pub use errors::{Error, Result};
pub use models::{FunctionRecord, RankedResult};
