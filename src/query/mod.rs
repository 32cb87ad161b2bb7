// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query module - ranking indexed functions against a free-text signature

pub mod rank;

pub use rank::{edit_distance, rank};
