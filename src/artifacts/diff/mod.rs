//! Hash collection diffing
//!
//! This module classifies the hashes of two collections and reshapes the
//! result for display:
//!
//! - `hash_diff`: Set difference of two hash collections (the differ)
//! - `change_set`: The three category sets and their summary
//! - `flatten`: One labeled record per hash (the flattener)
//! - `change_type`: Category enum and its labels
//! - `change_filter`: Category selection for output
//! - `classified_hash`: The output record

pub mod change_filter;
pub mod change_set;
pub mod change_type;
pub mod classified_hash;
pub mod flatten;
pub mod hash_diff;
