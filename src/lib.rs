//! Content hash comparison
//!
//! Classifies the hashes of two file-state snapshots as added, removed or
//! unchanged, and flattens the classification into display records.
//!
//! ```
//! use hashdiff::artifacts::diff::flatten::flatten;
//! use hashdiff::artifacts::diff::hash_diff::compare;
//!
//! let change_set = compare(["h1", "h2"], ["h1", "h3"]);
//! assert_eq!(flatten(&change_set).len(), 3);
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;
