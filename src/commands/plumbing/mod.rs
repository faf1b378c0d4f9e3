//! Plumbing commands (machine-oriented operations)
//!
//! ## Commands
//!
//! - `classify`: Emit the flattened records as JSON
//! - `generate`: Produce a random hash list

pub mod classify;
pub mod generate;
