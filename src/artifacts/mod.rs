//! Hash comparison data structures and algorithms
//!
//! - `core`: Shared utilities (logging)
//! - `diff`: Classification of two hash collections and flattening
//! - `hash`: Content hashes, hash lists and sample generation

pub mod core;
pub mod diff;
pub mod hash;
