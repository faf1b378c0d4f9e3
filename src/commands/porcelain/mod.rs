//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `compare`: Report which hashes were added, removed or kept

pub mod compare;
