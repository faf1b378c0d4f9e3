//! Command implementations
//!
//! Commands are split the way git splits them:
//!
//! - `plumbing`: Machine-oriented commands (classify, generate)
//! - `porcelain`: Human-oriented reports (compare)
//!
//! Every command is an inherent method on `Session` and writes only to the
//! session's writer.

pub mod plumbing;
pub mod porcelain;
