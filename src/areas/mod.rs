//! Execution areas
//!
//! - `session`: Output sink and input loading shared by all commands

pub mod session;
