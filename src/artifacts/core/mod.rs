//! Core utilities and shared types
//!
//! This module contains shared utilities used across the application.
//!
//! - `logging`: Diagnostic output on stderr

pub mod logging;
