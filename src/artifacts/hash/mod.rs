//! Content hashes and hash lists
//!
//! - `content_hash`: Opaque hash token with exact string identity
//! - `hash_list`: Ordered input collections and where they are read from
//! - `generator`: Random sample hash lists

pub mod content_hash;
pub mod generator;
pub mod hash_list;
