use crate::artifacts::diff::change_type::ChangeType;
use crate::artifacts::hash::content_hash::ContentHash;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A hash together with its change category
///
/// Serialised as `{"hash": "...", "change_type": "added"}`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, new)]
pub struct ClassifiedHash {
    pub hash: ContentHash,
    pub change_type: ChangeType,
}

impl ClassifiedHash {
    /// Short status line, e.g. `A 813c9c63...`
    pub fn to_short_line(&self) -> String {
        format!("{} {}", self.change_type.status_char(), self.hash)
    }
}

impl std::fmt::Display for ClassifiedHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.change_type, self.hash)
    }
}
