use crate::artifacts::diff::change_type::ChangeType;
use crate::artifacts::hash::content_hash::ContentHash;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub type CategorySet = BTreeSet<ContentHash>;

/// Distinct hashes grouped by change category
///
/// All three sets are always present. Together they partition the distinct
/// hashes of both compared collections.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, new)]
pub struct ChangeSet {
    pub(crate) added: CategorySet,
    pub(crate) removed: CategorySet,
    pub(crate) unchanged: CategorySet,
}

impl ChangeSet {
    pub fn added(&self) -> &CategorySet {
        &self.added
    }

    pub fn removed(&self) -> &CategorySet {
        &self.removed
    }

    pub fn unchanged(&self) -> &CategorySet {
        &self.unchanged
    }

    pub fn get(&self, change: ChangeType) -> &CategorySet {
        match change {
            ChangeType::Added => &self.added,
            ChangeType::Removed => &self.removed,
            ChangeType::Unchanged => &self.unchanged,
        }
    }

    /// Category of a hash, if it appeared in either collection
    pub fn classify(&self, hash: &ContentHash) -> Option<ChangeType> {
        ChangeType::DISPLAY_ORDER
            .into_iter()
            .find(|change| self.get(*change).contains(hash))
    }

    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }

    /// Number of distinct hashes across all categories
    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len() + self.unchanged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn summary(&self) -> Summary {
        Summary::new(self.added.len(), self.removed.len(), self.unchanged.len())
    }
}

/// Per-category hash counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, new)]
pub struct Summary {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} added, {} removed, {} unchanged",
            self.added, self.removed, self.unchanged
        )
    }
}
