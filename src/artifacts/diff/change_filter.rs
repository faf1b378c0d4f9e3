use crate::artifacts::diff::change_type::ChangeType;
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ChangeFilter: u32 {
        const ADDED = 0b0001;
        const REMOVED = 0b0010;
        const UNCHANGED = 0b0100;
    }
}

impl ChangeFilter {
    /// Only the categories that represent a change
    pub const CHANGES: ChangeFilter = ChangeFilter::ADDED.union(ChangeFilter::REMOVED);

    pub fn try_parse(s: &str) -> Option<Self> {
        let mut filter = Self::empty();

        for c in s.chars() {
            match c {
                'A' => filter |= Self::ADDED,
                'R' => filter |= Self::REMOVED,
                'U' => filter |= Self::UNCHANGED,
                _ => return None,
            }
        }

        Some(filter)
    }

    pub fn matches(&self, change: ChangeType) -> bool {
        self.contains(ChangeFilter::from(change))
    }
}

impl Default for ChangeFilter {
    fn default() -> Self {
        ChangeFilter::all()
    }
}

impl From<ChangeType> for ChangeFilter {
    fn from(change: ChangeType) -> Self {
        match change {
            ChangeType::Added => ChangeFilter::ADDED,
            ChangeType::Removed => ChangeFilter::REMOVED,
            ChangeType::Unchanged => ChangeFilter::UNCHANGED,
        }
    }
}

impl TryFrom<&str> for ChangeFilter {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        Self::try_parse(value).ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid change filter {:?}, expected letters from A, R, U",
                value
            )
        })
    }
}
