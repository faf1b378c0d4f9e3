use colored::Colorize;
use serde::{Deserialize, Serialize};

const LABEL_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Added,
    Removed,
    Unchanged,
}

impl ChangeType {
    /// Order in which categories are listed when flattened
    pub const DISPLAY_ORDER: [ChangeType; 3] =
        [ChangeType::Added, ChangeType::Unchanged, ChangeType::Removed];

    /// Order in which categories are reported as sections
    pub const REPORT_ORDER: [ChangeType; 3] =
        [ChangeType::Added, ChangeType::Removed, ChangeType::Unchanged];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Added => "added",
            ChangeType::Removed => "removed",
            ChangeType::Unchanged => "unchanged",
        }
    }

    pub fn status_char(&self) -> char {
        match self {
            ChangeType::Added => 'A',
            ChangeType::Removed => 'R',
            ChangeType::Unchanged => ' ',
        }
    }

    pub fn section_title(&self) -> &'static str {
        match self {
            ChangeType::Added => "Added hashes:",
            ChangeType::Removed => "Removed hashes:",
            ChangeType::Unchanged => "Unchanged hashes:",
        }
    }
}

impl From<&ChangeType> for &str {
    fn from(change: &ChangeType) -> Self {
        match change {
            ChangeType::Added => "added:      ",
            ChangeType::Removed => "removed:    ",
            ChangeType::Unchanged => "unchanged:  ",
        }
    }
}

impl TryFrom<&str> for ChangeType {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        match value {
            "added" => Ok(ChangeType::Added),
            "removed" => Ok(ChangeType::Removed),
            "unchanged" => Ok(ChangeType::Unchanged),
            _ => Err(anyhow::anyhow!("Invalid change type: {}", value)),
        }
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        let colored_str = match self {
            ChangeType::Added => label.green(),
            ChangeType::Removed => label.red(),
            ChangeType::Unchanged => label.normal(),
        };
        write!(f, "{:>width$}{}", "", colored_str, width = LABEL_WIDTH)
    }
}
