use crate::artifacts::hash::content_hash::ContentHash;
use anyhow::Context;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Marker used on the command line to read a hash list from stdin
pub const STDIN_MARKER: &str = "-";

/// Where a hash list is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashListSource {
    Stdin,
    File(PathBuf),
}

impl HashListSource {
    pub fn is_stdin(&self) -> bool {
        matches!(self, HashListSource::Stdin)
    }
}

impl From<&str> for HashListSource {
    fn from(value: &str) -> Self {
        match value {
            STDIN_MARKER => HashListSource::Stdin,
            path => HashListSource::File(PathBuf::from(path)),
        }
    }
}

impl From<&Path> for HashListSource {
    fn from(path: &Path) -> Self {
        match path.to_str() {
            Some(STDIN_MARKER) => HashListSource::Stdin,
            _ => HashListSource::File(path.to_path_buf()),
        }
    }
}

impl std::fmt::Display for HashListSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashListSource::Stdin => write!(f, "<stdin>"),
            HashListSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Ordered collection of hashes, duplicates kept as given
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HashList {
    hashes: Vec<ContentHash>,
}

impl HashList {
    /// Parse a newline separated hash list
    ///
    /// Each line is trimmed and blank lines are skipped. Every other line is
    /// taken verbatim as one hash.
    pub fn parse(text: &str) -> Self {
        let hashes = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ContentHash::from)
            .collect();

        HashList { hashes }
    }

    pub fn read(source: &HashListSource) -> anyhow::Result<Self> {
        let text = match source {
            HashListSource::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Unable to read hash list from stdin")?;
                text
            }
            HashListSource::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Unable to read hash list {}", path.display()))?,
        };

        let list = Self::parse(&text);
        tracing::debug!(%source, hashes = list.len(), "read hash list");

        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentHash> {
        self.hashes.iter()
    }

    pub fn into_hashes(self) -> Vec<ContentHash> {
        self.hashes
    }
}

impl<H: Into<ContentHash>> FromIterator<H> for HashList {
    fn from_iter<I: IntoIterator<Item = H>>(iter: I) -> Self {
        HashList {
            hashes: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for HashList {
    type Item = ContentHash;
    type IntoIter = std::vec::IntoIter<ContentHash>;

    fn into_iter(self) -> Self::IntoIter {
        self.hashes.into_iter()
    }
}

impl<'a> IntoIterator for &'a HashList {
    type Item = &'a ContentHash;
    type IntoIter = std::slice::Iter<'a, ContentHash>;

    fn into_iter(self) -> Self::IntoIter {
        self.hashes.iter()
    }
}
