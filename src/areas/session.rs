use crate::artifacts::diff::change_set::ChangeSet;
use crate::artifacts::diff::classified_hash::ClassifiedHash;
use crate::artifacts::diff::hash_diff::compare;
use crate::artifacts::hash::hash_list::{HashList, HashListSource};
use std::cell::{RefCell, RefMut};
use std::io::Write;

/// Command execution context
///
/// Owns the output sink every command writes to. Stdout in the binary, an
/// in-memory buffer in tests.
pub struct Session {
    writer: RefCell<Box<dyn Write>>,
}

impl Session {
    pub fn new(writer: Box<dyn Write>) -> Self {
        Session {
            writer: RefCell::new(writer),
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    /// Read both hash lists and classify their hashes
    pub fn load_change_set(
        &self,
        old: &HashListSource,
        new: &HashListSource,
    ) -> anyhow::Result<ChangeSet> {
        if old.is_stdin() && new.is_stdin() {
            anyhow::bail!("Only one of the hash lists can be read from stdin");
        }

        let old_hashes = HashList::read(old)?;
        let new_hashes = HashList::read(new)?;

        tracing::info!(
            old = %old,
            new = %new,
            old_hashes = old_hashes.len(),
            new_hashes = new_hashes.len(),
            "comparing hash lists"
        );

        Ok(compare(old_hashes, new_hashes))
    }

    /// Write records as a pretty JSON array, or one compact object per line
    pub fn write_records(&self, records: &[ClassifiedHash], lines: bool) -> anyhow::Result<()> {
        let mut writer = self.writer();

        if lines {
            for record in records {
                serde_json::to_writer(&mut *writer, record)?;
                writeln!(writer)?;
            }
        } else {
            serde_json::to_writer_pretty(&mut *writer, records)?;
            writeln!(writer)?;
        }

        writer.flush()?;

        Ok(())
    }
}
