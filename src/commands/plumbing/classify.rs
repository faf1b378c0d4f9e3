use crate::areas::session::Session;
use crate::artifacts::diff::change_filter::ChangeFilter;
use crate::artifacts::diff::flatten::flatten_filtered;
use crate::artifacts::hash::hash_list::HashListSource;

impl Session {
    pub fn classify(
        &self,
        old: &HashListSource,
        new: &HashListSource,
        filter: ChangeFilter,
        lines: bool,
    ) -> anyhow::Result<()> {
        let change_set = self.load_change_set(old, new)?;
        let records = flatten_filtered(&change_set, filter);

        self.write_records(&records, lines)
    }
}
