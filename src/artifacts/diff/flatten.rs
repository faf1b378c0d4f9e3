use crate::artifacts::diff::change_filter::ChangeFilter;
use crate::artifacts::diff::change_set::ChangeSet;
use crate::artifacts::diff::change_type::ChangeType;
use crate::artifacts::diff::classified_hash::ClassifiedHash;

/// Flatten a change set into one record per hash
///
/// Categories come out in [`ChangeType::DISPLAY_ORDER`], hashes within a
/// category in ascending order. Empty categories contribute nothing.
pub fn flatten(change_set: &ChangeSet) -> Vec<ClassifiedHash> {
    flatten_filtered(change_set, ChangeFilter::all())
}

/// Same as [`flatten`], keeping only the categories selected by `filter`
pub fn flatten_filtered(change_set: &ChangeSet, filter: ChangeFilter) -> Vec<ClassifiedHash> {
    ChangeType::DISPLAY_ORDER
        .into_iter()
        .filter(|change| filter.matches(*change))
        .flat_map(|change| {
            change_set
                .get(change)
                .iter()
                .map(move |hash| ClassifiedHash::new(hash.clone(), change))
        })
        .collect()
}
