use crate::artifacts::diff::change_set::{CategorySet, ChangeSet};
use crate::artifacts::hash::content_hash::ContentHash;

/// Classify every distinct hash of two collections
///
/// Membership alone decides the category: order, length and repetition
/// within either collection have no effect on the result.
///
/// - added: only in `new`
/// - removed: only in `old`
/// - unchanged: in both
pub fn compare<O, N>(old: O, new: N) -> ChangeSet
where
    O: IntoIterator,
    O::Item: Into<ContentHash>,
    N: IntoIterator,
    N::Item: Into<ContentHash>,
{
    let old = old.into_iter().map(Into::into).collect::<CategorySet>();
    let mut added = new.into_iter().map(Into::into).collect::<CategorySet>();

    let mut removed = CategorySet::new();
    let mut unchanged = CategorySet::new();

    // whatever is left in `added` afterwards was never seen in `old`
    for hash in old {
        if added.remove(&hash) {
            unchanged.insert(hash);
        } else {
            removed.insert(hash);
        }
    }

    tracing::debug!(
        added = added.len(),
        removed = removed.len(),
        unchanged = unchanged.len(),
        "compared hash collections"
    );

    ChangeSet::new(added, removed, unchanged)
}
