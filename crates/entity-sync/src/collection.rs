//! Shared-Collection Merge
//!
//! Identity comparison and the de-duplicating merge used to keep the
//! currently selected relation visible in option lists.

use std::collections::HashSet;

use crate::entity::{EntityId, Identified};

/// Two absent values are equal; otherwise equality is by identifier
pub fn compare<I: Identified>(a: Option<&I>, b: Option<&I>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.identifier() == b.identifier(),
        _ => false,
    }
}

/// Prepends candidates whose identifier is not yet in `collection`.
///
/// `None` candidates are skipped and duplicates among candidates keep their
/// first occurrence. When nothing is novel the input vector comes back
/// untouched.
pub fn add_to_collection_if_missing<I, C>(mut collection: Vec<I>, candidates: C) -> Vec<I>
where
    I: Identified,
    C: IntoIterator<Item = Option<I>>,
{
    let mut seen: HashSet<EntityId> = collection.iter().map(Identified::identifier).collect();
    let novel: Vec<I> = candidates
        .into_iter()
        .flatten()
        .filter(|candidate| seen.insert(candidate.identifier()))
        .collect();

    if novel.is_empty() {
        return collection;
    }
    collection.splice(0..0, novel);
    collection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Persisted;
    use crate::test_support::{chore, household, Chore};

    #[test]
    fn test_compare_by_identifier() {
        let a = household(1, "Silva");
        let renamed = household(1, "Souza");
        let other = household(2, "Silva");
        assert!(compare(Some(&a), Some(&renamed)));
        assert!(!compare(Some(&a), Some(&other)));
        assert!(!compare(Some(&other), Some(&a)));
    }

    #[test]
    fn test_compare_absent_values() {
        let a = household(1, "Silva");
        assert!(compare::<Persisted<Chore>>(None, None));
        assert!(!compare(Some(&a), None));
        assert!(!compare(None, Some(&a)));
    }

    #[test]
    fn test_add_to_empty_collection() {
        let merged = add_to_collection_if_missing(Vec::new(), [Some(chore(1, "a", 1))]);
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn test_duplicate_leaves_collection_unchanged() {
        let base = vec![chore(1, "a", 1), chore(2, "b", 1)];
        let merged = add_to_collection_if_missing(base.clone(), [Some(chore(2, "renamed", 9))]);
        assert_eq!(merged, base);
    }

    #[test]
    fn test_only_absent_candidates_return_same_allocation() {
        let base = vec![chore(1, "a", 1)];
        let ptr = base.as_ptr();
        let merged = add_to_collection_if_missing(base, [None, None]);
        assert_eq!(merged.as_ptr(), ptr);
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn test_novel_candidates_are_prepended_in_order() {
        let base = vec![chore(1, "a", 1), chore(2, "b", 1)];
        let merged = add_to_collection_if_missing(
            base,
            [
                Some(chore(5, "e", 1)),
                None,
                Some(chore(3, "c", 1)),
                Some(chore(5, "dup", 1)),
                Some(chore(1, "a", 1)),
            ],
        );
        let ids: Vec<_> = merged.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![5, 3, 1, 2]);
        assert_eq!(merged[0].title.as_deref(), Some("e"));
    }
}
