//! Reconciliation of a page's local entity list with confirmed server results.
//!
//! Each function is applied only after the API reported success, so the list
//! never shows a row that failed to persist.

use contracts::domain::common::AggregateRoot;

/// Append a freshly created entity (replaces a row with the same id if present)
pub fn insert<R: AggregateRoot>(list: &mut Vec<R>, created: R) {
    match list.iter_mut().find(|item| item.id() == created.id()) {
        Some(existing) => *existing = created,
        None => list.push(created),
    }
}

/// Replace the row with the updated entity's id; returns whether one was found
pub fn replace<R: AggregateRoot>(list: &mut [R], updated: R) -> bool {
    match list.iter_mut().find(|item| item.id() == updated.id()) {
        Some(existing) => {
            *existing = updated;
            true
        }
        None => false,
    }
}

/// Remove exactly the row(s) with `id`
pub fn remove<R: AggregateRoot>(list: &mut Vec<R>, id: R::Id) {
    list.retain(|item| item.id() != id);
}

/// Apply the result of a create or update submission
pub fn apply_saved<R: AggregateRoot>(list: &mut Vec<R>, saved: R, was_update: bool) {
    if was_update && replace(list, saved.clone()) {
        return;
    }
    insert(list, saved);
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product_category::aggregate::ProductCategory;
    use pretty_assertions::assert_eq;

    fn category(id: i64, name: &str) -> ProductCategory {
        ProductCategory {
            id,
            name: name.into(),
            description: String::new(),
            status: "ACTIVE".into(),
        }
    }

    fn ids(list: &[ProductCategory]) -> Vec<i64> {
        list.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_remove_drops_only_that_id() {
        let mut list = vec![category(1, "a"), category(7, "b"), category(9, "c")];
        remove(&mut list, 7);
        assert_eq!(ids(&list), vec![1, 9]);

        remove(&mut list, 42);
        assert_eq!(ids(&list), vec![1, 9]);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut list = vec![category(1, "a"), category(2, "b")];
        apply_saved(&mut list, category(2, "nuevo"), true);
        assert_eq!(ids(&list), vec![1, 2]);
        assert_eq!(list[1].name, "nuevo");
    }

    #[test]
    fn test_create_appends() {
        let mut list = vec![category(1, "a")];
        apply_saved(&mut list, category(3, "c"), false);
        assert_eq!(ids(&list), vec![1, 3]);
    }

    #[test]
    fn test_update_of_missing_row_is_appended() {
        let mut list = vec![category(1, "a")];
        apply_saved(&mut list, category(5, "e"), true);
        assert_eq!(ids(&list), vec![1, 5]);
    }
}
