//! Category persistence boundary and its in-memory implementation.
//!
//! # Design
//! `ResourceStore` is the whole contract the dispatcher needs from
//! persistence. Mutations check existence first and report the outcome as
//! a `bool` so callers can map it straight to a status code. Any backing
//! store must keep ids unique.
//!
//! The existence check and the mutation are two steps. Hosts that share a
//! store across requests must hold one lock around each call.

use tracing::info;

use crate::types::{Category, UpdateCategory};

/// CRUD over categories keyed by integer id.
pub trait ResourceStore {
    /// Snapshot of every category in insertion order.
    fn list(&self) -> Vec<Category>;

    fn get(&self, id: i64) -> Option<Category>;

    /// Adds `category`. Returns `false` without mutating if its id exists.
    fn create(&mut self, category: Category) -> bool;

    /// Applies `changes` in place. Returns `false` if `id` is absent.
    fn update(&mut self, id: i64, changes: UpdateCategory) -> bool;

    /// Removes the category. Returns `false` if `id` is absent.
    fn delete(&mut self, id: i64) -> bool;

    /// Number of stored categories.
    fn count(&self) -> usize {
        self.list().len()
    }

    /// One page of `list()`. Pages start at 1; page 0, a zero page size
    /// or an offset past the end yield an empty page.
    fn page(&self, page: usize, page_size: usize) -> Vec<Category> {
        let Some(offset) = page_offset(page, page_size) else {
            return Vec::new();
        };
        self.list().into_iter().skip(offset).take(page_size).collect()
    }

    /// Id for a create that did not name one: `max(id) + 1`, or `1`.
    /// `None` once the largest id is `i64::MAX`.
    fn next_id(&self) -> Option<i64> {
        match self.list().iter().map(|c| c.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }
}

/// Items skipped before `page`, or `None` when the page is empty by definition.
fn page_offset(page: usize, page_size: usize) -> Option<usize> {
    if page == 0 || page_size == 0 {
        return None;
    }
    (page - 1).checked_mul(page_size)
}

/// `Vec`-backed store. Lookups are linear scans.
#[derive(Debug, Clone, Default)]
pub struct CategoryStore {
    categories: Vec<Category>,
}

impl CategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the three starter categories.
    pub fn seeded() -> Self {
        Self {
            categories: vec![
                Category::new(1, "Beverage"),
                Category::new(2, "Condiments"),
                Category::new(3, "Confections"),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.categories.iter().position(|c| c.id == id)
    }
}

impl ResourceStore for CategoryStore {
    fn list(&self) -> Vec<Category> {
        self.categories.clone()
    }

    fn get(&self, id: i64) -> Option<Category> {
        self.categories.iter().find(|c| c.id == id).cloned()
    }

    fn create(&mut self, category: Category) -> bool {
        if self.position(category.id).is_some() {
            return false;
        }
        info!(id = category.id, name = %category.name, "category created");
        self.categories.push(category);
        true
    }

    fn update(&mut self, id: i64, changes: UpdateCategory) -> bool {
        let Some(category) = self.categories.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        changes.apply(category);
        info!(id, "category updated");
        true
    }

    fn delete(&mut self, id: i64) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.categories.remove(index);
        info!(id, "category deleted");
        true
    }

    fn count(&self) -> usize {
        self.categories.len()
    }

    fn page(&self, page: usize, page_size: usize) -> Vec<Category> {
        let Some(offset) = page_offset(page, page_size) else {
            return Vec::new();
        };
        self.categories
            .iter()
            .skip(offset)
            .take(page_size)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_create_is_rejected_without_mutation() {
        let mut store = CategoryStore::new();
        assert!(store.create(Category::new(1, "Beverage")));
        assert!(!store.create(Category::new(1, "X")));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).unwrap().name, "Beverage");
    }

    #[test]
    fn missing_ids_fail_update_and_delete() {
        let mut store = CategoryStore::new();
        assert!(!store.update(99, UpdateCategory::rename("X")));
        assert!(!store.delete(99));
        assert!(store.is_empty());
    }

    #[test]
    fn created_category_can_be_read_back() {
        let mut store = CategoryStore::new();
        assert!(store.create(Category::new(7, "Snacks")));
        let fetched = store.get(7).unwrap();
        assert_eq!(fetched.id, 7);
        assert_eq!(fetched.name, "Snacks");
    }

    #[test]
    fn update_renames_in_place() {
        let mut store = CategoryStore::seeded();
        assert!(store.update(2, UpdateCategory::rename("Sauces")));
        assert_eq!(store.get(2).unwrap().name, "Sauces");
        assert_eq!(store.list()[1].id, 2);
    }

    #[test]
    fn delete_removes_only_that_id() {
        let mut store = CategoryStore::seeded();
        assert!(store.delete(2));
        assert!(store.get(2).is_none());
        let ids: Vec<i64> = store.list().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(!store.delete(2));
    }

    #[test]
    fn list_keeps_insertion_order() {
        let mut store = CategoryStore::new();
        store.create(Category::new(5, "E"));
        store.create(Category::new(2, "B"));
        store.create(Category::new(9, "I"));
        let ids: Vec<i64> = store.list().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn next_id_follows_the_largest_id() {
        let mut store = CategoryStore::new();
        assert_eq!(store.next_id(), Some(1));
        store.create(Category::new(10, "J"));
        store.create(Category::new(4, "D"));
        assert_eq!(store.next_id(), Some(11));
    }

    #[test]
    fn next_id_is_none_after_max_id() {
        let mut store = CategoryStore::new();
        store.create(Category::new(i64::MAX, "Last"));
        assert_eq!(store.next_id(), None);
    }

    #[test]
    fn count_tracks_mutations() {
        let mut store = CategoryStore::seeded();
        assert_eq!(store.count(), 3);
        store.create(Category::new(4, "D"));
        store.delete(1);
        assert_eq!(store.count(), 3);
        assert_eq!(CategoryStore::new().count(), 0);
    }

    fn ids(categories: &[Category]) -> Vec<i64> {
        categories.iter().map(|c| c.id).collect()
    }

    #[test]
    fn pages_split_the_listing() {
        let mut store = CategoryStore::seeded();
        store.create(Category::new(4, "D"));
        store.create(Category::new(5, "E"));

        assert_eq!(ids(&store.page(1, 2)), vec![1, 2]);
        assert_eq!(ids(&store.page(2, 2)), vec![3, 4]);
        assert_eq!(ids(&store.page(3, 2)), vec![5]);
        assert!(store.page(4, 2).is_empty());
        assert_eq!(ids(&store.page(1, 10)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn degenerate_pages_are_empty() {
        let store = CategoryStore::seeded();
        assert!(store.page(0, 2).is_empty());
        assert!(store.page(1, 0).is_empty());
        assert!(store.page(usize::MAX, usize::MAX).is_empty());
        assert_eq!(ids(&store.page(1, usize::MAX)), vec![1, 2, 3]);
    }

    struct ListOnly(Vec<Category>);

    impl ResourceStore for ListOnly {
        fn list(&self) -> Vec<Category> {
            self.0.clone()
        }
        fn get(&self, _id: i64) -> Option<Category> {
            None
        }
        fn create(&mut self, _category: Category) -> bool {
            false
        }
        fn update(&mut self, _id: i64, _changes: UpdateCategory) -> bool {
            false
        }
        fn delete(&mut self, _id: i64) -> bool {
            false
        }
    }

    #[test]
    fn default_methods_derive_from_list() {
        let store = ListOnly(vec![Category::new(2, "B"), Category::new(8, "H"), Category::new(5, "E")]);
        assert_eq!(store.count(), 3);
        assert_eq!(ids(&store.page(2, 2)), vec![5]);
        assert!(store.page(0, 1).is_empty());
        assert_eq!(store.next_id(), Some(9));

        let full = ListOnly(vec![Category::new(i64::MAX, "Z")]);
        assert_eq!(full.next_id(), None);
    }

    #[test]
    fn seeded_store_has_starter_categories() {
        let store = CategoryStore::seeded();
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(1).unwrap().name, "Beverage");
        assert_eq!(store.get(3).unwrap().name, "Confections");
    }
}
