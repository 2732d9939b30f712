use super::BookStore;
use crate::error::{LibrisError, Result};
use crate::model::Book;
use std::collections::HashMap;

/// In-memory catalog.
///
/// The map and the order vector always hold the same set of ids. Removing an id
/// from `order` is a linear scan, which is fine for catalogs of a few thousand
/// books; past that this wants an ordered map.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    books: HashMap<i64, Book>,
    order: Vec<i64>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl BookStore for InMemoryStore {
    fn add(&mut self, book: Book) -> Result<()> {
        let id = book.id();
        if self.books.contains_key(&id) {
            return Err(LibrisError::Duplicate(id));
        }
        self.books.insert(id, book);
        self.order.push(id);
        Ok(())
    }

    fn update(&mut self, book: Book) -> Result<()> {
        match self.books.get_mut(&book.id()) {
            Some(slot) => {
                *slot = book;
                Ok(())
            }
            None => Err(LibrisError::NotFound(book.id())),
        }
    }

    fn delete(&mut self, id: i64) -> Result<()> {
        if self.books.remove(&id).is_none() {
            return Err(LibrisError::NotFound(id));
        }
        if let Some(pos) = self.order.iter().position(|&o| o == id) {
            self.order.remove(pos);
        }
        Ok(())
    }

    fn find_by_id(&self, id: i64) -> Result<Book> {
        self.books
            .get(&id)
            .cloned()
            .ok_or(LibrisError::NotFound(id))
    }

    fn list(&self) -> Vec<Book> {
        self.order
            .iter()
            .filter_map(|id| self.books.get(id))
            .cloned()
            .collect()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds books with ids `1..=count`.
        pub fn with_books(mut self, count: i64) -> Self {
            for i in 1..=count {
                let book = Book::new(i, format!("Book {}", i), format!("Author {}", i), 2000 + i)
                    .unwrap();
                self.store.add(book).unwrap();
            }
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    fn book(id: i64, title: &str) -> Book {
        Book::new(id, title, "Author", 2000).unwrap()
    }

    fn ids(store: &InMemoryStore) -> Vec<i64> {
        store.list().iter().map(|b| b.id()).collect()
    }

    #[test]
    fn starts_empty() {
        let store = InMemoryStore::new();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn add_then_find() {
        let mut store = InMemoryStore::new();
        store.add(book(5, "Five")).unwrap();

        let found = store.find_by_id(5).unwrap();
        assert_eq!(found.title(), "Five");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_add_keeps_first_record() {
        let mut store = InMemoryStore::new();
        store.add(book(5, "First")).unwrap();

        let err = store.add(book(5, "Second")).unwrap_err();
        assert!(matches!(err, LibrisError::Duplicate(5)));

        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_id(5).unwrap().title(), "First");
        assert_eq!(ids(&store), vec![5]);
    }

    #[test]
    fn find_after_delete_is_not_found() {
        let mut store = InMemoryStore::new();
        store.add(book(5, "Five")).unwrap();
        store.delete(5).unwrap();

        assert!(matches!(store.find_by_id(5), Err(LibrisError::NotFound(5))));
    }

    #[test]
    fn delete_preserves_order_of_remaining() {
        let mut store = StoreFixture::new().with_books(3).store;
        store.delete(2).unwrap();
        assert_eq!(ids(&store), vec![1, 3]);
    }

    #[test]
    fn delete_missing_is_not_found() {
        let mut store = StoreFixture::new().with_books(2).store;
        assert!(matches!(store.delete(9), Err(LibrisError::NotFound(9))));
        assert_eq!(ids(&store), vec![1, 2]);
    }

    #[test]
    fn update_replaces_without_reordering() {
        let mut store = StoreFixture::new().with_books(3).store;

        let mut first = store.find_by_id(1).unwrap();
        first.set_title("Renamed").unwrap();
        store.update(first).unwrap();

        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(store.find_by_id(1).unwrap().title(), "Renamed");
    }

    #[test]
    fn update_missing_is_not_found() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            store.update(book(4, "Nope")),
            Err(LibrisError::NotFound(4))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn readd_after_delete_goes_to_end() {
        let mut store = StoreFixture::new().with_books(3).store;
        store.delete(1).unwrap();
        store.add(book(1, "Back")).unwrap();
        assert_eq!(ids(&store), vec![2, 3, 1]);
    }

    #[test]
    fn list_is_a_snapshot() {
        let mut store = StoreFixture::new().with_books(2).store;
        let mut snapshot = store.list();
        snapshot[0].set_title("Changed locally").unwrap();

        assert_eq!(store.find_by_id(1).unwrap().title(), "Book 1");

        store.delete(2).unwrap();
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn found_copy_does_not_alias_store() {
        let mut store = StoreFixture::new().with_books(1).store;
        let mut copy = store.find_by_id(1).unwrap();
        copy.set_year(1800).unwrap();

        assert_eq!(store.find_by_id(1).unwrap().year(), 2001);

        store.update(copy).unwrap();
        assert_eq!(store.find_by_id(1).unwrap().year(), 1800);
    }
}
