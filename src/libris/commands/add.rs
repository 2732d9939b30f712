use crate::commands::{describe, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::store::BookStore;

pub fn run<S: BookStore>(
    store: &mut S,
    id: i64,
    title: String,
    author: String,
    year: i64,
) -> Result<CmdResult> {
    let book = Book::new(id, title, author, year)?;
    store.add(book.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added: {}",
        describe(&book)
    )));
    Ok(result.with_affected_books(vec![book]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LibrisError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_valid_book() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, 1, "Pro Git".into(), "Scott Chacon".into(), 2014).unwrap();

        assert_eq!(result.affected_books.len(), 1);
        assert_eq!(store.find_by_id(1).unwrap().title(), "Pro Git");
        assert!(result.messages[0].content.contains("Pro Git"));
    }

    #[test]
    fn invalid_book_never_reaches_store() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, 1, "".into(), "Someone".into(), 2014).unwrap_err();

        assert!(matches!(err, LibrisError::Validation(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn duplicate_id_is_reported() {
        let mut store = InMemoryStore::new();
        run(&mut store, 1, "First".into(), "A".into(), 2000).unwrap();
        let err = run(&mut store, 1, "Second".into(), "B".into(), 2001).unwrap_err();

        assert!(matches!(err, LibrisError::Duplicate(1)));
        assert_eq!(store.find_by_id(1).unwrap().title(), "First");
    }
}
