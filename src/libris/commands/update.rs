use crate::commands::{describe, BookUpdate, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStore;

/// Apply the given field changes to a copy of the stored book, then write it back.
///
/// Setters run in title, author, year order; the first invalid value aborts the
/// update before anything is written.
pub fn run<S: BookStore>(store: &mut S, id: i64, update: &BookUpdate) -> Result<CmdResult> {
    let mut book = store.find_by_id(id)?;
    let mut result = CmdResult::default();

    if update.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Nothing to update: {}",
            describe(&book)
        )));
        return Ok(result);
    }

    if let Some(title) = &update.title {
        book.set_title(title.clone())?;
    }
    if let Some(author) = &update.author {
        book.set_author(author.clone())?;
    }
    if let Some(year) = update.year {
        book.set_year(year)?;
    }

    store.update(book.clone())?;

    result.add_message(CmdMessage::success(format!(
        "Book updated: {}",
        describe(&book)
    )));
    Ok(result.with_affected_books(vec![book]))
}
