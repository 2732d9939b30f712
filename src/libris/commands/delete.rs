use crate::commands::{describe, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStore;

pub fn run<S: BookStore>(store: &mut S, id: i64) -> Result<CmdResult> {
    let book = store.find_by_id(id)?;
    store.delete(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book deleted: {}",
        describe(&book)
    )));
    Ok(result.with_affected_books(vec![book]))
}
