use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::BookStore;

pub fn run<S: BookStore>(store: &S, id: i64) -> Result<CmdResult> {
    let book = store.find_by_id(id)?;
    Ok(CmdResult::default().with_listed_books(vec![book]))
}
