//! # API Facade
//!
//! The API layer is a **thin facade** over the catalog commands and the single
//! entry point a UI uses for books. It dispatches to `commands/*.rs` and returns
//! `Result<CmdResult>`; it never prints and holds no business logic.
//!
//! Configuration is not part of the facade: `commands::config` works on the
//! config directory alone, so it stays usable when the catalog cannot be opened.
//!
//! `LibrisApi<S: BookStore>` is generic over the storage backend:
//! - Production: `LibrisApi<JsonStore>`
//! - Testing: `LibrisApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::BookStore;

pub struct LibrisApi<S: BookStore> {
    store: S,
}

impl<S: BookStore> LibrisApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_book(
        &mut self,
        id: i64,
        title: String,
        author: String,
        year: i64,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, id, title, author, year)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn get_book(&self, id: i64) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn update_book(
        &mut self,
        id: i64,
        update: &commands::BookUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn delete_book(&mut self, id: i64) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn seed_if_empty(&mut self) -> Result<commands::CmdResult> {
        commands::seed::run(&mut self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{BookUpdate, CmdMessage, CmdResult, MessageLevel};
