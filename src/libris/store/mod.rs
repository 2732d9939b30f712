//! # Storage Layer
//!
//! This module defines the storage abstraction for libris. The [`BookStore`] trait
//! is the capability contract every catalog backend satisfies, so the command and
//! API layers never know whether persistence is enabled.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the authoritative data structure.
//!   - `HashMap<i64, Book>` for lookup by id
//!   - `Vec<i64>` recording insertion order for listing
//!   - No persistence
//!
//! - [`json::JsonStore`]: wraps an `InMemoryStore` and mirrors it to a JSON file.
//!   - Loads the file once when opened (missing file = empty catalog)
//!   - Rewrites the whole catalog after every successful mutation
//!   - Writes go to a sibling temp file that is renamed over the target
//!
//! ## Failure Semantics
//!
//! Mutations fail without side effects when the in-memory operation fails
//! (`Duplicate`, `NotFound`). When the in-memory operation succeeds but the save
//! fails, memory is ahead of disk and the storage error is returned; a caller may
//! retry with [`json::JsonStore::save`].
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   { "id": 1, "titulo": "Clean Code", "autor": "Robert C. Martin", "anio": 2008 }
//! ]
//! ```
//!
//! Array order is catalog insertion order.

use crate::error::Result;
use crate::model::Book;

pub mod json;
pub mod memory;

/// Abstract interface for catalog storage.
pub trait BookStore {
    /// Insert a new book. Fails with `Duplicate` if the id is taken.
    fn add(&mut self, book: Book) -> Result<()>;

    /// Replace the stored book with the same id. Fails with `NotFound`.
    /// Never changes the listing position.
    fn update(&mut self, book: Book) -> Result<()>;

    /// Remove a book by id. Fails with `NotFound`.
    fn delete(&mut self, id: i64) -> Result<()>;

    /// Get a copy of the book with the given id.
    fn find_by_id(&self, id: i64) -> Result<Book>;

    /// Snapshot of all books in insertion order.
    fn list(&self) -> Vec<Book>;
}
