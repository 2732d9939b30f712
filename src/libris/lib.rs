//! # Libris Architecture
//!
//! Libris keeps a catalog of books (id, title, author, year) and persists it to a
//! JSON file. The library has no I/O assumptions beyond that file; the `libris`
//! binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Subcommands and the interactive menu                     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over the catalog commands                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per operation, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BookStore trait                                          │
//! │  - JsonStore (production) wraps InMemoryStore               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! - A [`model::Book`] is validated at construction and on every setter, so no
//!   invalid book value exists.
//! - Ids are unique within a store and listing follows insertion order.
//! - [`store::json::JsonStore`] never writes the catalog file in place.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade for catalog operations
//! - [`commands`]: Logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Book` record
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
