//! SQLite backend for the labtrack study store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated
//! background thread without blocking the async runtime. The first open of a
//! new database file creates the schema and loads the seed [`Catalogue`] in a
//! single transaction.

mod cell;
mod encode;
mod schema;
mod store;

pub mod error;
pub mod seed;

pub use cell::StoreCell;
pub use error::{Error, Result};
pub use seed::{Catalogue, SeedReport};
pub use store::SqliteStore;

/// File name of the store inside the application data directory.
pub const STORE_FILE_NAME: &str = "labtrack.db";
