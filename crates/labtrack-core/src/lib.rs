//! Core types and trait definitions for the labtrack study store.
//!
//! This crate is deliberately free of database and terminal dependencies.
//! The SQLite backend and the CLI both depend on it.

pub mod error;
pub mod lab;
pub mod store;
pub mod subject;

pub use error::{Error, Result};
