//! Domain logic shared by the document store layer and the HTTP API.
//!
//! Nothing in here performs I/O: the idea generator, catalog filtering
//! helpers and validation formatting are all pure functions.

pub mod catalog;
pub mod error;
pub mod ideas;
pub mod types;
pub mod validation;
