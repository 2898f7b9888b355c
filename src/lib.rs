//! # memdb
//!
//! A minimal in-memory key-value store driven by a line-oriented text
//! protocol (`SET`, `GET`, `DEL`).
//!
//! Requests flow through a layered pipeline: the parser splits raw text into
//! tokens, the analyzer validates them into a `Query`, and the database
//! dispatches the query to storage, which checks the request scope before
//! handing off to the engine and its table. Replies come back as text:
//! `[ok]`, `[ok] <value>` or `[error] <message>`.

pub mod compute;
pub mod config;
pub mod context;
pub mod database;
pub mod error;
pub mod session;
pub mod storage;

pub use context::RequestScope;
pub use database::Database;
pub use error::{DbError, DbResult};
