/// Blog Service Library
///
/// A small REST API over blog posts and their comments, backed by PostgreSQL.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route wiring
/// - `models`: Data structures for posts and comments
/// - `db`: Database access layer (pool construction + repositories)
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;

pub use config::Config;
pub use error::{AppError, Result};
