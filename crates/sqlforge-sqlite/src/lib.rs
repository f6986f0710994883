//! SQLite support for sqlforge.
//!
//! Provides the SQLite implementation of the
//! [`SqlFormatter`](sqlforge_schema::SqlFormatter) capability consumed by
//! the constraint renderers in `sqlforge-schema`.

pub mod formatter;

pub use formatter::SqliteFormatter;
