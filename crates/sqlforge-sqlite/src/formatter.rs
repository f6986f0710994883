//! SQLite identifier formatter.

use sqlforge_schema::SqlFormatter;

/// SQLite identifier formatter.
///
/// SQLite also accepts backticks and square brackets, but double quotes
/// are the standard form. An embedded double quote is doubled.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteFormatter;

impl SqliteFormatter {
    /// Creates a new SQLite formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SqlFormatter for SqliteFormatter {
    fn append_ident(&self, mut sql: Vec<u8>, ident: &str) -> Vec<u8> {
        sql.push(b'"');
        for byte in ident.bytes() {
            if byte == b'"' {
                sql.push(b'"');
            }
            sql.push(byte);
        }
        sql.push(b'"');
        sql
    }
}
