//! Unique index descriptors.
//!
//! A unique index and a unique constraint are mostly interchangeable for
//! data integrity, but not for migrations: SQLite drops a unique index by
//! name while dropping a unique constraint requires recreating the table.
//! [`UniqueConstraint::to_index`](crate::constraint::UniqueConstraint::to_index)
//! converts the constraint form into this descriptor so callers can emit
//! index DDL instead.

use serde::{Deserialize, Serialize};

use crate::constraint::ConstraintKind;
use crate::formatter::SqlFormatter;
use crate::ident::{ColumnName, TableName};

/// A unique index over one or more columns of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueIndex {
    table_name: TableName,
    column_names: Vec<ColumnName>,
}

impl UniqueIndex {
    /// Creates a unique index descriptor.
    #[must_use]
    pub const fn new(table_name: TableName, column_names: Vec<ColumnName>) -> Self {
        Self {
            table_name,
            column_names,
        }
    }

    /// Returns the table the index applies to.
    #[must_use]
    pub const fn table_name(&self) -> &TableName {
        &self.table_name
    }

    /// Returns the indexed columns in declaration order.
    #[must_use]
    pub fn column_names(&self) -> &[ColumnName] {
        &self.column_names
    }

    /// Returns the index name, `uq_<table>_<col1>_<col2>_…`.
    ///
    /// This matches the unique-constraint auto-name, so a constraint
    /// converted to an index drops under the same identifier.
    #[must_use]
    pub fn name(&self) -> String {
        let mut name = format!("{}_{}", ConstraintKind::Unique.prefix(), self.table_name);
        for column in &self.column_names {
            name.push('_');
            name.push_str(column.as_str());
        }
        name
    }

    /// Renders `CREATE UNIQUE INDEX IF NOT EXISTS <name> ON <table> (<columns>)`.
    #[must_use]
    pub fn to_create_sql(&self, fmter: &dyn SqlFormatter) -> Vec<u8> {
        let mut sql = Vec::new();
        sql.extend_from_slice(b"CREATE UNIQUE INDEX IF NOT EXISTS ");
        sql = fmter.append_ident(sql, &self.name());
        sql.extend_from_slice(b" ON ");
        sql = fmter.append_ident(sql, self.table_name.as_str());
        sql.extend_from_slice(b" (");
        for (i, column) in self.column_names.iter().enumerate() {
            if i > 0 {
                sql.extend_from_slice(b", ");
            }
            sql = fmter.append_ident(sql, column.as_str());
        }
        sql.push(b')');
        sql
    }

    /// Renders `DROP INDEX IF EXISTS <name>`.
    #[must_use]
    pub fn to_drop_sql(&self, fmter: &dyn SqlFormatter) -> Vec<u8> {
        let mut sql = Vec::new();
        sql.extend_from_slice(b"DROP INDEX IF EXISTS ");
        sql = fmter.append_ident(sql, &self.name());
        sql
    }
}
