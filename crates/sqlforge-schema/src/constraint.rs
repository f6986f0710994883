//! Table constraint values and DDL rendering.
//!
//! Constraints are immutable values: renaming via `named` produces a new
//! value with its own column storage. Equality is structural and
//! kind-sensitive — it answers whether the database already has a logically
//! equivalent constraint, so explicit names and column order are excluded
//! from the comparison.

use std::collections::BTreeSet;
use std::fmt;
use std::slice;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Result, SchemaError};
use crate::formatter::SqlFormatter;
use crate::ident::{ColumnName, TableName};
use crate::index::UniqueIndex;

/// The closed set of constraint kinds.
///
/// Each kind has a stable two-letter prefix used in auto-generated names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstraintKind {
    /// Primary identity of a row.
    PrimaryKey,
    /// Referential integrity against another table.
    ForeignKey,
    /// Uniqueness over one or more columns.
    Unique,
    /// Check expressions. The kind tag is reserved; no value type exists
    /// yet. Adding one means adding a variant to [`Constraint`].
    Check,
}

impl ConstraintKind {
    /// Returns the short prefix used in auto-generated names.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::PrimaryKey => "pk",
            Self::ForeignKey => "fk",
            Self::Unique => "uq",
            Self::Check => "ck",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A primary key over one or more columns.
///
/// Column order matters for DDL rendering but not for equality. Duplicate
/// columns are kept as declared; the renderer does not deduplicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimaryKeyConstraint {
    columns: Vec<ColumnName>,
    name: Option<String>,
}

impl PrimaryKeyConstraint {
    /// Creates a primary key over `columns`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::EmptyColumns`] if `columns` is empty.
    pub fn new(columns: Vec<ColumnName>) -> Result<Self> {
        if columns.is_empty() {
            return Err(SchemaError::EmptyColumns {
                kind: ConstraintKind::PrimaryKey,
            });
        }
        Ok(Self {
            columns,
            name: None,
        })
    }

    /// Returns the constraint name for `table`.
    ///
    /// An explicit name set via [`named`](Self::named) wins; otherwise the
    /// name is `pk_<table>`.
    #[must_use]
    pub fn name(&self, table: &TableName) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        format!("{}_{table}", ConstraintKind::PrimaryKey.prefix())
    }

    /// Returns a copy of this constraint with an explicit name.
    ///
    /// This is typically used to match a constraint name already present in
    /// the database. An empty string clears the override and auto-naming
    /// resumes. The copy shares no column storage with `self`.
    #[must_use]
    pub fn named(&self, name: impl Into<String>) -> Self {
        Self {
            columns: self.columns.clone(),
            name: explicit_name(name),
        }
    }

    /// Returns the constraint kind.
    #[must_use]
    pub const fn kind(&self) -> ConstraintKind {
        ConstraintKind::PrimaryKey
    }

    /// Returns the columns the constraint is applied to.
    #[must_use]
    pub fn columns(&self) -> &[ColumnName] {
        &self.columns
    }

    /// Renders the fragment for a `CREATE TABLE` constraint list:
    /// `CONSTRAINT <name> PRIMARY KEY (<columns>)`.
    #[must_use]
    pub fn to_definition_sql(&self, fmter: &dyn SqlFormatter, table: &TableName) -> Vec<u8> {
        let mut sql = Vec::new();
        sql.extend_from_slice(b"CONSTRAINT ");
        sql = fmter.append_ident(sql, &self.name(table));
        sql.extend_from_slice(b" PRIMARY KEY (");
        sql = append_column_list(sql, fmter, &self.columns);
        sql.push(b')');
        sql
    }

    /// Renders `ALTER TABLE <table> DROP CONSTRAINT IF EXISTS <name>`.
    #[must_use]
    pub fn to_drop_sql(&self, fmter: &dyn SqlFormatter, table: &TableName) -> Vec<u8> {
        append_drop_constraint(fmter, table, &self.name(table))
    }
}

impl PartialEq for PrimaryKeyConstraint {
    fn eq(&self, other: &Self) -> bool {
        column_set(&self.columns) == column_set(&other.columns)
    }
}

impl Eq for PrimaryKeyConstraint {}

/// A foreign key from one column to a column of another table.
///
/// Composite foreign keys are not supported. All three identifiers
/// participate in equality; only the referencing column is visible through
/// the generic [`columns`](Self::columns) view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForeignKeyConstraint {
    referencing_column: ColumnName,
    referenced_table: TableName,
    referenced_column: ColumnName,
    name: Option<String>,
}

impl ForeignKeyConstraint {
    /// Creates a foreign key from `referencing_column` to
    /// `referenced_table.referenced_column`.
    #[must_use]
    pub fn new(
        referencing_column: ColumnName,
        referenced_table: TableName,
        referenced_column: ColumnName,
    ) -> Self {
        Self {
            referencing_column,
            referenced_table,
            referenced_column,
            name: None,
        }
    }

    /// Returns the constraint name for `table`.
    ///
    /// An explicit name set via [`named`](Self::named) wins; otherwise the
    /// name is `fk_<table>_<referencing column>`.
    #[must_use]
    pub fn name(&self, table: &TableName) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        format!(
            "{}_{table}_{}",
            ConstraintKind::ForeignKey.prefix(),
            self.referencing_column
        )
    }

    /// Returns a copy of this constraint with an explicit name.
    ///
    /// An empty string clears the override and auto-naming resumes.
    #[must_use]
    pub fn named(&self, name: impl Into<String>) -> Self {
        Self {
            referencing_column: self.referencing_column.clone(),
            referenced_table: self.referenced_table.clone(),
            referenced_column: self.referenced_column.clone(),
            name: explicit_name(name),
        }
    }

    /// Returns the constraint kind.
    #[must_use]
    pub const fn kind(&self) -> ConstraintKind {
        ConstraintKind::ForeignKey
    }

    /// Returns the referencing column as the generic column view.
    #[must_use]
    pub fn columns(&self) -> &[ColumnName] {
        slice::from_ref(&self.referencing_column)
    }

    /// Returns the column holding the reference.
    #[must_use]
    pub const fn referencing_column(&self) -> &ColumnName {
        &self.referencing_column
    }

    /// Returns the referenced table.
    #[must_use]
    pub const fn referenced_table(&self) -> &TableName {
        &self.referenced_table
    }

    /// Returns the referenced column.
    #[must_use]
    pub const fn referenced_column(&self) -> &ColumnName {
        &self.referenced_column
    }

    /// Renders the fragment for a `CREATE TABLE` constraint list:
    /// `CONSTRAINT <name> FOREIGN KEY (<col>) REFERENCES <table> (<col>)`.
    #[must_use]
    pub fn to_definition_sql(&self, fmter: &dyn SqlFormatter, table: &TableName) -> Vec<u8> {
        let mut sql = Vec::new();
        sql.extend_from_slice(b"CONSTRAINT ");
        sql = fmter.append_ident(sql, &self.name(table));
        sql.extend_from_slice(b" FOREIGN KEY (");
        sql = fmter.append_ident(sql, self.referencing_column.as_str());
        sql.extend_from_slice(b") REFERENCES ");
        sql = fmter.append_ident(sql, self.referenced_table.as_str());
        sql.extend_from_slice(b" (");
        sql = fmter.append_ident(sql, self.referenced_column.as_str());
        sql.push(b')');
        sql
    }

    /// Renders `ALTER TABLE <table> DROP CONSTRAINT IF EXISTS <name>`.
    #[must_use]
    pub fn to_drop_sql(&self, fmter: &dyn SqlFormatter, table: &TableName) -> Vec<u8> {
        append_drop_constraint(fmter, table, &self.name(table))
    }
}

impl PartialEq for ForeignKeyConstraint {
    fn eq(&self, other: &Self) -> bool {
        self.referencing_column == other.referencing_column
            && self.referenced_table == other.referenced_table
            && self.referenced_column == other.referenced_column
    }
}

impl Eq for ForeignKeyConstraint {}

/// A uniqueness constraint over one or more columns.
///
/// Column order matters for rendering and for the auto-generated name but
/// not for equality. Prefer converting to a [`UniqueIndex`] via
/// [`to_index`](Self::to_index) when emitting DDL: SQLite can drop a unique
/// index by name, while dropping a unique constraint requires recreating
/// the table. The constraint form remains for introspection compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniqueConstraint {
    columns: Vec<ColumnName>,
    name: Option<String>,
}

impl UniqueConstraint {
    /// Creates a unique constraint over `columns`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::EmptyColumns`] if `columns` is empty.
    pub fn new(columns: Vec<ColumnName>) -> Result<Self> {
        if columns.is_empty() {
            return Err(SchemaError::EmptyColumns {
                kind: ConstraintKind::Unique,
            });
        }
        Ok(Self {
            columns,
            name: None,
        })
    }

    /// Returns the constraint name for `table`.
    ///
    /// An explicit name set via [`named`](Self::named) wins; otherwise the
    /// name is `uq_<table>_<col1>_<col2>_…` in declaration order.
    #[must_use]
    pub fn name(&self, table: &TableName) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        let mut name = format!("{}_{table}", ConstraintKind::Unique.prefix());
        for column in &self.columns {
            name.push('_');
            name.push_str(column.as_str());
        }
        name
    }

    /// Returns a copy of this constraint with an explicit name.
    ///
    /// An empty string clears the override and auto-naming resumes. The
    /// copy shares no column storage with `self`.
    #[must_use]
    pub fn named(&self, name: impl Into<String>) -> Self {
        Self {
            columns: self.columns.clone(),
            name: explicit_name(name),
        }
    }

    /// Returns the constraint kind.
    #[must_use]
    pub const fn kind(&self) -> ConstraintKind {
        ConstraintKind::Unique
    }

    /// Returns the columns the constraint is applied to.
    #[must_use]
    pub fn columns(&self) -> &[ColumnName] {
        &self.columns
    }

    /// Converts this constraint into a [`UniqueIndex`] over `table`.
    ///
    /// The descriptor carries its own copy of the column list; later
    /// changes to either value do not affect the other.
    #[must_use]
    pub fn to_index(&self, table: &TableName) -> UniqueIndex {
        UniqueIndex::new(table.clone(), self.columns.clone())
    }

    /// Renders the fragment for a `CREATE TABLE` constraint list:
    /// `CONSTRAINT <name> UNIQUE (<columns>)`.
    #[must_use]
    pub fn to_definition_sql(&self, fmter: &dyn SqlFormatter, table: &TableName) -> Vec<u8> {
        let mut sql = Vec::new();
        sql.extend_from_slice(b"CONSTRAINT ");
        sql = fmter.append_ident(sql, &self.name(table));
        sql.extend_from_slice(b" UNIQUE (");
        sql = append_column_list(sql, fmter, &self.columns);
        sql.push(b')');
        sql
    }

    /// Renders `ALTER TABLE <table> DROP CONSTRAINT IF EXISTS <name>`.
    #[must_use]
    pub fn to_drop_sql(&self, fmter: &dyn SqlFormatter, table: &TableName) -> Vec<u8> {
        append_drop_constraint(fmter, table, &self.name(table))
    }
}

impl PartialEq for UniqueConstraint {
    fn eq(&self, other: &Self) -> bool {
        column_set(&self.columns) == column_set(&other.columns)
    }
}

impl Eq for UniqueConstraint {}

/// A table constraint of any implemented kind.
///
/// The set of kinds is closed: extending it means adding a variant here
/// and a prefix to [`ConstraintKind`]. Cross-kind equality is always
/// false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constraint {
    /// A primary key constraint.
    PrimaryKey(PrimaryKeyConstraint),
    /// A foreign key constraint.
    ForeignKey(ForeignKeyConstraint),
    /// A unique constraint.
    Unique(UniqueConstraint),
}

impl Constraint {
    /// Returns the constraint name for `table`.
    #[must_use]
    pub fn name(&self, table: &TableName) -> String {
        match self {
            Self::PrimaryKey(constraint) => constraint.name(table),
            Self::ForeignKey(constraint) => constraint.name(table),
            Self::Unique(constraint) => constraint.name(table),
        }
    }

    /// Returns a copy of this constraint with an explicit name.
    ///
    /// An empty string clears the override and auto-naming resumes.
    #[must_use]
    pub fn named(&self, name: impl Into<String>) -> Self {
        match self {
            Self::PrimaryKey(constraint) => Self::PrimaryKey(constraint.named(name)),
            Self::ForeignKey(constraint) => Self::ForeignKey(constraint.named(name)),
            Self::Unique(constraint) => Self::Unique(constraint.named(name)),
        }
    }

    /// Returns the constraint kind.
    #[must_use]
    pub const fn kind(&self) -> ConstraintKind {
        match self {
            Self::PrimaryKey(constraint) => constraint.kind(),
            Self::ForeignKey(constraint) => constraint.kind(),
            Self::Unique(constraint) => constraint.kind(),
        }
    }

    /// Returns the columns the constraint is applied to.
    #[must_use]
    pub fn columns(&self) -> &[ColumnName] {
        match self {
            Self::PrimaryKey(constraint) => constraint.columns(),
            Self::ForeignKey(constraint) => constraint.columns(),
            Self::Unique(constraint) => constraint.columns(),
        }
    }

    /// Renders the fragment for a `CREATE TABLE` constraint list.
    #[must_use]
    pub fn to_definition_sql(&self, fmter: &dyn SqlFormatter, table: &TableName) -> Vec<u8> {
        let sql = match self {
            Self::PrimaryKey(constraint) => constraint.to_definition_sql(fmter, table),
            Self::ForeignKey(constraint) => constraint.to_definition_sql(fmter, table),
            Self::Unique(constraint) => constraint.to_definition_sql(fmter, table),
        };
        trace!(constraint = %self.name(table), bytes = sql.len(), "rendered definition fragment");
        sql
    }

    /// Renders `ALTER TABLE <table> DROP CONSTRAINT IF EXISTS <name>`.
    #[must_use]
    pub fn to_drop_sql(&self, fmter: &dyn SqlFormatter, table: &TableName) -> Vec<u8> {
        let sql = match self {
            Self::PrimaryKey(constraint) => constraint.to_drop_sql(fmter, table),
            Self::ForeignKey(constraint) => constraint.to_drop_sql(fmter, table),
            Self::Unique(constraint) => constraint.to_drop_sql(fmter, table),
        };
        trace!(constraint = %self.name(table), bytes = sql.len(), "rendered drop statement");
        sql
    }
}

impl From<PrimaryKeyConstraint> for Constraint {
    fn from(constraint: PrimaryKeyConstraint) -> Self {
        Self::PrimaryKey(constraint)
    }
}

impl From<ForeignKeyConstraint> for Constraint {
    fn from(constraint: ForeignKeyConstraint) -> Self {
        Self::ForeignKey(constraint)
    }
}

impl From<UniqueConstraint> for Constraint {
    fn from(constraint: UniqueConstraint) -> Self {
        Self::Unique(constraint)
    }
}

fn explicit_name(name: impl Into<String>) -> Option<String> {
    let name = name.into();
    if name.is_empty() { None } else { Some(name) }
}

fn column_set(columns: &[ColumnName]) -> BTreeSet<&ColumnName> {
    columns.iter().collect()
}

fn append_column_list(
    mut sql: Vec<u8>,
    fmter: &dyn SqlFormatter,
    columns: &[ColumnName],
) -> Vec<u8> {
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            sql.extend_from_slice(b", ");
        }
        sql = fmter.append_ident(sql, column.as_str());
    }
    sql
}

fn append_drop_constraint(fmter: &dyn SqlFormatter, table: &TableName, name: &str) -> Vec<u8> {
    let mut sql = Vec::new();
    sql.extend_from_slice(b"ALTER TABLE ");
    sql = fmter.append_ident(sql, table.as_str());
    sql.extend_from_slice(b" DROP CONSTRAINT IF EXISTS ");
    sql = fmter.append_ident(sql, name);
    sql
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::GenericFormatter;

    fn cols(names: &[&str]) -> Vec<ColumnName> {
        names.iter().copied().map(ColumnName::from).collect()
    }

    fn sql_string(sql: Vec<u8>) -> String {
        String::from_utf8(sql).unwrap()
    }

    /// Formatter that appends identifiers without quoting.
    struct RawFormatter;

    impl SqlFormatter for RawFormatter {
        fn append_ident(&self, mut sql: Vec<u8>, ident: &str) -> Vec<u8> {
            sql.extend_from_slice(ident.as_bytes());
            sql
        }
    }

    #[test]
    fn test_kind_prefixes() {
        assert_eq!(ConstraintKind::PrimaryKey.prefix(), "pk");
        assert_eq!(ConstraintKind::ForeignKey.prefix(), "fk");
        assert_eq!(ConstraintKind::Unique.prefix(), "uq");
        assert_eq!(ConstraintKind::Check.prefix(), "ck");
        assert_eq!(ConstraintKind::PrimaryKey.to_string(), "pk");
    }

    #[test]
    fn test_primary_key_rejects_empty_columns() {
        let err = PrimaryKeyConstraint::new(Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::EmptyColumns {
                kind: ConstraintKind::PrimaryKey
            }
        ));
    }

    #[test]
    fn test_primary_key_auto_name() {
        let pk = PrimaryKeyConstraint::new(cols(&["id"])).unwrap();
        assert_eq!(pk.name(&TableName::from("users")), "pk_users");
        assert_eq!(pk.name(&TableName::from("orders")), "pk_orders");
    }

    #[test]
    fn test_named_overrides_auto_name() {
        let pk = PrimaryKeyConstraint::new(cols(&["tenant", "id"]))
            .unwrap()
            .named("accounts_pkey");
        assert_eq!(pk.name(&TableName::from("accounts")), "accounts_pkey");
        assert_eq!(pk.name(&TableName::from("anything")), "accounts_pkey");
    }

    #[test]
    fn test_named_empty_clears_override() {
        let pk = PrimaryKeyConstraint::new(cols(&["id"]))
            .unwrap()
            .named("users_pkey")
            .named("");
        assert_eq!(pk.name(&TableName::from("users")), "pk_users");
    }

    #[test]
    fn test_named_copies_column_storage() {
        let pk = PrimaryKeyConstraint::new(cols(&["id"])).unwrap();
        let renamed = pk.named("users_pkey");

        assert_eq!(pk.columns(), renamed.columns());
        assert_ne!(pk.columns().as_ptr(), renamed.columns().as_ptr());
    }

    #[test]
    fn test_primary_key_definition_sql() {
        let pk = PrimaryKeyConstraint::new(cols(&["id"])).unwrap();
        let sql = pk.to_definition_sql(&GenericFormatter::new(), &TableName::from("users"));
        assert_eq!(sql_string(sql), "CONSTRAINT \"pk_users\" PRIMARY KEY (\"id\")");
    }

    #[test]
    fn test_primary_key_composite_named_definition_sql() {
        let pk = PrimaryKeyConstraint::new(cols(&["tenant", "id"]))
            .unwrap()
            .named("accounts_pkey");
        let sql = pk.to_definition_sql(&GenericFormatter::new(), &TableName::from("accounts"));
        assert_eq!(
            sql_string(sql),
            "CONSTRAINT \"accounts_pkey\" PRIMARY KEY (\"tenant\", \"id\")"
        );
    }

    #[test]
    fn test_primary_key_drop_sql() {
        let pk = PrimaryKeyConstraint::new(cols(&["id"])).unwrap();
        let sql = pk.to_drop_sql(&GenericFormatter::new(), &TableName::from("users"));
        assert_eq!(
            sql_string(sql),
            "ALTER TABLE \"users\" DROP CONSTRAINT IF EXISTS \"pk_users\""
        );
    }

    #[test]
    fn test_foreign_key_auto_name() {
        let fk = ForeignKeyConstraint::new(
            ColumnName::from("user_id"),
            TableName::from("users"),
            ColumnName::from("id"),
        );
        assert_eq!(fk.name(&TableName::from("orders")), "fk_orders_user_id");
    }

    #[test]
    fn test_foreign_key_definition_sql() {
        let fk = ForeignKeyConstraint::new(
            ColumnName::from("user_id"),
            TableName::from("users"),
            ColumnName::from("id"),
        );
        let sql = fk.to_definition_sql(&GenericFormatter::new(), &TableName::from("orders"));
        assert_eq!(
            sql_string(sql),
            "CONSTRAINT \"fk_orders_user_id\" FOREIGN KEY (\"user_id\") \
             REFERENCES \"users\" (\"id\")"
        );
    }

    #[test]
    fn test_foreign_key_drop_sql() {
        let fk = ForeignKeyConstraint::new(
            ColumnName::from("user_id"),
            TableName::from("users"),
            ColumnName::from("id"),
        );
        let sql = fk.to_drop_sql(&GenericFormatter::new(), &TableName::from("orders"));
        assert_eq!(
            sql_string(sql),
            "ALTER TABLE \"orders\" DROP CONSTRAINT IF EXISTS \"fk_orders_user_id\""
        );
    }

    #[test]
    fn test_foreign_key_columns_view_is_referencing_column() {
        let fk = ForeignKeyConstraint::new(
            ColumnName::from("user_id"),
            TableName::from("users"),
            ColumnName::from("id"),
        );
        assert_eq!(fk.columns(), &[ColumnName::from("user_id")]);
    }

    #[test]
    fn test_foreign_key_equality_compares_all_fields() {
        let fk = |referencing: &str, table: &str, referenced: &str| {
            ForeignKeyConstraint::new(
                ColumnName::from(referencing),
                TableName::from(table),
                ColumnName::from(referenced),
            )
        };

        assert_eq!(fk("user_id", "users", "id"), fk("user_id", "users", "id"));
        assert_ne!(fk("user_id", "users", "id"), fk("owner_id", "users", "id"));
        assert_ne!(fk("user_id", "users", "id"), fk("user_id", "accounts", "id"));
        assert_ne!(fk("user_id", "users", "id"), fk("user_id", "users", "uuid"));
    }

    #[test]
    fn test_unique_rejects_empty_columns() {
        let err = UniqueConstraint::new(Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::EmptyColumns {
                kind: ConstraintKind::Unique
            }
        ));
    }

    #[test]
    fn test_unique_auto_name_joins_columns_in_order() {
        let unique = UniqueConstraint::new(cols(&["email", "tenant"])).unwrap();
        assert_eq!(unique.name(&TableName::from("users")), "uq_users_email_tenant");

        let flipped = UniqueConstraint::new(cols(&["tenant", "email"])).unwrap();
        assert_eq!(flipped.name(&TableName::from("users")), "uq_users_tenant_email");
    }

    #[test]
    fn test_unique_definition_sql() {
        let unique = UniqueConstraint::new(cols(&["email", "tenant"])).unwrap();
        let sql = unique.to_definition_sql(&GenericFormatter::new(), &TableName::from("users"));
        assert_eq!(
            sql_string(sql),
            "CONSTRAINT \"uq_users_email_tenant\" UNIQUE (\"email\", \"tenant\")"
        );
    }

    #[test]
    fn test_equality_ignores_column_order() {
        let pk1 = PrimaryKeyConstraint::new(cols(&["a", "b"])).unwrap();
        let pk2 = PrimaryKeyConstraint::new(cols(&["b", "a"])).unwrap();
        assert_eq!(pk1, pk2);
        assert_eq!(pk2, pk1);

        let uq1 = UniqueConstraint::new(cols(&["a", "b"])).unwrap();
        let uq2 = UniqueConstraint::new(cols(&["b", "a"])).unwrap();
        assert_eq!(uq1, uq2);
    }

    #[test]
    fn test_equality_collapses_duplicates() {
        let pk1 = PrimaryKeyConstraint::new(cols(&["a", "a"])).unwrap();
        let pk2 = PrimaryKeyConstraint::new(cols(&["a"])).unwrap();
        assert_eq!(pk1, pk2);

        let uq1 = UniqueConstraint::new(cols(&["a", "b"])).unwrap();
        let uq2 = UniqueConstraint::new(cols(&["a"])).unwrap();
        assert_ne!(uq1, uq2);
        assert_ne!(uq2, uq1);
    }

    #[test]
    fn test_equality_ignores_explicit_name() {
        let unique = UniqueConstraint::new(cols(&["email"])).unwrap();
        assert_eq!(unique, unique.named("uq_custom"));

        let pk = PrimaryKeyConstraint::new(cols(&["id"])).unwrap();
        assert_eq!(pk, pk.named("users_pkey"));
    }

    #[test]
    fn test_cross_kind_equality_is_false() {
        let pk = Constraint::from(PrimaryKeyConstraint::new(cols(&["a", "b"])).unwrap());
        let unique = Constraint::from(UniqueConstraint::new(cols(&["a", "b"])).unwrap());
        assert_ne!(pk, unique);
        assert_ne!(unique, pk);
    }

    #[test]
    fn test_drop_sql_always_includes_if_exists() {
        let table = TableName::from("users");
        let constraints = [
            Constraint::from(PrimaryKeyConstraint::new(cols(&["id"])).unwrap()),
            Constraint::from(ForeignKeyConstraint::new(
                ColumnName::from("user_id"),
                TableName::from("accounts"),
                ColumnName::from("id"),
            )),
            Constraint::from(UniqueConstraint::new(cols(&["email"])).unwrap()),
        ];

        for constraint in constraints {
            let sql = sql_string(constraint.to_drop_sql(&RawFormatter, &table));
            assert!(sql.contains(" DROP CONSTRAINT IF EXISTS "), "{sql}");
            assert!(!sql.ends_with(';'));
            assert!(!sql.ends_with('\n'));
        }
    }

    #[test]
    fn test_constraint_dispatch() {
        let table = TableName::from("users");
        let constraint = Constraint::from(UniqueConstraint::new(cols(&["email"])).unwrap());

        assert_eq!(constraint.kind(), ConstraintKind::Unique);
        assert_eq!(constraint.columns(), cols(&["email"]).as_slice());
        assert_eq!(constraint.name(&table), "uq_users_email");

        let renamed = constraint.named("uq_legacy");
        assert_eq!(renamed.name(&table), "uq_legacy");
        assert_eq!(renamed, constraint);
    }

    #[test]
    fn test_raw_formatter_renders_unquoted() {
        let pk = PrimaryKeyConstraint::new(cols(&["id"])).unwrap();
        let sql = pk.to_definition_sql(&RawFormatter, &TableName::from("users"));
        assert_eq!(sql_string(sql), "CONSTRAINT pk_users PRIMARY KEY (id)");
    }

    #[test]
    fn test_constraint_serde_round_trip() {
        let table = TableName::from("users");
        let constraint = Constraint::from(
            UniqueConstraint::new(cols(&["email", "tenant"]))
                .unwrap()
                .named("uq_legacy"),
        );

        let json = serde_json::to_string(&constraint).unwrap();
        let back: Constraint = serde_json::from_str(&json).unwrap();

        assert_eq!(back, constraint);
        assert_eq!(back.name(&table), "uq_legacy");
        assert_eq!(back.columns(), constraint.columns());
    }
}
