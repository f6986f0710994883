//! # sqlforge-schema
//!
//! SQL table constraints as first-class values: deterministic auto-naming,
//! structural equality for schema diffing, and dialect-neutral DDL
//! rendering.
//!
//! The crate produces DDL *fragments* — a `CONSTRAINT …` clause for a
//! `CREATE TABLE` column list and a complete `ALTER TABLE … DROP
//! CONSTRAINT IF EXISTS …` statement — and leaves statement assembly,
//! migration execution and introspection to its callers. Identifier
//! quoting is injected through the [`SqlFormatter`] capability so the same
//! constraint value renders correctly for any dialect.
//!
//! ```rust
//! use sqlforge_schema::{ColumnName, GenericFormatter, TableName, UniqueConstraint};
//!
//! let users = TableName::from("users");
//! let unique = UniqueConstraint::new(vec![
//!     ColumnName::from("email"),
//!     ColumnName::from("tenant"),
//! ])?;
//!
//! assert_eq!(unique.name(&users), "uq_users_email_tenant");
//!
//! let sql = unique.to_definition_sql(&GenericFormatter::new(), &users);
//! assert_eq!(
//!     String::from_utf8(sql).unwrap(),
//!     r#"CONSTRAINT "uq_users_email_tenant" UNIQUE ("email", "tenant")"#
//! );
//! # Ok::<(), sqlforge_schema::SchemaError>(())
//! ```
//!
//! Equality on constraint values is structural and kind-sensitive: column
//! order and explicit name overrides are ignored, so a declared constraint
//! compares equal to its introspected counterpart even when the database
//! reports the columns in a different order under a legacy name.

pub mod constraint;
pub mod error;
pub mod formatter;
pub mod ident;
pub mod index;

pub use constraint::{
    Constraint, ConstraintKind, ForeignKeyConstraint, PrimaryKeyConstraint, UniqueConstraint,
};
pub use error::{Result, SchemaError};
pub use formatter::{GenericFormatter, SqlFormatter};
pub use ident::{ColumnName, TableName};
pub use index::UniqueIndex;
