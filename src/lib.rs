//! Relational schema metadata for Rust
//!
//! Typed, read-only records for the column and table metadata a database
//! reports: column attributes, MySQL-specific column attributes, and a
//! table identity that reaches its catalog, database and server through the
//! schema it belongs to.
//!
//! # Example
//!
//! ```
//! use schema_meta_rs::{ColumnMetadata, Schema, SchemaInfo, Server, TableDescriptor};
//! use schema_meta_rs::sql_type::SQL_TYPE_INTEGER;
//!
//! let schema = SchemaInfo::mysql("shop", Server::new("localhost").with_port(3306));
//! let table = TableDescriptor::new("orders", Some(&schema as &dyn Schema));
//! assert_eq!(table.database().map(|db| db.name.as_str()), Some("shop"));
//!
//! let id = ColumnMetadata::new(
//!     "id", SQL_TYPE_INTEGER, "INT", 11, 0, 0, None, None, 0, 1, "NO", "YES",
//!     Some("PRI".to_string()),
//! );
//! assert_eq!(id.to_string(), "id (INT)");
//! assert!(id.is_primary_key());
//! ```

pub mod error;
pub mod source;
pub mod types;

// Re-export main types
pub use error::{Error, Result};
pub use source::{
    ColumnDecoder, ColumnLabels, MetaRow, MetaValue, MySqlColumnDecoder, MySqlLabels, RowHeader,
};
pub use types::sql_type;
pub use types::{
    Catalog, ColumnMetadata, Database, KeyRole, MySqlColumnMetadata, Nullability, Schema,
    SchemaInfo, Server, SqlType, TableColumns, TableDescriptor, YesNo, KEY_MUL, KEY_PRIMARY,
    KEY_UNIQUE,
};
