//! Schema metadata types.

mod column;
mod columns;
mod hierarchy;
mod mysql;
pub mod sql_type;
mod table;

pub use column::{ColumnMetadata, KeyRole, Nullability, YesNo, KEY_MUL, KEY_PRIMARY, KEY_UNIQUE};
pub use columns::TableColumns;
pub use hierarchy::{Catalog, Database, SchemaInfo, Server, MYSQL_DEFAULT_CATALOG};
pub use mysql::MySqlColumnMetadata;
pub use sql_type::{mysql_type_code, SqlType};
pub use table::{Schema, TableDescriptor};
