//! Mapping of raw metadata rows into typed records.
//!
//! Running the metadata query is the caller's job. This module takes the
//! rows it produced and builds [`ColumnMetadata`](crate::ColumnMetadata)
//! and [`MySqlColumnMetadata`](crate::MySqlColumnMetadata) values.

mod decode;
mod labels;
mod row;
mod value;

pub use decode::{ColumnDecoder, MySqlColumnDecoder};
pub use labels::{ColumnLabels, MySqlLabels};
pub use row::{MetaRow, RowHeader};
pub use value::MetaValue;
