//! Decoding of metadata rows into column records.
//!
//! Required cells (name, type, ordinal position) must be present and
//! non-NULL. Anything else that is missing or NULL takes the same "unknown"
//! value [`ColumnMetadata::with_name_and_type`] uses.

use crate::error::{Error, Result};
use crate::types::{mysql_type_code, ColumnMetadata, MySqlColumnMetadata, TableColumns};

use super::labels::{ColumnLabels, MySqlLabels};
use super::row::MetaRow;
use super::value::MetaValue;

/// Builds [`ColumnMetadata`] from `getColumns`-style rows.
#[derive(Debug, Clone, Default)]
pub struct ColumnDecoder {
    labels: ColumnLabels,
}

impl ColumnDecoder {
    /// Create a decoder reading rows through `labels`.
    pub fn new(labels: ColumnLabels) -> Self {
        Self { labels }
    }

    /// Decode one row.
    pub fn decode_column(&self, row: &MetaRow) -> Result<ColumnMetadata> {
        let l = &self.labels;

        let name = required_text(row, &l.name)?;
        let data_type = required_int(row, &l.data_type)?;
        let ordinal_position = required_int(row, &l.ordinal_position)?;

        let column_key = match &l.column_key {
            Some(label) => optional_text(row, label),
            None => None,
        };

        let column = ColumnMetadata::new(
            name,
            data_type,
            optional_text(row, &l.type_name).unwrap_or_default(),
            optional_int(row, &l.column_size)?.unwrap_or(-1),
            optional_int(row, &l.decimal_digits)?.unwrap_or(0),
            optional_int(row, &l.nullable)?.unwrap_or(0),
            optional_text(row, &l.remarks),
            optional_text(row, &l.default_value),
            optional_int(row, &l.char_octet_length)?.unwrap_or(0),
            ordinal_position,
            optional_text(row, &l.is_nullable).unwrap_or_default(),
            optional_text(row, &l.auto_increment).unwrap_or_default(),
            column_key,
        );

        tracing::debug!(
            column = column.name(),
            data_type = column.data_type(),
            position = column.ordinal_position(),
            "decoded column metadata"
        );
        Ok(column)
    }

    /// Decode every row, stopping at the first error.
    pub fn decode_all<'r, I>(&self, rows: I) -> Result<TableColumns>
    where
        I: IntoIterator<Item = &'r MetaRow>,
    {
        rows.into_iter().map(|row| self.decode_column(row)).collect()
    }
}

/// Builds [`MySqlColumnMetadata`] from `information_schema.COLUMNS` rows.
#[derive(Debug, Clone, Default)]
pub struct MySqlColumnDecoder {
    labels: MySqlLabels,
}

impl MySqlColumnDecoder {
    /// Create a decoder reading rows through `labels`.
    pub fn new(labels: MySqlLabels) -> Self {
        Self { labels }
    }

    /// Decode one row.
    pub fn decode_column(&self, row: &MetaRow) -> Result<MySqlColumnMetadata> {
        let l = &self.labels;

        let name = required_text(row, &l.name)?;
        let raw_type = required_text(row, &l.data_type)?;
        let ordinal_position = required_int(row, &l.ordinal_position)?;

        let char_max_length = optional_size(row, &l.character_maximum_length)?;
        let numeric_precision = optional_size(row, &l.numeric_precision)?;
        let numeric_scale = optional_int(row, &l.numeric_scale)?;

        let is_nullable = optional_text(row, &l.is_nullable).unwrap_or_default();
        let nullable = match is_nullable.as_str() {
            "YES" => 1,
            "NO" => 0,
            _ => 2,
        };

        let extra = optional_text(row, &l.extra);
        let auto_increment = match &extra {
            Some(e) if e.to_ascii_lowercase().contains("auto_increment") => "YES",
            _ => "NO",
        };

        let column_key = optional_text(row, &l.column_key).filter(|key| !key.is_empty());

        let column = MySqlColumnMetadata::new(
            name,
            mysql_type_code(&raw_type),
            raw_type.to_ascii_uppercase(),
            char_max_length.or(numeric_precision).unwrap_or(-1),
            numeric_scale.unwrap_or(0),
            nullable,
            optional_text(row, &l.comment),
            optional_text(row, &l.default_value),
            optional_size(row, &l.character_octet_length)?.unwrap_or(0),
            ordinal_position,
            is_nullable,
            auto_increment,
            column_key,
            numeric_precision.unwrap_or(0),
            numeric_scale.unwrap_or(0),
            extra,
            optional_text(row, &l.privileges),
        );

        tracing::debug!(
            column = column.base().name(),
            type_name = column.base().type_name(),
            position = column.base().ordinal_position(),
            "decoded MySQL column metadata"
        );
        Ok(column)
    }

    /// Decode every row, stopping at the first error.
    pub fn decode_all<'r, I>(&self, rows: I) -> Result<TableColumns<MySqlColumnMetadata>>
    where
        I: IntoIterator<Item = &'r MetaRow>,
    {
        rows.into_iter().map(|row| self.decode_column(row)).collect()
    }
}

fn required<'r>(row: &'r MetaRow, label: &str) -> Result<&'r MetaValue> {
    match row.get_by_name(label) {
        None => Err(Error::column_not_found(label)),
        Some(MetaValue::Null) => Err(Error::null_value(label)),
        Some(value) => Ok(value),
    }
}

/// Present, non-NULL cell or `None`.
fn present<'r>(row: &'r MetaRow, label: &str) -> Option<&'r MetaValue> {
    row.get_by_name(label).filter(|value| !value.is_null())
}

fn text_of(value: &MetaValue) -> String {
    match value {
        MetaValue::Text(s) => s.clone(),
        other => other.to_string(),
    }
}

fn int_of(value: &MetaValue, label: &str) -> Result<i64> {
    value.to_i64().ok_or_else(|| {
        Error::type_conversion(format!("{} is not an integer: {}", label, value))
    })
}

fn required_text(row: &MetaRow, label: &str) -> Result<String> {
    required(row, label).map(text_of)
}

fn required_int(row: &MetaRow, label: &str) -> Result<i32> {
    let value = int_of(required(row, label)?, label)?;
    i32::try_from(value)
        .map_err(|_| Error::type_conversion(format!("{} out of range: {}", label, value)))
}

fn optional_text(row: &MetaRow, label: &str) -> Option<String> {
    present(row, label).map(text_of)
}

fn optional_int(row: &MetaRow, label: &str) -> Result<Option<i32>> {
    match present(row, label) {
        None => Ok(None),
        Some(value) => {
            let value = int_of(value, label)?;
            i32::try_from(value).map(Some).map_err(|_| {
                Error::type_conversion(format!("{} out of range: {}", label, value))
            })
        }
    }
}

/// Like `optional_int`, but sizes beyond `i32` clamp instead of failing.
fn optional_size(row: &MetaRow, label: &str) -> Result<Option<i32>> {
    match present(row, label) {
        None => Ok(None),
        Some(value) => {
            let value = int_of(value, label)?;
            Ok(Some(value.clamp(i32::MIN as i64, i32::MAX as i64) as i32))
        }
    }
}
