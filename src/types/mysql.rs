//! MySQL column metadata.

use serde::{Deserialize, Serialize};

use super::column::ColumnMetadata;

/// Column metadata with the extra attributes MySQL reports in
/// `information_schema.COLUMNS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MySqlColumnMetadata {
    base: ColumnMetadata,
    numeric_precision: i32,
    numeric_scale: i32,
    extra: Option<String>,
    privileges: Option<String>,
}

impl MySqlColumnMetadata {
    /// Create MySQL column metadata with every attribute given.
    ///
    /// The first thirteen arguments are the common attributes, in the order
    /// [`ColumnMetadata::new`] takes them.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        data_type: i32,
        type_name: impl Into<String>,
        column_size: i32,
        decimal_digits: i32,
        nullable: i32,
        remarks: Option<String>,
        default_value: Option<String>,
        char_octet_length: i32,
        ordinal_position: i32,
        is_nullable: impl Into<String>,
        auto_increment: impl Into<String>,
        column_key: Option<String>,
        numeric_precision: i32,
        numeric_scale: i32,
        extra: Option<String>,
        privileges: Option<String>,
    ) -> Self {
        let base = ColumnMetadata::new(
            name,
            data_type,
            type_name,
            column_size,
            decimal_digits,
            nullable,
            remarks,
            default_value,
            char_octet_length,
            ordinal_position,
            is_nullable,
            auto_increment,
            column_key,
        );
        Self::from_base(base, numeric_precision, numeric_scale, extra, privileges)
    }

    /// Create MySQL column metadata from already-built common attributes.
    pub fn from_base(
        base: ColumnMetadata,
        numeric_precision: i32,
        numeric_scale: i32,
        extra: Option<String>,
        privileges: Option<String>,
    ) -> Self {
        Self {
            base,
            numeric_precision,
            numeric_scale,
            extra,
            privileges,
        }
    }

    /// The common column attributes.
    pub fn base(&self) -> &ColumnMetadata {
        &self.base
    }

    /// Get the numeric precision of the column.
    pub fn numeric_precision(&self) -> i32 {
        self.numeric_precision
    }

    /// Get the numeric scale of the column.
    pub fn numeric_scale(&self) -> i32 {
        self.numeric_scale
    }

    /// The EXTRA attribute, e.g. `auto_increment`.
    pub fn extra(&self) -> Option<&str> {
        self.extra.as_deref()
    }

    /// Comma-separated privileges the current user holds on the column.
    pub fn privileges(&self) -> Option<&str> {
        self.privileges.as_deref()
    }
}

impl AsRef<ColumnMetadata> for MySqlColumnMetadata {
    fn as_ref(&self) -> &ColumnMetadata {
        &self.base
    }
}

impl std::fmt::Display for MySqlColumnMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.base, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::column::KEY_PRIMARY;
    use crate::types::sql_type::{SQL_TYPE_DECIMAL, SQL_TYPE_INTEGER};

    fn make_base() -> ColumnMetadata {
        ColumnMetadata::new(
            "price",
            SQL_TYPE_DECIMAL,
            "DECIMAL",
            10,
            2,
            0,
            None,
            Some("0.00".to_string()),
            0,
            2,
            "NO",
            "NO",
            Some(KEY_PRIMARY.to_string()),
        )
    }

    #[test]
    fn test_flat_constructor_stores_values() {
        let col = MySqlColumnMetadata::new(
            "id",
            SQL_TYPE_INTEGER,
            "INT",
            11,
            0,
            0,
            Some("row id".to_string()),
            None,
            0,
            1,
            "NO",
            "YES",
            Some(KEY_PRIMARY.to_string()),
            10,
            0,
            Some("auto_increment".to_string()),
            Some("select,insert".to_string()),
        );

        assert_eq!(col.base().name(), "id");
        assert_eq!(col.base().data_type(), SQL_TYPE_INTEGER);
        assert_eq!(col.base().type_name(), "INT");
        assert_eq!(col.base().column_size(), 11);
        assert_eq!(col.base().decimal_digits(), 0);
        assert_eq!(col.base().nullable(), 0);
        assert_eq!(col.base().remarks(), Some("row id"));
        assert_eq!(col.base().default_value(), None);
        assert_eq!(col.base().char_octet_length(), 0);
        assert_eq!(col.base().ordinal_position(), 1);
        assert_eq!(col.base().is_nullable(), "NO");
        assert_eq!(col.base().auto_increment(), "YES");
        assert_eq!(col.base().column_key(), Some("PRI"));
        assert_eq!(col.numeric_precision(), 10);
        assert_eq!(col.numeric_scale(), 0);
        assert_eq!(col.extra(), Some("auto_increment"));
        assert_eq!(col.privileges(), Some("select,insert"));
    }

    #[test]
    fn test_flat_constructor_matches_from_base() {
        let flat = MySqlColumnMetadata::new(
            "price",
            SQL_TYPE_DECIMAL,
            "DECIMAL",
            10,
            2,
            0,
            None,
            Some("0.00".to_string()),
            0,
            2,
            "NO",
            "NO",
            Some(KEY_PRIMARY.to_string()),
            12,
            4,
            None,
            None,
        );

        assert_eq!(flat, MySqlColumnMetadata::from_base(make_base(), 12, 4, None, None));
    }

    #[test]
    fn test_base_and_extra_fields_are_independent() {
        let col = MySqlColumnMetadata::from_base(
            make_base(),
            12,
            4,
            Some("auto_increment".to_string()),
            Some("select,insert".to_string()),
        );

        assert_eq!(col.base(), &make_base());
        assert_eq!(col.base().column_size(), 10);
        assert_eq!(col.base().decimal_digits(), 2);
        assert_eq!(col.numeric_precision(), 12);
        assert_eq!(col.numeric_scale(), 4);
        assert_eq!(col.extra(), Some("auto_increment"));
        assert_eq!(col.privileges(), Some("select,insert"));
    }

    #[test]
    fn test_absent_extra_fields() {
        let col = MySqlColumnMetadata::from_base(make_base(), 0, 0, None, None);
        assert_eq!(col.extra(), None);
        assert_eq!(col.privileges(), None);
        assert_eq!(col.to_string(), "price (DECIMAL)");
    }
}
