//! Result-set labels read by the column decoder.

/// Labels of a JDBC-style `getColumns` metadata result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLabels {
    pub name: String,
    pub data_type: String,
    pub type_name: String,
    pub column_size: String,
    pub decimal_digits: String,
    pub nullable: String,
    pub remarks: String,
    pub default_value: String,
    pub char_octet_length: String,
    pub ordinal_position: String,
    pub is_nullable: String,
    pub auto_increment: String,
    /// Key label. Standard `getColumns` results carry none.
    pub column_key: Option<String>,
}

impl ColumnLabels {
    /// The labels defined for `DatabaseMetaData.getColumns`.
    pub fn jdbc() -> Self {
        Self {
            name: "COLUMN_NAME".to_string(),
            data_type: "DATA_TYPE".to_string(),
            type_name: "TYPE_NAME".to_string(),
            column_size: "COLUMN_SIZE".to_string(),
            decimal_digits: "DECIMAL_DIGITS".to_string(),
            nullable: "NULLABLE".to_string(),
            remarks: "REMARKS".to_string(),
            default_value: "COLUMN_DEF".to_string(),
            char_octet_length: "CHAR_OCTET_LENGTH".to_string(),
            ordinal_position: "ORDINAL_POSITION".to_string(),
            is_nullable: "IS_NULLABLE".to_string(),
            auto_increment: "IS_AUTOINCREMENT".to_string(),
            column_key: None,
        }
    }

    /// Read the key role from `label`.
    ///
    /// # Example
    ///
    /// ```
    /// use schema_meta_rs::ColumnLabels;
    ///
    /// let labels = ColumnLabels::jdbc().with_column_key("COLUMN_KEY");
    /// assert_eq!(labels.column_key.as_deref(), Some("COLUMN_KEY"));
    /// ```
    pub fn with_column_key(mut self, label: impl Into<String>) -> Self {
        self.column_key = Some(label.into());
        self
    }

    /// Use a different label for the column name.
    pub fn with_name(mut self, label: impl Into<String>) -> Self {
        self.name = label.into();
        self
    }

    /// Use a different label for the remarks.
    pub fn with_remarks(mut self, label: impl Into<String>) -> Self {
        self.remarks = label.into();
        self
    }
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self::jdbc()
    }
}

/// Labels of a MySQL `information_schema.COLUMNS` result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MySqlLabels {
    pub name: String,
    /// Bare type name, e.g. `varchar`.
    pub data_type: String,
    pub character_maximum_length: String,
    pub character_octet_length: String,
    pub numeric_precision: String,
    pub numeric_scale: String,
    pub is_nullable: String,
    pub default_value: String,
    pub comment: String,
    pub ordinal_position: String,
    pub column_key: String,
    pub extra: String,
    pub privileges: String,
}

impl MySqlLabels {
    /// The labels of `information_schema.COLUMNS`.
    pub fn information_schema() -> Self {
        Self {
            name: "COLUMN_NAME".to_string(),
            data_type: "DATA_TYPE".to_string(),
            character_maximum_length: "CHARACTER_MAXIMUM_LENGTH".to_string(),
            character_octet_length: "CHARACTER_OCTET_LENGTH".to_string(),
            numeric_precision: "NUMERIC_PRECISION".to_string(),
            numeric_scale: "NUMERIC_SCALE".to_string(),
            is_nullable: "IS_NULLABLE".to_string(),
            default_value: "COLUMN_DEFAULT".to_string(),
            comment: "COLUMN_COMMENT".to_string(),
            ordinal_position: "ORDINAL_POSITION".to_string(),
            column_key: "COLUMN_KEY".to_string(),
            extra: "EXTRA".to_string(),
            privileges: "PRIVILEGES".to_string(),
        }
    }
}

impl Default for MySqlLabels {
    fn default() -> Self {
        Self::information_schema()
    }
}
