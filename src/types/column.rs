//! Column metadata record.
//!
//! `ColumnMetadata` stores the attributes a metadata source reports for one
//! table column exactly as given. Typed views (`nullability`, `key_role`, ...)
//! interpret the raw values without replacing them.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::sql_type::SqlType;

/// Key code for a primary key column.
pub const KEY_PRIMARY: &str = "PRI";
/// Key code for a unique key column.
pub const KEY_UNIQUE: &str = "UNI";
/// Key code for a column in a non-unique (multiple) key.
pub const KEY_MUL: &str = "MUL";

/// The integer NULLABLE attribute of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullability {
    /// Might not allow NULL values.
    NoNulls,
    /// Definitely allows NULL values.
    Nullable,
    /// Nullability unknown.
    Unknown,
}

impl Nullability {
    /// Create from the raw NULLABLE code (0, 1 or 2).
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Nullability::NoNulls),
            1 => Some(Nullability::Nullable),
            2 => Some(Nullability::Unknown),
            _ => None,
        }
    }

    /// Get the raw NULLABLE code.
    pub fn code(&self) -> i32 {
        match self {
            Nullability::NoNulls => 0,
            Nullability::Nullable => 1,
            Nullability::Unknown => 2,
        }
    }
}

/// A textual YES/NO flag where an empty string means "cannot be determined".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YesNo {
    Yes,
    No,
    Unknown,
}

impl YesNo {
    /// Parse a raw flag. Only "YES", "NO" and "" are recognized.
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "YES" => Some(YesNo::Yes),
            "NO" => Some(YesNo::No),
            "" => Some(YesNo::Unknown),
            _ => None,
        }
    }

    /// Get the raw flag text.
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "YES",
            YesNo::No => "NO",
            YesNo::Unknown => "",
        }
    }
}

/// Role of a column within the keys of its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyRole {
    Primary,
    Unique,
    Multiple,
}

impl KeyRole {
    /// Create from a key code ("PRI", "UNI" or "MUL").
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            KEY_PRIMARY => Some(KeyRole::Primary),
            KEY_UNIQUE => Some(KeyRole::Unique),
            KEY_MUL => Some(KeyRole::Multiple),
            _ => None,
        }
    }

    /// Get the key code.
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyRole::Primary => KEY_PRIMARY,
            KeyRole::Unique => KEY_UNIQUE,
            KeyRole::Multiple => KEY_MUL,
        }
    }
}

/// Descriptive attributes of one table column.
///
/// Values are stored verbatim. `nullable` and `is_nullable` are independent
/// signals from the source and are never reconciled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    name: String,
    data_type: i32,
    type_name: String,
    column_size: i32,
    decimal_digits: i32,
    nullable: i32,
    remarks: Option<String>,
    default_value: Option<String>,
    char_octet_length: i32,
    ordinal_position: i32,
    is_nullable: String,
    auto_increment: String,
    column_key: Option<String>,
}

impl ColumnMetadata {
    /// Create column metadata with every attribute given.
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
    ) -> Self {
        Self {
            name: name.into(),
            data_type,
            type_name: type_name.into(),
            column_size,
            decimal_digits,
            nullable,
            remarks,
            default_value,
            char_octet_length,
            ordinal_position,
            is_nullable: is_nullable.into(),
            auto_increment: auto_increment.into(),
            column_key,
        }
    }

    /// Create column metadata with only a name and a type code.
    ///
    /// Every other attribute takes its "unknown" value: size -1, counts 0,
    /// flags empty, optional strings absent.
    pub fn with_name_and_type(name: impl Into<String>, data_type: i32) -> Self {
        Self {
            name: name.into(),
            data_type,
            type_name: String::new(),
            column_size: -1,
            decimal_digits: 0,
            nullable: 0,
            remarks: None,
            default_value: None,
            char_octet_length: 0,
            ordinal_position: 0,
            is_nullable: String::new(),
            auto_increment: String::new(),
            column_key: None,
        }
    }

    /// Get the column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Vendor-neutral SQL type code.
    pub fn data_type(&self) -> i32 {
        self.data_type
    }

    /// Vendor type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Get the declared size or length of the column.
    pub fn column_size(&self) -> i32 {
        self.column_size
    }

    /// Number of fractional digits. Meaningless for non-numeric types.
    pub fn decimal_digits(&self) -> i32 {
        self.decimal_digits
    }

    /// Raw NULLABLE code; see [`ColumnMetadata::nullability`].
    pub fn nullable(&self) -> i32 {
        self.nullable
    }

    /// Comment describing the column, if any.
    pub fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }

    /// Default value; a quoted literal denotes a string default.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Maximum number of bytes for character types.
    pub fn char_octet_length(&self) -> i32 {
        self.char_octet_length
    }

    /// 1-based position within the table.
    pub fn ordinal_position(&self) -> i32 {
        self.ordinal_position
    }

    /// ISO nullability flag: "YES", "NO" or "" when unknown.
    pub fn is_nullable(&self) -> &str {
        &self.is_nullable
    }

    /// Auto-increment flag: "YES", "NO" or "" when unknown.
    pub fn auto_increment(&self) -> &str {
        &self.auto_increment
    }

    /// Key code ("PRI", "UNI", "MUL") if the column is part of a key.
    pub fn column_key(&self) -> Option<&str> {
        self.column_key.as_deref()
    }

    /// Typed view of the NULLABLE code. `None` for codes outside 0..=2.
    pub fn nullability(&self) -> Option<Nullability> {
        Nullability::from_code(self.nullable)
    }

    /// Typed view of the ISO nullability flag.
    pub fn is_nullable_flag(&self) -> Option<YesNo> {
        YesNo::from_flag(&self.is_nullable)
    }

    /// Typed view of the auto-increment flag.
    pub fn auto_increment_flag(&self) -> Option<YesNo> {
        YesNo::from_flag(&self.auto_increment)
    }

    /// Typed view of the key code. `None` for no key or an unknown code.
    pub fn key_role(&self) -> Option<KeyRole> {
        self.column_key.as_deref().and_then(KeyRole::from_code)
    }

    /// Check if the column is part of the primary key.
    pub fn is_primary_key(&self) -> bool {
        self.key_role() == Some(KeyRole::Primary)
    }

    /// Interpret the type code.
    ///
    /// Returns `Err(Error::UnsupportedType)` for codes with no known type.
    pub fn sql_type(&self) -> Result<SqlType> {
        SqlType::from_code(self.data_type)
    }
}

impl AsRef<ColumnMetadata> for ColumnMetadata {
    fn as_ref(&self) -> &ColumnMetadata {
        self
    }
}

impl std::fmt::Display for ColumnMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.type_name)
    }
}
