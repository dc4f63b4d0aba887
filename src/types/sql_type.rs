//! Vendor-neutral SQL type codes.
//!
//! The numeric values match the JDBC `java.sql.Types` constants, which is
//! what `DatabaseMetaData.getColumns` reports in its DATA_TYPE column.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const SQL_TYPE_BIT: i32 = -7;
pub const SQL_TYPE_TINYINT: i32 = -6;
pub const SQL_TYPE_SMALLINT: i32 = 5;
pub const SQL_TYPE_INTEGER: i32 = 4;
pub const SQL_TYPE_BIGINT: i32 = -5;
pub const SQL_TYPE_FLOAT: i32 = 6;
pub const SQL_TYPE_REAL: i32 = 7;
pub const SQL_TYPE_DOUBLE: i32 = 8;
pub const SQL_TYPE_NUMERIC: i32 = 2;
pub const SQL_TYPE_DECIMAL: i32 = 3;
pub const SQL_TYPE_CHAR: i32 = 1;
pub const SQL_TYPE_VARCHAR: i32 = 12;
pub const SQL_TYPE_LONGVARCHAR: i32 = -1;
pub const SQL_TYPE_DATE: i32 = 91;
pub const SQL_TYPE_TIME: i32 = 92;
pub const SQL_TYPE_TIMESTAMP: i32 = 93;
pub const SQL_TYPE_BINARY: i32 = -2;
pub const SQL_TYPE_VARBINARY: i32 = -3;
pub const SQL_TYPE_LONGVARBINARY: i32 = -4;
pub const SQL_TYPE_NULL: i32 = 0;
pub const SQL_TYPE_OTHER: i32 = 1111;
pub const SQL_TYPE_BLOB: i32 = 2004;
pub const SQL_TYPE_CLOB: i32 = 2005;
pub const SQL_TYPE_BOOLEAN: i32 = 16;

/// Typed view of a vendor-neutral SQL type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SqlType {
    Bit,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Float,
    Real,
    Double,
    Numeric,
    Decimal,
    Char,
    VarChar,
    LongVarChar,
    Date,
    Time,
    Timestamp,
    Binary,
    VarBinary,
    LongVarBinary,
    Null,
    Other,
    Blob,
    Clob,
    Boolean,
}

impl SqlType {
    /// Create from a raw type code.
    ///
    /// Returns `Err(Error::UnsupportedType)` for codes with no variant.
    pub fn from_code(code: i32) -> Result<Self> {
        let ty = match code {
            SQL_TYPE_BIT => SqlType::Bit,
            SQL_TYPE_TINYINT => SqlType::TinyInt,
            SQL_TYPE_SMALLINT => SqlType::SmallInt,
            SQL_TYPE_INTEGER => SqlType::Integer,
            SQL_TYPE_BIGINT => SqlType::BigInt,
            SQL_TYPE_FLOAT => SqlType::Float,
            SQL_TYPE_REAL => SqlType::Real,
            SQL_TYPE_DOUBLE => SqlType::Double,
            SQL_TYPE_NUMERIC => SqlType::Numeric,
            SQL_TYPE_DECIMAL => SqlType::Decimal,
            SQL_TYPE_CHAR => SqlType::Char,
            SQL_TYPE_VARCHAR => SqlType::VarChar,
            SQL_TYPE_LONGVARCHAR => SqlType::LongVarChar,
            SQL_TYPE_DATE => SqlType::Date,
            SQL_TYPE_TIME => SqlType::Time,
            SQL_TYPE_TIMESTAMP => SqlType::Timestamp,
            SQL_TYPE_BINARY => SqlType::Binary,
            SQL_TYPE_VARBINARY => SqlType::VarBinary,
            SQL_TYPE_LONGVARBINARY => SqlType::LongVarBinary,
            SQL_TYPE_NULL => SqlType::Null,
            SQL_TYPE_OTHER => SqlType::Other,
            SQL_TYPE_BLOB => SqlType::Blob,
            SQL_TYPE_CLOB => SqlType::Clob,
            SQL_TYPE_BOOLEAN => SqlType::Boolean,
            _ => return Err(Error::UnsupportedType { type_code: code }),
        };
        Ok(ty)
    }

    /// Get the raw type code.
    pub fn code(&self) -> i32 {
        match self {
            SqlType::Bit => SQL_TYPE_BIT,
            SqlType::TinyInt => SQL_TYPE_TINYINT,
            SqlType::SmallInt => SQL_TYPE_SMALLINT,
            SqlType::Integer => SQL_TYPE_INTEGER,
            SqlType::BigInt => SQL_TYPE_BIGINT,
            SqlType::Float => SQL_TYPE_FLOAT,
            SqlType::Real => SQL_TYPE_REAL,
            SqlType::Double => SQL_TYPE_DOUBLE,
            SqlType::Numeric => SQL_TYPE_NUMERIC,
            SqlType::Decimal => SQL_TYPE_DECIMAL,
            SqlType::Char => SQL_TYPE_CHAR,
            SqlType::VarChar => SQL_TYPE_VARCHAR,
            SqlType::LongVarChar => SQL_TYPE_LONGVARCHAR,
            SqlType::Date => SQL_TYPE_DATE,
            SqlType::Time => SQL_TYPE_TIME,
            SqlType::Timestamp => SQL_TYPE_TIMESTAMP,
            SqlType::Binary => SQL_TYPE_BINARY,
            SqlType::VarBinary => SQL_TYPE_VARBINARY,
            SqlType::LongVarBinary => SQL_TYPE_LONGVARBINARY,
            SqlType::Null => SQL_TYPE_NULL,
            SqlType::Other => SQL_TYPE_OTHER,
            SqlType::Blob => SQL_TYPE_BLOB,
            SqlType::Clob => SQL_TYPE_CLOB,
            SqlType::Boolean => SQL_TYPE_BOOLEAN,
        }
    }
}

impl std::fmt::Display for SqlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SqlType::Bit => "BIT",
            SqlType::TinyInt => "TINYINT",
            SqlType::SmallInt => "SMALLINT",
            SqlType::Integer => "INTEGER",
            SqlType::BigInt => "BIGINT",
            SqlType::Float => "FLOAT",
            SqlType::Real => "REAL",
            SqlType::Double => "DOUBLE",
            SqlType::Numeric => "NUMERIC",
            SqlType::Decimal => "DECIMAL",
            SqlType::Char => "CHAR",
            SqlType::VarChar => "VARCHAR",
            SqlType::LongVarChar => "LONGVARCHAR",
            SqlType::Date => "DATE",
            SqlType::Time => "TIME",
            SqlType::Timestamp => "TIMESTAMP",
            SqlType::Binary => "BINARY",
            SqlType::VarBinary => "VARBINARY",
            SqlType::LongVarBinary => "LONGVARBINARY",
            SqlType::Null => "NULL",
            SqlType::Other => "OTHER",
            SqlType::Blob => "BLOB",
            SqlType::Clob => "CLOB",
            SqlType::Boolean => "BOOLEAN",
        };
        f.write_str(name)
    }
}

/// Map a MySQL `DATA_TYPE` name to a vendor-neutral type code.
///
/// Matching is case-insensitive. Unknown names map to `SQL_TYPE_OTHER`.
pub fn mysql_type_code(type_name: &str) -> i32 {
    match type_name.trim().to_ascii_lowercase().as_str() {
        "bit" => SQL_TYPE_BIT,
        "bool" | "boolean" => SQL_TYPE_BOOLEAN,
        "tinyint" => SQL_TYPE_TINYINT,
        "smallint" => SQL_TYPE_SMALLINT,
        "mediumint" | "int" | "integer" => SQL_TYPE_INTEGER,
        "bigint" => SQL_TYPE_BIGINT,
        "float" => SQL_TYPE_REAL,
        "double" | "double precision" | "real" => SQL_TYPE_DOUBLE,
        "decimal" | "numeric" => SQL_TYPE_DECIMAL,
        "char" | "enum" | "set" => SQL_TYPE_CHAR,
        "varchar" => SQL_TYPE_VARCHAR,
        "tinytext" | "text" | "mediumtext" | "longtext" | "json" => SQL_TYPE_LONGVARCHAR,
        "date" | "year" => SQL_TYPE_DATE,
        "time" => SQL_TYPE_TIME,
        "datetime" | "timestamp" => SQL_TYPE_TIMESTAMP,
        "binary" | "geometry" => SQL_TYPE_BINARY,
        "varbinary" => SQL_TYPE_VARBINARY,
        "tinyblob" | "blob" | "mediumblob" | "longblob" => SQL_TYPE_LONGVARBINARY,
        _ => {
            tracing::warn!(type_name, "no vendor-neutral mapping for MySQL type, using OTHER");
            SQL_TYPE_OTHER
        }
    }
}
