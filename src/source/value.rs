//! Cell values of a metadata row.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One cell of a metadata row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetaValue {
    /// NULL value.
    Null,
    /// Integer value.
    Int(i64),
    /// Text value.
    Text(String),
}

impl MetaValue {
    /// Check if the value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, MetaValue::Null)
    }

    /// Try to get the value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetaValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to convert to i64. Text is parsed after trimming whitespace.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            MetaValue::Int(i) => Some(*i),
            MetaValue::Text(s) => s.trim().parse().ok(),
            MetaValue::Null => None,
        }
    }
}

impl From<i64> for MetaValue {
    fn from(value: i64) -> Self {
        MetaValue::Int(value)
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::Text(value.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(value: String) -> Self {
        MetaValue::Text(value)
    }
}

impl<T: Into<MetaValue>> From<Option<T>> for MetaValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(MetaValue::Null, Into::into)
    }
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Null => write!(f, "NULL"),
            MetaValue::Int(i) => write!(f, "{}", i),
            MetaValue::Text(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_value_null() {
        let val = MetaValue::Null;
        assert!(val.is_null());
        assert_eq!(val.as_str(), None);
        assert_eq!(val.to_i64(), None);
        assert_eq!(format!("{}", val), "NULL");
    }

    #[test]
    fn test_meta_value_text() {
        let val = MetaValue::from("VARCHAR");
        assert!(!val.is_null());
        assert_eq!(val.as_str(), Some("VARCHAR"));
        assert_eq!(val.to_i64(), None);

        let num = MetaValue::from(" 42 ");
        assert_eq!(num.to_i64(), Some(42));
    }

    #[test]
    fn test_meta_value_int() {
        let val = MetaValue::from(12i64);
        assert_eq!(val.to_i64(), Some(12));
        assert_eq!(val.as_str(), None);
        assert_eq!(format!("{}", val), "12");
    }

    #[test]
    fn test_meta_value_from_option() {
        assert_eq!(MetaValue::from(None::<&str>), MetaValue::Null);
        assert_eq!(MetaValue::from(Some(7i64)), MetaValue::Int(7));
    }
}
