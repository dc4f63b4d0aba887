//! Metadata rows.

use std::sync::Arc;

use super::value::MetaValue;

/// Column labels shared by all rows of one metadata result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowHeader {
    labels: Vec<String>,
}

impl RowHeader {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Get the number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if there are no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Find label index by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.labels
            .iter()
            .position(|label| label.eq_ignore_ascii_case(name))
    }
}

/// A row of a metadata result.
#[derive(Debug, Clone)]
pub struct MetaRow {
    values: Vec<MetaValue>,
    header: Arc<RowHeader>,
}

impl MetaRow {
    /// Create a new row with values and a shared header.
    pub fn new(values: Vec<MetaValue>, header: Arc<RowHeader>) -> Self {
        Self { values, header }
    }

    /// Get value by index (0-based).
    pub fn get(&self, index: usize) -> Option<&MetaValue> {
        self.values.get(index)
    }

    /// Get value by label (case-insensitive).
    pub fn get_by_name(&self, name: &str) -> Option<&MetaValue> {
        self.header
            .find_by_name(name)
            .and_then(|idx| self.values.get(idx))
    }

    /// Get the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get all values.
    pub fn values(&self) -> &[MetaValue] {
        &self.values
    }

    /// Get the labels.
    pub fn labels(&self) -> &[String] {
        self.header.labels()
    }
}
