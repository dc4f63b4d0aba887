//! Ordered collection of the columns of one table.

use super::column::ColumnMetadata;

/// The columns of a table, in the order the source supplied them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumns<C = ColumnMetadata> {
    columns: Vec<C>,
}

impl<C: AsRef<ColumnMetadata>> TableColumns<C> {
    /// Create a collection from columns.
    pub fn new(columns: Vec<C>) -> Self {
        Self { columns }
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Get column by index (0-based).
    pub fn get(&self, index: usize) -> Option<&C> {
        self.columns.get(index)
    }

    /// Iterate over columns in order.
    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.columns.iter()
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.as_ref().name()).collect()
    }

    /// Find column by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&C> {
        self.columns
            .iter()
            .find(|c| c.as_ref().name().eq_ignore_ascii_case(name))
    }

    /// Find column by its 1-based ordinal position.
    pub fn by_ordinal(&self, position: i32) -> Option<&C> {
        self.columns
            .iter()
            .find(|c| c.as_ref().ordinal_position() == position)
    }

    /// Columns whose key role is primary, in collection order.
    pub fn primary_key(&self) -> Vec<&C> {
        self.columns
            .iter()
            .filter(|c| c.as_ref().is_primary_key())
            .collect()
    }
}

impl<C: AsRef<ColumnMetadata>> FromIterator<C> for TableColumns<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<C> IntoIterator for TableColumns<C> {
    type Item = C;
    type IntoIter = std::vec::IntoIter<C>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

impl<'a, C> IntoIterator for &'a TableColumns<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
