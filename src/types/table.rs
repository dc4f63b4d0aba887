//! Table identity and its link to the containing schema.

use super::hierarchy::{Catalog, Database, Server};

/// A schema-like grouping of tables.
///
/// Implementors expose the levels above the schema. Each level may be
/// unknown.
pub trait Schema {
    /// Returns the schema name.
    fn name(&self) -> &str;

    /// Returns the catalog holding the schema.
    fn catalog(&self) -> Option<&Catalog>;

    /// Returns the database holding the schema.
    fn database(&self) -> Option<&Database>;

    /// Returns the server hosting the schema.
    fn server(&self) -> Option<&Server>;
}

/// Identity of one table.
///
/// The table borrows its schema and never owns it. Catalog, database and
/// server are read through the schema on every call.
#[derive(Clone)]
pub struct TableDescriptor<'s> {
    name: String,
    schema: Option<&'s dyn Schema>,
}

impl<'s> TableDescriptor<'s> {
    /// Create a table. `schema` is `None` for a table not yet attached to a
    /// known schema.
    pub fn new(name: impl Into<String>, schema: Option<&'s dyn Schema>) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }

    /// Get the table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the containing schema, if attached.
    pub fn schema(&self) -> Option<&'s dyn Schema> {
        self.schema
    }

    /// Get the catalog of the containing schema.
    pub fn catalog(&self) -> Option<&'s Catalog> {
        self.schema.and_then(|schema| schema.catalog())
    }

    /// Get the database of the containing schema.
    pub fn database(&self) -> Option<&'s Database> {
        self.schema.and_then(|schema| schema.database())
    }

    /// Get the server of the containing schema.
    pub fn server(&self) -> Option<&'s Server> {
        self.schema.and_then(|schema| schema.server())
    }

    /// `schema.table`, or just `table` when detached.
    pub fn qualified_name(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Debug for TableDescriptor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableDescriptor")
            .field("name", &self.name)
            .field("schema", &self.schema.map(|schema| schema.name()))
            .finish()
    }
}

impl std::fmt::Display for TableDescriptor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.schema {
            Some(schema) => write!(f, "{}.{}", schema.name(), self.name),
            None => f.write_str(&self.name),
        }
    }
}
