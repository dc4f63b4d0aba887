//! Containment levels above a table: catalog, database and server.

use serde::{Deserialize, Serialize};

use super::table::Schema;

/// Name of the single catalog MySQL reports in `information_schema`.
pub const MYSQL_DEFAULT_CATALOG: &str = "def";

/// A catalog identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Catalog {
    pub name: String,
}

impl Catalog {
    /// Create a catalog.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// A database identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Database {
    pub name: String,
}

impl Database {
    /// Create a database.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// A database server identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Server {
    /// Host name or address.
    pub host: String,
    /// Port, if not the vendor default.
    pub port: Option<u16>,
}

impl Server {
    /// Create a server on the vendor default port.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: None,
        }
    }

    /// Set the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }
}

impl std::fmt::Display for Server {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{}", self.host, port),
            None => f.write_str(&self.host),
        }
    }
}

/// An owned schema that knows its catalog, database and server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaInfo {
    name: String,
    catalog: Option<Catalog>,
    database: Option<Database>,
    server: Option<Server>,
}

impl SchemaInfo {
    /// Create a schema with no known containing levels.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            catalog: None,
            database: None,
            server: None,
        }
    }

    /// Create a MySQL schema.
    ///
    /// MySQL treats schema and database as synonyms and reports a single
    /// catalog named `def`.
    pub fn mysql(database: impl Into<String>, server: Server) -> Self {
        let name = database.into();
        Self {
            catalog: Some(Catalog::new(MYSQL_DEFAULT_CATALOG)),
            database: Some(Database::new(name.clone())),
            server: Some(server),
            name,
        }
    }

    /// Set the catalog.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set the database.
    pub fn with_database(mut self, database: Database) -> Self {
        self.database = Some(database);
        self
    }

    /// Set the server.
    pub fn with_server(mut self, server: Server) -> Self {
        self.server = Some(server);
        self
    }
}

impl Schema for SchemaInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    fn database(&self) -> Option<&Database> {
        self.database.as_ref()
    }

    fn server(&self) -> Option<&Server> {
        self.server.as_ref()
    }
}
