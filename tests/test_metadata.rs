//! Integration tests for the metadata records and the table hierarchy.

use schema_meta_rs::sql_type::{SQL_TYPE_INTEGER, SQL_TYPE_VARCHAR};
use schema_meta_rs::{
    Catalog, ColumnMetadata, Database, Schema, SchemaInfo, Server, TableColumns,
    TableDescriptor, KEY_PRIMARY,
};

/// Schema stub with fixed levels.
struct StubSchema {
    catalog: Catalog,
    database: Database,
    server: Server,
}

impl Schema for StubSchema {
    fn name(&self) -> &str {
        "inventory"
    }

    fn catalog(&self) -> Option<&Catalog> {
        Some(&self.catalog)
    }

    fn database(&self) -> Option<&Database> {
        Some(&self.database)
    }

    fn server(&self) -> Option<&Server> {
        Some(&self.server)
    }
}

#[test]
fn test_table_without_schema() {
    let table = TableDescriptor::new("parts", None);

    assert_eq!(table.name(), "parts");
    assert!(table.schema().is_none());
    assert_eq!(table.catalog(), None);
    assert_eq!(table.database(), None);
    assert_eq!(table.server(), None);
}

#[test]
fn test_table_reads_through_stub_schema() {
    let schema = StubSchema {
        catalog: Catalog::new("cat1"),
        database: Database::new("db1"),
        server: Server::new("10.0.0.5").with_port(3307),
    };
    let table = TableDescriptor::new("parts", Some(&schema));

    assert_eq!(table.catalog(), Some(&Catalog::new("cat1")));
    assert_eq!(table.database(), Some(&Database::new("db1")));
    assert_eq!(
        table.server().map(|s| s.to_string()),
        Some("10.0.0.5:3307".to_string())
    );
    assert_eq!(table.to_string(), "inventory.parts");
}

#[test]
fn test_many_tables_share_one_schema() {
    let schema = SchemaInfo::new("public").with_database(Database::new("app"));
    let tables: Vec<TableDescriptor<'_>> = ["users", "orders"]
        .into_iter()
        .map(|name| TableDescriptor::new(name, Some(&schema as &dyn Schema)))
        .collect();

    for table in &tables {
        assert_eq!(table.database().map(|d| d.name.as_str()), Some("app"));
        assert!(table.catalog().is_none());
    }
}

#[test]
fn test_column_round_trips_through_json() {
    let column = ColumnMetadata::new(
        "sku",
        SQL_TYPE_VARCHAR,
        "VARCHAR",
        32,
        0,
        0,
        None,
        Some("''".to_string()),
        128,
        2,
        "NO",
        "NO",
        Some(KEY_PRIMARY.to_string()),
    );

    let json = serde_json::to_string(&column).unwrap();
    let back: ColumnMetadata = serde_json::from_str(&json).unwrap();
    assert_eq!(back, column);
    assert_eq!(back.remarks(), None);
    assert_eq!(back.default_value(), Some("''"));
}

#[test]
fn test_schema_info_serializes() {
    let schema = SchemaInfo::mysql("shop", Server::new("db").with_port(3306));
    let value = serde_json::to_value(&schema).unwrap();

    assert_eq!(value["name"], "shop");
    assert_eq!(value["catalog"]["name"], "def");
    assert_eq!(value["server"]["port"], 3306);
}

#[test]
fn test_partial_columns_in_collection() {
    let columns: TableColumns = vec![
        ColumnMetadata::with_name_and_type("id", SQL_TYPE_INTEGER),
        ColumnMetadata::with_name_and_type("label", SQL_TYPE_VARCHAR),
    ]
    .into_iter()
    .collect();

    assert_eq!(columns.len(), 2);
    assert_eq!(
        columns.find_by_name("LABEL").map(|c| c.column_size()),
        Some(-1)
    );
    assert!(columns.primary_key().is_empty());
    assert_eq!(
        columns.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
        vec!["id ()", "label ()"]
    );
}
