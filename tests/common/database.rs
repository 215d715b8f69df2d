//! Test database setup
#![allow(dead_code)]

use sea_orm::{Database, DatabaseConnection};

/// Open a fresh in-memory SQLite database with the full schema created.
///
/// Every test gets its own database, so tests are isolated and can run in
/// parallel.
pub async fn setup_test_database() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    backbeat::db::create_schema(&db)
        .await
        .expect("Failed to create schema");

    db
}
