//! Database pool management and schema setup

use crate::orm;
use once_cell::sync::OnceCell;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Schema,
    Statement,
};

static DB_POOL: OnceCell<DatabaseConnection> = OnceCell::new();

/// Connect the global pool. Call once at startup.
pub async fn init_db(database_url: String) {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(true);

    let pool = Database::connect(options)
        .await
        .expect("Failed to connect to database");

    DB_POOL
        .set(pool)
        .expect("init_db() called more than once");
    log::info!("Database pool initialized");
}

pub fn get_db_pool() -> &'static DatabaseConnection {
    DB_POOL.get().expect("init_db() must be called first")
}

/// Create every table, derived from the entity definitions, plus the indexes
/// the entity derive cannot express.
///
/// Idempotent; safe to run against a database that already has the schema.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let tables = [
        schema.create_table_from_entity(orm::records::Entity),
        schema.create_table_from_entity(orm::categories::Entity),
        schema.create_table_from_entity(orm::entries::Entity),
        schema.create_table_from_entity(orm::entry_categories::Entity),
        schema.create_table_from_entity(orm::genders::Entity),
        schema.create_table_from_entity(orm::artists::Entity),
        schema.create_table_from_entity(orm::artist_genders::Entity),
        schema.create_table_from_entity(orm::songs::Entity),
        schema.create_table_from_entity(orm::polls::Entity),
        schema.create_table_from_entity(orm::poll_choices::Entity),
    ];
    for mut table in tables {
        db.execute(backend.build(table.if_not_exists())).await?;
    }

    // Entry slugs are unique per publish day. That takes an expression index
    // over the date part of pub_date, which no entity attribute can declare.
    let entry_slug_index = match backend {
        DbBackend::Postgres => {
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_entries_pub_day_slug \
             ON entries ((pub_date::date), slug)"
        }
        _ => {
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_entries_pub_day_slug \
             ON entries (date(pub_date), slug)"
        }
    };
    let statements = [
        entry_slug_index,
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_entry_categories_pair \
         ON entry_categories (entry_id, category_id)",
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_artist_genders_pair \
         ON artist_genders (artist_id, gender_id)",
    ];
    for sql in statements {
        db.execute(Statement::from_string(backend, sql.to_owned()))
            .await?;
    }

    Ok(())
}
