//! Postgres storage for the shipping method catalog

use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::domain::aggregates::ShippingMethod;

pub async fn connect(config: &AppConfig, database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(database_url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(pool)
}

/// Inserts the default methods that are not in the table yet. Returns how many were added.
pub async fn seed_default_methods(db: &PgPool) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;
    for method in ShippingMethod::seeded_catalog() {
        inserted += sqlx::query(
            "INSERT INTO shipping_methods (id, code, display_name, params_json, is_active, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) ON CONFLICT (code) DO NOTHING",
        )
        .bind(method.id)
        .bind(&method.code)
        .bind(&method.display_name)
        .bind(&method.params_json)
        .bind(method.is_active)
        .bind(method.created_at)
        .bind(method.updated_at)
        .execute(db)
        .await?
        .rows_affected();
    }
    Ok(inserted)
}

pub async fn list_methods(db: &PgPool) -> Result<Vec<ShippingMethod>, sqlx::Error> {
    sqlx::query_as::<_, ShippingMethod>("SELECT * FROM shipping_methods ORDER BY created_at, code")
        .fetch_all(db)
        .await
}

pub async fn find_method(db: &PgPool, id: Uuid) -> Result<Option<ShippingMethod>, sqlx::Error> {
    sqlx::query_as::<_, ShippingMethod>("SELECT * FROM shipping_methods WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn save_method(db: &PgPool, method: &ShippingMethod) -> Result<ShippingMethod, sqlx::Error> {
    sqlx::query_as::<_, ShippingMethod>(
        "UPDATE shipping_methods SET display_name = $2, params_json = $3, is_active = $4, updated_at = $5 \
         WHERE id = $1 RETURNING *",
    )
    .bind(method.id)
    .bind(&method.display_name)
    .bind(&method.params_json)
    .bind(method.is_active)
    .bind(method.updated_at)
    .fetch_one(db)
    .await
}
