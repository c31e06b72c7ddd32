//! Repository for the `assets` table.

use std::collections::HashSet;

use inventory_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::asset::{Asset, CreateAsset};

/// Column list for `assets` queries.
const COLUMNS: &str = "id, name, asset_class, asset_type";

/// Provides create and read operations for assets.
///
/// Assets are never updated or deleted through this repository.
pub struct AssetRepo;

impl AssetRepo {
    /// Insert a new asset, returning the stored row with its assigned id.
    ///
    /// Fails with a unique violation (see [`crate::is_unique_violation`]) if
    /// the name is already taken.
    pub async fn create(pool: &SqlitePool, input: &CreateAsset) -> Result<Asset, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets (name, asset_class, asset_type) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(&input.name)
            .bind(&input.asset_class)
            .bind(&input.asset_type)
            .fetch_one(pool)
            .await
    }

    /// Find an asset by ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an asset by its exact name.
    pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE name = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all assets in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets ORDER BY id ASC");
        sqlx::query_as::<_, Asset>(&query).fetch_all(pool).await
    }

    /// Snapshot of every persisted asset name.
    pub async fn list_names(pool: &SqlitePool) -> Result<HashSet<String>, sqlx::Error> {
        let names: Vec<String> = sqlx::query_scalar("SELECT name FROM assets")
            .fetch_all(pool)
            .await?;
        Ok(names.into_iter().collect())
    }
}
