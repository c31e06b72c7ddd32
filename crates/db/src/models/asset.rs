//! Asset models and DTOs.

use inventory_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `assets` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Asset {
    pub id: DbId,
    pub name: String,
    pub asset_class: String,
    pub asset_type: String,
}

/// DTO for registering a new asset.
///
/// Fields not listed here are ignored when deserializing.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAsset {
    pub name: String,
    pub asset_type: String,
    pub asset_class: String,
}
