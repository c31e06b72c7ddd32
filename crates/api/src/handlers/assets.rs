//! Handlers for the asset inventory.
//!
//! Reads go straight to [`AssetRepo`]. Writes run the validator against the
//! current name set first, then rely on the store's unique constraint to
//! settle any race with a concurrent write.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use inventory_core::error::CoreError;
use inventory_core::types::DbId;
use inventory_core::validation::{validate_asset, AssetRejection};
use inventory_db::models::asset::{Asset, CreateAsset};
use inventory_db::repositories::AssetRepo;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::{AppError, AppResult};
use crate::extract::AssetJson;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// Public fields of an asset, without its id.
#[derive(Debug, Serialize)]
pub struct AssetFields<'a> {
    pub name: &'a str,
    pub asset_class: &'a str,
    pub asset_type: &'a str,
}

impl<'a> From<&'a Asset> for AssetFields<'a> {
    fn from(asset: &'a Asset) -> Self {
        Self {
            name: &asset.name,
            asset_class: &asset.asset_class,
            asset_type: &asset.asset_type,
        }
    }
}

/// An asset serialized without its id: `{"name", "asset_class", "asset_type"}`.
pub struct AssetBody(pub Asset);

impl Serialize for AssetBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        AssetFields::from(&self.0).serialize(serializer)
    }
}

/// An asset serialized as a single-entry object keyed by its id:
/// `{"<id>": {"name": ..., "asset_class": ..., "asset_type": ...}}`.
pub struct KeyedAsset(pub Asset);

impl Serialize for KeyedAsset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.0.id, &AssetFields::from(&self.0))?;
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /asset/{id}
///
/// A path segment that is not an integer cannot name an asset and is treated
/// as not found.
pub async fn get_asset(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id: DbId = raw_id.parse().map_err(|_| CoreError::NotFound)?;

    let asset = AssetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound)?;

    Ok(Json(AssetBody(asset)))
}

/// GET /asset/name/{name}
pub async fn get_asset_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let asset = AssetRepo::find_by_name(&state.pool, &name)
        .await?
        .ok_or(CoreError::NotFound)?;

    Ok(Json(AssetBody(asset)))
}

/// GET /assets
///
/// An empty store yields `[]`, never 404.
pub async fn list_assets(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let assets = AssetRepo::list(&state.pool).await?;
    let keyed: Vec<KeyedAsset> = assets.into_iter().map(KeyedAsset).collect();

    Ok(Json(keyed))
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// POST /assets
///
/// Register a new asset. Responds 201 with the keyed asset, or 400 with the
/// first validation failure.
pub async fn create_asset(
    State(state): State<AppState>,
    AssetJson(input): AssetJson<CreateAsset>,
) -> AppResult<impl IntoResponse> {
    let existing_names = AssetRepo::list_names(&state.pool).await?;

    if let Err(rejection) = validate_asset(
        &input.name,
        &input.asset_type,
        &input.asset_class,
        &existing_names,
    ) {
        tracing::debug!(name = %input.name, reason = %rejection, "Asset rejected");
        return Err(CoreError::Rejected(rejection).into());
    }

    let asset = AssetRepo::create(&state.pool, &input)
        .await
        .map_err(map_create_error)?;

    tracing::info!(
        asset_id = asset.id,
        name = %asset.name,
        asset_type = %asset.asset_type,
        asset_class = %asset.asset_class,
        "Asset registered",
    );

    Ok((StatusCode::CREATED, Json(KeyedAsset(asset))))
}

/// A unique violation here means a concurrent request claimed the name
/// between the validator's lookup and the insert.
fn map_create_error(err: sqlx::Error) -> AppError {
    if inventory_db::is_unique_violation(&err) {
        tracing::debug!("Asset name claimed by a concurrent write");
        CoreError::Rejected(AssetRejection::DuplicateName).into()
    } else {
        err.into()
    }
}
