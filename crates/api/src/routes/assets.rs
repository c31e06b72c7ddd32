//! Route definitions for the asset inventory.

use axum::routing::get;
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Asset routes, mounted at the root.
///
/// ```text
/// GET    /asset/{id}          -> get_asset
/// GET    /asset/name/{name}   -> get_asset_by_name
/// GET    /assets              -> list_assets
/// POST   /assets              -> create_asset
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/asset/{id}", get(assets::get_asset))
        .route("/asset/name/{name}", get(assets::get_asset_by_name))
        .route(
            "/assets",
            get(assets::list_assets).post(assets::create_asset),
        )
}
