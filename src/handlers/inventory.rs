use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::Item,
    AppState,
};

// Every handler answers with the full post-operation collection, the wire
// contract of this API. Malformed bodies are surfaced as 400 before the
// store is touched; a UID that matches nothing is a 404.

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn get_inventory(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<Item>>)> {
    let inventory = state.inventory.read().await;
    let items = inventory.snapshot();

    info!(count = items.len(), "Listed inventory");

    Ok((StatusCode::OK, Json(items)))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<Item>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Vec<Item>>)> {
    let Json(item) = payload.map_err(|err| AppError::BadRequest(err.body_text()))?;

    let mut inventory = state.inventory.write().await;
    info!(uid = %item.uid, name = %item.name, "Created item");
    inventory.append(item);

    Ok((StatusCode::CREATED, Json(inventory.snapshot())))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_item(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> AppResult<(StatusCode, Json<Vec<Item>>)> {
    let mut inventory = state.inventory.write().await;
    let removed = inventory.remove_by_uid(&uid);
    if removed == 0 {
        return Err(AppError::NotFound(format!("Item {} not found", uid)));
    }

    info!(%uid, removed, "Deleted item");

    Ok((StatusCode::OK, Json(inventory.snapshot())))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_item(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    payload: Result<Json<Item>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Vec<Item>>)> {
    let Json(mut item) = payload.map_err(|err| AppError::BadRequest(err.body_text()))?;

    // The path segment is authoritative; a body UID never overrides it.
    item.uid = uid.clone();

    let mut inventory = state.inventory.write().await;
    let replaced = inventory.replace_by_uid(&uid, item);
    if replaced == 0 {
        return Err(AppError::NotFound(format!("Item {} not found", uid)));
    }

    info!(%uid, replaced, "Updated item");

    Ok((StatusCode::OK, Json(inventory.snapshot())))
}
