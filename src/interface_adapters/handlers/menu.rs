use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use uuid::Uuid;

use crate::domain::entities::MenuItem;
use crate::domain::errors::ApiError;
use crate::interface_adapters::handlers::{map_api_error, storage_error};
use crate::interface_adapters::protocol::{
    CreateMenuItemRequest, ErrorResponse, MenuItemResponse, MenuListResponse,
};
use crate::interface_adapters::state::AppState;

// Handler for listing the menu, name-sorted.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<MenuListResponse>, (StatusCode, Json<ErrorResponse>)> {
    let menu = state.menu_items().map_err(map_api_error)?;

    let items: Vec<MenuItem> = menu
        .find(doc! {})
        .sort(doc! { "name": 1 })
        .await
        .map_err(storage_error)
        .map_err(map_api_error)?
        .try_collect()
        .await
        .map_err(storage_error)
        .map_err(map_api_error)?;

    Ok(Json(MenuListResponse {
        items: items.into_iter().map(MenuItemResponse::from).collect(),
    }))
}

// Handler for fetching one menu item by id.
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<MenuItemResponse>, (StatusCode, Json<ErrorResponse>)> {
    let menu = state.menu_items().map_err(map_api_error)?;

    let item = menu
        .find_one(doc! { "_id": &item_id })
        .await
        .map_err(storage_error)
        .map_err(map_api_error)?
        .ok_or(ApiError::NotFound("menu item"))
        .map_err(map_api_error)?;

    Ok(Json(item.into()))
}

// Handler for adding a menu item.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateMenuItemRequest>,
) -> Result<Json<MenuItemResponse>, (StatusCode, Json<ErrorResponse>)> {
    if payload.name.trim().is_empty() {
        return Err(map_api_error(ApiError::Invalid("name is required")));
    }
    if payload.price_cents <= 0 {
        return Err(map_api_error(ApiError::Invalid(
            "price_cents must be positive",
        )));
    }

    let item = MenuItem {
        id: Uuid::new_v4().to_string(),
        name: payload.name,
        description: payload.description,
        price_cents: payload.price_cents,
        available: true,
    };

    let menu = state.menu_items().map_err(map_api_error)?;
    menu.insert_one(&item)
        .await
        .map_err(storage_error)
        .map_err(map_api_error)?;

    Ok(Json(item.into()))
}
