use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use uuid::Uuid;

use crate::domain::entities::{Order, OrderLine, OrderStatus};
use crate::domain::errors::ApiError;
use crate::interface_adapters::handlers::{current_epoch_seconds, map_api_error, storage_error};
use crate::interface_adapters::protocol::{
    CreateOrderRequest, ErrorResponse, OrderListResponse, OrderResponse,
};
use crate::interface_adapters::state::AppState;

// Handler for placing an order. Each line is resolved against the menu and
// the item's name and price are snapshotted into the order, so later menu
// edits do not rewrite order history.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<Json<OrderResponse>, (StatusCode, Json<ErrorResponse>)> {
    if payload.customer_name.trim().is_empty() {
        return Err(map_api_error(ApiError::Invalid("customer_name is required")));
    }
    if payload.lines.is_empty() {
        return Err(map_api_error(ApiError::Invalid("order has no lines")));
    }
    if payload.lines.iter().any(|line| line.quantity == 0) {
        return Err(map_api_error(ApiError::Invalid(
            "quantity must be at least 1",
        )));
    }

    let menu = state.menu_items().map_err(map_api_error)?;

    let mut lines = Vec::with_capacity(payload.lines.len());
    for requested in &payload.lines {
        let item = menu
            .find_one(doc! { "_id": &requested.menu_item_id })
            .await
            .map_err(storage_error)
            .map_err(map_api_error)?
            .ok_or(ApiError::Invalid("unknown menu item"))
            .map_err(map_api_error)?;

        if !item.available {
            return Err(map_api_error(ApiError::Invalid("menu item unavailable")));
        }

        lines.push(OrderLine {
            menu_item_id: item.id,
            name: item.name,
            quantity: requested.quantity,
            price_cents: item.price_cents,
        });
    }

    let total_cents = lines
        .iter()
        .map(|line| line.price_cents * i64::from(line.quantity))
        .sum();

    let order = Order {
        id: Uuid::new_v4().to_string(),
        customer_name: payload.customer_name,
        lines,
        total_cents,
        status: OrderStatus::Pending,
        created_at: current_epoch_seconds(),
    };

    let orders = state.orders().map_err(map_api_error)?;
    orders
        .insert_one(&order)
        .await
        .map_err(storage_error)
        .map_err(map_api_error)?;

    Ok(Json(order.into()))
}

// Handler for listing orders, newest first.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<OrderListResponse>, (StatusCode, Json<ErrorResponse>)> {
    let orders = state.orders().map_err(map_api_error)?;

    let found: Vec<Order> = orders
        .find(doc! {})
        .sort(doc! { "created_at": -1 })
        .await
        .map_err(storage_error)
        .map_err(map_api_error)?
        .try_collect()
        .await
        .map_err(storage_error)
        .map_err(map_api_error)?;

    Ok(Json(OrderListResponse {
        orders: found.into_iter().map(OrderResponse::from).collect(),
    }))
}

// Handler for fetching one order by id.
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<OrderResponse>, (StatusCode, Json<ErrorResponse>)> {
    let orders = state.orders().map_err(map_api_error)?;

    let order = orders
        .find_one(doc! { "_id": &order_id })
        .await
        .map_err(storage_error)
        .map_err(map_api_error)?
        .ok_or(ApiError::NotFound("order"))
        .map_err(map_api_error)?;

    Ok(Json(order.into()))
}
