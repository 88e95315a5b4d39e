use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use tracing::warn;
use uuid::Uuid;

use crate::domain::entities::{OrderStatus, Payment};
use crate::domain::errors::ApiError;
use crate::interface_adapters::handlers::{current_epoch_seconds, map_api_error, storage_error};
use crate::interface_adapters::protocol::{
    ErrorResponse, PaymentListResponse, PaymentResponse, RecordPaymentRequest,
};
use crate::interface_adapters::state::AppState;

// Handler for recording a payment against an order. There is no gateway
// integration: the record is the whole payment flow at this layer.
pub async fn record(
    State(state): State<AppState>,
    Json(payload): Json<RecordPaymentRequest>,
) -> Result<Json<PaymentResponse>, (StatusCode, Json<ErrorResponse>)> {
    if payload.amount_cents <= 0 {
        return Err(map_api_error(ApiError::Invalid(
            "amount_cents must be positive",
        )));
    }
    if payload.method.trim().is_empty() {
        return Err(map_api_error(ApiError::Invalid("method is required")));
    }

    let orders = state.orders().map_err(map_api_error)?;

    let order = orders
        .find_one(doc! { "_id": &payload.order_id })
        .await
        .map_err(storage_error)
        .map_err(map_api_error)?
        .ok_or(ApiError::NotFound("order"))
        .map_err(map_api_error)?;

    if order.status == OrderStatus::Paid {
        return Err(map_api_error(ApiError::Conflict("order already paid")));
    }
    if payload.amount_cents != order.total_cents {
        return Err(map_api_error(ApiError::Invalid(
            "amount does not match order total",
        )));
    }

    let payment = Payment {
        id: Uuid::new_v4().to_string(),
        order_id: order.id.clone(),
        amount_cents: payload.amount_cents,
        method: payload.method,
        created_at: current_epoch_seconds(),
    };

    let payments = state.payments().map_err(map_api_error)?;
    payments
        .insert_one(&payment)
        .await
        .map_err(storage_error)
        .map_err(map_api_error)?;

    // Best-effort status flip; the payment record is already durable.
    if let Err(err) = orders
        .update_one(
            doc! { "_id": &order.id },
            doc! { "$set": { "status": "paid" } },
        )
        .await
    {
        warn!(order_id = %order.id, error = %err, "failed to mark order paid");
    }

    Ok(Json(payment.into()))
}

// Handler for listing the payments recorded against one order.
pub async fn list_for_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<PaymentListResponse>, (StatusCode, Json<ErrorResponse>)> {
    let payments = state.payments().map_err(map_api_error)?;

    let found: Vec<Payment> = payments
        .find(doc! { "order_id": &order_id })
        .sort(doc! { "created_at": -1 })
        .await
        .map_err(storage_error)
        .map_err(map_api_error)?
        .try_collect()
        .await
        .map_err(storage_error)
        .map_err(map_api_error)?;

    Ok(Json(PaymentListResponse {
        payments: found.into_iter().map(PaymentResponse::from).collect(),
    }))
}
