use axum::{extract::State, http::StatusCode, Json};
use mongodb::bson::doc;
use uuid::Uuid;

use crate::domain::entities::Account;
use crate::domain::errors::ApiError;
use crate::interface_adapters::handlers::{current_epoch_seconds, map_api_error, storage_error};
use crate::interface_adapters::protocol::{
    AccountResponse, ErrorResponse, LoginRequest, RegisterRequest,
};
use crate::interface_adapters::state::AppState;

// Handler for registering a customer account.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<AccountResponse>, (StatusCode, Json<ErrorResponse>)> {
    validate_registration(&payload).map_err(map_api_error)?;

    let accounts = state.accounts().map_err(map_api_error)?;

    let existing = accounts
        .find_one(doc! { "email": &payload.email })
        .await
        .map_err(storage_error)
        .map_err(map_api_error)?;
    if existing.is_some() {
        return Err(map_api_error(ApiError::Conflict("account already exists")));
    }

    let account = Account {
        id: Uuid::new_v4().to_string(),
        email: payload.email,
        display_name: payload.display_name,
        created_at: current_epoch_seconds(),
    };

    accounts
        .insert_one(&account)
        .await
        .map_err(storage_error)
        .map_err(map_api_error)?;

    Ok(Json(account.into()))
}

// Handler for resolving an account profile by email. No session or token is
// issued at this layer.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AccountResponse>, (StatusCode, Json<ErrorResponse>)> {
    let accounts = state.accounts().map_err(map_api_error)?;

    let account = accounts
        .find_one(doc! { "email": &payload.email })
        .await
        .map_err(storage_error)
        .map_err(map_api_error)?;

    match account {
        Some(account) => Ok(Json(account.into())),
        None => Err(super::error_response(
            StatusCode::UNAUTHORIZED,
            "unknown account",
        )),
    }
}

fn validate_registration(payload: &RegisterRequest) -> Result<(), ApiError> {
    if payload.email.is_empty() || !payload.email.contains('@') {
        return Err(ApiError::Invalid("invalid email"));
    }
    if payload.display_name.trim().is_empty() {
        return Err(ApiError::Invalid("display_name is required"));
    }
    Ok(())
}
