use crate::domain::entities::{Account, MenuItem, Order, Payment};
use crate::domain::errors::ApiError;
use crate::frameworks::config::Config;
use mongodb::{Collection, Database};
use std::sync::Arc;

// Shared per-request state: the immutable configuration plus the lazy
// database handle. `db` is `None` when MONGO_URI was unset or malformed;
// handlers that need persistence then fail per request instead of at boot.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Option<Database>,
}

impl AppState {
    pub fn database(&self) -> Result<&Database, ApiError> {
        self.db.as_ref().ok_or(ApiError::DatabaseUnavailable)
    }

    pub fn accounts(&self) -> Result<Collection<Account>, ApiError> {
        Ok(self.database()?.collection("accounts"))
    }

    pub fn menu_items(&self) -> Result<Collection<MenuItem>, ApiError> {
        Ok(self.database()?.collection("menu_items"))
    }

    pub fn orders(&self) -> Result<Collection<Order>, ApiError> {
        Ok(self.database()?.collection("orders"))
    }

    pub fn payments(&self) -> Result<Collection<Payment>, ApiError> {
        Ok(self.database()?.collection("payments"))
    }
}
