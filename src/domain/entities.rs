use serde::{Deserialize, Serialize};

// Documents persisted in the document store. Ids are UUID strings minted by
// the handlers and stored under `_id`, so responses never leak
// driver-specific object ids.

// Registered customer account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub created_at: u64,
}

// One dish on the menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub available: bool,
}

// A menu line captured inside an order. Name and price are snapshotted at
// order time so later menu edits do not rewrite order history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub menu_item_id: String,
    pub name: String,
    pub quantity: u32,
    pub price_cents: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub customer_name: String,
    pub lines: Vec<OrderLine>,
    pub total_cents: i64,
    pub status: OrderStatus,
    pub created_at: u64,
}

// A recorded payment against an order. No gateway integration: the record
// itself is the whole payment flow at this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "_id")]
    pub id: String,
    pub order_id: String,
    pub amount_cents: i64,
    pub method: String,
    pub created_at: u64,
}
