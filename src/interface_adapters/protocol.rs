use serde::{Deserialize, Serialize};

use crate::domain::entities::{Account, MenuItem, Order, OrderLine, OrderStatus, Payment};

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

// Request payload for account registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub display_name: String,
}

// Request payload for login. No password or token mechanics at this layer;
// login resolves an account profile by email.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

// Account profile returned by the auth routes.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub account_id: String,
    pub email: String,
    pub display_name: String,
    pub created_at: u64,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        AccountResponse {
            account_id: account.id,
            email: account.email,
            display_name: account.display_name,
            created_at: account.created_at,
        }
    }
}

// Request payload for adding a menu item.
#[derive(Debug, Deserialize)]
pub struct CreateMenuItemRequest {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
}

#[derive(Debug, Serialize)]
pub struct MenuItemResponse {
    pub item_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub available: bool,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        MenuItemResponse {
            item_id: item.id,
            name: item.name,
            description: item.description,
            price_cents: item.price_cents,
            available: item.available,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MenuListResponse {
    pub items: Vec<MenuItemResponse>,
}

// One requested line of a new order.
#[derive(Debug, Deserialize)]
pub struct OrderLineRequest {
    pub menu_item_id: String,
    pub quantity: u32,
}

// Request payload for placing an order.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub lines: Vec<OrderLineRequest>,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub order_id: String,
    pub customer_name: String,
    pub lines: Vec<OrderLine>,
    pub total_cents: i64,
    pub status: OrderStatus,
    pub created_at: u64,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            order_id: order.id,
            customer_name: order.customer_name,
            lines: order.lines,
            total_cents: order.total_cents,
            status: order.status,
            created_at: order.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderListResponse {
    pub orders: Vec<OrderResponse>,
}

// Request payload for recording a payment against an order.
#[derive(Debug, Deserialize)]
pub struct RecordPaymentRequest {
    pub order_id: String,
    pub amount_cents: i64,
    pub method: String,
}

#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub payment_id: String,
    pub order_id: String,
    pub amount_cents: i64,
    pub method: String,
    pub created_at: u64,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        PaymentResponse {
            payment_id: payment.id,
            order_id: payment.order_id,
            amount_cents: payment.amount_cents,
            method: payment.method,
            created_at: payment.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PaymentListResponse {
    pub payments: Vec<PaymentResponse>,
}

// Health report from the internal routes.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

// Redacted runtime configuration echo; never includes the connection string.
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub port: u16,
    pub allow_all_origins: bool,
    pub allowed_origins: Vec<String>,
    pub internal_routes: bool,
}
