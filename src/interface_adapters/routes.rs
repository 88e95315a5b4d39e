use crate::interface_adapters::handlers::{auth, internal, menu, orders, payments};
use crate::interface_adapters::middleware::{log_requests, origin_admission};
use crate::interface_adapters::state::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

// Root confirmation body; hosts probe it with GET and HEAD.
async fn root() -> &'static str {
    "Backend is running!"
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
}

fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(menu::list).post(menu::create))
        .route("/{item_id}", get(menu::get_item))
}

fn orders_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::list).post(orders::create))
        .route("/{order_id}", get(orders::get_order))
}

fn payments_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(payments::record))
        .route("/order/{order_id}", get(payments::list_for_order))
}

fn internal_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(internal::health))
        .route("/config", get(internal::config))
}

pub fn app(state: AppState) -> Router {
    // Static mount table. Unmatched paths fall through to axum's 404.
    let mut router = Router::new()
        // `get` answers HEAD with the body stripped, which is what host
        // health probes expect from this endpoint.
        .route("/", get(root))
        .nest("/api/auth", auth_routes())
        .nest("/api/menu", menu_routes())
        .nest("/api/orders", orders_routes())
        .nest("/api/payments", payments_routes());

    // Debug routes are opt-in so a production deployment never exposes them
    // by accident.
    if state.config.expose_internal_routes {
        router = router.nest("/internal", internal_routes());
    }

    // Layer order: admission runs first, then the request logger, then
    // dispatch. Outermost layer is added last.
    router
        .layer(middleware::from_fn(log_requests))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            origin_admission,
        ))
        .with_state(state)
}
