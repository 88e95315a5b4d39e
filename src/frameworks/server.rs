use crate::frameworks::config::Config;
use crate::frameworks::db;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = Arc::new(Config::from_env());

    // Announce the admission mode once, before accepting connections.
    if config.origin_policy.is_allow_all() {
        tracing::info!("cors: allowing all origins");
    } else {
        tracing::info!(
            allowlist = ?config.origin_policy.origins(),
            "cors: using origin allowlist"
        );
    }

    let db = match config.mongo_uri.as_deref() {
        Some(uri) => match db::open(uri).await {
            Ok(db) => Some(db),
            Err(e) => {
                tracing::error!(error = %e, "invalid MONGO_URI; database routes unavailable");
                None
            }
        },
        None => {
            tracing::warn!("MONGO_URI is not set; database routes unavailable");
            None
        }
    };

    // The connectivity check runs alongside the listener. Its outcome is
    // logged and never blocks startup; handlers surface their own errors if
    // the deployment stays unreachable.
    if let Some(db) = db.clone() {
        tokio::spawn(async move {
            match db::ping(&db).await {
                Ok(()) => tracing::info!("database connected"),
                Err(e) => tracing::error!(error = %e, "database connection failed"),
            }
        });
    }

    let state = AppState {
        config: config.clone(),
        db,
    };

    if !config.expose_internal_routes {
        tracing::info!("internal routes disabled (set EXPOSE_INTERNAL_ROUTES=true to mount)");
    }

    let app = routes::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    // Bind TCP listener with error handling.
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            return; // Abort startup on bind failure.
        }
    };
    tracing::info!(%addr, "listening");

    // Serve app and report errors rather than panicking.
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
    }
}
