//! Hotel Booking System Backend
//!
//! A REST backend serving the role-based hotel booking admin UI from fixed
//! in-memory sample data.

mod api;
mod auth;
mod config;
mod errors;
mod models;
mod pricing;
mod store;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::SessionStore;
use config::Config;
use store::Store;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub sessions: Arc<SessionStore>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Hotel Booking System Backend");
    tracing::info!("Session cache path: {:?}", config.session_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Seed the in-memory store
    let store = Arc::new(Store::seeded());
    let snapshot = store.datastore().await;
    tracing::info!(
        "Seeded {} hotels and {} bookings",
        snapshot.hotels.len(),
        snapshot.bookings.len()
    );

    // Restore a cached session across restarts, if any
    let sessions = Arc::new(SessionStore::open(&config.session_path));

    // Create application state
    let state = AppState {
        store,
        sessions,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Datastore
        .route("/datastore", get(api::get_datastore))
        .route("/datastore/revision", get(api::get_revision))
        // Session
        .route("/session", get(api::get_session))
        .route("/session", post(api::sign_in))
        .route("/session", delete(api::sign_out))
        // Hotels
        .route("/hotels", get(api::list_hotels))
        .route("/hotels", post(api::add_hotel))
        .route("/hotels/{id}", get(api::get_hotel))
        .route("/hotels/{id}", put(api::edit_hotel))
        .route("/hotels/{id}", delete(api::delete_hotel))
        // Bookings
        .route("/bookings", get(api::list_bookings))
        .route("/bookings", post(api::create_booking))
        .route("/bookings/counts", get(api::booking_counts))
        .route("/bookings/quote", post(api::quote_booking))
        .route("/bookings/{id}", get(api::get_booking))
        .route("/bookings/{id}/cancel", post(api::cancel_booking))
        // Profile
        .route("/profile", get(api::get_profile))
        .route("/profile", put(api::update_profile))
        // Dashboard
        .route("/dashboard", get(api::get_dashboard));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
