//! HTTP API Layer
//!
//! This crate exposes the installment calculator over HTTP using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Health check and plan calculation
//! - **Middleware**: Request ids, tracing, request logging, CORS
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent JSON error responses naming the rejected field
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, config::ApiConfig};
//!
//! let app = create_router(ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_installments::InstallmentCalculator;

use crate::config::ApiConfig;
use crate::handlers::{health, installments};
use crate::middleware::request_logging_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub calculator: InstallmentCalculator,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        let calculator = InstallmentCalculator::new().with_max_installments(config.max_installments);
        Self { config, calculator }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(config: ApiConfig) -> Router {
    let cors = cors_layer(&config);
    let state = AppState::new(config);

    let public_routes = Router::new().route("/health", get(health::health_check));

    let installment_routes =
        Router::new().route("/calculate", post(installments::calculate_installments));

    let api_routes = Router::new().nest("/installments", installment_routes);

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(axum_middleware::from_fn(request_logging_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(cors),
        )
        .with_state(state)
}

fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_allow_any {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    }
}
