//! # Axum Helpers
//!
//! Utilities shared by the HTTP surface of the pricing service.
//!
//! - **[`server`]**: router assembly (docs, CORS, tracing, compression),
//!   health endpoints and graceful shutdown
//! - **[`errors`]**: the JSON error body every handler returns
//! - **[`extractors`]**: `JsonBody`, `ValidatedJson` and `ParsedPath`
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//!
//! let router = create_router::<ApiDoc>(api_routes, &cors_origins)?;
//! let app = router.merge(health_router(core_config::app_info!()));
//! create_app(app, &ServerConfig::default()).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod server;

pub use errors::{ErrorCode, ErrorResponse, error_response};
pub use extractors::{JsonBody, ParsedPath, ValidatedJson};
pub use server::{
    HealthResponse, create_app, create_router, health_router, parse_cors_origins, shutdown_signal,
};
