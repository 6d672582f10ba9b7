//! Server infrastructure: router assembly, health endpoint, graceful shutdown.

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_router, parse_cors_origins};
pub use health::{HealthResponse, health_router};
pub use shutdown::shutdown_signal;
