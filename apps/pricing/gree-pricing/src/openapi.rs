//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the pricing service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gree Pricing API",
        version = "0.1.0",
        description = "Subsidy, commission and channel fee evaluation for air-conditioner retail"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/pricing", api = domain_pricing::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
