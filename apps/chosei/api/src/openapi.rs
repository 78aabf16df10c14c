//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chosei API",
        version = "0.1.0",
        description = "Scheduling polls: create an event with candidate dates, collect availability"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api", api = domain_polls::ApiDoc)
    ),
    tags(
        (name = "Polls", description = "Scheduling polls: create events and submit availability")
    )
)]
pub struct ApiDoc;
