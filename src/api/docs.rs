//! OpenAPI documentation for the machine-readable endpoints.
//!
//! The HTML pages are not part of the API surface; only `/delete/{id}` and
//! `/health` return JSON and are documented here.

use utoipa::OpenApi;

/// OpenAPI description of the JSON endpoints.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "inkpost",
        description = "JSON surface of the inkpost blog: entry deletion and service health."
    ),
    paths(
        crate::api::handlers::entries::delete_entry,
        crate::api::handlers::system::health_handler,
    ),
    components(schemas(
        crate::api::dto::DeleteResponse,
        crate::api::handlers::system::HealthResponse,
        crate::error::ErrorResponse,
        crate::error::ErrorBody,
    )),
    tags(
        (name = "Entries", description = "Entry management"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;
