//! HTTP surface: HTML page handlers, JSON endpoints, and router composition.

pub mod docs;
pub mod dto;
pub mod handlers;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete router with all routes.
///
/// With the `swagger-ui` feature enabled, also mounts Swagger UI for the
/// JSON endpoints at `/swagger-ui`.
#[must_use]
pub fn build_router() -> Router<AppState> {
    let router = Router::new().merge(handlers::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url(
        "/api-docs/openapi.json",
        <docs::ApiDoc as utoipa::OpenApi>::openapi(),
    ));

    router
}
