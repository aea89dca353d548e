use crate::{controller::health_check_controller, AppState};
use axum::{routing::get, Router};

use crate::controller::echo_controller;

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Echo Stream API"
        ),
        paths(
            echo_controller::echo,
            echo_controller::typed_echo,
            echo_controller::merged_echo,
            health_check_controller::health_check,
        ),
        tags(
            (name = "echo_stream", description = "Periodic Server-Sent Event echo streams")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(echo_routes(app_state))
        .merge(health_routes())
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
}

fn echo_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/sse", get(echo_controller::echo))
        .route("/sse2", get(echo_controller::typed_echo))
        .route("/sse3", get(echo_controller::merged_echo))
        .with_state(app_state)
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}
