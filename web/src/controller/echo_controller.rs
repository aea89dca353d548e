use axum::extract::{Query, State};
use axum::response::IntoResponse;

use crate::params::echo::EchoParams;
use crate::sse::handler::sse_response;
use crate::{AppState, Error};
use domain::echo as EchoApi;
use log::*;

/// GET a stream echoing the message every tick, timestamped in unix seconds
#[utoipa::path(
    get,
    path = "/sse",
    params(EchoParams),
    responses(
        (status = 200, description = "Endless stream of `echo` events with `{message, created_at}` data, `created_at` in unix seconds", content_type = "text/event-stream", body = String),
        (status = 400, description = "Missing or invalid message parameter"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn echo(
    State(app_state): State<AppState>,
    Query(params): Query<EchoParams>,
) -> Result<impl IntoResponse, Error> {
    info!("GET echo stream for message: {:?}", params.message);

    let settings = app_state.stream_settings();
    let envelopes = EchoApi::unix_echo_stream(&params.message, &settings)?;

    Ok(sse_response("/sse", envelopes, &settings))
}

/// GET a stream of typed `echo` events
#[utoipa::path(
    get,
    path = "/sse2",
    params(EchoParams),
    responses(
        (status = 200, description = "Endless stream of `echo` events with `{message, created_at}` data, `created_at` in RFC 3339", content_type = "text/event-stream", body = String),
        (status = 400, description = "Missing or invalid message parameter"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn typed_echo(
    State(app_state): State<AppState>,
    Query(params): Query<EchoParams>,
) -> Result<impl IntoResponse, Error> {
    info!("GET typed echo stream for message: {:?}", params.message);

    let settings = app_state.stream_settings();
    let envelopes = EchoApi::echo_stream(&params.message, &settings)?;

    Ok(sse_response("/sse2", envelopes, &settings))
}

/// GET the `echo` and `reverse_echo` streams merged by arrival time
#[utoipa::path(
    get,
    path = "/sse3",
    params(EchoParams),
    responses(
        (status = 200, description = "Endless stream interleaving `echo` and `reverse_echo` events, each with its own ids", content_type = "text/event-stream", body = String),
        (status = 400, description = "Missing or invalid message parameter"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn merged_echo(
    State(app_state): State<AppState>,
    Query(params): Query<EchoParams>,
) -> Result<impl IntoResponse, Error> {
    info!("GET merged echo stream for message: {:?}", params.message);

    let settings = app_state.stream_settings();
    let envelopes = EchoApi::merged_echo_stream(&params.message, &settings)?;

    Ok(sse_response("/sse3", envelopes, &settings))
}
