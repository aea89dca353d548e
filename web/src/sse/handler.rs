use ::sse::encoder::encode_stream;
use ::sse::EnvelopeStream;
use async_stream::stream;
use axum::response::sse::{Event, KeepAlive, Sse};
use domain::StreamSettings;
use futures::{Stream, StreamExt};
use log::*;
use serde::Serialize;

/// Logs the end of a stream, whether it ran out, failed or was dropped
/// because the client went away.
struct ClosedStreamLog {
    endpoint: &'static str,
}

impl Drop for ClosedStreamLog {
    fn drop(&mut self) {
        debug!("SSE stream for {} closed, cleaning up", self.endpoint);
    }
}

/// Wraps an envelope stream into a long-lived SSE response.
///
/// The body polls `envelopes` only when the connection can take more data,
/// so a slow client delays ticks instead of queueing events. When the client
/// disconnects the body is dropped, and with it every source and timer
/// feeding it. A source error is logged and ends the response.
pub(crate) fn sse_response<P>(
    endpoint: &'static str,
    envelopes: EnvelopeStream<P>,
    settings: &StreamSettings,
) -> Sse<impl Stream<Item = Result<Event, ::sse::Error>>>
where
    P: Serialize + Send + 'static,
{
    debug!("Establishing SSE stream for {endpoint}");

    let stream = stream! {
        let _closed = ClosedStreamLog { endpoint };
        let mut events = Box::pin(encode_stream(envelopes));

        while let Some(event) = events.next().await {
            if let Err(e) = &event {
                error!("SSE stream for {endpoint} failed: {e}");
            }
            yield event;
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::new().interval(settings.keep_alive_interval))
}
