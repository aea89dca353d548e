use crate::error::Error;
use crate::source::EnvelopeStream;
use axum::response::sse::Event;
use events::Envelope;
use futures::{Stream, StreamExt};
use serde::Serialize;

/// Encodes one envelope as an SSE event: the kind's event name, the
/// envelope's sequence id and its payload as JSON data.
pub fn encode<P: Serialize>(envelope: &Envelope<P>) -> Result<Event, Error> {
    let data = serde_json::to_string(&envelope.payload)?;

    let mut event = Event::default().event(envelope.event_name());
    if let Some(sequence_id) = envelope.sequence_id {
        event = event.id(sequence_id.to_string());
    }

    Ok(event.data(data))
}

/// Maps a stream of envelopes to a stream of SSE events ready for
/// `axum::response::sse::Sse`.
pub fn encode_stream<P>(envelopes: EnvelopeStream<P>) -> impl Stream<Item = Result<Event, Error>>
where
    P: Serialize + Send + 'static,
{
    envelopes.map(|item| item.and_then(|envelope| encode(&envelope)))
}
