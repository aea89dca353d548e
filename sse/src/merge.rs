use crate::source::EnvelopeStream;
use async_stream::stream;
use futures::stream::{select_all, StreamExt};
use log::*;

/// Merges envelope streams into one, yielding each envelope as soon as its
/// source produces it.
///
/// Envelopes pass through untouched, so every source keeps its own ids and
/// its own internal order. The merged stream ends once all sources have
/// ended, or right after the first source error: that error is yielded and
/// every remaining source is dropped along with the merged stream.
pub fn merge<P>(sources: Vec<EnvelopeStream<P>>) -> EnvelopeStream<P>
where
    P: Send + 'static,
{
    let source_count = sources.len();
    let mut merged = select_all(sources);

    Box::pin(stream! {
        while let Some(item) = merged.next().await {
            match item {
                Ok(envelope) => yield Ok(envelope),
                Err(e) => {
                    error!("Ending merged stream of {source_count} sources: {e}");
                    yield Err(e);
                    break;
                }
            }
        }
    })
}
