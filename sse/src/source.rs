use crate::error::Error;
use async_stream::stream;
use events::{Envelope, EventKind};
use futures::Stream;
use log::*;
use std::pin::Pin;
use std::time::Duration;

/// Default delay between two ticks of a source.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// A boxed, lazily polled stream of stamped envelopes.
pub type EnvelopeStream<P> = Pin<Box<dyn Stream<Item = Result<Envelope<P>, Error>> + Send>>;

/// Periodic producer of envelopes for one logical stream.
///
/// Each tick waits `interval`, calls `make_payload` and emits the result
/// wrapped in an envelope of `kind`, stamped with the next id of this source.
/// An optional `start_offset` is waited once before the first tick so that
/// sources started together do not tick in phase.
pub struct TickingSource<F> {
    kind: EventKind,
    interval: Duration,
    start_offset: Duration,
    make_payload: F,
}

impl<F, P> TickingSource<F>
where
    F: FnMut() -> Result<P, Error> + Send + 'static,
    P: Send + 'static,
{
    pub fn new(kind: EventKind, make_payload: F) -> Self {
        Self {
            kind,
            interval: DEFAULT_TICK_INTERVAL,
            start_offset: Duration::ZERO,
            make_payload,
        }
    }

    pub fn every(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn starting_after(mut self, start_offset: Duration) -> Self {
        self.start_offset = start_offset;
        self
    }

    /// Turns the source into its envelope stream.
    ///
    /// The stream is infinite unless `make_payload` fails, in which case the
    /// error is yielded once and the stream ends. The first envelope arrives
    /// after `start_offset + interval`, never immediately.
    pub fn into_stream(self) -> Result<EnvelopeStream<P>, Error> {
        if self.interval.is_zero() {
            return Err(Error::config("tick interval must be greater than zero"));
        }

        let TickingSource {
            kind,
            interval,
            start_offset,
            mut make_payload,
        } = self;

        Ok(Box::pin(stream! {
            if !start_offset.is_zero() {
                tokio::time::sleep(start_offset).await;
            }

            let mut sequence_id: u64 = 0;
            loop {
                tokio::time::sleep(interval).await;

                match make_payload() {
                    Ok(payload) => {
                        trace!("{kind} tick {sequence_id}");
                        yield Ok(Envelope::create(kind, payload).with_sequence_id(sequence_id));
                        sequence_id += 1;
                    }
                    Err(e) => {
                        warn!("{kind} source failed to build payload {sequence_id}: {e}");
                        yield Err(e);
                        break;
                    }
                }
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use tokio::time::Instant;

    // Paused time jumps straight to timer deadlines, give or take the timer
    // wheel's millisecond resolution.
    fn assert_elapsed(start: Instant, expected: Duration) {
        let elapsed = start.elapsed();
        assert!(
            elapsed >= expected && elapsed < expected + Duration::from_millis(5),
            "expected ~{expected:?}, got {elapsed:?}"
        );
    }

    fn counting_source(
        kind: EventKind,
    ) -> TickingSource<impl FnMut() -> Result<u32, Error> + Send + 'static> {
        let mut calls = 0;
        TickingSource::new(kind, move || {
            calls += 1;
            Ok(calls)
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequence_ids_count_up_from_zero_without_gaps() {
        let envelopes: Vec<_> = counting_source(EventKind::Echo)
            .into_stream()
            .unwrap()
            .take(5)
            .collect()
            .await;

        let ids: Vec<_> = envelopes
            .into_iter()
            .map(|envelope| envelope.unwrap().sequence_id.unwrap())
            .collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_envelopes_carry_kind_and_fresh_payload() {
        let envelopes: Vec<_> = counting_source(EventKind::ReverseEcho)
            .into_stream()
            .unwrap()
            .take(3)
            .collect()
            .await;

        for (i, envelope) in envelopes.into_iter().enumerate() {
            let envelope = envelope.unwrap();
            assert_eq!(envelope.kind, EventKind::ReverseEcho);
            assert_eq!(envelope.payload, i as u32 + 1);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_envelope_waits_one_interval() {
        let start = Instant::now();
        let mut stream = counting_source(EventKind::Echo)
            .every(Duration::from_millis(250))
            .into_stream()
            .unwrap();

        stream.next().await.unwrap().unwrap();
        assert_elapsed(start, Duration::from_millis(250));

        stream.next().await.unwrap().unwrap();
        assert_elapsed(start, Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_offset_is_waited_once() {
        let start = Instant::now();
        let mut stream = counting_source(EventKind::Echo)
            .starting_after(Duration::from_secs(1))
            .into_stream()
            .unwrap();

        stream.next().await.unwrap().unwrap();
        assert_elapsed(start, Duration::from_secs(2));

        stream.next().await.unwrap().unwrap();
        assert_elapsed(start, Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_payload_failure_is_yielded_then_stream_ends() {
        let mut calls = 0;
        let mut stream = TickingSource::new(EventKind::Echo, move || {
            calls += 1;
            if calls == 3 {
                Err(Error::payload("no more payloads"))
            } else {
                Ok(calls)
            }
        })
        .into_stream()
        .unwrap();

        assert_eq!(stream.next().await.unwrap().unwrap().sequence_id, Some(0));
        assert_eq!(stream.next().await.unwrap().unwrap().sequence_id, Some(1));
        assert_eq!(
            stream.next().await.unwrap().unwrap_err().error_kind,
            crate::error::ErrorKind::Payload
        );
        assert!(stream.next().await.is_none());
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let result = counting_source(EventKind::Echo)
            .every(Duration::ZERO)
            .into_stream();

        match result {
            Err(err) => assert!(matches!(err.error_kind, crate::error::ErrorKind::Config(_))),
            Ok(_) => panic!("zero interval should be rejected"),
        }
    }
}
