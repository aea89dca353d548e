use crate::error::Error;
use events::{EchoPayload, EventKind, UnixEchoPayload};
use log::*;
use service::config::StreamSettings;
use sse::{merge, EnvelopeStream, TickingSource};

/// The basic echo stream: `message` every tick, timestamped in unix seconds.
pub fn unix_echo_stream(
    message: &str,
    settings: &StreamSettings,
) -> Result<EnvelopeStream<UnixEchoPayload>, Error> {
    let message = message.to_owned();
    let source = TickingSource::new(EventKind::Echo, move || {
        Ok(UnixEchoPayload::new(message.clone()))
    })
    .every(settings.tick_interval);

    Ok(source.into_stream()?)
}

/// The typed echo stream: `message` every tick as an `echo` event.
pub fn echo_stream(
    message: &str,
    settings: &StreamSettings,
) -> Result<EnvelopeStream<EchoPayload>, Error> {
    let message = message.to_owned();
    let source = TickingSource::new(EventKind::Echo, move || Ok(EchoPayload::new(message.clone())))
        .every(settings.tick_interval);

    Ok(source.into_stream()?)
}

/// `message` reversed every tick as a `reverse_echo` event, starting after
/// the configured offset.
pub fn reverse_echo_stream(
    message: &str,
    settings: &StreamSettings,
) -> Result<EnvelopeStream<EchoPayload>, Error> {
    let message = message.to_owned();
    let source = TickingSource::new(EventKind::ReverseEcho, move || {
        Ok(EchoPayload::reversed(&message))
    })
    .every(settings.tick_interval)
    .starting_after(settings.reverse_echo_offset);

    Ok(source.into_stream()?)
}

/// The echo and reverse echo streams merged in arrival order. Each keeps its
/// own sequence ids.
pub fn merged_echo_stream(
    message: &str,
    settings: &StreamSettings,
) -> Result<EnvelopeStream<EchoPayload>, Error> {
    debug!(
        "Merging echo and reverse_echo streams (tick {:?}, reverse offset {:?})",
        settings.tick_interval, settings.reverse_echo_offset
    );

    Ok(merge(vec![
        echo_stream(message, settings)?,
        reverse_echo_stream(message, settings)?,
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainErrorKind, InternalErrorKind};
    use futures::StreamExt;
    use std::time::Duration;
    use tokio::time::{timeout_at, Instant};

    fn settings() -> StreamSettings {
        StreamSettings {
            tick_interval: Duration::from_secs(1),
            reverse_echo_offset: Duration::from_secs(1),
            keep_alive_interval: Duration::from_secs(15),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_echo_stream_repeats_message() {
        let envelopes: Vec<_> = echo_stream("hello", &settings())
            .unwrap()
            .take(3)
            .collect()
            .await;

        for (i, envelope) in envelopes.into_iter().enumerate() {
            let envelope = envelope.unwrap();
            assert_eq!(envelope.event_name(), "echo");
            assert_eq!(envelope.sequence_id, Some(i as u64));
            assert_eq!(envelope.payload.message, "hello");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reverse_echo_stream_reverses_message() {
        let envelope = reverse_echo_stream("hello", &settings())
            .unwrap()
            .next()
            .await
            .unwrap()
            .unwrap();

        assert_eq!(envelope.event_name(), "reverse_echo");
        assert_eq!(envelope.sequence_id, Some(0));
        assert_eq!(envelope.payload.message, "olleh");
    }

    #[tokio::test(start_paused = true)]
    async fn test_unix_echo_stream_timestamps_in_seconds() {
        let envelope = unix_echo_stream("hi", &settings())
            .unwrap()
            .next()
            .await
            .unwrap()
            .unwrap();

        assert_eq!(envelope.event_name(), "echo");
        assert_eq!(envelope.payload.message, "hi");
        assert!(envelope.payload.created_at > 1_600_000_000.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_merged_stream_carries_both_kinds_within_three_ticks() {
        let mut merged = merged_echo_stream("abc", &settings()).unwrap();
        let deadline = Instant::now() + Duration::from_secs(3);

        let mut envelopes = Vec::new();
        while let Ok(Some(item)) = timeout_at(deadline, merged.next()).await {
            envelopes.push(item.unwrap());
        }

        let echo: Vec<_> = envelopes
            .iter()
            .filter(|envelope| envelope.kind == EventKind::Echo)
            .collect();
        let reverse: Vec<_> = envelopes
            .iter()
            .filter(|envelope| envelope.kind == EventKind::ReverseEcho)
            .collect();

        assert!(!echo.is_empty());
        assert!(!reverse.is_empty());
        assert!(echo.iter().all(|envelope| envelope.payload.message == "abc"));
        assert!(reverse.iter().all(|envelope| envelope.payload.message == "cba"));
        for group in [&echo, &reverse] {
            let ids: Vec<_> = group.iter().map(|envelope| envelope.sequence_id.unwrap()).collect();
            assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn test_zero_tick_interval_is_a_config_error() {
        let settings = StreamSettings {
            tick_interval: Duration::ZERO,
            ..settings()
        };

        match merged_echo_stream("abc", &settings) {
            Err(err) => assert_eq!(
                err.error_kind,
                DomainErrorKind::Internal(InternalErrorKind::Config)
            ),
            Ok(_) => panic!("zero tick interval should be rejected"),
        }
    }
}
