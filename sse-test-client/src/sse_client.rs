use anyhow::Result;
use eventsource_client::{self as es, Client};
use futures_util::stream::StreamExt;
use log::*;
use serde_json::Value;
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub struct Event {
    pub event_type: String,
    pub id: Option<u64>,
    pub data: Value,
}

pub struct Connection {
    event_rx: mpsc::UnboundedReceiver<Event>,
    handle: tokio::task::JoinHandle<()>,
}

impl Connection {
    pub async fn establish(base_url: &str, endpoint: &str, message: &str) -> Result<Self> {
        let url = reqwest::Url::parse_with_params(
            &format!("{}{}", base_url.trim_end_matches('/'), endpoint),
            &[("message", message)],
        )?;
        let (tx, rx) = mpsc::unbounded_channel();

        // The server restarts streams from id 0 on reconnect, which would
        // muddle the id checks, so a dropped stream stays dropped.
        let client = es::ClientBuilder::for_url(url.as_str())?
            .reconnect(es::ReconnectOptions::reconnect(false).build())
            .build();

        let label = endpoint.to_string();
        let handle = tokio::spawn(async move {
            let mut stream = client.stream();

            loop {
                match stream.next().await {
                    Some(Ok(es::SSE::Event(event))) => {
                        let data = match serde_json::from_str(&event.data) {
                            Ok(data) => data,
                            Err(e) => {
                                warn!("Non-JSON data on {}: {} ({})", label, event.data, e);
                                continue;
                            }
                        };
                        let sse_event = Event {
                            event_type: event.event_type,
                            id: event.id.as_deref().and_then(|id| id.parse().ok()),
                            data,
                        };

                        if tx.send(sse_event).is_err() {
                            debug!("SSE receiver dropped for {}", label);
                            break;
                        }
                    }
                    Some(Ok(_)) => {
                        // Ignore comments (keep-alive)
                    }
                    Some(Err(e)) => {
                        warn!("SSE error for {}: {}", label, e);
                        break;
                    }
                    None => {
                        debug!("SSE stream ended for {}", label);
                        break;
                    }
                }
            }
        });

        Ok(Self {
            event_rx: rx,
            handle,
        })
    }

    /// Collects every event received within `window`, then closes the
    /// connection.
    pub async fn collect_for(mut self, window: Duration) -> Vec<Event> {
        let deadline = tokio::time::Instant::now() + window;
        let mut events = Vec::new();

        while let Ok(Some(event)) = tokio::time::timeout_at(deadline, self.event_rx.recv()).await {
            events.push(event);
        }

        self.handle.abort();
        events
    }
}
