use anyhow::Result;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::output::{print_event, TestResult};
use crate::sse_client::{Connection, Event};

/// How `created_at` is expected to be encoded by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Timestamp {
    UnixSeconds,
    Rfc3339,
}

pub async fn test_echo(
    base_url: &str,
    message: &str,
    window: Duration,
    verbose: bool,
) -> Result<TestResult> {
    run(base_url, "/sse", message, window, verbose, |events| {
        check_echo_events(events, message, Timestamp::UnixSeconds)
    })
    .await
}

pub async fn test_typed_echo(
    base_url: &str,
    message: &str,
    window: Duration,
    verbose: bool,
) -> Result<TestResult> {
    run(base_url, "/sse2", message, window, verbose, |events| {
        check_echo_events(events, message, Timestamp::Rfc3339)
    })
    .await
}

pub async fn test_merged(
    base_url: &str,
    message: &str,
    window: Duration,
    verbose: bool,
) -> Result<TestResult> {
    run(base_url, "/sse3", message, window, verbose, |events| {
        check_merged_events(events, message)
    })
    .await
}

async fn run<F>(
    base_url: &str,
    endpoint: &str,
    message: &str,
    window: Duration,
    verbose: bool,
    check: F,
) -> Result<TestResult>
where
    F: FnOnce(&[Event]) -> std::result::Result<(), String>,
{
    let start = Instant::now();
    let connection = Connection::establish(base_url, endpoint, message).await?;
    let events = connection.collect_for(window).await;

    if verbose {
        for event in &events {
            print_event(endpoint, event);
        }
    }

    let outcome = check(&events);
    Ok(TestResult {
        scenario: format!("GET {endpoint}"),
        passed: outcome.is_ok(),
        message: Some(match outcome {
            Ok(()) => format!("{} events received", events.len()),
            Err(reason) => reason,
        }),
        duration: start.elapsed(),
    })
}

/// Every event is an `echo` of `message` and ids count up from 0.
pub fn check_echo_events(
    events: &[Event],
    message: &str,
    timestamp: Timestamp,
) -> std::result::Result<(), String> {
    if events.is_empty() {
        return Err("no events received".to_string());
    }

    for event in events {
        if event.event_type != "echo" {
            return Err(format!("unexpected event type {:?}", event.event_type));
        }
        check_payload(event, message, timestamp)?;
    }

    check_ids_count_up(&ids(events.iter()), "echo")
}

/// Both `echo` and `reverse_echo` arrive, with the right messages and
/// independent ids counting up from 0.
pub fn check_merged_events(events: &[Event], message: &str) -> std::result::Result<(), String> {
    let reversed: String = message.chars().rev().collect();

    let mut groups: BTreeMap<&str, Vec<&Event>> = BTreeMap::new();
    for event in events {
        groups.entry(event.event_type.as_str()).or_default().push(event);
    }

    for (name, expected_message) in [("echo", message), ("reverse_echo", reversed.as_str())] {
        let group = groups
            .remove(name)
            .ok_or_else(|| format!("no {name} events received"))?;
        for event in &group {
            check_payload(event, expected_message, Timestamp::Rfc3339)?;
        }
        check_ids_count_up(&ids(group.into_iter()), name)?;
    }

    match groups.keys().next() {
        Some(unexpected) => Err(format!("unexpected event type {unexpected:?}")),
        None => Ok(()),
    }
}

fn check_payload(
    event: &Event,
    expected_message: &str,
    timestamp: Timestamp,
) -> std::result::Result<(), String> {
    if event.data["message"] != expected_message {
        return Err(format!(
            "{} carried message {}, expected {:?}",
            event.event_type, event.data["message"], expected_message
        ));
    }

    let created_at = &event.data["created_at"];
    let well_formed = match timestamp {
        Timestamp::UnixSeconds => created_at.is_f64(),
        Timestamp::Rfc3339 => created_at.is_string(),
    };
    if !well_formed {
        return Err(format!(
            "{} carried created_at {}, expected {:?}",
            event.event_type, created_at, timestamp
        ));
    }

    Ok(())
}

fn ids<'a>(events: impl Iterator<Item = &'a Event>) -> Vec<Option<u64>> {
    events.map(|event| event.id).collect()
}

fn check_ids_count_up(ids: &[Option<u64>], name: &str) -> std::result::Result<(), String> {
    for (expected, id) in ids.iter().enumerate() {
        if *id != Some(expected as u64) {
            return Err(format!("{name} ids {ids:?} do not count up from 0"));
        }
    }
    Ok(())
}
