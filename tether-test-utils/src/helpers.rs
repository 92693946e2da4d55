// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::Stream;
use std::fmt::Debug;
use std::time::Duration;
use tokio::time::sleep;

/// Panics if `stream` yields anything within `timeout_ms`.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!(
                "Unexpected item emitted, expected no output."
            );
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Waits for the next value, panicking on failure, end of stream or timeout.
pub async fn unwrap_stream<S, T, E>(stream: &mut S, timeout_ms: u64) -> T
where
    S: Stream<Item = Result<T, E>> + Unpin,
    E: Debug,
{
    tokio::select! {
        item = stream.next() => {
            match item {
                Some(Ok(value)) => value,
                Some(Err(error)) => panic!("Expected value but got failure: {error:?}"),
                None => panic!("Expected value but stream ended"),
            }
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {
            panic!("Timeout: No item received within {timeout_ms} ms")
        }
    }
}

/// Panics unless `stream` ends within `timeout_ms`.
pub async fn assert_stream_ended<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        item = stream.next() => {
            assert!(item.is_none(), "Expected stream to end but it emitted an item");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {
            panic!("Timeout: Stream did not end within {timeout_ms} ms")
        }
    }
}
