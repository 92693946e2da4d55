// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tether_core::{CurrentValueSubject, PassthroughSubject};
use tether_exec::PublisherStreamExt;
use tether_test_utils::test_data::{person_alice, person_bob, person_charlie};
use tether_test_utils::{
    assert_no_element_emitted, assert_stream_ended, unwrap_stream, Person, TestError,
};

#[tokio::test]
async fn test_into_stream_yields_values_in_order() -> anyhow::Result<()> {
    // Arrange
    let subject = PassthroughSubject::<Person>::new();
    let mut stream = subject.clone().into_stream();

    // Act
    subject.send(person_alice())?;
    subject.send(person_bob())?;

    // Assert
    assert_eq!(unwrap_stream(&mut stream, 500).await, person_alice());
    assert_eq!(unwrap_stream(&mut stream, 500).await, person_bob());
    assert_no_element_emitted(&mut stream, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_into_stream_ends_on_finished() -> anyhow::Result<()> {
    // Arrange
    let subject = PassthroughSubject::<Person>::new();
    let mut stream = subject.clone().into_stream();

    // Act
    subject.send(person_alice())?;
    subject.finish()?;

    // Assert
    assert_eq!(unwrap_stream(&mut stream, 500).await, person_alice());
    assert_stream_ended(&mut stream, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_into_stream_failure_is_final_item() -> anyhow::Result<()> {
    use futures::StreamExt;

    // Arrange
    let subject = PassthroughSubject::<Person, TestError>::new();
    let mut stream = subject.clone().into_stream();

    // Act
    subject.send(person_alice())?;
    subject.fail(TestError::injected("upstream"))?;

    // Assert
    assert_eq!(stream.next().await, Some(Ok(person_alice())));
    assert_eq!(stream.next().await, Some(Err(TestError::injected("upstream"))));
    assert_eq!(stream.next().await, None);

    Ok(())
}

#[tokio::test]
async fn test_into_stream_replays_current_value() -> anyhow::Result<()> {
    // Arrange
    let subject = CurrentValueSubject::<Person>::new(person_alice());

    // Act
    let mut stream = subject.clone().into_stream();
    subject.send(person_bob())?;

    // Assert
    assert_eq!(unwrap_stream(&mut stream, 500).await, person_alice());
    assert_eq!(unwrap_stream(&mut stream, 500).await, person_bob());

    Ok(())
}

#[tokio::test]
async fn test_dropping_stream_cancels_subscription() -> anyhow::Result<()> {
    // Arrange
    let subject = PassthroughSubject::<Person>::new();
    let stream = subject.clone().into_stream();
    assert_eq!(subject.subscriber_count(), 1);

    // Act
    drop(stream);

    // Assert
    assert_eq!(subject.subscriber_count(), 0);
    subject.send(person_charlie())?;

    Ok(())
}

#[tokio::test]
async fn test_cancel_keeps_buffered_values() -> anyhow::Result<()> {
    // Arrange
    let subject = PassthroughSubject::<Person>::new();
    let mut stream = subject.clone().into_stream();
    subject.send(person_alice())?;

    // Act
    stream.cancel();
    subject.send(person_bob())?;

    // Assert
    assert_eq!(subject.subscriber_count(), 0);
    assert_eq!(unwrap_stream(&mut stream, 500).await, person_alice());
    assert_stream_ended(&mut stream, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_into_stream_on_completed_subject_ends_immediately() -> anyhow::Result<()> {
    // Arrange
    let subject = PassthroughSubject::<Person>::new();
    subject.finish()?;

    // Act
    let mut stream = subject.clone().into_stream();

    // Assert
    assert_stream_ended(&mut stream, 500).await;

    Ok(())
}
