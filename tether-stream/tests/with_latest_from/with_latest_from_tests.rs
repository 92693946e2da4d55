// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;
use tether_core::{Completion, CurrentValueSubject, Demand, PassthroughSubject, Publisher};
use tether_stream::WithLatestFromExt;
use tether_test_utils::test_data::{
    event_click, event_login, event_logout, person_alice, person_bob, person_charlie,
};
use tether_test_utils::{CapturingSubscriber, Event, Person};

fn subscribe<P>(publisher: &P, demand: Demand) -> Arc<CapturingSubscriber<P::Output, P::Failure>>
where
    P: Publisher,
    P::Output: Send + 'static,
    P::Failure: Send + 'static,
{
    let subscriber = Arc::new(CapturingSubscriber::with_demand(demand));
    publisher.receive_subscriber(subscriber.clone());
    subscriber
}

#[test]
fn test_with_latest_from_concrete_scenario() -> anyhow::Result<()> {
    // Arrange
    let trigger = PassthroughSubject::<String>::new();
    let sampled = PassthroughSubject::<i32>::new();
    let subscriber = subscribe(
        &trigger.clone().with_latest_from(sampled.clone()),
        Demand::Unlimited,
    );

    // Act
    trigger.send("First".to_string())?;
    sampled.send(1)?;
    sampled.send(2)?;
    sampled.send(3)?;
    trigger.send("Second".to_string())?;
    trigger.send("Third".to_string())?;
    sampled.finish()?;
    trigger.finish()?;

    // Assert
    assert_eq!(
        subscriber.values(),
        vec![
            ("First".to_string(), None),
            ("Second".to_string(), Some(3)),
            ("Third".to_string(), Some(3)),
        ]
    );
    assert_eq!(subscriber.completions(), vec![Completion::Finished]);

    Ok(())
}

#[test]
fn test_with_latest_from_none_before_first_sample() -> anyhow::Result<()> {
    // Arrange
    let events = PassthroughSubject::<Event>::new();
    let users = PassthroughSubject::<Person>::new();
    let subscriber = subscribe(
        &events.clone().with_latest_from(users.clone()),
        Demand::Unlimited,
    );

    // Act
    events.send(event_login())?;
    events.send(event_click())?;

    // Assert
    assert_eq!(
        subscriber.values(),
        vec![(event_login(), None), (event_click(), None)]
    );

    Ok(())
}

#[test]
fn test_with_latest_from_sampled_values_do_not_emit() -> anyhow::Result<()> {
    // Arrange
    let events = PassthroughSubject::<Event>::new();
    let users = PassthroughSubject::<Person>::new();
    let subscriber = subscribe(
        &events.clone().with_latest_from(users.clone()),
        Demand::Unlimited,
    );

    // Act
    users.send(person_alice())?;
    users.send(person_bob())?;

    // Assert
    assert_eq!(subscriber.value_count(), 0);
    assert!(subscriber.completions().is_empty());

    Ok(())
}

#[test]
fn test_with_latest_from_pairs_with_most_recent_sample() -> anyhow::Result<()> {
    // Arrange
    let events = PassthroughSubject::<Event>::new();
    let users = PassthroughSubject::<Person>::new();
    let subscriber = subscribe(
        &events.clone().with_latest_from(users.clone()),
        Demand::Unlimited,
    );

    // Act
    users.send(person_alice())?;
    events.send(event_login())?;
    users.send(person_bob())?;
    users.send(person_charlie())?;
    events.send(event_click())?;
    events.send(event_logout())?;

    // Assert
    assert_eq!(
        subscriber.values(),
        vec![
            (event_login(), Some(person_alice())),
            (event_click(), Some(person_charlie())),
            (event_logout(), Some(person_charlie())),
        ]
    );

    Ok(())
}

#[test]
fn test_with_latest_from_preserves_trigger_order() -> anyhow::Result<()> {
    // Arrange
    let trigger = PassthroughSubject::<u32>::new();
    let sampled = PassthroughSubject::<u32>::new();
    let subscriber = subscribe(
        &trigger.clone().with_latest_from(sampled.clone()),
        Demand::Unlimited,
    );

    // Act
    for value in 0..100 {
        if value % 10 == 0 {
            sampled.send(value)?;
        }
        trigger.send(value)?;
    }

    // Assert
    let expected: Vec<_> = (0..100).map(|value| (value, Some(value - value % 10))).collect();
    assert_eq!(subscriber.values(), expected);

    Ok(())
}

#[test]
fn test_with_latest_from_subscribes_nothing_before_demand() -> anyhow::Result<()> {
    // Arrange
    let events = PassthroughSubject::<Event>::new();
    let users = PassthroughSubject::<Person>::new();
    let subscriber = subscribe(
        &events.clone().with_latest_from(users.clone()),
        Demand::none(),
    );

    // Act
    users.send(person_alice())?;
    events.send(event_login())?;

    // Assert
    assert_eq!(subscriber.subscriptions_received(), 1);
    assert_eq!(events.subscriber_count(), 0);
    assert_eq!(users.subscriber_count(), 0);
    assert_eq!(subscriber.value_count(), 0);

    // Act
    subscriber.request(Demand::max(1));
    events.send(event_click())?;

    // Assert
    assert_eq!(events.subscriber_count(), 1);
    assert_eq!(users.subscriber_count(), 1);
    assert_eq!(subscriber.values(), vec![(event_click(), None)]);

    Ok(())
}

#[test]
fn test_with_latest_from_zero_demand_does_not_connect() {
    // Arrange
    let events = PassthroughSubject::<Event>::new();
    let users = PassthroughSubject::<Person>::new();
    let subscriber = subscribe(
        &events.clone().with_latest_from(users.clone()),
        Demand::none(),
    );

    // Act
    subscriber.request(Demand::max(0));

    // Assert
    assert_eq!(events.subscriber_count(), 0);
    assert_eq!(users.subscriber_count(), 0);
}

#[test]
fn test_with_latest_from_demand_is_an_activation_signal() -> anyhow::Result<()> {
    // Arrange
    let trigger = PassthroughSubject::<u32>::new();
    let sampled = PassthroughSubject::<u32>::new();
    let subscriber = subscribe(
        &trigger.clone().with_latest_from(sampled.clone()),
        Demand::max(1),
    );

    // Act
    trigger.send(1)?;
    trigger.send(2)?;
    trigger.send(3)?;

    // Assert
    assert_eq!(subscriber.values(), vec![(1, None), (2, None), (3, None)]);

    Ok(())
}

#[test]
fn test_with_latest_from_repeated_request_connects_once() -> anyhow::Result<()> {
    // Arrange
    let events = PassthroughSubject::<Event>::new();
    let users = PassthroughSubject::<Person>::new();
    let subscriber = subscribe(
        &events.clone().with_latest_from(users.clone()),
        Demand::Unlimited,
    );

    // Act
    subscriber.request(Demand::Unlimited);
    subscriber.request(Demand::max(5));
    users.send(person_alice())?;
    events.send(event_login())?;

    // Assert
    assert_eq!(events.subscriber_count(), 1);
    assert_eq!(users.subscriber_count(), 1);
    assert_eq!(subscriber.values(), vec![(event_login(), Some(person_alice()))]);

    Ok(())
}

#[test]
fn test_with_latest_from_cancel_stops_delivery() -> anyhow::Result<()> {
    // Arrange
    let events = PassthroughSubject::<Event>::new();
    let users = PassthroughSubject::<Person>::new();
    let subscriber = subscribe(
        &events.clone().with_latest_from(users.clone()),
        Demand::Unlimited,
    );
    events.send(event_login())?;

    // Act
    subscriber.cancel();
    users.send(person_alice())?;
    events.send(event_click())?;
    events.finish()?;

    // Assert
    assert_eq!(events.subscriber_count(), 0);
    assert_eq!(users.subscriber_count(), 0);
    assert_eq!(subscriber.values(), vec![(event_login(), None)]);
    assert!(subscriber.completions().is_empty());

    Ok(())
}

#[test]
fn test_with_latest_from_cancel_before_request_makes_request_a_no_op() -> anyhow::Result<()> {
    // Arrange
    let events = PassthroughSubject::<Event>::new();
    let users = PassthroughSubject::<Person>::new();
    let subscriber = subscribe(
        &events.clone().with_latest_from(users.clone()),
        Demand::none(),
    );
    let subscription = subscriber
        .subscription()
        .ok_or_else(|| anyhow::anyhow!("no subscription received"))?;

    // Act
    subscription.cancel();
    subscription.cancel();
    subscription.request(Demand::Unlimited);
    events.send(event_login())?;

    // Assert
    assert_eq!(events.subscriber_count(), 0);
    assert_eq!(users.subscriber_count(), 0);
    assert_eq!(subscriber.value_count(), 0);

    Ok(())
}

#[test]
fn test_with_latest_from_trigger_completion_forwarded_once() -> anyhow::Result<()> {
    // Arrange
    let events = PassthroughSubject::<Event>::new();
    let users = PassthroughSubject::<Person>::new();
    let subscriber = subscribe(
        &events.clone().with_latest_from(users.clone()),
        Demand::Unlimited,
    );

    // Act
    events.send(event_login())?;
    events.finish()?;
    users.send(person_alice())?;

    // Assert
    assert_eq!(subscriber.values(), vec![(event_login(), None)]);
    assert_eq!(subscriber.completions(), vec![Completion::Finished]);
    assert_eq!(users.subscriber_count(), 0);

    Ok(())
}

#[test]
fn test_with_latest_from_sampled_completion_is_ignored() -> anyhow::Result<()> {
    // Arrange
    let events = PassthroughSubject::<Event>::new();
    let users = PassthroughSubject::<Person>::new();
    let subscriber = subscribe(
        &events.clone().with_latest_from(users.clone()),
        Demand::Unlimited,
    );

    // Act
    users.send(person_bob())?;
    users.finish()?;
    events.send(event_login())?;
    events.send(event_click())?;

    // Assert
    assert!(subscriber.completions().is_empty());
    assert_eq!(
        subscriber.values(),
        vec![
            (event_login(), Some(person_bob())),
            (event_click(), Some(person_bob())),
        ]
    );

    Ok(())
}

#[test]
fn test_with_latest_from_completed_trigger_terminates_on_connect() -> anyhow::Result<()> {
    // Arrange
    let events = PassthroughSubject::<Event>::new();
    let users = PassthroughSubject::<Person>::new();
    events.finish()?;

    // Act
    let subscriber = subscribe(
        &events.clone().with_latest_from(users.clone()),
        Demand::Unlimited,
    );

    // Assert
    assert_eq!(subscriber.completions(), vec![Completion::Finished]);
    assert_eq!(users.subscriber_count(), 0);

    Ok(())
}

#[test]
fn test_with_latest_from_current_value_subjects_emit_on_connect() -> anyhow::Result<()> {
    // Arrange
    let events = CurrentValueSubject::<Event>::new(event_login());
    let users = CurrentValueSubject::<Person>::new(person_alice());

    // Act
    let subscriber = subscribe(
        &events.clone().with_latest_from(users.clone()),
        Demand::Unlimited,
    );
    users.send(person_bob())?;
    events.send(event_click())?;

    // Assert
    assert_eq!(
        subscriber.values(),
        vec![
            (event_login(), Some(person_alice())),
            (event_click(), Some(person_bob())),
        ]
    );

    Ok(())
}

#[test]
fn test_with_latest_from_subscriptions_are_independent() -> anyhow::Result<()> {
    // Arrange
    let events = PassthroughSubject::<Event>::new();
    let users = PassthroughSubject::<Person>::new();
    let publisher = events.clone().with_latest_from(users.clone());

    // Act
    let first = subscribe(&publisher, Demand::Unlimited);
    users.send(person_alice())?;
    let second = subscribe(&publisher, Demand::Unlimited);
    events.send(event_login())?;
    first.cancel();
    events.send(event_click())?;

    // Assert
    assert_eq!(first.values(), vec![(event_login(), Some(person_alice()))]);
    assert_eq!(
        second.values(),
        vec![(event_login(), None), (event_click(), None)]
    );

    Ok(())
}
