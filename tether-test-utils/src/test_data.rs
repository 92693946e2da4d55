// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pre-built fixtures.

use crate::{event::Event, person::Person};

pub fn person_alice() -> Person {
    Person::new("Alice".to_string(), 25)
}

pub fn person_bob() -> Person {
    Person::new("Bob".to_string(), 30)
}

pub fn person_charlie() -> Person {
    Person::new("Charlie".to_string(), 35)
}

pub fn person(name: &str, age: u32) -> Person {
    Person::new(name.to_string(), age)
}

pub fn event_login() -> Event {
    Event::new(1, "login".to_string())
}

pub fn event_click() -> Event {
    Event::new(2, "click".to_string())
}

pub fn event_logout() -> Event {
    Event::new(3, "logout".to_string())
}

pub fn event(id: u64, kind: &str) -> Event {
    Event::new(id, kind.to_string())
}
