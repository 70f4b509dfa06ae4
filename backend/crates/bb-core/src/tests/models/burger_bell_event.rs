use crate::{BellKind, BurgerBellEvent};

use chrono::{DateTime, NaiveDate, Utc};
use googletest::prelude::*;
use serde_json::{Value, json};

fn june_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

#[test]
fn test_bell_constructor() {
    let event = BurgerBellEvent::bell("day-1", june_first());

    assert_eq!(event.kind, BellKind::Bell);
    assert_eq!(event.burger_day_id, "day-1");
    assert_eq!(event.day, june_first());
    assert!(event.message.is_none());
}

#[test]
fn test_serializes_kind_and_day_as_plain_strings() {
    let event = BurgerBellEvent::bell("day-1", june_first());

    let value = serde_json::to_value(&event).unwrap();

    assert_eq!(value["kind"], json!("bell"));
    assert_eq!(value["day"], json!("2024-06-01"));
    assert_eq!(value["burgerDayId"], json!("day-1"));
    assert_that!(value.get("message"), none());
}

#[test]
fn test_deserializes_without_message() {
    let value = json!({
        "kind": "day_closed",
        "burgerDayId": "day-7",
        "day": "2024-06-01",
        "rungAt": "2024-06-01T12:00:00Z",
    });

    let event: BurgerBellEvent = serde_json::from_value(value).unwrap();

    assert_eq!(event.kind, BellKind::DayClosed);
    assert_eq!(event.message, None);
}

#[test]
fn test_with_message_is_serialized() {
    let event = BurgerBellEvent::bell("day-1", june_first()).with_message("Burgers are here!");

    let value: Value = serde_json::to_value(&event).unwrap();

    assert_eq!(value["message"], json!("Burgers are here!"));
}

#[test]
fn test_with_rung_at_makes_rebuilt_events_equal() {
    let rung_at = "2024-06-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();

    let first = BurgerBellEvent::bell("day-1", june_first()).with_rung_at(rung_at);
    let second = BurgerBellEvent::bell("day-1", june_first()).with_rung_at(rung_at);

    assert_eq!(first.rung_at, rung_at);
    assert_eq!(first, second);
}
