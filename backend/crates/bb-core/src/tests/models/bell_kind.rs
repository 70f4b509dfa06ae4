use crate::{BellKind, CoreError};

use std::str::FromStr;

#[test]
fn test_bell_kind_as_str() {
    assert_eq!(BellKind::Bell.as_str(), "bell");
    assert_eq!(BellKind::OrderPlaced.as_str(), "order_placed");
    assert_eq!(BellKind::OrderPaid.as_str(), "order_paid");
    assert_eq!(BellKind::DayClosed.as_str(), "day_closed");
}

#[test]
fn test_bell_kind_from_str() {
    for kind in [
        BellKind::Bell,
        BellKind::OrderPlaced,
        BellKind::OrderPaid,
        BellKind::DayClosed,
    ] {
        assert_eq!(BellKind::from_str(kind.as_str()).unwrap(), kind);
    }
}

#[test]
fn test_bell_kind_from_str_rejects_unknown() {
    let result = BellKind::from_str("gong");
    assert!(matches!(result, Err(CoreError::InvalidBellKind { .. })));
}
