mod publish;

use crate::{BroadcastConfig, BroadcastHub};

use std::time::Duration;

use bb_core::BurgerBellEvent;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub(crate) const RECV_TIMEOUT: Duration = Duration::from_secs(1);
pub(crate) const QUIET_PERIOD: Duration = Duration::from_millis(50);

pub(crate) fn june_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

pub(crate) fn noon_june_first() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Bell events that are distinguishable by their message, all rung at the same instant
pub(crate) fn numbered_bell(n: usize) -> BurgerBellEvent {
    BurgerBellEvent::bell("day-1", june_first())
        .with_rung_at(noon_june_first())
        .with_message(format!("bell #{n}"))
}

/// Hub with default settings; must be called inside a Tokio runtime
pub(crate) fn default_hub() -> BroadcastHub {
    BroadcastHub::new(BroadcastConfig::default()).unwrap()
}

pub(crate) fn hub_with(config: BroadcastConfig) -> BroadcastHub {
    BroadcastHub::new(config).unwrap()
}
