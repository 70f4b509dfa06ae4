use crate::BellKind;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Live notification pushed to everyone watching a burger day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BurgerBellEvent {
    pub kind: BellKind,
    pub burger_day_id: String,
    pub day: NaiveDate,
    pub rung_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl BurgerBellEvent {
    pub fn new(kind: BellKind, burger_day_id: impl Into<String>, day: NaiveDate) -> Self {
        Self {
            kind,
            burger_day_id: burger_day_id.into(),
            day,
            rung_at: Utc::now(),
            message: None,
        }
    }

    /// The plain "food is here" bell.
    pub fn bell(burger_day_id: impl Into<String>, day: NaiveDate) -> Self {
        Self::new(BellKind::Bell, burger_day_id, day)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Override the ring time, e.g. when replaying a stored bell.
    pub fn with_rung_at(mut self, rung_at: DateTime<Utc>) -> Self {
        self.rung_at = rung_at;
        self
    }
}
