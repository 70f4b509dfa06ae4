use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// What happened on a burger day that made the bell ring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BellKind {
    /// Someone rang the bell: the food has arrived
    Bell,
    OrderPlaced,
    OrderPaid,
    /// No more orders are accepted for the day
    DayClosed,
}

impl BellKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bell => "bell",
            Self::OrderPlaced => "order_placed",
            Self::OrderPaid => "order_paid",
            Self::DayClosed => "day_closed",
        }
    }
}

impl fmt::Display for BellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BellKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "bell" => Ok(Self::Bell),
            "order_placed" => Ok(Self::OrderPlaced),
            "order_paid" => Ok(Self::OrderPaid),
            "day_closed" => Ok(Self::DayClosed),
            _ => Err(CoreError::InvalidBellKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
