use bb_hub::BroadcastHub;

use chrono::{DateTime, Utc};

/// Shared state handed to every route
#[derive(Clone)]
pub struct AppState {
    pub hub: BroadcastHub,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(hub: BroadcastHub) -> Self {
        Self {
            hub,
            started_at: Utc::now(),
        }
    }
}
