use crate::{HubError, Result as HubErrorResult};

use bb_config::{
    DEFAULT_LEGACY_CAPACITY, DEFAULT_MIRROR_TO_LEGACY, DEFAULT_SUBSCRIBER_CAPACITY,
    DEFAULT_SUBSCRIBER_ID_PREFIX, HubConfig, MAX_MAILBOX_CAPACITY, MIN_MAILBOX_CAPACITY,
};

/// Runtime settings for a [`BroadcastHub`](crate::BroadcastHub)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastConfig {
    /// Mailbox capacity per subscriber (bounded to keep slow clients from hoarding memory)
    pub subscriber_capacity: usize,
    /// Capacity of the legacy single-consumer channel drained by the relay
    pub legacy_capacity: usize,
    pub id_prefix: String,
    /// Publish also feeds the legacy relay, so subscribers can see an event twice
    pub mirror_to_legacy: bool,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            subscriber_capacity: DEFAULT_SUBSCRIBER_CAPACITY,
            legacy_capacity: DEFAULT_LEGACY_CAPACITY,
            id_prefix: String::from(DEFAULT_SUBSCRIBER_ID_PREFIX),
            mirror_to_legacy: DEFAULT_MIRROR_TO_LEGACY,
        }
    }
}

impl BroadcastConfig {
    /// Same bounds as the `[hub]` config section. Tokio panics on a zero or
    /// oversized bounded channel, so both capacities are checked up front.
    pub fn validate(&self) -> HubErrorResult<()> {
        Self::validate_capacity("subscriber_capacity", self.subscriber_capacity)?;
        Self::validate_capacity("legacy_capacity", self.legacy_capacity)?;

        if self.id_prefix.trim().is_empty() {
            return Err(HubError::invalid_config("id_prefix cannot be empty"));
        }

        Ok(())
    }

    fn validate_capacity(field: &str, value: usize) -> HubErrorResult<()> {
        if !(MIN_MAILBOX_CAPACITY..=MAX_MAILBOX_CAPACITY).contains(&value) {
            return Err(HubError::invalid_config(format!(
                "{field} must be {MIN_MAILBOX_CAPACITY}-{MAX_MAILBOX_CAPACITY}, got {value}"
            )));
        }
        Ok(())
    }
}

impl From<&HubConfig> for BroadcastConfig {
    fn from(config: &HubConfig) -> Self {
        Self {
            subscriber_capacity: config.subscriber_capacity,
            legacy_capacity: config.legacy_capacity,
            id_prefix: config.id_prefix.clone(),
            mirror_to_legacy: config.mirror_to_legacy,
        }
    }
}
