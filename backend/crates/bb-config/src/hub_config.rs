use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LEGACY_CAPACITY, DEFAULT_MIRROR_TO_LEGACY,
    DEFAULT_SUBSCRIBER_CAPACITY, DEFAULT_SUBSCRIBER_ID_PREFIX, MAX_MAILBOX_CAPACITY,
    MIN_MAILBOX_CAPACITY,
};

use serde::Deserialize;

/// Bell broadcast hub settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// Events buffered per subscriber before new ones are dropped
    pub subscriber_capacity: usize,
    /// Events buffered on the legacy single-consumer channel
    pub legacy_capacity: usize,
    /// Namespace prepended to generated subscriber ids
    pub id_prefix: String,
    /// Also push every published event through the legacy relay.
    /// Subscribers may then see the same event twice.
    pub mirror_to_legacy: bool,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            subscriber_capacity: DEFAULT_SUBSCRIBER_CAPACITY,
            legacy_capacity: DEFAULT_LEGACY_CAPACITY,
            id_prefix: String::from(DEFAULT_SUBSCRIBER_ID_PREFIX),
            mirror_to_legacy: DEFAULT_MIRROR_TO_LEGACY,
        }
    }
}

impl HubConfig {
    #[track_caller]
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::validate_capacity("hub.subscriber_capacity", self.subscriber_capacity)?;
        Self::validate_capacity("hub.legacy_capacity", self.legacy_capacity)?;

        if self.id_prefix.trim().is_empty() {
            return Err(ConfigError::hub("hub.id_prefix cannot be empty"));
        }

        Ok(())
    }

    #[track_caller]
    fn validate_capacity(field: &str, value: usize) -> ConfigErrorResult<()> {
        if !(MIN_MAILBOX_CAPACITY..=MAX_MAILBOX_CAPACITY).contains(&value) {
            return Err(ConfigError::hub(format!(
                "{} must be {}-{}, got {}",
                field, MIN_MAILBOX_CAPACITY, MAX_MAILBOX_CAPACITY, value
            )));
        }
        Ok(())
    }
}
