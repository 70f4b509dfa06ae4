pub mod bell_subscription;
pub mod broadcast_config;
pub mod broadcast_hub;
pub mod delivery_path;
pub mod error;
pub mod event_hub;
pub mod hub_metrics;
pub mod legacy_publisher;
pub mod mailbox;
pub mod publish_report;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod subscriber_id;

mod relay;
mod subscriber_registry;

#[cfg(test)]
mod tests;

pub use bell_subscription::BellSubscription;
pub use broadcast_config::BroadcastConfig;
pub use broadcast_hub::BroadcastHub;
pub use delivery_path::DeliveryPath;
pub use error::{HubError, Result};
pub use event_hub::EventHub;
pub use hub_metrics::HubMetrics;
pub use legacy_publisher::LegacyPublisher;
pub use mailbox::Mailbox;
pub use publish_report::PublishReport;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use subscriber_id::SubscriberId;
