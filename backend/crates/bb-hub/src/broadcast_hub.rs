//! Fan-out hub for live bell notifications.
//!
//! Delivery is best-effort and at-most-once per subscriber:
//!
//! - `publish` never blocks and never fails. Each subscriber has a bounded
//!   mailbox; if it is full the event is dropped for that subscriber only.
//! - Events reach one subscriber in publish order. Nothing is promised about
//!   ordering across subscribers.
//! - Nothing is persisted or retried. Callers needing a complete picture must
//!   re-query the source of truth.

use crate::relay::spawn_relay;
use crate::subscriber_registry::SubscriberRegistry;
use crate::{
    BellSubscription, BroadcastConfig, DeliveryPath, EventHub, HubError, HubMetrics,
    LegacyPublisher, Mailbox, PublishReport, Result as HubErrorResult, ShutdownCoordinator,
    ShutdownGuard, SubscriberId,
};

use std::panic::Location;
use std::sync::{Arc, Mutex, PoisonError};

use bb_core::BurgerBellEvent;
use error_location::ErrorLocation;
use log::{debug, info, warn};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Registry of live subscribers plus the legacy relay that feeds them.
///
/// Cheap to clone; all clones share the same registry. The hub shuts down when
/// [`shutdown`](Self::shutdown) is called or the last clone is dropped.
pub struct BroadcastHub<E = BurgerBellEvent> {
    inner: Arc<HubInner<E>>,
}

struct HubInner<E> {
    registry: Arc<SubscriberRegistry<E>>,
    legacy: LegacyPublisher<E>,
    config: BroadcastConfig,
    shutdown: ShutdownCoordinator,
    relay: Mutex<Option<JoinHandle<()>>>,
}

impl<E> BroadcastHub<E>
where
    E: Clone + Send + 'static,
{
    /// Build a hub and start its relay task on the current Tokio runtime.
    #[track_caller]
    pub fn new(config: BroadcastConfig) -> HubErrorResult<Self> {
        config.validate()?;

        if tokio::runtime::Handle::try_current().is_err() {
            return Err(HubError::NoRuntime {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let metrics = HubMetrics::new();
        let registry = Arc::new(SubscriberRegistry::new(
            config.subscriber_capacity,
            config.id_prefix.clone(),
            metrics.clone(),
        ));

        let (legacy_tx, legacy_rx) = mpsc::channel(config.legacy_capacity);
        let shutdown = ShutdownCoordinator::new();
        let relay = spawn_relay(legacy_rx, Arc::clone(&registry), shutdown.subscribe_guard());

        info!(
            "Bell hub started (subscriber capacity {}, legacy capacity {}, mirror to legacy: {})",
            config.subscriber_capacity, config.legacy_capacity, config.mirror_to_legacy
        );

        Ok(Self {
            inner: Arc::new(HubInner {
                registry,
                legacy: LegacyPublisher::new(legacy_tx, metrics),
                config,
                shutdown,
                relay: Mutex::new(Some(relay)),
            }),
        })
    }

    /// Deliver `event` to every registered subscriber without blocking.
    ///
    /// In mirror mode the event is also queued on the legacy channel, so the
    /// relay may deliver it a second time.
    pub fn publish(&self, event: E) -> PublishReport {
        let mirrored = self.inner.config.mirror_to_legacy && self.inner.legacy.send(event.clone());

        let mut report = self.inner.registry.fan_out(&event, DeliveryPath::Direct);
        report.mirrored = mirrored;

        debug!(
            "Published bell event to {} subscribers ({} dropped)",
            report.delivered, report.dropped
        );
        report
    }
}

impl<E> BroadcastHub<E> {
    /// Add a subscriber. Always succeeds; after shutdown the mailbox is already closed.
    pub fn register_subscriber(&self) -> (SubscriberId, Mailbox<E>) {
        self.inner.registry.register()
    }

    /// Remove a subscriber and close its mailbox. Unknown ids are a no-op.
    pub fn unregister_subscriber(&self, id: &SubscriberId) {
        self.inner.registry.remove(id.as_str());
    }

    /// Register and wrap the mailbox in a guard that unregisters on drop.
    pub fn subscribe(&self) -> BellSubscription<E> {
        let (id, mailbox) = self.inner.registry.register();
        BellSubscription::new(id, mailbox, Arc::clone(&self.inner.registry))
    }

    /// Handle for producers still on the single-channel path.
    pub fn legacy_publisher(&self) -> LegacyPublisher<E> {
        self.inner.legacy.clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.registry.len()
    }

    pub fn contains(&self, id: &SubscriberId) -> bool {
        self.inner.registry.contains(id.as_str())
    }

    pub fn subscriber_ids(&self) -> Vec<SubscriberId> {
        self.inner.registry.ids()
    }

    pub fn config(&self) -> &BroadcastConfig {
        &self.inner.config
    }

    pub fn is_shut_down(&self) -> bool {
        self.inner.shutdown.is_shutdown()
    }

    /// Resolves once the hub has been shut down.
    pub fn shutdown_guard(&self) -> ShutdownGuard {
        self.inner.shutdown.subscribe_guard()
    }

    /// Stop the relay and close every subscriber mailbox. Idempotent.
    pub fn shutdown(&self) {
        self.inner.shut_down();
    }

    /// Wait for the relay task to finish. Only the first caller actually waits.
    pub async fn wait_for_relay(&self) {
        let handle = self
            .inner
            .relay
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(handle) = handle
            && let Err(e) = handle.await
        {
            warn!("Bell relay task ended abnormally: {e}");
        }
    }
}

impl<E> HubInner<E> {
    fn shut_down(&self) {
        if !self.shutdown.shutdown() {
            return;
        }
        let closed = self.registry.close();
        info!("Bell hub shut down ({closed} subscribers disconnected)");
    }
}

impl<E> Drop for HubInner<E> {
    fn drop(&mut self) {
        self.shut_down();
    }
}

impl<E> Clone for BroadcastHub<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> EventHub<E> for BroadcastHub<E>
where
    E: Clone + Send + 'static,
{
    fn register(&self) -> (SubscriberId, Mailbox<E>) {
        self.register_subscriber()
    }

    fn unregister(&self, id: &SubscriberId) {
        self.unregister_subscriber(id);
    }

    fn publish(&self, event: E) -> PublishReport {
        BroadcastHub::publish(self, event)
    }
}
