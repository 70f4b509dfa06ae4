use crate::DeliveryPath;

use metrics::{counter, gauge};

/// Metrics collector for hub activity
#[derive(Debug, Clone)]
pub struct HubMetrics {
    prefix: &'static str,
}

impl HubMetrics {
    pub fn new() -> Self {
        Self { prefix: "bb_hub" }
    }

    /// Record a new subscriber and the resulting registry size
    pub fn subscriber_registered(&self, active: usize) {
        counter!(format!("{}.subscribers.registered", self.prefix)).increment(1);
        gauge!(format!("{}.subscribers.active", self.prefix)).set(active as f64);
    }

    /// Record a removed subscriber and the resulting registry size
    pub fn subscriber_unregistered(&self, active: usize) {
        counter!(format!("{}.subscribers.unregistered", self.prefix)).increment(1);
        gauge!(format!("{}.subscribers.active", self.prefix)).set(active as f64);
    }

    /// Record one fan-out pass over the registry
    pub fn fanned_out(&self, path: DeliveryPath, delivered: usize, dropped: usize) {
        counter!(format!("{}.events.{}", self.prefix, path)).increment(1);
        counter!(format!("{}.deliveries.{}", self.prefix, path)).increment(delivered as u64);
        if dropped > 0 {
            counter!(format!("{}.drops.{}", self.prefix, path)).increment(dropped as u64);
        }
    }

    /// Record an event accepted by the legacy channel
    pub fn legacy_enqueued(&self) {
        counter!(format!("{}.legacy.enqueued", self.prefix)).increment(1);
    }

    /// Record an event the legacy channel could not take
    pub fn legacy_dropped(&self, reason: &str) {
        counter!(format!("{}.legacy.dropped", self.prefix)).increment(1);
        counter!(format!("{}.legacy.dropped.{}", self.prefix, reason)).increment(1);
    }

    /// Record hub teardown and how many mailboxes it closed
    pub fn hub_shutdown(&self, closed: usize) {
        counter!(format!("{}.shutdowns", self.prefix)).increment(1);
        counter!(format!("{}.subscribers.closed_on_shutdown", self.prefix))
            .increment(closed as u64);
        gauge!(format!("{}.subscribers.active", self.prefix)).set(0.0);
    }
}

impl Default for HubMetrics {
    fn default() -> Self {
        Self::new()
    }
}
