use crate::HubMetrics;

use log::trace;
use tokio::sync::mpsc::{self, error::TrySendError};

/// Handle for code that still speaks to the old single-channel bell.
///
/// Events sent here are picked up by the hub's relay task and fanned out to
/// every subscriber. Sending never blocks: a full or closed channel drops the
/// event.
pub struct LegacyPublisher<E> {
    sender: mpsc::Sender<E>,
    metrics: HubMetrics,
}

impl<E> LegacyPublisher<E> {
    pub(crate) fn new(sender: mpsc::Sender<E>, metrics: HubMetrics) -> Self {
        Self { sender, metrics }
    }

    /// Queue an event for the relay. Returns false if it was dropped.
    pub fn send(&self, event: E) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => {
                self.metrics.legacy_enqueued();
                true
            }
            Err(TrySendError::Full(_)) => {
                trace!("Legacy bell channel full, dropping event");
                self.metrics.legacy_dropped("full");
                false
            }
            Err(TrySendError::Closed(_)) => {
                trace!("Legacy bell channel closed, dropping event");
                self.metrics.legacy_dropped("closed");
                false
            }
        }
    }

    /// True once the relay has stopped
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl<E> Clone for LegacyPublisher<E> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            metrics: self.metrics.clone(),
        }
    }
}
