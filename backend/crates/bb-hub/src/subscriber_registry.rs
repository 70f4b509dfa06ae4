use crate::{DeliveryPath, HubMetrics, Mailbox, PublishReport, SubscriberId};

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, info, trace, warn};
use tokio::sync::mpsc::{self, error::TrySendError};

/// Guarded id -> mailbox map.
///
/// Every access goes through one mutex that is held only while touching the
/// map, never across an await. Removing an entry drops the hub's sending half,
/// which is what closes the subscriber's mailbox.
pub(crate) struct SubscriberRegistry<E> {
    state: Mutex<RegistryState<E>>,
    capacity: usize,
    id_prefix: String,
    metrics: HubMetrics,
}

struct RegistryState<E> {
    mailboxes: HashMap<SubscriberId, mpsc::Sender<E>>,
    /// Set on hub shutdown; no further registrations are accepted
    closed: bool,
}

impl<E> SubscriberRegistry<E> {
    pub(crate) fn new(capacity: usize, id_prefix: String, metrics: HubMetrics) -> Self {
        Self {
            state: Mutex::new(RegistryState {
                mailboxes: HashMap::new(),
                closed: false,
            }),
            capacity,
            id_prefix,
            metrics,
        }
    }

    // No user code runs under the lock, so a poisoned map is still consistent
    fn lock(&self) -> MutexGuard<'_, RegistryState<E>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mint a fresh id and mailbox. After shutdown the mailbox comes back closed.
    pub(crate) fn register(&self) -> (SubscriberId, Mailbox<E>) {
        let (sender, receiver) = mpsc::channel(self.capacity);
        let mut state = self.lock();

        let id = loop {
            let candidate = SubscriberId::generate(&self.id_prefix);
            if !state.mailboxes.contains_key(&candidate) {
                break candidate;
            }
        };

        if state.closed {
            drop(state);
            drop(sender);
            warn!("Subscriber {id} registered after hub shutdown, mailbox closed");
            return (id, Mailbox::new(receiver));
        }

        state.mailboxes.insert(id.clone(), sender);
        let active = state.mailboxes.len();
        drop(state);

        self.metrics.subscriber_registered(active);
        debug!("Registered subscriber {id} ({active} total)");

        (id, Mailbox::new(receiver))
    }

    /// Remove and close a mailbox. Unknown ids are ignored.
    pub(crate) fn remove(&self, id: &str) -> bool {
        let mut state = self.lock();
        let removed = state.mailboxes.remove(id);
        let active = state.mailboxes.len();
        drop(state);

        match removed {
            Some(sender) => {
                drop(sender);
                self.metrics.subscriber_unregistered(active);
                debug!("Unregistered subscriber {id} ({active} remaining)");
                true
            }
            None => {
                trace!("Unregister of unknown subscriber {id} ignored");
                false
            }
        }
    }

    /// Close every mailbox and refuse new registrations. Returns how many were closed.
    pub(crate) fn close(&self) -> usize {
        let mut state = self.lock();
        state.closed = true;
        let closed = state.mailboxes.len();
        state.mailboxes.clear();
        drop(state);

        self.metrics.hub_shutdown(closed);
        info!("Closed {closed} subscriber mailboxes");
        closed
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().mailboxes.len()
    }

    pub(crate) fn contains(&self, id: &str) -> bool {
        self.lock().mailboxes.contains_key(id)
    }

    pub(crate) fn ids(&self) -> Vec<SubscriberId> {
        self.lock().mailboxes.keys().cloned().collect()
    }
}

impl<E: Clone> SubscriberRegistry<E> {
    /// Offer `event` to every mailbox without waiting. Full mailboxes miss it.
    pub(crate) fn fan_out(&self, event: &E, path: DeliveryPath) -> PublishReport {
        let mut report = PublishReport::default();
        let state = self.lock();

        for (id, sender) in &state.mailboxes {
            match sender.try_send(event.clone()) {
                Ok(()) => report.delivered += 1,
                Err(TrySendError::Full(_)) => {
                    report.dropped += 1;
                    trace!("Mailbox of {id} full, dropping {path} event");
                }
                Err(TrySendError::Closed(_)) => {
                    report.dropped += 1;
                    trace!("Mailbox of {id} no longer read, dropping {path} event");
                }
            }
        }
        drop(state);

        self.metrics
            .fanned_out(path, report.delivered, report.dropped);
        report
    }
}
