use crate::subscriber_registry::SubscriberRegistry;
use crate::{DeliveryPath, ShutdownGuard};

use std::sync::Arc;

use log::{debug, info};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Drain the legacy channel into the same fan-out `publish` uses.
///
/// Stops when the hub shuts down or every legacy sender is gone, then closes
/// the channel so late legacy sends are dropped instead of queued.
pub(crate) fn spawn_relay<E>(
    mut legacy_rx: mpsc::Receiver<E>,
    registry: Arc<SubscriberRegistry<E>>,
    mut shutdown: ShutdownGuard,
) -> JoinHandle<()>
where
    E: Clone + Send + 'static,
{
    tokio::spawn(async move {
        debug!("Bell relay started");
        let mut forwarded: u64 = 0;

        loop {
            tokio::select! {
                biased;

                _ = shutdown.wait() => {
                    debug!("Bell relay received shutdown signal");
                    break;
                }

                received = legacy_rx.recv() => match received {
                    Some(event) => {
                        registry.fan_out(&event, DeliveryPath::Relay);
                        forwarded += 1;
                    }
                    None => {
                        debug!("Legacy bell channel closed");
                        break;
                    }
                },
            }
        }

        legacy_rx.close();
        info!("Bell relay stopped after forwarding {forwarded} events");
    })
}
