use crate::subscriber_registry::SubscriberRegistry;
use crate::{Mailbox, SubscriberId};

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::Stream;

/// A registered subscriber that unregisters itself when dropped.
///
/// Hand this to a subscription resolver as its event stream; when the
/// connection ends for any reason the stream is dropped and the registry entry
/// goes with it.
pub struct BellSubscription<E> {
    id: SubscriberId,
    mailbox: Mailbox<E>,
    registry: Arc<SubscriberRegistry<E>>,
}

impl<E> BellSubscription<E> {
    pub(crate) fn new(
        id: SubscriberId,
        mailbox: Mailbox<E>,
        registry: Arc<SubscriberRegistry<E>>,
    ) -> Self {
        Self {
            id,
            mailbox,
            registry,
        }
    }

    pub fn id(&self) -> &SubscriberId {
        &self.id
    }

    pub async fn recv(&mut self) -> Option<E> {
        self.mailbox.recv().await
    }

    pub fn try_recv(&mut self) -> Option<E> {
        self.mailbox.try_recv()
    }

    pub fn mailbox(&self) -> &Mailbox<E> {
        &self.mailbox
    }
}

impl<E> Stream for BellSubscription<E> {
    type Item = E;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<E>> {
        Pin::new(&mut self.get_mut().mailbox).poll_next(cx)
    }
}

impl<E> Drop for BellSubscription<E> {
    fn drop(&mut self) {
        self.registry.remove(self.id.as_str());
    }
}
