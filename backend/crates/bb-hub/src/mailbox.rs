use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc;

/// Read side of a subscriber's bounded queue.
///
/// Yields events in publish order. Once the subscriber is unregistered (or the
/// hub shuts down) the remaining queued events can still be drained, after
/// which [`recv`](Self::recv) returns `None`.
#[derive(Debug)]
pub struct Mailbox<E> {
    receiver: mpsc::Receiver<E>,
}

impl<E> Mailbox<E> {
    pub(crate) fn new(receiver: mpsc::Receiver<E>) -> Self {
        Self { receiver }
    }

    /// Wait for the next event. `None` means end of stream.
    pub async fn recv(&mut self) -> Option<E> {
        self.receiver.recv().await
    }

    /// Take the next queued event without waiting.
    pub fn try_recv(&mut self) -> Option<E> {
        self.receiver.try_recv().ok()
    }

    /// Take everything currently queued.
    pub fn drain(&mut self) -> Vec<E> {
        let mut events = Vec::with_capacity(self.receiver.len());
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// True once the hub will never write to this mailbox again
    pub fn is_closed(&self) -> bool {
        self.receiver.is_closed()
    }

    pub fn capacity(&self) -> usize {
        self.receiver.max_capacity()
    }
}

impl<E> Stream for Mailbox<E> {
    type Item = E;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<E>> {
        self.get_mut().receiver.poll_recv(cx)
    }
}
