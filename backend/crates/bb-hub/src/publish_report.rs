/// Outcome of one publish. Informational only: dropped events are never retried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishReport {
    /// Subscribers whose mailbox accepted the event
    pub delivered: usize,
    /// Subscribers whose mailbox was full (or no longer read)
    pub dropped: usize,
    /// Event was also queued on the legacy relay channel
    pub mirrored: bool,
}

impl PublishReport {
    pub fn subscriber_count(&self) -> usize {
        self.delivered + self.dropped
    }

    pub fn reached_everyone(&self) -> bool {
        self.dropped == 0
    }
}
