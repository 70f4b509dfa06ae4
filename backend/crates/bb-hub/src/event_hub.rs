use crate::{Mailbox, PublishReport, SubscriberId};

/// What the subscription and mutation layers need from a bell hub
pub trait EventHub<E>: Send + Sync {
    fn register(&self) -> (SubscriberId, Mailbox<E>);

    fn unregister(&self, id: &SubscriberId);

    fn publish(&self, event: E) -> PublishReport;
}
