use crate::tests::{default_hub, hub_with, june_first, numbered_bell};
use crate::{BroadcastConfig, PublishReport};

use bb_core::{BellKind, BurgerBellEvent};
use googletest::prelude::*;

#[tokio::test]
async fn given_registered_subscriber_when_published_then_event_in_mailbox() {
    let hub = default_hub();
    let (_id, mut mailbox) = hub.register_subscriber();
    let event = numbered_bell(1);

    let report = hub.publish(event.clone());

    assert_that!(
        report,
        eq(PublishReport {
            delivered: 1,
            dropped: 0,
            mirrored: false
        })
    );
    assert_that!(mailbox.try_recv(), some(eq(&event)));
}

#[tokio::test]
async fn given_no_subscribers_when_published_then_nothing_delivered() {
    let hub = default_hub();

    let report = hub.publish(numbered_bell(1));

    assert_that!(report.subscriber_count(), eq(0));
    assert!(report.reached_everyone());
}

#[tokio::test]
async fn given_several_subscribers_when_published_then_each_gets_a_copy() {
    let hub = default_hub();
    let mut mailboxes: Vec<_> = (0..3).map(|_| hub.register_subscriber().1).collect();
    let event = numbered_bell(7);

    let report = hub.publish(event.clone());

    assert_that!(report.delivered, eq(3));
    for mailbox in &mut mailboxes {
        assert_that!(mailbox.drain(), elements_are![eq(&event)]);
    }
}

#[tokio::test]
async fn given_sequential_publishes_when_drained_then_publish_order_kept() {
    let hub = default_hub();
    let (_id, mut mailbox) = hub.register_subscriber();

    for n in 0..5 {
        hub.publish(numbered_bell(n));
    }

    let received = mailbox.drain();
    let expected: Vec<BurgerBellEvent> = (0..5).map(numbered_bell).collect();
    assert_eq!(received, expected);
}

#[tokio::test]
async fn given_full_mailbox_when_sixth_event_published_then_dropped_without_error() {
    let hub = default_hub();
    let (_id, mut mailbox) = hub.register_subscriber();

    let reports: Vec<PublishReport> = (0..6).map(|n| hub.publish(numbered_bell(n))).collect();

    assert!(reports[..5].iter().all(|r| r.delivered == 1));
    assert_that!(reports[5].dropped, eq(1));
    assert_that!(reports[5].delivered, eq(0));

    let received = mailbox.drain();
    let expected: Vec<BurgerBellEvent> = (0..5).map(numbered_bell).collect();
    assert_eq!(received, expected);
}

#[tokio::test]
async fn given_one_full_subscriber_when_published_then_others_still_receive() {
    let hub = hub_with(BroadcastConfig {
        subscriber_capacity: 1,
        ..BroadcastConfig::default()
    });
    let (_slow, mut slow) = hub.register_subscriber();
    hub.publish(numbered_bell(0));
    let (_fast, mut fast) = hub.register_subscriber();

    let report = hub.publish(numbered_bell(1));

    assert_that!(report.delivered, eq(1));
    assert_that!(report.dropped, eq(1));
    assert_that!(slow.drain(), elements_are![eq(&numbered_bell(0))]);
    assert_that!(fast.drain(), elements_are![eq(&numbered_bell(1))]);
}

#[tokio::test]
async fn given_consumer_dropped_mailbox_when_published_then_counted_as_dropped() {
    let hub = default_hub();
    let (id, mailbox) = hub.register_subscriber();
    drop(mailbox);

    let report = hub.publish(numbered_bell(1));

    assert_that!(report.dropped, eq(1));
    // The hub never removes subscribers on its own
    assert!(hub.contains(&id));
}

#[tokio::test]
async fn given_bell_scenario_when_unregistered_then_mailbox_unchanged() {
    let hub = default_hub();
    let (a, mut mailbox) = hub.register_subscriber();
    let bell = BurgerBellEvent::bell("day-2024-06-01", june_first());

    hub.publish(bell.clone());
    assert_that!(mailbox.len(), eq(1));

    hub.unregister_subscriber(&a);
    let report = hub.publish(BurgerBellEvent::new(
        BellKind::DayClosed,
        "day-2024-06-01",
        june_first(),
    ));

    assert_that!(report.subscriber_count(), eq(0));
    assert!(!hub.contains(&a));
    assert_that!(mailbox.drain(), elements_are![eq(&bell)]);
    assert_that!(mailbox.recv().await, none());
}
