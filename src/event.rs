//! Asynchronous event delivery.
//!
//! Device-originated events travel on their own channel, decoupled from
//! command/response traffic: a transport-owned background listener
//! decodes them and pushes onto the producer half; the engine consumes
//! from the other end, at most once per event, in FIFO order.
//!
//! There is no cross-channel ordering guarantee between an event and the
//! response of the same transaction; anything stronger is a per-device
//! contract.

use tokio::sync::mpsc;

use crate::codec::container::Event;

/// Producer half held by the transport's background listener.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<Event>,
}

impl EventSender {
    /// Enqueue one decoded event. Returns `false` if the consumer is gone.
    pub fn send(&self, event: Event) -> bool {
        if self.tx.send(event).is_err() {
            tracing::debug!("event dropped: consumer closed");
            return false;
        }
        true
    }

    /// Whether the consumer half has been dropped.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Consumer half owned by the transport and polled through the engine.
#[derive(Debug)]
pub struct EventQueue {
    rx: tokio::sync::Mutex<mpsc::UnboundedReceiver<Event>>,
}

impl EventQueue {
    /// Take the oldest queued event.
    ///
    /// With `wait` set this blocks until an event arrives (or returns
    /// `None` if every producer is gone). Without it, an empty queue
    /// returns `None` immediately.
    pub async fn next(&self, wait: bool) -> Option<Event> {
        let mut rx = self.rx.lock().await;
        if wait {
            rx.recv().await
        } else {
            rx.try_recv().ok()
        }
    }
}

/// A connected producer/consumer pair for one device connection.
#[must_use]
pub fn event_queue() -> (EventSender, EventQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        EventSender { tx },
        EventQueue {
            rx: tokio::sync::Mutex::new(rx),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::codes::events;

    fn event(txid: u32) -> Event {
        Event::new(events::OBJECT_ADDED, 1, txid, vec![txid])
    }

    #[tokio::test]
    async fn test_fifo_order_preserved() {
        let (tx, queue) = event_queue();
        for i in 1..=5 {
            assert!(tx.send(event(i)));
        }
        for i in 1..=5 {
            let evt = queue.next(false).await.unwrap();
            assert_eq!(evt.transaction_id, i);
        }
    }

    #[tokio::test]
    async fn test_nonblocking_empty_returns_none() {
        let (_tx, queue) = event_queue();
        assert!(queue.next(false).await.is_none());
    }

    #[tokio::test]
    async fn test_blocking_wakes_on_send() {
        let (tx, queue) = event_queue();
        let waiter = tokio::spawn(async move { queue.next(true).await });
        tokio::task::yield_now().await;
        assert!(tx.send(event(9)));
        let evt = waiter.await.unwrap().unwrap();
        assert_eq!(evt.transaction_id, 9);
    }

    #[tokio::test]
    async fn test_consumed_at_most_once() {
        let (tx, queue) = event_queue();
        tx.send(event(1));
        assert!(queue.next(false).await.is_some());
        assert!(queue.next(false).await.is_none());
    }
}
