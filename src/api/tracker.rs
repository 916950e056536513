//! In-flight request tracking.
//!
//! A [`RequestTracker`] counts the API calls currently waiting for a
//! response. Presentation layers read [`RequestTracker::is_busy`] or
//! subscribe to the watch channel to drive a global loading indicator.

use std::sync::Arc;
use tokio::sync::watch;
use uuid::Uuid;

/// Shared counter of in-flight requests.
///
/// Cloning is cheap; all clones observe the same counter. The watch
/// channel holds the count, so readers and subscribers never disagree.
#[derive(Debug, Clone)]
pub struct RequestTracker {
    tx: Arc<watch::Sender<usize>>,
}

impl RequestTracker {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx: Arc::new(tx) }
    }

    /// Start tracking one request. The count drops again when the guard is
    /// dropped, whether the request succeeded, failed or was abandoned.
    pub fn track(&self, operation: &'static str) -> TrackGuard {
        let request_id = Uuid::new_v4();
        let mut now = 0;
        self.tx.send_modify(|count| {
            *count += 1;
            now = *count;
        });
        tracing::trace!(%request_id, operation, in_flight = now, "request started");
        TrackGuard {
            tx: Arc::clone(&self.tx),
            operation,
            request_id,
        }
    }

    /// Number of tracked requests still waiting for a response.
    pub fn in_flight(&self) -> usize {
        *self.tx.borrow()
    }

    /// True while at least one tracked request is in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight() > 0
    }

    /// Receive every change of the in-flight count.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.tx.subscribe()
    }
}

impl Default for RequestTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps one request counted while alive.
#[derive(Debug)]
#[must_use = "the request stops being tracked when the guard is dropped"]
pub struct TrackGuard {
    tx: Arc<watch::Sender<usize>>,
    operation: &'static str,
    request_id: Uuid,
}

impl TrackGuard {
    /// Id attached to this request in logs.
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }
}

impl Drop for TrackGuard {
    fn drop(&mut self) {
        let mut now = 0;
        self.tx.send_modify(|count| {
            *count = count.saturating_sub(1);
            now = *count;
        });
        tracing::trace!(
            request_id = %self.request_id,
            operation = self.operation,
            in_flight = now,
            "request finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_counts_and_releases() {
        let tracker = RequestTracker::new();
        assert!(!tracker.is_busy());

        let first = tracker.track("list_courses");
        let second = tracker.track("get_course");
        assert_eq!(tracker.in_flight(), 2);
        assert_ne!(first.request_id(), second.request_id());

        drop(first);
        assert_eq!(tracker.in_flight(), 1);
        drop(second);
        assert_eq!(tracker.in_flight(), 0);
        assert!(!tracker.is_busy());
    }

    #[test]
    fn test_clones_share_the_counter() {
        let tracker = RequestTracker::new();
        let clone = tracker.clone();
        let _guard = clone.track("get_course_report");
        assert!(tracker.is_busy());
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let tracker = RequestTracker::new();
        let mut rx = tracker.subscribe();
        assert_eq!(*rx.borrow(), 0);

        let guard = tracker.track("get_course");
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 1);

        drop(guard);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 0);
    }

    #[tokio::test]
    async fn test_guard_released_when_future_is_dropped() {
        let tracker = RequestTracker::new();
        let t = tracker.clone();
        let task = tokio::spawn(async move {
            let _guard = t.track("get_course");
            std::future::pending::<()>().await;
        });
        tokio::task::yield_now().await;
        task.abort();
        let _ = task.await;
        assert_eq!(tracker.in_flight(), 0);
    }

    #[test]
    fn test_subscribers_agree_after_concurrent_drops() {
        let tracker = RequestTracker::new();
        let rx = tracker.subscribe();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let t = tracker.clone();
                std::thread::spawn(move || {
                    for _ in 0..500 {
                        let outer = t.track("list_courses");
                        let inner = t.track("get_course");
                        drop(outer);
                        drop(inner);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(tracker.in_flight(), 0);
        assert_eq!(*rx.borrow(), 0);
        assert!(!tracker.is_busy());
    }
}
