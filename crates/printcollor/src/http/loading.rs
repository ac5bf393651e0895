//! In-flight request gauge.
//!
//! Every dispatched request holds a [`LoadingGuard`] until it finally
//! settles, retry included, so the count drops exactly once per original
//! dispatch. The gauge is owned by the client state and observed through a
//! watch subscription; nothing here is global.

use tokio::sync::watch;

/// Counts requests currently in flight.
#[derive(Debug)]
pub(crate) struct LoadingGauge {
    tx: watch::Sender<usize>,
}

impl LoadingGauge {
    pub(crate) fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx }
    }

    /// Register a dispatch. The returned guard decrements on drop.
    pub(crate) fn start(&self) -> LoadingGuard {
        self.tx.send_modify(|n| *n += 1);
        LoadingGuard {
            tx: self.tx.clone(),
        }
    }

    pub(crate) fn subscribe(&self) -> LoadingWatcher {
        LoadingWatcher {
            rx: self.tx.subscribe(),
        }
    }
}

/// RAII guard for one in-flight request.
#[derive(Debug)]
pub(crate) struct LoadingGuard {
    tx: watch::Sender<usize>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        // Floor at zero; the gauge must never go negative.
        self.tx.send_modify(|n| *n = n.saturating_sub(1));
    }
}

/// Subscription to the in-flight request count.
///
/// A UI layer drives its loading indicator from this: visible while
/// [`is_loading`](Self::is_loading) is true.
#[derive(Debug, Clone)]
pub struct LoadingWatcher {
    rx: watch::Receiver<usize>,
}

impl LoadingWatcher {
    /// Number of requests currently in flight.
    pub fn in_flight(&self) -> usize {
        *self.rx.borrow()
    }

    /// True while any request is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight() > 0
    }

    /// Wait until the in-flight count changes.
    ///
    /// Returns `false` if the owning client has been dropped.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    /// Wait until no requests are in flight.
    pub async fn idle(&mut self) {
        // wait_for only errors once the sender is gone, at which point the
        // count can no longer rise
        let _ = self.rx.wait_for(|n| *n == 0).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_decrements_on_drop() {
        let gauge = LoadingGauge::new();
        let watcher = gauge.subscribe();

        let g1 = gauge.start();
        let g2 = gauge.start();
        assert_eq!(watcher.in_flight(), 2);
        assert!(watcher.is_loading());

        drop(g1);
        assert_eq!(watcher.in_flight(), 1);

        drop(g2);
        assert_eq!(watcher.in_flight(), 0);
        assert!(!watcher.is_loading());
    }

    #[tokio::test]
    async fn idle_resolves_after_last_guard() {
        let gauge = LoadingGauge::new();
        let mut watcher = gauge.subscribe();

        let guard = gauge.start();
        let wait = tokio::spawn(async move {
            watcher.idle().await;
            watcher
        });

        drop(guard);
        let watcher = wait.await.unwrap();
        assert_eq!(watcher.in_flight(), 0);
    }
}
