//! Session lifecycle signal.
//!
//! The client never navigates anywhere itself. When a session becomes
//! irrecoverable (refresh failed, refresh token missing, or explicit
//! logout) it flips this signal; the hosting layer subscribes and decides
//! what "go to the login screen" means for it.

use tokio::sync::watch;

/// Lifecycle state of the stored session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Requests are being dispatched with whatever credentials are stored.
    Active,
    /// Stored credentials were purged; the user must log in again.
    Terminated,
}

/// Subscription to the session lifecycle.
#[derive(Debug, Clone)]
pub struct SessionWatcher {
    pub(crate) rx: watch::Receiver<SessionState>,
}

impl SessionWatcher {
    /// The current session state.
    pub fn current(&self) -> SessionState {
        *self.rx.borrow()
    }

    /// Wait until the session is terminated.
    ///
    /// Resolves immediately if it already is. Also resolves if the owning
    /// client is dropped, since no further requests can revive the session.
    pub async fn terminated(&mut self) {
        let _ = self
            .rx
            .wait_for(|state| *state == SessionState::Terminated)
            .await;
    }
}
