use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Shared exit signal for the input thread and the in-flight fetch.
///
/// Signalling is idempotent. Both sync (`is_shutting_down`) and async
/// (`wait`) observers are supported.
#[derive(Clone, Default)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::debug!("shutdown signalled");
            self.notify.notify_waiters();
        }
    }

    pub async fn wait(&self) {
        // Register interest before checking the flag, otherwise a signal
        // landing between the check and the await is lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_shutting_down() {
            return;
        }
        notified.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn signal_is_visible_to_clones() {
        let handle = ShutdownHandle::new();
        let clone = handle.clone();
        assert!(!clone.is_shutting_down());
        handle.signal();
        handle.signal();
        assert!(clone.is_shutting_down());
    }

    #[tokio::test]
    async fn wait_returns_after_signal() {
        let handle = ShutdownHandle::new();
        let waiter = handle.clone();
        let task = tokio::spawn(async move { waiter.wait().await });
        tokio::time::sleep(Duration::from_millis(10)).await;
        handle.signal();
        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .expect("wait did not finish")
            .unwrap();
    }

    #[tokio::test]
    async fn wait_returns_immediately_when_already_signalled() {
        let handle = ShutdownHandle::new();
        handle.signal();
        tokio::time::timeout(Duration::from_millis(100), handle.wait())
            .await
            .expect("wait blocked on an already signalled handle");
    }
}
