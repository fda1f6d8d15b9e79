use tokio::sync::watch;

use crate::error::SimError;

/// Creates a connected notifier/signal pair, initially not ready.
pub fn ready_channel() -> (ReadyNotifier, ReadySignal) {
    let (tx, rx) = watch::channel(false);
    (ReadyNotifier { tx }, ReadySignal { rx })
}

/// Sending half, held by the surface.
#[derive(Debug)]
pub struct ReadyNotifier {
    tx: watch::Sender<bool>,
}

impl ReadyNotifier {
    /// Marks the surface ready and wakes every waiter. Repeated calls are
    /// harmless.
    pub fn notify(&self) {
        self.tx.send_replace(true);
    }
}

/// Broadcast readiness flag.
///
/// Clone it freely; every clone observes the same transition, and
/// [`wait`](Self::wait) may be awaited any number of times.
#[derive(Debug, Clone)]
pub struct ReadySignal {
    rx: watch::Receiver<bool>,
}

impl ReadySignal {
    #[inline]
    pub fn is_ready(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the surface is ready, immediately if it already is.
    ///
    /// Fails with [`SimError::SurfaceClosed`] if the notifier is dropped
    /// without ever notifying.
    pub async fn wait(&self) -> Result<(), SimError> {
        let mut rx = self.rx.clone();
        rx.wait_for(|ready| *ready)
            .await
            .map(|_| ())
            .map_err(|_| SimError::SurfaceClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_not_ready() {
        let (_tx, rx) = ready_channel();
        assert!(!rx.is_ready());
    }

    #[test]
    fn every_clone_observes_notify() {
        let (tx, rx) = ready_channel();
        let other = rx.clone();
        tx.notify();
        assert!(rx.is_ready());
        assert!(other.is_ready());
        pollster::block_on(other.wait()).unwrap();
        // A second await on the same signal resolves again.
        pollster::block_on(other.wait()).unwrap();
    }

    #[test]
    fn waiting_after_notify_resolves_even_if_notifier_dropped() {
        let (tx, rx) = ready_channel();
        tx.notify();
        drop(tx);
        assert_eq!(pollster::block_on(rx.wait()), Ok(()));
    }

    #[test]
    fn dropped_notifier_without_notify_is_an_error() {
        let (tx, rx) = ready_channel();
        drop(tx);
        assert_eq!(pollster::block_on(rx.wait()), Err(SimError::SurfaceClosed));
    }
}
