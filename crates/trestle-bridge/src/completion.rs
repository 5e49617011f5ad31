//! Exactly-once OS completion signals.

use std::sync::Mutex;

use tokio::sync::oneshot;
use tracing::warn;

/// One-shot completion handed to a callback hook that must answer the OS
/// exactly once.
///
/// The first `complete` delivers the value; any later attempt is ignored
/// with a diagnostic, reproducing the fires-once contract of the OS
/// completion handlers this stands in for.
pub struct CompletionHandle<T> {
    label: &'static str,
    sender: Mutex<Option<oneshot::Sender<T>>>,
}

impl<T> CompletionHandle<T> {
    /// Creates a handle and the receiver the OS side awaits.
    pub fn new(label: &'static str) -> (Self, oneshot::Receiver<T>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                label,
                sender: Mutex::new(Some(tx)),
            },
            rx,
        )
    }

    /// Delivers the completion value. Returns false if the handle had
    /// already completed.
    pub fn complete(&self, value: T) -> bool {
        let sender = match self.sender.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        match sender {
            Some(tx) => {
                // The receiver may be gone; the contract is only that we
                // signal at most once.
                let _ = tx.send(value);
                true
            }
            None => {
                warn!(label = self.label, "duplicate completion ignored");
                false
            }
        }
    }

    /// Whether the completion has already fired.
    pub fn is_complete(&self) -> bool {
        match self.sender.lock() {
            Ok(slot) => slot.is_none(),
            Err(poisoned) => poisoned.into_inner().is_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn completes_exactly_once() {
        let (handle, rx) = CompletionHandle::new("fetch");
        assert!(!handle.is_complete());
        assert!(handle.complete(7));
        assert!(!handle.complete(8));
        assert!(handle.is_complete());
        assert_eq!(rx.await.ok(), Some(7));
    }

    #[tokio::test]
    async fn completion_survives_a_dropped_receiver() {
        let (handle, rx) = CompletionHandle::new("tap");
        drop(rx);
        assert!(handle.complete(()));
        assert!(!handle.complete(()));
    }
}
