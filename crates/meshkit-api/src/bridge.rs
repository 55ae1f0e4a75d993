// Callback-to-suspension bridging
//
// Every transport RPC acknowledges through a callback; callers need to
// suspend until that callback fires, and resume exactly once. `single_shot`
// wraps a oneshot channel in a cloneable settle handle whose first use
// wins, so a transport that fires a callback twice -- or fires both
// lifecycle events for one handshake -- cannot double-resume the waiter.

use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;

use crate::error::TransportError;

/// Create a single-shot suspension point.
///
/// The transport side holds the [`Settle`] (one clone per callback that
/// might fire); the caller awaits the [`Settled`] half.
pub fn single_shot<T>() -> (Settle<T>, Settled<T>) {
    let (tx, rx) = oneshot::channel();
    (
        Settle {
            tx: Arc::new(Mutex::new(Some(tx))),
        },
        Settled { rx },
    )
}

/// Resumes the waiting side of a [`single_shot`] at most once.
pub struct Settle<T> {
    tx: Arc<Mutex<Option<oneshot::Sender<T>>>>,
}

impl<T> Clone for Settle<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T> Settle<T> {
    /// Resume the waiter with `value`. The first call on any clone wins;
    /// every later call is ignored.
    pub fn settle(&self, value: T) {
        let mut slot = match self.tx.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(tx) = slot.take() {
            // A waiter that stopped waiting is not an error here.
            let _ = tx.send(value);
        }
    }
}

/// The awaiting side of a [`single_shot`].
pub struct Settled<T> {
    rx: oneshot::Receiver<T>,
}

impl<T> Settled<T> {
    /// Suspend until the transport settles.
    ///
    /// If every [`Settle`] clone is dropped unsettled, the transport
    /// abandoned the callback; that surfaces as a [`TransportError`]
    /// instead of suspending forever.
    pub async fn wait(self) -> Result<T, TransportError> {
        self.rx.await.map_err(|_| TransportError::dropped())
    }
}

// ── Tests ────────────────────────────────────────────────────────────
