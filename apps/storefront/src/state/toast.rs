//! # Toast Channel
//!
//! A single transient notification slot with auto-clear.
//!
//! ## Timer Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  t=0    show("A")  ──► message "A", clear scheduled at t=3s             │
//! │  t=1s   show("B")  ──► message "B", A's timer aborted,                  │
//! │                        clear scheduled at t=4s                          │
//! │  t=3s   (nothing: A's timer no longer exists)                           │
//! │  t=4s   clear      ──► message ""                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each toast carries a sequence number. A clear only applies when the
//! sequence it was scheduled for is still the one showing, so even a timer
//! that fires in the same instant as a newer `show` cannot erase it.

use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::time::Duration;

use serde::Serialize;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Default time a toast stays visible.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// The toast currently published to subscribers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    /// Increments on every `show`.
    pub seq: u64,
    /// Empty string means nothing to show.
    pub message: String,
}

impl Toast {
    pub fn is_visible(&self) -> bool {
        !self.message.is_empty()
    }
}

#[derive(Debug)]
struct Inner {
    tx: watch::Sender<Toast>,
    timer: Mutex<Option<JoinHandle<()>>>,
    duration: Duration,
}

impl Inner {
    fn cancel_timer(&self) {
        let mut timer = self.timer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = timer.take() {
            handle.abort();
        }
    }

    /// Clears the message only if toast `seq` is still showing.
    fn clear_if_current(&self, seq: u64) -> bool {
        self.tx.send_if_modified(|toast| {
            if toast.seq == seq && toast.is_visible() {
                toast.message.clear();
                true
            } else {
                false
            }
        })
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

/// Toast slot shared between commands and the view layer.
///
/// Cloning yields another handle to the same slot.
#[derive(Debug, Clone)]
pub struct ToastChannel {
    inner: Arc<Inner>,
}

impl ToastChannel {
    pub fn new(duration: Duration) -> Self {
        let (tx, _rx) = watch::channel(Toast::default());
        ToastChannel {
            inner: Arc::new(Inner {
                tx,
                timer: Mutex::new(None),
                duration,
            }),
        }
    }

    /// Shows `message`, replacing any current toast and restarting the
    /// auto-clear timer.
    ///
    /// Without a tokio runtime the message is shown but never auto-cleared.
    pub fn show(&self, message: impl Into<String>) {
        let message = message.into();
        debug!(%message, "toast");

        // timer slot stays locked across publish + timer swap
        let mut timer = self
            .inner
            .timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut seq = 0;
        self.inner.tx.send_modify(|toast| {
            toast.seq += 1;
            toast.message = message;
            seq = toast.seq;
        });

        if let Some(previous) = timer.take() {
            previous.abort();
        }

        match Handle::try_current() {
            Ok(handle) => {
                let weak: Weak<Inner> = Arc::downgrade(&self.inner);
                let duration = self.inner.duration;
                *timer = Some(handle.spawn(async move {
                    tokio::time::sleep(duration).await;
                    if let Some(inner) = weak.upgrade() {
                        inner.clear_if_current(seq);
                    }
                }));
            }
            Err(_) => {
                warn!("No tokio runtime available, toast will not auto-clear");
            }
        }
    }

    /// Clears the toast immediately and cancels the pending timer.
    pub fn dismiss(&self) {
        self.inner.cancel_timer();
        self.inner.tx.send_if_modified(|toast| {
            let visible = toast.is_visible();
            toast.message.clear();
            visible
        });
    }

    /// Current message; empty when nothing is showing.
    pub fn current(&self) -> String {
        self.inner.tx.borrow().message.clone()
    }

    /// Current toast with its sequence number.
    pub fn snapshot(&self) -> Toast {
        self.inner.tx.borrow().clone()
    }

    /// Receiver notified on every show and clear.
    pub fn subscribe(&self) -> watch::Receiver<Toast> {
        self.inner.tx.subscribe()
    }

    pub fn duration(&self) -> Duration {
        self.inner.duration
    }
}

impl Default for ToastChannel {
    fn default() -> Self {
        ToastChannel::new(DEFAULT_TOAST_DURATION)
    }
}
