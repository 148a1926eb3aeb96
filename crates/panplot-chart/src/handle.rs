//! Imperative viewport handle.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use crate::types::DataPoint;

/// State shared between a chart and its handles.
#[derive(Debug, Default)]
pub(crate) struct HandleMailbox {
    measured: AtomicBool,
    pending: Mutex<Option<DataPoint>>,
}

impl HandleMailbox {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn set_measured(&self, measured: bool) {
        self.measured.store(measured, Ordering::Release);
    }

    /// Take the most recent origin, if any arrived since the last call.
    pub(crate) fn take(&self) -> Option<DataPoint> {
        self.pending.lock().take()
    }
}

/// Command-style escape hatch for repositioning the viewport from outside
/// the gesture path.
///
/// Handles are cheap to clone and may be sent to other threads. Requests
/// are applied by the chart before its next context computation or gesture;
/// when several arrive in between, the latest wins.
#[derive(Debug, Clone)]
pub struct ViewportHandle {
    mailbox: Weak<HandleMailbox>,
}

impl ViewportHandle {
    pub(crate) fn new(mailbox: &Arc<HandleMailbox>) -> Self {
        Self {
            mailbox: Arc::downgrade(mailbox),
        }
    }

    /// Move the viewport origin to `origin` (data coordinates, unclamped).
    ///
    /// Returns `false` and does nothing when the chart has not been measured
    /// yet or no longer exists.
    pub fn set_viewport_origin(&self, origin: DataPoint) -> bool {
        let Some(mailbox) = self.mailbox.upgrade() else {
            tracing::debug!("viewport handle used after chart was dropped");
            return false;
        };
        if !mailbox.measured.load(Ordering::Acquire) {
            tracing::debug!(?origin, "ignoring viewport origin before first layout");
            return false;
        }

        *mailbox.pending.lock() = Some(origin);
        true
    }

    /// True while the owning chart is alive.
    pub fn is_attached(&self) -> bool {
        self.mailbox.strong_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_until_measured() {
        let mailbox = HandleMailbox::new();
        let handle = ViewportHandle::new(&mailbox);
        assert!(!handle.set_viewport_origin(DataPoint::new(1.0, 2.0)));
        assert_eq!(mailbox.take(), None);

        mailbox.set_measured(true);
        assert!(handle.set_viewport_origin(DataPoint::new(1.0, 2.0)));
        assert_eq!(mailbox.take(), Some(DataPoint::new(1.0, 2.0)));
        assert_eq!(mailbox.take(), None);
    }

    #[test]
    fn test_latest_request_wins() {
        let mailbox = HandleMailbox::new();
        mailbox.set_measured(true);
        let handle = ViewportHandle::new(&mailbox);
        let other = handle.clone();
        handle.set_viewport_origin(DataPoint::new(1.0, 1.0));
        other.set_viewport_origin(DataPoint::new(7.0, 3.0));
        assert_eq!(mailbox.take(), Some(DataPoint::new(7.0, 3.0)));
    }

    #[test]
    fn test_detached_after_drop() {
        let mailbox = HandleMailbox::new();
        mailbox.set_measured(true);
        let handle = ViewportHandle::new(&mailbox);
        drop(mailbox);
        assert!(!handle.is_attached());
        assert!(!handle.set_viewport_origin(DataPoint::new(1.0, 1.0)));
    }

    #[test]
    fn test_handle_crosses_threads() {
        let mailbox = HandleMailbox::new();
        mailbox.set_measured(true);
        let handle = ViewportHandle::new(&mailbox);
        std::thread::spawn(move || handle.set_viewport_origin(DataPoint::new(4.0, 2.0)))
            .join()
            .unwrap();
        assert_eq!(mailbox.take(), Some(DataPoint::new(4.0, 2.0)));
    }
}
