//! Toast queue. Messages wait here until the front end drains them.

use tracing::{info, warn};

use crate::types::notification::Toast;

/// Upper bound on queued toasts; the oldest are dropped first.
const MAX_PENDING: usize = 50;

#[derive(Debug, Default)]
pub struct NotificationCenter {
    pending: Vec<Toast>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        if toast.is_error() {
            warn!(title = %toast.title, "{}", toast.description);
        } else {
            info!(title = %toast.title, "{}", toast.description);
        }
        if self.pending.len() == MAX_PENDING {
            self.pending.remove(0);
        }
        self.pending.push(toast);
    }

    pub fn info(&mut self, title: &str, description: &str) {
        self.push(Toast::info(title, description));
    }

    pub fn error(&mut self, description: &str) {
        self.push(Toast::error(description));
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.pending.last()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and returns all pending toasts, oldest first.
    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.pending)
    }
}
