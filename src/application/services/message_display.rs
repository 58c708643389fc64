use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::warn;

use crate::domain::{NotificationLevel, PendingClear, ViewPort};

/// Delay before a shown message is cleared.
const DEFAULT_CLEAR_DELAY: Duration = Duration::from_secs(7);

/// Writes status messages and clears them once they go stale.
///
/// A clear only fires if the region still shows the message that scheduled
/// it, so a newer message is never erased by an older deadline.
#[derive(Debug)]
pub struct MessageDisplay {
    pending: VecDeque<PendingClear>,
    clear_delay: Duration,
}

impl Default for MessageDisplay {
    fn default() -> Self {
        Self::new(DEFAULT_CLEAR_DELAY)
    }
}

impl MessageDisplay {
    #[must_use]
    pub fn new(clear_delay: Duration) -> Self {
        Self {
            pending: VecDeque::new(),
            clear_delay,
        }
    }

    pub fn show<V: ViewPort + ?Sized>(
        &mut self,
        view: &mut V,
        message: &str,
        level: NotificationLevel,
    ) {
        self.show_at(view, message, level, Instant::now());
    }

    pub fn show_at<V: ViewPort + ?Sized>(
        &mut self,
        view: &mut V,
        message: &str,
        level: NotificationLevel,
        now: Instant,
    ) {
        if !view.has_status_region() {
            warn!("Status region unavailable, falling back to alert");
            view.alert(&format!("{}: {message}", level.as_str().to_uppercase()));
            return;
        }

        view.set_status(message, level);
        self.pending
            .push_back(PendingClear::new(message, now, self.clear_delay));
    }

    /// Fires every clear whose deadline has passed.
    pub fn expire<V: ViewPort + ?Sized>(&mut self, view: &mut V, now: Instant) {
        while self.pending.front().is_some_and(|clear| clear.is_due(now)) {
            let Some(clear) = self.pending.pop_front() else {
                break;
            };
            if view.status_text() == Some(clear.message.as_str()) {
                view.clear_status();
            }
        }
    }

    #[cfg(test)]
    fn pending_clears(&self) -> usize {
        self.pending.len()
    }
}
