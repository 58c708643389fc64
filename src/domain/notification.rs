use std::fmt;
use std::time::{Duration, Instant};

/// Severity of a status message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NotificationLevel {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationLevel {
    /// Style class name of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled clear of the status region.
///
/// Fires only if the region still shows `message` when `due` passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingClear {
    pub message: String,
    pub due: Instant,
}

impl PendingClear {
    #[must_use]
    pub fn new(message: impl Into<String>, shown_at: Instant, delay: Duration) -> Self {
        Self {
            message: message.into(),
            due: shown_at + delay,
        }
    }

    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_names() {
        assert_eq!(NotificationLevel::default(), NotificationLevel::Info);
        assert_eq!(NotificationLevel::Success.to_string(), "success");
        assert_eq!(NotificationLevel::Error.as_str(), "error");
    }

    #[test]
    fn test_pending_clear_due() {
        let now = Instant::now();
        let clear = PendingClear::new("hola", now, Duration::from_secs(7));
        assert!(!clear.is_due(now + Duration::from_secs(6)));
        assert!(clear.is_due(now + Duration::from_secs(7)));
    }
}
