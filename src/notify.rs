use ratatui::style::Color;
use std::time::{Duration, Instant};

pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn color(self) -> Color {
        match self {
            Severity::Info => Color::Cyan,
            Severity::Success => Color::Blue,
            Severity::Warning => Color::Yellow,
            Severity::Error => Color::Magenta,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }
}

/// Holds at most one visible notification. A new one replaces the old one
/// and restarts the timer.
#[derive(Debug, Default)]
pub struct Notifier {
    current: Option<(Notification, Instant)>,
}

impl Notifier {
    pub fn notify(&mut self, notification: Notification) {
        self.notify_at(notification, Instant::now());
    }

    pub fn notify_at(&mut self, notification: Notification, now: Instant) {
        self.current = Some((notification, now));
    }

    /// Drops the notification once it has been visible for the full TTL.
    /// Returns true when something was hidden so the caller can redraw.
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.current {
            Some((_, shown_at)) if now.duration_since(*shown_at) >= NOTIFICATION_TTL => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|(n, _)| n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_hides_after_ttl() {
        let mut notifier = Notifier::default();
        let start = Instant::now();
        notifier.notify_at(Notification::success("done"), start);

        assert!(!notifier.expire(start + Duration::from_millis(2999)));
        assert_eq!(notifier.current().unwrap().message, "done");

        assert!(notifier.expire(start + NOTIFICATION_TTL));
        assert!(notifier.current().is_none());
        assert!(!notifier.expire(start + Duration::from_secs(10)));
    }

    #[test]
    fn test_second_notification_replaces_first() {
        let mut notifier = Notifier::default();
        let start = Instant::now();
        notifier.notify_at(Notification::success("first"), start);
        notifier.notify_at(
            Notification::error("second"),
            start + Duration::from_secs(2),
        );

        let current = notifier.current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.severity, Severity::Error);

        // Timer restarted with the replacement.
        assert!(!notifier.expire(start + Duration::from_secs(4)));
        assert!(notifier.expire(start + Duration::from_secs(5)));
    }

    #[test]
    fn test_severity_colors_are_distinct() {
        let colors = [
            Severity::Info.color(),
            Severity::Success.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
