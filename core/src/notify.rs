use std::time::Duration;

use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Severity {
    Error,
    Info,
    Success,
    Warning,
}

impl Severity {
    /// Background color of a toast.
    pub const fn rgb(&self) -> (u8, u8, u8) {
        use Severity::*;
        match self {
            Error => (0xcb, 0x5f, 0x59),
            Info => (0x58, 0xab, 0xc2),
            Success => (0x73, 0xb4, 0x79),
            Warning => (0xf9, 0xa9, 0x51),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub severity: Severity,
    pub message: String,
    pub duration: Duration,
}

impl Toast {
    pub const DURATION: Duration = Duration::from_secs(4);

    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            duration: Self::DURATION,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Toasts currently on screen. Each one disappears after its duration.
#[derive(Debug, Default)]
pub struct ToastBoard {
    toasts: Vec<(Instant, Toast)>,
}

impl ToastBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        let expires_at = Instant::now() + toast.duration;
        self.toasts.push((expires_at, toast));
    }

    /// Drops expired toasts and returns the rest, oldest first.
    pub fn active(&mut self) -> impl Iterator<Item = &Toast> {
        let now = Instant::now();
        self.toasts.retain(|(expires_at, _)| *expires_at > now);
        self.toasts.iter().map(|(_, toast)| toast)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn severities_have_distinct_colors() {
        let colors: std::collections::HashSet<_> = Severity::iter().map(|s| s.rgb()).collect();
        assert_eq!(colors.len(), 4);
        assert_eq!(Severity::Error.rgb(), (0xcb, 0x5f, 0x59));
    }

    #[test]
    fn toast_defaults_to_four_seconds() {
        let t = Toast::info("Nothing to delete");
        assert_eq!(t.severity, Severity::Info);
        assert_eq!(t.duration, Duration::from_secs(4));
    }

    #[tokio::test(start_paused = true)]
    async fn toasts_expire_after_their_duration() {
        let mut board = ToastBoard::new();
        board.push(Toast::success("Saved preference"));

        tokio::time::advance(Duration::from_secs(2)).await;
        board.push(Toast::error("Token unavailable"));
        assert_eq!(board.active().count(), 2);

        tokio::time::advance(Duration::from_secs(2)).await;
        let msgs: Vec<_> = board.active().map(|t| t.message.clone()).collect();
        assert_eq!(msgs, vec!["Token unavailable"]);

        tokio::time::advance(Duration::from_secs(2)).await;
        assert_eq!(board.active().count(), 0);
    }
}
