//! User-facing failure reporting
//!
//! The resilient layer reports failures through a [`Notifier`] instead of
//! returning errors. Implementations must not block: a UI host typically
//! forwards the message to its toast/notification system.

use tracing::error;

/// Sink for user-facing failure reports
pub trait Notifier: Send + Sync {
    /// Report a failure message to the user
    fn notify_error(&self, message: &str);
}

/// Default notifier that routes reports through the tracing pipeline
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_error(&self, message: &str) {
        error!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_notifier_is_object_safe() {
        let notifier: &dyn Notifier = &LogNotifier;
        notifier.notify_error("something failed");
    }
}
