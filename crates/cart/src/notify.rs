//! User-visible notification channel.
//!
//! Fire-and-forget transient messages (toast-style). The cart store reports
//! every failure through this channel with a generic localized text; internal
//! error detail goes to the logs only.

use tracing::{error, info, warn};

/// Localized notification texts.
///
/// These are the exact strings the storefront UI displays; failure kinds are
/// deliberately not distinguishable beyond the operation that failed.
pub mod messages {
    /// Requested or prospective amount exceeds available stock.
    pub const OUT_OF_STOCK: &str = "Quantidade solicitada fora de estoque";
    /// Adding a product failed.
    pub const ADD_FAILED: &str = "Erro na adição do produto";
    /// Removing a product failed.
    pub const REMOVE_FAILED: &str = "Erro na remoção do produto";
    /// Changing a product amount failed.
    pub const UPDATE_FAILED: &str = "Erro na alteração de quantidade do produto";
}

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational message.
    Info,
    /// Something degraded but recoverable.
    Warning,
    /// An operation failed.
    Error,
}

/// Fire-and-forget sink for user-visible messages.
///
/// Implementations must never fail; a notification that cannot be delivered
/// is simply dropped.
pub trait NotificationSink {
    /// Deliver a message at the given severity.
    fn notify(&self, severity: Severity, message: &str);

    /// Deliver an error-severity message.
    fn error(&self, message: &str) {
        self.notify(Severity::Error, message);
    }
}

/// Sink that emits notifications as `tracing` events.
///
/// Useful as a default when no UI toast channel is wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => info!(target: "rocket_shoes::notify", "{message}"),
            Severity::Warning => warn!(target: "rocket_shoes::notify", "{message}"),
            Severity::Error => error!(target: "rocket_shoes::notify", "{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingSink {
        seen: RefCell<Vec<(Severity, String)>>,
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, severity: Severity, message: &str) {
            self.seen.borrow_mut().push((severity, message.to_string()));
        }
    }

    #[test]
    fn test_error_helper_uses_error_severity() {
        let sink = RecordingSink {
            seen: RefCell::new(Vec::new()),
        };
        sink.error(messages::ADD_FAILED);
        let seen = sink.seen.borrow();
        assert_eq!(
            seen.as_slice(),
            &[(Severity::Error, messages::ADD_FAILED.to_string())]
        );
    }
}
