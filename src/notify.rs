//! Desktop notification boundary.
//!
//! Launch progress is reported through the [`Notifications`] trait so the
//! presentation of the toast stays outside the core; tests substitute a
//! recording implementation.

use crate::error::{KcmError, KcmResult};

/// Show desktop notifications
pub trait Notifications: Send + Sync {
    fn show(&self, summary: &str, body: &str) -> KcmResult<()>;
}

/// Notifications via the freedesktop notification service
pub struct DesktopNotifications;

impl Notifications for DesktopNotifications {
    fn show(&self, summary: &str, body: &str) -> KcmResult<()> {
        notify_rust::Notification::new()
            .summary(summary)
            .body(body)
            .show()
            .map_err(|e| KcmError::Notify(e.to_string()))?;
        Ok(())
    }
}
