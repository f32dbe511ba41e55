//! Launching settings modules.
//!
//! The launch command is shell-interpreted and awaited with an upper bound.
//! A module that does not finish in time is killed and reported as a
//! timeout instead of leaving the caller hanging.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::entry::ModuleEntry;
use crate::error::{KcmError, KcmResult};
use crate::notify::{DesktopNotifications, Notifications};

/// Default upper bound on waiting for a launched module.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Run `command` through the shell and wait for it to finish.
///
/// The outcome is classified: a spawn problem surfaces as
/// [`KcmError::Launch`], a non-zero exit as [`KcmError::LaunchExit`] and a
/// blown deadline as [`KcmError::LaunchTimeout`].
pub async fn launch_command(command: &str, timeout: Duration) -> KcmResult<()> {
    tracing::info!("launching `{}`", command);

    let mut child = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| KcmError::Launch(format!("failed to spawn `{}`: {}", command, e)))?;

    match tokio::time::timeout(timeout, child.wait()).await {
        Ok(Ok(status)) if status.success() => Ok(()),
        Ok(Ok(status)) => Err(KcmError::LaunchExit {
            command: command.to_string(),
            code: status.code().unwrap_or(-1),
        }),
        Ok(Err(e)) => Err(KcmError::Launch(format!(
            "failed to wait on `{}`: {}",
            command, e
        ))),
        Err(_) => {
            // Deadline passed: take the child down instead of leaving it
            // running unsupervised.
            let _ = child.kill().await;
            Err(KcmError::LaunchTimeout {
                command: command.to_string(),
                timeout_secs: timeout.as_secs(),
            })
        }
    }
}

/// Opens modules and reports progress through the notification boundary.
pub struct ModuleLauncher {
    timeout: Duration,
    notifier: Option<Box<dyn Notifications>>,
}

impl ModuleLauncher {
    /// Launcher that reports through desktop notifications.
    pub fn new(timeout: Duration) -> Self {
        Self::with_notifier(timeout, Box::new(DesktopNotifications))
    }

    /// Launcher that reports nothing.
    pub fn silent(timeout: Duration) -> Self {
        Self {
            timeout,
            notifier: None,
        }
    }

    /// Launcher reporting through the given boundary.
    pub fn with_notifier(timeout: Duration, notifier: Box<dyn Notifications>) -> Self {
        Self {
            timeout,
            notifier: Some(notifier),
        }
    }

    /// Open one settings module.
    ///
    /// The outcome is reported through the notification boundary and
    /// returned to the caller; a failed launch never panics.
    pub async fn open(&self, module: &ModuleEntry) -> KcmResult<()> {
        self.notify(&format!("Opening {}…", module.name));

        match launch_command(&module.exec, self.timeout).await {
            Ok(()) => {
                self.notify(&format!("Opened {}", module.name));
                Ok(())
            }
            Err(e) => {
                self.notify(&format!("Failed to open {}: {}", module.name, e));
                Err(e)
            }
        }
    }

    fn notify(&self, body: &str) {
        if let Some(notifier) = &self.notifier {
            let _ = notifier.show("System Settings", body);
        }
    }
}
