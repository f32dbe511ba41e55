//! kcmrun - Find and open KDE System Settings modules.
//!
//! kcmrun scans the desktop entries KDE installs for its System Settings
//! modules, indexes them for searching, and opens a module through the
//! launch command recorded in its descriptor.
//!
//! # Architecture
//!
//! The library is organized into these main modules:
//!
//! - [`config`] - Configuration loading and management
//! - [`entry`] - Descriptor parsing and launch-command resolution
//! - [`index`] - Directory scanning, dedup and the sorted module index
//! - [`search`] - Case-insensitive filtering over indexed modules
//! - [`launcher`] - Launching modules with a timeout and notifications
//! - [`notify`] - Desktop notification boundary
//! - [`cli`] - The `kcmrun` command-line interface
//!
//! # Example
//!
//! ```ignore
//! use kcmrun::{ModuleIndex, ModuleLauncher};
//! use std::time::Duration;
//!
//! let index = ModuleIndex::new();
//! let matches = index.search("bluetooth");
//! if let Some(module) = matches.first() {
//!     let launcher = ModuleLauncher::silent(Duration::from_secs(10));
//!     launcher.open(module).await?;
//! }
//! ```

// Public modules
pub mod cli;
pub mod config;
pub mod entry;
pub mod index;
pub mod launcher;
pub mod notify;
pub mod search;

// Internal modules
mod error;

// Re-export commonly used types for convenience
pub use config::Config;
pub use entry::{parse_module, ModuleEntry};
pub use error::{KcmError, KcmResult};
pub use index::{ModuleIndex, ScanOrigins};
pub use launcher::{launch_command, ModuleLauncher};
pub use notify::Notifications;
pub use search::filter_modules;
