//! Discovery of installed settings modules.
//!
//! Modules are collected from two origins: the modern applications directory
//! (Plasma 6 ships `kcm_*.desktop` files next to regular launchers) and the
//! legacy kservices directory. The modern origin is scanned first and wins
//! identifier collisions.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::entry::{parse_module, ModuleEntry};
use crate::search::filter_modules;

/// Well-known location of modern module descriptors.
pub const APPLICATIONS_DIR: &str = "/usr/share/applications";

/// Well-known location of legacy module descriptors.
pub const KSERVICES_DIR: &str = "/usr/share/kservices5";

/// File name prefix of modern module descriptors.
const MODULE_PREFIX: &str = "kcm_";

/// The two directories scanned for module descriptors.
///
/// Defaults to the well-known system locations; tests and configuration can
/// point the scanner elsewhere.
#[derive(Debug, Clone)]
pub struct ScanOrigins {
    pub applications_dir: PathBuf,
    pub kservices_dir: PathBuf,
}

impl Default for ScanOrigins {
    fn default() -> Self {
        Self {
            applications_dir: PathBuf::from(APPLICATIONS_DIR),
            kservices_dir: PathBuf::from(KSERVICES_DIR),
        }
    }
}

/// An in-memory snapshot of the installed settings modules, sorted by name.
pub struct ModuleIndex {
    entries: Vec<ModuleEntry>,
}

impl ModuleIndex {
    /// Scan the well-known system directories.
    pub fn new() -> Self {
        Self::with_origins(&ScanOrigins::default())
    }

    /// Scan the given origin directories.
    ///
    /// A missing directory contributes nothing; an unreadable or invalid
    /// record is skipped without aborting the scan.
    pub fn with_origins(origins: &ScanOrigins) -> Self {
        let mut entries = Vec::new();

        if origins.applications_dir.exists() {
            Self::scan_directory(&origins.applications_dir, true, &mut entries);
        }
        if origins.kservices_dir.exists() {
            Self::scan_directory(&origins.kservices_dir, false, &mut entries);
        }

        // Sort by name for consistent ordering, keeping case distinctions
        // deterministic.
        entries.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });

        tracing::debug!("indexed {} settings modules", entries.len());

        Self { entries }
    }

    fn scan_directory(dir: &Path, require_prefix: bool, entries: &mut Vec<ModuleEntry>) {
        // Single level only: nested kservices entries (kded modules, service
        // menus) are not settings modules.
        for file in WalkDir::new(dir)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = file.path();
            if !path.extension().is_some_and(|ext| ext == "desktop") {
                continue;
            }
            if require_prefix
                && !path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(MODULE_PREFIX))
            {
                continue;
            }

            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!("skipping unreadable descriptor {}: {}", path.display(), e);
                    continue;
                }
            };

            if let Some(module) = parse_module(path, &content) {
                // Skip duplicates by id; the first occurrence wins.
                if !entries.iter().any(|e| e.id == module.id) {
                    entries.push(module);
                }
            }
        }
    }

    /// All indexed modules, ascending by name.
    pub fn entries(&self) -> &[ModuleEntry] {
        &self.entries
    }

    /// Look up a module by its exact identifier.
    pub fn find(&self, id: &str) -> Option<&ModuleEntry> {
        self.entries.iter().find(|m| m.id == id)
    }

    /// Modules matching the query, in index order.
    pub fn search(&self, query: &str) -> Vec<&ModuleEntry> {
        filter_modules(&self.entries, query)
    }

    /// Total number of indexed modules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ModuleIndex {
    fn default() -> Self {
        Self::new()
    }
}
