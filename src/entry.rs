//! Descriptor parsing for KDE settings modules.
//!
//! Plasma ships two generations of module descriptors: modern entries whose
//! `Exec` line invokes the settings hub with the module as its argument, and
//! legacy service entries that only name the module library. Both normalize
//! into a [`ModuleEntry`].

use std::path::Path;

use freedesktop_desktop_entry::DesktopEntry;
use serde::Serialize;

/// Launcher program named by modern descriptor `Exec` lines.
const SETTINGS_HUB: &str = "systemsettings";

/// Shell program used to open legacy library-only modules.
const LEGACY_SHELL: &str = "kcmshell6";

/// Icon used when a descriptor does not name one.
const FALLBACK_ICON: &str = "preferences-system";

/// One installed settings module.
///
/// Built fresh on every scan and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleEntry {
    /// Stable module identifier (e.g. `kcm_kscreen`), unique per scan.
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub keywords: Vec<String>,
    /// Resolved command line that opens the module.
    pub exec: String,
}

/// Parse one descriptor record.
///
/// Returns `None` for records that are not settings modules: a missing or
/// empty `Name`, or no resolvable module identifier. Undecodable records are
/// logged and treated the same way, so a scan never aborts on a bad file.
pub fn parse_module(path: &Path, content: &str) -> Option<ModuleEntry> {
    // An empty locale list makes the decoder drop every qualified key
    // variant and the accessors read the unqualified values. A non-empty
    // filter would instead reject records whose matching qualified keys
    // lack an unqualified default.
    let locales: &[&str] = &[];

    let entry = match DesktopEntry::from_str(path, content, Some(locales)) {
        Ok(entry) => entry,
        Err(e) => {
            tracing::warn!("skipping undecodable descriptor {}: {}", path.display(), e);
            return None;
        }
    };

    let name = entry.name(locales)?.to_string();
    if name.is_empty() {
        return None;
    }

    let (id, exec) = resolve_launch(entry.exec(), entry.desktop_entry("X-KDE-Library"))?;

    let description = entry
        .comment(locales)
        .map(|s| s.to_string())
        .unwrap_or_else(|| name.clone());

    let icon = entry
        .icon()
        .map(|s| s.to_string())
        .unwrap_or_else(|| FALLBACK_ICON.to_string());

    let keywords = entry
        .desktop_entry("X-KDE-Keywords")
        .map(split_keywords)
        .unwrap_or_default();

    Some(ModuleEntry {
        id,
        name,
        description,
        icon,
        keywords,
        exec,
    })
}

/// Resolve the module identifier and launch command from the two schema
/// generations. The rules are ordered; the first one that applies wins.
fn resolve_launch(exec: Option<&str>, library: Option<&str>) -> Option<(String, String)> {
    modern_rule(exec).or_else(|| legacy_rule(library))
}

/// Modern schema: `Exec` names the settings hub with the module as argument.
fn modern_rule(exec: Option<&str>) -> Option<(String, String)> {
    let exec = exec?;
    if !exec.contains(SETTINGS_HUB) {
        return None;
    }

    // The module identifier is the second whitespace token; the full Exec
    // line stays the launch command.
    let mut tokens = exec.split_whitespace();
    tokens.next()?;
    let module = tokens.next()?;

    Some((module.to_string(), exec.to_string()))
}

/// Legacy schema: the module is named by its library and opened via kcmshell.
fn legacy_rule(library: Option<&str>) -> Option<(String, String)> {
    let library = library?;
    if library.is_empty() {
        return None;
    }

    Some((library.to_string(), format!("{} {}", LEGACY_SHELL, library)))
}

fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lines: &[&str]) -> String {
        let mut out = String::from("[Desktop Entry]\n");
        for line in lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    fn parse(lines: &[&str]) -> Option<ModuleEntry> {
        parse_module(Path::new("kcm_test.desktop"), &record(lines))
    }

    #[test]
    fn test_parse_modern_schema() {
        let module = parse(&[
            "Name=Displays",
            "Comment=Manage and configure monitors",
            "Icon=preferences-desktop-display",
            "X-KDE-Keywords=monitor,resolution,scale",
            "Exec=systemsettings kcm_kscreen",
        ])
        .unwrap();

        assert_eq!(module.id, "kcm_kscreen");
        assert_eq!(module.name, "Displays");
        assert_eq!(module.description, "Manage and configure monitors");
        assert_eq!(module.icon, "preferences-desktop-display");
        assert_eq!(module.keywords, vec!["monitor", "resolution", "scale"]);
        assert_eq!(module.exec, "systemsettings kcm_kscreen");
    }

    #[test]
    fn test_parse_legacy_schema() {
        let module = parse(&["Name=Bluetooth", "X-KDE-Library=kcm_bluetooth"]).unwrap();

        assert_eq!(module.id, "kcm_bluetooth");
        assert_eq!(module.exec, "kcmshell6 kcm_bluetooth");
    }

    #[test]
    fn test_modern_schema_wins_over_legacy() {
        let module = parse(&[
            "Name=Energy",
            "Exec=systemsettings kcm_energy",
            "X-KDE-Library=kcm_powerdevil",
        ])
        .unwrap();

        assert_eq!(module.id, "kcm_energy");
        assert_eq!(module.exec, "systemsettings kcm_energy");
    }

    #[test]
    fn test_exec_without_module_falls_back_to_library() {
        let module = parse(&[
            "Name=Energy",
            "Exec=systemsettings",
            "X-KDE-Library=kcm_powerdevil",
        ])
        .unwrap();

        assert_eq!(module.id, "kcm_powerdevil");
        assert_eq!(module.exec, "kcmshell6 kcm_powerdevil");
    }

    #[test]
    fn test_missing_name_is_rejected() {
        assert!(parse(&["Exec=systemsettings kcm_kscreen"]).is_none());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        assert!(parse(&["Name=", "Exec=systemsettings kcm_kscreen"]).is_none());
    }

    #[test]
    fn test_unresolvable_launch_is_rejected() {
        // Bare hub invocation with no module argument and no library.
        assert!(parse(&["Name=Settings", "Exec=systemsettings"]).is_none());
        // Exec without the hub token is not a module launch.
        assert!(parse(&["Name=Editor", "Exec=kate %U"]).is_none());
        assert!(parse(&["Name=Nothing"]).is_none());
    }

    #[test]
    fn test_localized_keys_are_ignored() {
        let module = parse(&[
            "Name[de]=Anzeigen",
            "Name=Displays",
            "Comment[de]=Monitore verwalten",
            "Exec=systemsettings kcm_kscreen",
        ])
        .unwrap();

        assert_eq!(module.name, "Displays");
        // Only a localized Comment exists, so the description falls back.
        assert_eq!(module.description, "Displays");
    }

    #[test]
    fn test_qualified_keys_without_default_are_ignored() {
        // A record may carry only qualified variants of a key. That must not
        // invalidate the record; the fields take their defaults.
        let module = parse(&[
            "Name=Displays",
            "Comment[en]=Manage and configure monitors",
            "X-KDE-Keywords[en]=monitor,resolution",
            "Exec=systemsettings kcm_kscreen",
        ])
        .unwrap();

        assert_eq!(module.id, "kcm_kscreen");
        assert_eq!(module.description, "Displays");
        assert!(module.keywords.is_empty());
    }

    #[test]
    fn test_description_defaults_to_name() {
        let module = parse(&["Name=Bluetooth", "Exec=systemsettings kcm_bluetooth"]).unwrap();
        assert_eq!(module.description, "Bluetooth");
    }

    #[test]
    fn test_icon_falls_back_when_absent() {
        let module = parse(&["Name=Bluetooth", "Exec=systemsettings kcm_bluetooth"]).unwrap();
        assert_eq!(module.icon, "preferences-system");
    }

    #[test]
    fn test_keywords_are_trimmed_and_empties_dropped() {
        let module = parse(&[
            "Name=Bluetooth",
            "X-KDE-Keywords= wireless , BT ,,pairing",
            "Exec=systemsettings kcm_bluetooth",
        ])
        .unwrap();

        assert_eq!(module.keywords, vec!["wireless", "BT", "pairing"]);
    }

    #[test]
    fn test_missing_keywords_yield_empty_list() {
        let module = parse(&["Name=Bluetooth", "Exec=systemsettings kcm_bluetooth"]).unwrap();
        assert!(module.keywords.is_empty());
    }

    #[test]
    fn test_garbage_record_is_rejected() {
        let parsed = parse_module(Path::new("broken.desktop"), "not a descriptor\nat all\n");
        assert!(parsed.is_none());
    }

    #[test]
    fn test_legacy_rule_requires_nonempty_library() {
        assert!(parse(&["Name=Ghost", "X-KDE-Library="]).is_none());
    }
}
