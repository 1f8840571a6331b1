//! Load `.droidhound.toml` from the working directory (CLI only). Lib callers
//! inject config via [`ScanOpts`](crate::types::ScanOpts) instead.

use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub(crate) struct DroidhoundToml {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsSection {
    threads: Option<usize>,
    mobsf: Option<bool>,
    traffic: Option<bool>,
    verbose: Option<bool>,
}

/// Load `.droidhound.toml` from `dir` if present. Returns None when the file
/// is missing or unreadable; a malformed file is warned about and ignored.
pub(crate) fn load_droidhound_toml(dir: &Path) -> Option<DroidhoundToml> {
    let path = dir.join(".droidhound.toml");
    let s = std::fs::read_to_string(&path).ok()?;
    toml::from_str(&s)
        .map_err(|e| log::warn!("{}: {}", path.display(), e))
        .ok()
}

impl DroidhoundToml {
    /// File-supplied defaults; a CLI flag that was actually passed wins.
    pub(crate) fn threads(&self) -> Option<usize> {
        self.settings.threads
    }

    pub(crate) fn mobsf(&self) -> Option<bool> {
        self.settings.mobsf
    }

    pub(crate) fn traffic(&self) -> Option<bool> {
        self.settings.traffic
    }

    pub(crate) fn verbose(&self) -> Option<bool> {
        self.settings.verbose
    }
}
