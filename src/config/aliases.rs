//! Short names for well-known KDE config files.
//!
//! `kcminputrc/Mouse/cursorTheme` addresses `~/.config/kcminputrc`; the alias
//! is the file name, matched case-insensitively.
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Alias used when neither the path nor `--file` names a file.
pub const DEFAULT_ALIAS: &str = "kdeglobals";

/// Config files known to live directly in the user config directory.
pub const KNOWN_FILES: &[&str] = &[
    "kdeglobals",
    "kscreenlockerrc",
    "kwinrc",
    "ksplashrc",
    "plasmarc",
    "Trolltech.conf",
    "breezerc",
    "kcmfonts",
    "kcminputrc",
    "klaunchrc",
    "kfontinstuirc",
    "kglobalshortcutsrc",
    "kactivitymanagerdrc",
    "kactivitymanagerd-switcher",
    "kactivitymanagerd-statsrc",
    "kactivitymanagerd-pluginsrc",
    "plasma-org.kde.plasma.desktop-appletsrc",
    "kwinrulesrc",
    "khotkeysrc",
    "kded5rc",
    "ksmserverrc",
    "krunnerrc",
    "baloofilerc",
    "plasmanotifyrc",
    "plasma-localerc",
    "ktimezonedrc",
    "kaccessrc",
    "PlasmaUserFeedback",
    "kxkbrc",
    "touchpadxlibinputrc",
    "kgammarc",
    "powermanagementprofilesrc",
    "bluedevilglobalrc",
    "kdeconnect",
    "device_automounter_kcmrc",
    "kded_device_automounterrc",
];

/// Immutable lookup from lowercase alias to absolute file path.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use kcfg::config::aliases::AliasTable;
///
/// let table = AliasTable::new(Path::new("/home/user/.config"));
/// assert_eq!(
///     table.resolve("KWinRC"),
///     Some(Path::new("/home/user/.config/kwinrc"))
/// );
/// assert_eq!(table.resolve("nosuchrc"), None);
/// ```
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: Vec<(String, PathBuf)>,
    default_file: PathBuf,
}

impl AliasTable {
    /// Build the table of [`KNOWN_FILES`] inside `config_dir`.
    #[must_use]
    pub fn new(config_dir: &Path) -> Self {
        let table = Self {
            entries: Vec::new(),
            default_file: config_dir.join(DEFAULT_ALIAS),
        };
        KNOWN_FILES
            .iter()
            .fold(table, |table, name| table.with_entry(name, config_dir.join(name)))
    }

    /// Build the table for the current user.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] if the config directory cannot be
    /// determined.
    pub fn for_current_user() -> Result<Self, ConfigError> {
        Ok(Self::new(&user_config_dir()?))
    }

    /// Add or replace an alias. The alias is lowercased.
    #[must_use]
    pub fn with_entry(mut self, alias: &str, path: impl Into<PathBuf>) -> Self {
        let alias = alias.to_lowercase();
        let path = path.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(a, _)| *a == alias) {
            *existing = path;
        } else {
            self.entries.push((alias, path));
        }
        self
    }

    /// Path for `alias`, compared case-insensitively.
    #[must_use]
    pub fn resolve(&self, alias: &str) -> Option<&Path> {
        let alias = alias.to_lowercase();
        self.entries
            .iter()
            .find(|(a, _)| *a == alias)
            .map(|(_, p)| p.as_path())
    }

    /// File used when no alias or explicit file is given.
    #[must_use]
    pub fn default_file(&self) -> &Path {
        &self.default_file
    }

    /// Iterate over `(alias, path)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries.iter().map(|(a, p)| (a.as_str(), p.as_path()))
    }

    /// Number of aliases.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no aliases are registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Return the user config directory: `$XDG_CONFIG_HOME`, or `$HOME/.config`.
///
/// # Errors
///
/// Returns [`ConfigError::NoConfigDir`] if neither variable is set.
pub fn user_config_dir() -> Result<PathBuf, ConfigError> {
    config_dir_from(
        std::env::var_os("XDG_CONFIG_HOME"),
        std::env::var_os("HOME"),
    )
}

fn config_dir_from(
    xdg_config_home: Option<std::ffi::OsString>,
    home: Option<std::ffi::OsString>,
) -> Result<PathBuf, ConfigError> {
    if let Some(xdg) = xdg_config_home.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(xdg));
    }
    home.filter(|v| !v.is_empty())
        .map(|h| PathBuf::from(h).join(".config"))
        .ok_or(ConfigError::NoConfigDir)
}
