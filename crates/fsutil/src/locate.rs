//! Configuration file location
//!
//! Finds an application's existing config file, or proposes where a new one
//! should be saved, by walking a fixed priority list of candidates:
//!
//! 1. `<config_dir>/<domain>/<appname><ext>` (only with a domain)
//! 2. `<config_dir>/<appname><ext>`
//! 3. `<home>/.<domain>-<appname><ext>` (only with a domain)
//! 4. `<home>/.<appname><ext>`
//!
//! When neither the config directory nor the home directory can be resolved,
//! the candidates are built relative to the current directory instead.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::path::file_exists;
use crate::{Error, Result};

/// Result of a config file lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigFile {
    /// Existing file when `found`, otherwise where the file should be saved
    pub path: PathBuf,
    /// Whether a file already exists at `path`
    pub found: bool,
}

impl ConfigFile {
    /// Create the directory that will hold the config file.
    ///
    /// Does nothing when the path has no parent component.
    pub fn create_parent_dir(&self) -> Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && parent != Path::new(".") => {
                fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))
            }
            _ => Ok(()),
        }
    }
}

/// Where a base directory comes from.
#[derive(Debug, Clone, Default)]
enum DirSource {
    /// Ask the operating system via `dirs`
    #[default]
    System,
    Fixed(PathBuf),
    Unavailable,
}

/// Resolves config file locations.
///
/// The default locator uses the platform config and home directories
/// (`dirs::config_dir()` / `dirs::home_dir()`). Both can be overridden or
/// disabled, which is mainly useful for testing.
#[derive(Debug, Clone, Default)]
pub struct ConfigLocator {
    config_dir: DirSource,
    home_dir: DirSource,
    /// Base for the last-resort candidates; relative names when `None`
    current_dir: Option<PathBuf>,
}

impl ConfigLocator {
    /// Create a locator backed by the platform directories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `dir` as the user config directory.
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = DirSource::Fixed(dir.into());
        self
    }

    /// Behave as if the user config directory cannot be resolved.
    pub fn without_config_dir(mut self) -> Self {
        self.config_dir = DirSource::Unavailable;
        self
    }

    /// Use `dir` as the home directory.
    pub fn with_home_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.home_dir = DirSource::Fixed(dir.into());
        self
    }

    /// Behave as if the home directory cannot be resolved.
    pub fn without_home_dir(mut self) -> Self {
        self.home_dir = DirSource::Unavailable;
        self
    }

    /// Build last-resort candidates under `dir` instead of as relative names.
    pub fn with_current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    fn config_dir(&self) -> Option<PathBuf> {
        match &self.config_dir {
            DirSource::System => dirs::config_dir(),
            DirSource::Fixed(dir) => Some(dir.clone()),
            DirSource::Unavailable => None,
        }
    }

    fn home_dir(&self) -> Option<PathBuf> {
        match &self.home_dir {
            DirSource::System => dirs::home_dir(),
            DirSource::Fixed(dir) => Some(dir.clone()),
            DirSource::Unavailable => None,
        }
    }

    /// Candidate paths in priority order. Never empty.
    ///
    /// The first entry is where a new file should be saved.
    pub fn candidates(&self, domain: &str, appname: &str, ext: &str) -> Vec<PathBuf> {
        let filename = format!("{appname}{}", normalize_extension(ext));
        let mut candidates = Vec::with_capacity(4);

        if let Some(config_dir) = self.config_dir() {
            if !domain.is_empty() {
                candidates.push(config_dir.join(domain).join(&filename));
            }
            candidates.push(config_dir.join(&filename));
        }

        if let Some(home) = self.home_dir() {
            if !domain.is_empty() {
                candidates.push(home.join(format!(".{domain}-{filename}")));
            }
            candidates.push(home.join(format!(".{filename}")));
        }

        if candidates.is_empty() {
            tracing::warn!(
                "Neither config nor home directory resolvable, using current directory"
            );
            let base = self.current_dir.clone().unwrap_or_default();
            if !domain.is_empty() {
                candidates.push(base.join(format!("{domain}-{filename}")));
            }
            candidates.push(base.join(&filename));
            if !domain.is_empty() {
                candidates.push(base.join(format!(".{domain}-{filename}")));
            }
            candidates.push(base.join(format!(".{filename}")));
        }

        candidates
    }

    /// Find the highest-priority existing config file, or the preferred
    /// location for a new one.
    ///
    /// Only stats candidates; nothing is created.
    pub fn locate(&self, domain: &str, appname: &str, ext: &str) -> ConfigFile {
        let candidates = self.candidates(domain, appname, ext);

        if let Some(path) = candidates.iter().find(|path| file_exists(path)) {
            tracing::debug!(path = %path.display(), "Found config file");
            return ConfigFile {
                path: path.clone(),
                found: true,
            };
        }

        let path = candidates
            .into_iter()
            .next()
            .unwrap_or_else(|| PathBuf::from(format!("{appname}{}", normalize_extension(ext))));
        tracing::debug!(path = %path.display(), "No config file yet, proposing save location");
        ConfigFile { path, found: false }
    }
}

/// Prefix `ext` with a dot unless it already has one.
fn normalize_extension(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}

/// Locate `<appname><ext>` using the platform config and home directories.
///
/// See [`ConfigLocator::locate`].
pub fn get_config_file(domain: &str, appname: &str, ext: &str) -> ConfigFile {
    ConfigLocator::new().locate(domain, appname, ext)
}

/// Locate `<appname>.ini`. See [`get_config_file`].
pub fn get_ini_file(domain: &str, appname: &str) -> ConfigFile {
    get_config_file(domain, appname, ".ini")
}
