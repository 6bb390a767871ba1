//! Light/dark theme preference.
//!
//! The theme lives outside the timer core. It is read once on startup and
//! written back whenever it changes.
//!
//! Settings file (`<config_dir>/focusflow/settings.json`):
//!
//! ```json
//! {"theme":"dark"}
//! ```

pub mod error;

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use error::{Result, ThemeError};

/// Environment variable consulted when no theme has been saved.
pub const THEME_ENV: &str = "FOCUSFLOW_THEME";

/// Color scheme of the terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the string representation of the theme.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns the other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Reads the preferred theme from [`THEME_ENV`], ignoring invalid values.
    pub fn from_env() -> Option<Self> {
        let value = std::env::var(THEME_ENV).ok()?;
        match value.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                warn!("Ignoring {}: {}", THEME_ENV, e);
                None
            }
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ThemeError::UnknownTheme(s.to_string())),
        }
    }
}

/// On-disk settings document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    theme: Option<Theme>,
}

/// Picks the active theme: the saved one, else the preferred one, else light.
pub fn resolve(saved: Option<Theme>, preferred: Option<Theme>) -> Theme {
    saved.or(preferred).unwrap_or_default()
}

/// Reads the saved theme. A missing file is not an error.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn read_saved(path: &Path) -> Result<Option<Theme>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ThemeError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let settings: SettingsFile =
        serde_json::from_str(&contents).map_err(|source| ThemeError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(settings.theme)
}

/// Theme preference backed by a settings file.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
    theme: Theme,
}

impl ThemeStore {
    /// Returns the default settings file location.
    ///
    /// # Errors
    ///
    /// Returns `ThemeError::ConfigDirNotFound` if the platform has no
    /// configuration directory.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(ThemeError::ConfigDirNotFound)?;
        Ok(config_dir.join("focusflow").join("settings.json"))
    }

    /// Loads the theme saved at `path`.
    ///
    /// A missing or unreadable file falls back to `preferred`, then to
    /// light. Load failures are logged, never returned.
    pub fn load(path: impl Into<PathBuf>, preferred: Option<Theme>) -> Self {
        let path = path.into();
        let saved = match read_saved(&path) {
            Ok(saved) => saved,
            Err(e) => {
                warn!("{}; using default theme", e);
                None
            }
        };
        let theme = resolve(saved, preferred);
        debug!(theme = theme.as_str(), path = %path.display(), "Theme loaded");
        Self { path, theme }
    }

    /// Returns the active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the settings file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sets and saves the theme.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be written. The
    /// in-memory theme is updated regardless.
    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        self.save()
    }

    /// Switches between light and dark and saves the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be written.
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.theme.toggled();
        self.set(next)?;
        Ok(next)
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ThemeError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        let settings = SettingsFile {
            theme: Some(self.theme),
        };
        let json = serde_json::to_string(&settings).map_err(ThemeError::Serialize)?;
        fs::write(&self.path, json).map_err(|source| ThemeError::Write {
            path: self.path.clone(),
            source,
        })?;

        debug!(theme = self.theme.as_str(), "Theme saved");
        Ok(())
    }
}
