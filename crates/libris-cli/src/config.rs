//! `libris.toml` configuration.
//!
//! Looked up at `--config PATH` when given, otherwise in the platform
//! config directory:
//! - Linux: ~/.config/libris/libris.toml
//! - macOS: ~/Library/Application Support/org.libris.libris/libris.toml
//! - Windows: %APPDATA%/libris/libris/config/libris.toml
//!
//! ```toml
//! session_file = "/home/me/.libris-session.json"
//!
//! [screens.books]
//! page_size = 25
//! sort = "year"
//! direction = "desc"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::{info, warn};

use libris_model::EntityKind;
use libris_session::SESSION_FILE_NAME;
use libris_view::{ScreenConfig, SortDirection, SortKey};

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "libris";
const APP_NAME: &str = "libris";
pub const CONFIG_FILENAME: &str = "libris.toml";

/// Per-screen overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScreenSettings {
    pub page_size: Option<usize>,
    /// Default sort field; must be sortable on that screen.
    pub sort: Option<String>,
    #[serde(default)]
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibrisConfig {
    pub session_file: Option<PathBuf>,
    /// Keyed by screen name (`books`, `members`, ...).
    #[serde(default)]
    pub screens: BTreeMap<String, ScreenSettings>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
}

/// Default config file location, when the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

impl LibrisConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        for name in config.screens.keys() {
            name.parse::<EntityKind>()
                .map_err(|_| anyhow!("unknown screen `{name}` in [screens]"))?;
        }
        Ok(config)
    }

    /// Load the configuration.
    ///
    /// An explicit path must exist and parse. The default location may be
    /// absent; if it cannot be parsed the defaults are used with a warning.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let content = fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            let config = Self::from_toml(&content)
                .with_context(|| format!("parse config {}", path.display()))?;
            info!(path = %path.display(), "loaded config");
            return Ok(config);
        }

        let Some(path) = default_config_path() else {
            warn!("could not determine config directory, using defaults");
            return Ok(Self::default());
        };
        match fs::read_to_string(&path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(config) => {
                    info!(path = %path.display(), "loaded config");
                    Ok(config)
                }
                Err(error) => {
                    warn!(path = %path.display(), %error, "ignoring unreadable config");
                    Ok(Self::default())
                }
            },
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(error) => {
                warn!(path = %path.display(), %error, "ignoring unreadable config");
                Ok(Self::default())
            }
        }
    }

    /// Built-in screen configuration with this file's overrides applied.
    pub fn screen(&self, entity: EntityKind) -> Result<ScreenConfig> {
        let mut screen = ScreenConfig::for_entity(entity);
        let Some(settings) = self.screens.get(entity.as_str()) else {
            return Ok(screen);
        };
        if let Some(size) = settings.page_size {
            screen
                .set_page_size(size)
                .with_context(|| format!("[screens.{entity}] page_size"))?;
        }
        if let Some(field) = &settings.sort {
            let key = SortKey {
                field: field.clone(),
                direction: settings.direction,
            };
            let key = screen
                .resolve_sort(key)
                .with_context(|| format!("[screens.{entity}] sort"))?;
            screen.default_sort = Some(key);
        }
        Ok(screen)
    }

    /// Session file location: configured, else the platform data directory.
    pub fn session_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.session_file {
            return Ok(path.clone());
        }
        match project_dirs() {
            Some(dirs) => Ok(dirs.data_dir().join(SESSION_FILE_NAME)),
            None => bail!("could not determine data directory; set `session_file` in {CONFIG_FILENAME}"),
        }
    }
}
