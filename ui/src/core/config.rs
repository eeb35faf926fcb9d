//! Dashboard configuration: roster, score, chart assets and collaborator wiring.
//!
//! Resolution order used by [`DashboardConfig::load`]:
//! 1. the file named by the `OKRBOARD_CONFIG` environment variable,
//! 2. `dashboard.toml` in the platform config directory,
//! 3. the defaults embedded from `ui/assets/dashboard.toml`.
//!
//! Relative directories are resolved against the working directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "OKRBOARD_CONFIG";

const CONFIG_FILE_NAME: &str = "dashboard.toml";
const DEFAULT_CONFIG: &str = include_str!("../../assets/dashboard.toml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Where uploads are written. Must already exist.
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: PathBuf,
    /// Directory holding the pre-rendered chart PNGs.
    #[serde(default = "default_image_dir")]
    pub image_dir: PathBuf,
    /// Predictive performance percentage shown in the donut chart.
    pub score: f64,
    pub members: Vec<TeamMember>,
    pub panels: Vec<ImagePanelSpec>,
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub skills: String,
}

/// One pre-rendered chart image on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePanelSpec {
    pub title: String,
    /// File name relative to [`DashboardConfig::image_dir`].
    pub file: PathBuf,
    /// Display width in CSS pixels.
    pub width: u32,
    pub section: PanelSection,
}

/// Dashboard row an image panel is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelSection {
    /// "Project Insights", next to the donut chart.
    Project,
    /// "Additional Insights", two per row.
    Additional,
    /// Full-width row at the bottom.
    Full,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Program printing the OKR tuples as JSON; the document path is appended to `args`.
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
    /// Cache the extraction result per uploaded path instead of re-running it on every render.
    #[serde(default)]
    pub memoize: bool,
}

fn default_uploads_dir() -> PathBuf {
    PathBuf::from("uploaded_files")
}

fn default_image_dir() -> PathBuf {
    PathBuf::from("image")
}

impl Default for DashboardConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded dashboard.toml is valid")
    }
}

impl DashboardConfig {
    /// Load from the first available source (see module docs).
    pub fn load() -> Result<Self, ConfigError> {
        match Self::locate() {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading dashboard config");
                Self::from_path(&path)
            }
            None => {
                tracing::info!("no dashboard config found; using embedded defaults");
                Ok(Self::default())
            }
        }
    }

    /// Path of the config file that [`load`](Self::load) would read, if any.
    pub fn locate() -> Option<PathBuf> {
        if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(explicit));
        }
        let dirs = directories::ProjectDirs::from("com", "OkrBoard", "OkrBoard")?;
        let candidate = dirs.config_dir().join(CONFIG_FILE_NAME);
        candidate.is_file().then_some(candidate)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Absolute-or-relative location of a static chart asset.
    pub fn image_path(&self, panel: &ImagePanelSpec) -> PathBuf {
        self.image_dir.join(&panel.file)
    }

    pub fn panels_in(&self, section: PanelSection) -> impl Iterator<Item = &ImagePanelSpec> {
        self.panels.iter().filter(move |panel| panel.section == section)
    }
}
