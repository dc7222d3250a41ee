use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::domain::flavor::Flavor;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::platform::config_dir;
use crate::app::services::recent_files::DEFAULT_MAX_RECENT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Overrides the flavor picked from the target OS.
    #[serde(default)]
    pub flavor: Option<Flavor>,

    #[serde(default = "default_word_wrap")]
    pub word_wrap_enabled: bool,

    #[serde(default = "default_line_numbers")]
    pub line_numbers_enabled: bool,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Spaces per level used by Format Code.
    #[serde(default = "default_tab_width")]
    pub tab_width: u32,

    #[serde(default = "default_max_recent_files")]
    pub max_recent_files: usize,

    /// File open at the last exit, offered again at startup.
    #[serde(default)]
    pub last_file: Option<PathBuf>,
}

fn default_word_wrap() -> bool {
    true
}

fn default_line_numbers() -> bool {
    true
}

fn default_font_size() -> u32 {
    12
}

fn default_tab_width() -> u32 {
    4
}

fn default_max_recent_files() -> usize {
    DEFAULT_MAX_RECENT
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            flavor: None,
            word_wrap_enabled: default_word_wrap(),
            line_numbers_enabled: default_line_numbers(),
            font_size: default_font_size(),
            tab_width: default_tab_width(),
            max_recent_files: default_max_recent_files(),
            last_file: None,
        }
    }
}

impl AppSettings {
    pub const MIN_FONT_SIZE: u32 = 8;
    pub const MAX_FONT_SIZE: u32 = 72;

    pub fn effective_flavor(&self) -> Flavor {
        self.flavor.unwrap_or_else(Flavor::current)
    }

    /// Load settings from the default location, or create defaults if missing
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(config_path: &Path) -> Self {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str::<Self>(&contents) {
                Ok(settings) => settings.sanitized(),
                Err(e) => {
                    log::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults and try to save them for next time
                let default = Self::default();
                if let Err(e) = default.save_to(config_path) {
                    log::warn!("Failed to write default settings: {}", e);
                }
                default
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(config_path, json)?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(Self::MIN_FONT_SIZE..=Self::MAX_FONT_SIZE).contains(&self.font_size) {
            return Err(AppError::Settings(format!(
                "font size {} outside {}..={}",
                self.font_size,
                Self::MIN_FONT_SIZE,
                Self::MAX_FONT_SIZE
            )));
        }
        if self.max_recent_files == 0 {
            return Err(AppError::Settings("max_recent_files must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Clamp out-of-range values read from disk.
    fn sanitized(mut self) -> Self {
        self.font_size = self.font_size.clamp(Self::MIN_FONT_SIZE, Self::MAX_FONT_SIZE);
        self.max_recent_files = self.max_recent_files.max(1);
        self
    }

    /// The last session's file, if it still exists.
    pub fn restorable_last_file(&self) -> Option<PathBuf> {
        self.last_file.clone().filter(|path| path.is_file())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        config_dir().join("settings.json")
    }
}
