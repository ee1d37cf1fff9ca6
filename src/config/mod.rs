use crate::core::columns::DEFAULT_MAX_BLOCKS;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Folder scanned for the newest `*.csv` export
    #[serde(default = "default_input_dir")]
    pub input_dir: String,
    /// Folder receiving the summary file
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Output file stem (extension comes from the format)
    #[serde(default = "default_output_name")]
    pub output_name: String,
    /// Append `_YYYY-MM-DD` (run date) to the output stem
    #[serde(default)]
    pub dated_output: bool,
    #[serde(default = "default_max_blocks")]
    pub max_blocks: usize,
    #[serde(default = "default_output_format")]
    pub output_format: ExportFormat,
}

fn default_input_dir() -> String {
    "./Data_ERMS".to_string()
}
fn default_output_dir() -> String {
    "./Data_ERMS_Cleaned".to_string()
}
fn default_output_name() -> String {
    "employee_date_activity_summary".to_string()
}
fn default_max_blocks() -> usize {
    DEFAULT_MAX_BLOCKS
}
fn default_output_format() -> ExportFormat {
    ExportFormat::Csv
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            output_name: default_output_name(),
            dated_output: false,
            max_blocks: default_max_blocks(),
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimesheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.max_blocks == 0 {
            return Err(AppError::Config("max_blocks must be at least 1".into()));
        }
        if self.output_name.trim().is_empty() {
            return Err(AppError::Config("output_name must not be empty".into()));
        }
        Ok(())
    }

    /// Write this configuration to `path`, creating its folder if needed
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Initialize configuration file and the input/output folders
    pub fn init_all(path: &Path) -> AppResult<Self> {
        let config = if path.exists() {
            Self::load_from(path)?
        } else {
            let cfg = Self::default();
            cfg.save_to(path)?;
            cfg
        };

        fs::create_dir_all(&config.input_dir)?;
        fs::create_dir_all(&config.output_dir)?;

        Ok(config)
    }
}
