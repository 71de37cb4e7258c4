//! Configuration management for deskreport.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! per-user data directory resolved by [`DataStorage`]. A missing file means
//! defaults everywhere, so the tool works without any setup.
//!
//! ## Sections
//!
//! - **export**: output directory, base file name, default period label
//! - **source**: where report data comes from (HTTP URL or JSON file) and how
//!   long a refresh may take
//!
//! ```rust,no_run
//! use deskreport::libs::config::Config;
//!
//! let config = Config::read()?;
//! let export = config.export_settings();
//! println!("Writing to {}", export.output_dir.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::export::DEFAULT_FILE_NAME_HINT;
use super::messages::Message;
use super::session::DEFAULT_REFRESH_TIMEOUT;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_PERIOD_LABEL: &str = "Last 30 days";

/// A settings group offered by the interactive wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Where and how artifacts are written.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    /// Base file name; the extension is added per export kind.
    pub file_name_hint: String,
    /// Period shown in the document header when no custom range is given.
    pub period_label: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            output_dir: PathBuf::from("."),
            file_name_hint: DEFAULT_FILE_NAME_HINT.to_string(),
            period_label: DEFAULT_PERIOD_LABEL.to_string(),
        }
    }
}

/// Report data origin. `url` wins over `path` when both are set.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SourceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_REFRESH_TIMEOUT.as_secs()
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            url: None,
            path: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceConfig>,
}

impl Config {
    /// Loads the configuration, or defaults when no file exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn export_settings(&self) -> ExportConfig {
        self.export.clone().unwrap_or_default()
    }

    pub fn source_settings(&self) -> SourceConfig {
        self.source.clone().unwrap_or_default()
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [
            ConfigModule {
                key: "export".to_string(),
                name: Message::ConfigModuleExport.to_string(),
            },
            ConfigModule {
                key: "source".to_string(),
                name: Message::ConfigModuleSource.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "export" => {
                    let default = config.export_settings();
                    msg_print!(Message::ConfigModuleExport);
                    let output_dir: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptOutputDir.to_string())
                        .default(default.output_dir.display().to_string())
                        .interact_text()?;
                    config.export = Some(ExportConfig {
                        output_dir: PathBuf::from(output_dir),
                        file_name_hint: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptFileNameHint.to_string())
                            .default(default.file_name_hint)
                            .interact_text()?,
                        period_label: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPeriodLabel.to_string())
                            .default(default.period_label)
                            .interact_text()?,
                    });
                }
                "source" => {
                    let default = config.source_settings();
                    msg_print!(Message::ConfigModuleSource);
                    let url: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptSourceUrl.to_string())
                        .default(default.url.clone().unwrap_or_default())
                        .allow_empty(true)
                        .interact_text()?;
                    let path: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptSourcePath.to_string())
                        .default(default.path.as_ref().map(|p| p.display().to_string()).unwrap_or_default())
                        .allow_empty(true)
                        .interact_text()?;
                    config.source = Some(SourceConfig {
                        url: Some(url).filter(|u| !u.trim().is_empty()),
                        path: Some(path).filter(|p| !p.trim().is_empty()).map(PathBuf::from),
                        timeout_secs: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTimeoutSecs.to_string())
                            .default(default.timeout_secs)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
