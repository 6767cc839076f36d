//! Configuration management for the tudu application.
//!
//! Settings live in a JSON `config.json` under the platform data directory.
//! Each optional integration keeps its own configuration struct and an
//! interactive setup routine; `tudu init` runs a small wizard that lets the
//! user pick which modules to configure. Sensitive values (the Gemini API
//! key) never land in this file; they go through the encrypted secret store.

use crate::api::gemini::GeminiConfig;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module shown in the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini: Option<GeminiConfig>,
}

impl Config {
    /// Loads the configuration, returning defaults when no file exists yet.
    pub fn read() -> Result<Self> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        serde_json::from_str(&content).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(config_path).map_err(|_| msg_error_anyhow!(Message::ConfigSaveError))?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Interactive configuration wizard.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let modules = vec![GeminiConfig::module()];
        let module_names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Select the modules to configure (space to toggle, enter to confirm)")
            .items(&module_names)
            .interact()?;

        for index in selected {
            match modules[index].key.as_str() {
                "gemini" => config.gemini = Some(GeminiConfig::init(&config.gemini)?),
                _ => {}
            }
        }

        config.save()?;
        msg_print!(Message::ConfigSaved);
        Ok(config)
    }
}
