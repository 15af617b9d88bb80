use crate::models::UploadConfig;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Name of the widget configuration file inside the config directory.
const UPLOAD_CONFIG_FILE: &str = "updrop.yaml";

/// Configuration manager for loading and saving the widget's YAML config.
///
/// A missing file is not an error: defaults (10 MiB ceiling, `.md` only) are
/// returned so the widget works out of the box.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    upload_config_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager with the specified configuration directory.
    ///
    /// The directory is created if it does not exist yet.
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {config_dir}"))?;
        }

        Ok(Self {
            upload_config_path: config_dir.join(UPLOAD_CONFIG_FILE),
            config_dir,
        })
    }

    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    /// Load the widget configuration, normalized and ready for the validator.
    ///
    /// Returns defaults if the file doesn't exist.
    pub fn load_upload_config(&self) -> Result<UploadConfig> {
        if !self.upload_config_path.exists() {
            tracing::warn!(
                "Config file not found at {}, using defaults",
                self.upload_config_path
            );
            return Ok(UploadConfig::default());
        }

        let file_contents = fs::read_to_string(&self.upload_config_path)
            .with_context(|| format!("Failed to read config: {}", self.upload_config_path))?;

        let mut config: UploadConfig = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse config: {}", self.upload_config_path))?;
        config.normalize();

        tracing::info!("Loaded config from {}", self.upload_config_path);
        Ok(config)
    }

    /// Save the widget configuration.
    pub fn save_upload_config(&self, config: &UploadConfig) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(config).context("Failed to serialize config to YAML")?;

        fs::write(&self.upload_config_path, yaml_string)
            .with_context(|| format!("Failed to write config: {}", self.upload_config_path))?;

        tracing::info!("Saved config to {}", self.upload_config_path);
        Ok(())
    }
}
