use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::sequencer::{
    RandomizedDelays, DEFAULT_COMPLETION_DELAY_MS, DEFAULT_STAGE_DELAY_BASE_MS,
    DEFAULT_STAGE_DELAY_SPREAD_MS,
};
use crate::stages::{default_catalog, Stage, StageCatalog};

pub const CONFIG_FILE: &str = "zeal-deploy.toml";

/// Main configuration structure for Zeal Deploy.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZealDeployConfig {
    /// Transition timing parameters
    pub timing: TimingConfig,
    /// Completion audio cue settings
    pub audio: AudioConfig,
    /// Logging settings
    pub observability: ObservabilityConfig,
    /// Optional override of the built-in stage catalog
    pub stages: Option<Vec<Stage>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimingConfig {
    /// Minimum wait before a stage transition, in milliseconds
    pub stage_delay_base_ms: u64,
    /// Width of the uniform random offset added on top of the base
    pub stage_delay_spread_ms: u64,
    /// Fixed hold on the last stage before completion, in milliseconds
    pub completion_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AudioConfig {
    /// Play the completion chime
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level directive when RUST_LOG is unset
    pub log_level: String,
    /// Emit logs as JSON lines
    pub json_logs: bool,
}

impl Default for ZealDeployConfig {
    fn default() -> Self {
        Self {
            timing: TimingConfig {
                stage_delay_base_ms: DEFAULT_STAGE_DELAY_BASE_MS,
                stage_delay_spread_ms: DEFAULT_STAGE_DELAY_SPREAD_MS,
                completion_delay_ms: DEFAULT_COMPLETION_DELAY_MS,
            },
            audio: AudioConfig { enabled: true },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
                json_logs: false,
            },
            stages: None,
        }
    }
}

impl ZealDeployConfig {
    /// Load configuration with precedence:
    /// 1. Default values
    /// 2. `zeal-deploy.toml` in the working directory, if present
    /// 3. Environment variables prefixed with `ZEAL_DEPLOY_`
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if Path::new(CONFIG_FILE).exists() {
            builder = builder.add_source(File::with_name("zeal-deploy"));
        }

        builder = builder.add_source(
            Environment::with_prefix("ZEAL_DEPLOY")
                .separator("__")
                .try_parsing(true),
        );

        let loaded: Self = builder.build()?.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Load from an explicit file path layered over the defaults.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let builder = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(path.as_ref().to_path_buf()));
        let loaded: Self = builder.build()?.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(stages) = &self.stages {
            if stages.is_empty() {
                anyhow::bail!("config error: stage catalog override must not be empty");
            }
            if stages.iter().any(|stage| stage.label.trim().is_empty()) {
                anyhow::bail!("config error: every stage needs a non-empty label");
            }
        }
        Ok(())
    }

    /// The stage catalog this configuration selects.
    pub fn catalog(&self) -> StageCatalog {
        match &self.stages {
            Some(stages) => StageCatalog::new(stages.clone()),
            None => default_catalog(),
        }
    }

    /// The production delay schedule this configuration selects.
    pub fn schedule(&self) -> RandomizedDelays {
        RandomizedDelays::from_millis(
            self.timing.stage_delay_base_ms,
            self.timing.stage_delay_spread_ms,
            self.timing.completion_delay_ms,
        )
    }

    /// Save configuration to a TOML file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_the_reference_instance() {
        let config = ZealDeployConfig::default();
        assert_eq!(config.timing.stage_delay_base_ms, 1100);
        assert_eq!(config.timing.stage_delay_spread_ms, 800);
        assert_eq!(config.timing.completion_delay_ms, 1200);
        assert!(config.audio.enabled);
        assert_eq!(config.catalog().len(), 8);
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("zeal-deploy.toml");

        let mut config = ZealDeployConfig::default();
        config.timing.stage_delay_base_ms = 10;
        config.audio.enabled = false;
        config.save_to_file(&path).unwrap();

        let loaded = ZealDeployConfig::load_from(&path).unwrap();
        assert_eq!(loaded.timing.stage_delay_base_ms, 10);
        assert_eq!(loaded.timing.stage_delay_spread_ms, 800);
        assert!(!loaded.audio.enabled);
    }

    #[test]
    fn stage_override_replaces_default_catalog() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("zeal-deploy.toml");
        std::fs::write(
            &path,
            r#"
[[stages]]
label = "Warm up"
icon = "🔥"

[[stages]]
label = "Ship it"
icon = "🚀"
"#,
        )
        .unwrap();

        let loaded = ZealDeployConfig::load_from(&path).unwrap();
        let catalog = loaded.catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().label, "Ship it");
    }

    #[test]
    fn empty_stage_override_is_rejected() {
        let mut config = ZealDeployConfig::default();
        config.stages = Some(vec![]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn blank_stage_label_is_rejected() {
        let mut config = ZealDeployConfig::default();
        config.stages = Some(vec![Stage::new("  ", "🚀")]);
        assert!(config.validate().is_err());
    }
}
