use std::io::Write;
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::errors::{ConfigError, TrainError};

/// Configuration for a synthetic training run.
///
/// Missing JSON fields fall back to [`TrainConfig::default`]: 1000 samples
/// of 10 features, 64 hidden units, 10 epochs at lr 0.01, seed 42, and
/// weights initialised at N(0, 1) · 0.1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub samples: usize,
    pub features: usize,
    pub hidden: usize,
    pub epochs: usize,
    pub learning_rate: f64,
    pub seed: u64,
    pub init_scale: f64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            samples: 1000,
            features: 10,
            hidden: 64,
            epochs: 10,
            learning_rate: 0.01,
            seed: 42,
            init_scale: 0.1,
        }
    }
}

impl TrainConfig {
    pub fn validate(&self) -> Result<(), TrainError> {
        let reason = if self.samples == 0 || self.features == 0 || self.hidden == 0 {
            "samples, features and hidden must all be at least 1"
        } else if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            "learning_rate must be a positive finite number"
        } else if !self.init_scale.is_finite() {
            "init_scale must be finite"
        } else {
            return Ok(());
        };
        Err(TrainError::InvalidConfig { reason: reason.to_string() })
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .map_err(|source| ConfigError::Json { path: path.to_path_buf(), source })?;
        writer
            .flush()
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })
    }

    /// Deserializes a config from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<TrainConfig, ConfigError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|source| ConfigError::Json { path: path.to_path_buf(), source })
    }
}
