//! Emission model artifact configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where to find the car emission model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmissionModelConfig {
    /// Path to the JSON model artifact
    #[serde(default = "default_artifact_path")]
    pub artifact_path: PathBuf,
}

fn default_artifact_path() -> PathBuf {
    PathBuf::from("models/car_emissions.json")
}

impl Default for EmissionModelConfig {
    fn default() -> Self {
        Self {
            artifact_path: default_artifact_path(),
        }
    }
}
