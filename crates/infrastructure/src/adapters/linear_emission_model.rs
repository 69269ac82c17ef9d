//! Linear-regression car emission model
//!
//! The model is a JSON artifact holding an intercept and one coefficient per
//! input. It is read once at startup and shared read-only afterwards.
//!
//! ```json
//! {
//!   "name": "linear-co2-v1",
//!   "intercept": 5.0,
//!   "cylinders_coefficient": 4.5,
//!   "consumption_coefficient": 22.0
//! }
//! ```

use std::path::Path;

use application::{error::ApplicationError, ports::EmissionModelPort};
use async_trait::async_trait;
use domain::value_objects::CarParameters;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument};

/// Errors raised while loading a model artifact
#[derive(Debug, Error)]
pub enum EmissionModelError {
    #[error("Failed to read model artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid model artifact: {0}")]
    Invalid(String),
}

/// `factor = intercept + cylinders_coefficient * cylinders + consumption_coefficient * consumption`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearEmissionModel {
    name: String,
    intercept: f64,
    cylinders_coefficient: f64,
    consumption_coefficient: f64,
}

impl LinearEmissionModel {
    /// Build a model from explicit coefficients
    pub fn new(
        name: impl Into<String>,
        intercept: f64,
        cylinders_coefficient: f64,
        consumption_coefficient: f64,
    ) -> Result<Self, EmissionModelError> {
        let model = Self {
            name: name.into(),
            intercept,
            cylinders_coefficient,
            consumption_coefficient,
        };
        model.check()?;
        Ok(model)
    }

    /// Parse a model from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, EmissionModelError> {
        let model: Self = serde_json::from_str(json)?;
        model.check()?;
        Ok(model)
    }

    /// Load a model artifact from disk
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, EmissionModelError> {
        let json = std::fs::read_to_string(path).map_err(|source| EmissionModelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let model = Self::from_json(&json)?;
        info!(model = %model.name, "Emission model loaded");
        Ok(model)
    }

    fn check(&self) -> Result<(), EmissionModelError> {
        if self.name.trim().is_empty() {
            return Err(EmissionModelError::Invalid("name must not be empty".into()));
        }
        let coefficients = [
            self.intercept,
            self.cylinders_coefficient,
            self.consumption_coefficient,
        ];
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(EmissionModelError::Invalid(
                "coefficients must be finite numbers".into(),
            ));
        }
        Ok(())
    }

    /// Raw linear prediction
    pub fn evaluate(&self, params: &CarParameters) -> f64 {
        self.consumption_coefficient.mul_add(
            params.consumption(),
            self.cylinders_coefficient
                .mul_add(f64::from(params.cylinders()), self.intercept),
        )
    }
}

#[async_trait]
impl EmissionModelPort for LinearEmissionModel {
    fn name(&self) -> String {
        self.name.clone()
    }

    async fn predict(&self, params: &CarParameters) -> Result<f64, ApplicationError> {
        Ok(self.evaluate(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ARTIFACT: &str = r#"{
        "name": "linear-co2-v1",
        "intercept": 5.0,
        "cylinders_coefficient": 4.5,
        "consumption_coefficient": 22.0
    }"#;

    #[tokio::test]
    async fn predicts_linear_combination() {
        let model = LinearEmissionModel::from_json(ARTIFACT).unwrap();
        let params = CarParameters::new(4, 7.5).unwrap();
        let factor = model.predict(&params).await.unwrap();
        assert!((factor - (5.0 + 4.5 * 4.0 + 22.0 * 7.5)).abs() < 1e-9);
        assert_eq!(model.name(), "linear-co2-v1");
    }

    #[test]
    fn loads_artifact_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ARTIFACT.as_bytes()).unwrap();

        let model = LinearEmissionModel::load(file.path()).unwrap();
        assert_eq!(
            model,
            LinearEmissionModel::new("linear-co2-v1", 5.0, 4.5, 22.0).unwrap()
        );
    }

    #[test]
    fn missing_artifact_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LinearEmissionModel::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, EmissionModelError::Io { .. }));
    }

    #[test]
    fn malformed_artifact_is_parse_error() {
        let err = LinearEmissionModel::from_json(r#"{"name": "x", "intercept": "a"}"#).unwrap_err();
        assert!(matches!(err, EmissionModelError::Parse(_)));
    }

    #[test]
    fn rejects_blank_name() {
        assert!(matches!(
            LinearEmissionModel::new(" ", 1.0, 1.0, 1.0),
            Err(EmissionModelError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_non_finite_coefficients() {
        assert!(LinearEmissionModel::new("m", f64::NAN, 1.0, 1.0).is_err());
    }
}
