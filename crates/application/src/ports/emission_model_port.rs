//! Emission model port
//!
//! A regression model that predicts a car's per-kilometer emission factor
//! from its engine parameters. Loaded once at startup and shared read-only.

use async_trait::async_trait;
use domain::value_objects::CarParameters;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for car emission factor prediction
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EmissionModelPort: Send + Sync {
    /// Human-readable model identifier
    fn name(&self) -> String;

    /// Predicted emission factor in grams CO2 per kilometer
    async fn predict(&self, params: &CarParameters) -> Result<f64, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn EmissionModelPort>();
    }
}
