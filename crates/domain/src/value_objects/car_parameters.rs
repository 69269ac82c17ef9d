//! Car parameters used to refine the car emission factor

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Engine characteristics fed to the emission model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarParameters {
    /// Number of engine cylinders
    cylinders: u32,
    /// Combined fuel consumption in liters per 100 km
    consumption: f64,
}

impl CarParameters {
    /// Create validated car parameters
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCarParameters` if `cylinders` is zero
    /// or `consumption` is not a positive finite number.
    pub fn new(cylinders: u32, consumption: f64) -> Result<Self, DomainError> {
        if cylinders == 0 {
            return Err(DomainError::InvalidCarParameters(
                "cylinders must be a positive integer".to_string(),
            ));
        }
        if !consumption.is_finite() || consumption <= 0.0 {
            return Err(DomainError::InvalidCarParameters(
                "consumption must be a positive number of liters per 100 km".to_string(),
            ));
        }
        Ok(Self {
            cylinders,
            consumption,
        })
    }

    /// Number of engine cylinders
    #[must_use]
    pub const fn cylinders(&self) -> u32 {
        self.cylinders
    }

    /// Combined fuel consumption in liters per 100 km
    #[must_use]
    pub const fn consumption(&self) -> f64 {
        self.consumption
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_values() {
        let params = CarParameters::new(4, 7.5).unwrap();
        assert_eq!(params.cylinders(), 4);
        assert!((params.consumption() - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_zero_cylinders() {
        assert!(matches!(
            CarParameters::new(0, 7.5),
            Err(DomainError::InvalidCarParameters(_))
        ));
    }

    #[test]
    fn rejects_non_positive_consumption() {
        assert!(CarParameters::new(4, 0.0).is_err());
        assert!(CarParameters::new(4, -3.0).is_err());
        assert!(CarParameters::new(4, f64::INFINITY).is_err());
    }
}
