//! Readiness aggregation
//!
//! The database is critical; the emission model only affects car
//! refinement and is reported without making the service unready.

use std::{sync::Arc, time::Duration};

use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use crate::ports::{DatabaseHealthPort, EmissionModelPort};

/// Default timeout for a single dependency check
const DEFAULT_HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Status of an individual dependency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ServiceHealth {
    #[must_use]
    pub fn healthy_with_info(info: impl Into<String>) -> Self {
        Self {
            healthy: true,
            info: Some(info.into()),
            response_time_ms: None,
            error: None,
        }
    }

    #[must_use]
    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self {
            healthy: false,
            info: None,
            response_time_ms: None,
            error: Some(error.into()),
        }
    }

    #[must_use]
    pub const fn with_response_time(mut self, ms: u64) -> Self {
        self.response_time_ms = Some(ms);
        self
    }
}

/// Readiness of the service and its dependencies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessReport {
    /// True when every critical dependency is healthy
    pub ready: bool,
    pub database: ServiceHealth,
    pub emission_model: ServiceHealth,
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

/// Checks the dependencies the HTTP layer reports on `/ready`
pub struct HealthService {
    database: Arc<dyn DatabaseHealthPort>,
    model: Option<Arc<dyn EmissionModelPort>>,
    timeout: Duration,
}

impl std::fmt::Debug for HealthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthService")
            .field("database", &"<DatabaseHealthPort>")
            .field("model", &self.model.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HealthService {
    #[must_use]
    pub fn new(
        database: Arc<dyn DatabaseHealthPort>,
        model: Option<Arc<dyn EmissionModelPort>>,
    ) -> Self {
        Self {
            database,
            model,
            timeout: DEFAULT_HEALTH_CHECK_TIMEOUT,
        }
    }

    /// Override the per-check timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check all dependencies
    #[instrument(skip(self))]
    pub async fn check(&self) -> ReadinessReport {
        let database = self.check_database().await;
        let emission_model = self.check_model();
        ReadinessReport {
            ready: database.healthy,
            database,
            emission_model,
            checked_at: chrono::Utc::now(),
        }
    }

    async fn check_database(&self) -> ServiceHealth {
        let start = std::time::Instant::now();
        let Ok(available) = timeout(self.timeout, self.database.is_available()).await else {
            warn!("Database health check timed out");
            return ServiceHealth::unhealthy("Health check timed out");
        };

        #[allow(clippy::cast_possible_truncation)]
        let response_time = start.elapsed().as_millis() as u64;
        if available {
            debug!(response_time_ms = response_time, "Database healthy");
            ServiceHealth::healthy_with_info("sqlite").with_response_time(response_time)
        } else {
            warn!(response_time_ms = response_time, "Database unreachable");
            ServiceHealth::unhealthy("Database unreachable").with_response_time(response_time)
        }
    }

    fn check_model(&self) -> ServiceHealth {
        self.model.as_ref().map_or_else(
            || ServiceHealth::unhealthy("Emission model not loaded"),
            |model| ServiceHealth::healthy_with_info(model.name()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockDatabaseHealthPort, MockEmissionModelPort};

    fn database(available: bool) -> Arc<dyn DatabaseHealthPort> {
        let mut mock = MockDatabaseHealthPort::new();
        mock.expect_is_available().returning(move || available);
        Arc::new(mock)
    }

    fn model() -> Arc<dyn EmissionModelPort> {
        let mut mock = MockEmissionModelPort::new();
        mock.expect_name().return_const("linear-v1".to_string());
        Arc::new(mock)
    }

    #[tokio::test]
    async fn ready_when_database_up() {
        let report = HealthService::new(database(true), Some(model())).check().await;
        assert!(report.ready);
        assert!(report.database.healthy);
        assert_eq!(report.emission_model.info.as_deref(), Some("linear-v1"));
    }

    #[tokio::test]
    async fn missing_model_does_not_block_readiness() {
        let report = HealthService::new(database(true), None).check().await;
        assert!(report.ready);
        assert!(!report.emission_model.healthy);
    }

    #[tokio::test]
    async fn not_ready_when_database_down() {
        let report = HealthService::new(database(false), Some(model())).check().await;
        assert!(!report.ready);
        assert_eq!(report.database.error.as_deref(), Some("Database unreachable"));
    }
}
