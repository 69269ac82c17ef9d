//! Geocoding port
//!
//! Resolves free-text place names to coordinates. Adapters in the
//! infrastructure layer implement this port on top of a geocoding API.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for address resolution
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve an address
    ///
    /// `Ok(None)` means the service answered but found no match.
    async fn geocode(&self, address: &str) -> Result<Option<GeoLocation>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn GeocodingPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn GeocodingPort>();
    }

    #[tokio::test]
    async fn mock_returns_configured_location() {
        let mut mock = MockGeocodingPort::new();
        mock.expect_geocode()
            .withf(|address| address == "Lyon")
            .returning(|_| Ok(GeoLocation::new(45.764, 4.8357).ok()));

        let result = mock.geocode("Lyon").await.unwrap();
        assert!(result.is_some());
    }
}
