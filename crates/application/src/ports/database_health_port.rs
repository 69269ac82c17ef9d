//! Database health check port

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

/// Port for database connectivity checks
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DatabaseHealthPort: Send + Sync {
    /// Run a trivial query and report whether it succeeded
    async fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn DatabaseHealthPort>();
    }
}
