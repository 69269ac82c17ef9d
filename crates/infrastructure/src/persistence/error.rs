//! Shared error mapping for the sqlx persistence layer

use application::error::ApplicationError;

/// Map a sqlx error to an application-layer error
pub fn map_sqlx_error(e: sqlx::Error) -> ApplicationError {
    match e {
        sqlx::Error::RowNotFound => {
            ApplicationError::NotFound("Database record not found".to_string())
        }
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            ApplicationError::InvalidOperation(format!("Duplicate record: {db_err}"))
        }
        unavailable @ (sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)) => {
            ApplicationError::ExternalService(format!("Database unavailable: {unavailable}"))
        }
        other => ApplicationError::Internal(format!("Database error: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            ApplicationError::NotFound(_)
        ));
    }

    #[test]
    fn pool_timeout_maps_to_external_service() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            ApplicationError::ExternalService(_)
        ));
    }

    #[test]
    fn other_errors_map_to_internal() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::Protocol("bad".into())),
            ApplicationError::Internal(_)
        ));
    }
}
