use axum::http::StatusCode;
use thiserror::Error;

/// Failure classes surfaced by the repo layer.
///
/// Not-found is never an error here: lookups return `Ok(None)` and list
/// queries return an empty vec, so callers can always tell an absent row
/// apart from a failed query.
#[derive(Debug, Error)]
pub enum DbError {
    /// Could not reach the database (network, TLS, pool exhausted/closed).
    #[error("database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// A unique constraint rejected the write.
    #[error("duplicate value for {constraint}")]
    Duplicate {
        constraint: String,
        #[source]
        source: sqlx::Error,
    },

    /// A foreign-key or other integrity constraint rejected the write.
    #[error("invalid reference: {constraint}")]
    InvalidReference {
        constraint: String,
        #[source]
        source: sqlx::Error,
    },

    /// The statement itself failed.
    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        match &e {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => DbError::Unavailable(e),
            sqlx::Error::Database(db) => match db.kind() {
                ErrorKind::UniqueViolation => {
                    let constraint = db.constraint().unwrap_or("unique").to_string();
                    DbError::Duplicate {
                        constraint,
                        source: e,
                    }
                }
                ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => {
                    let constraint = db.constraint().unwrap_or("integrity").to_string();
                    DbError::InvalidReference {
                        constraint,
                        source: e,
                    }
                }
                _ => DbError::Query(e),
            },
            _ => DbError::Query(e),
        }
    }
}

impl DbError {
    pub fn status(&self) -> StatusCode {
        match self {
            DbError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            DbError::Duplicate { .. } => StatusCode::CONFLICT,
            DbError::InvalidReference { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            DbError::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Log a repo failure and turn it into a handler rejection.
pub fn reject(e: DbError) -> (StatusCode, String) {
    tracing::error!(error = %e, "database operation failed");
    (e.status(), e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_errors_classify_as_unavailable() {
        let err: DbError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, DbError::Unavailable(_)));
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err: DbError = sqlx::Error::Io(io).into();
        assert!(matches!(err, DbError::Unavailable(_)));
    }

    #[test]
    fn other_errors_classify_as_query() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DbError::Query(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn constraint_statuses() {
        let dup = DbError::Duplicate {
            constraint: "users_email_key".into(),
            source: sqlx::Error::PoolClosed,
        };
        assert_eq!(dup.status(), StatusCode::CONFLICT);
        assert!(dup.to_string().contains("users_email_key"));

        let fk = DbError::InvalidReference {
            constraint: "reservations_guest_id_fkey".into(),
            source: sqlx::Error::PoolClosed,
        };
        assert_eq!(fk.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
