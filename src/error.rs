use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use sqlx::error::ErrorKind;
use thiserror::Error;

use crate::response::{ApiResponse, Meta};

/// Outcome of a single call against the pool-bounded store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no rows returned")]
    NotFound,

    #[error("constraint violation: {message}")]
    Constraint {
        constraint: Option<String>,
        message: String,
    },

    #[error("backend error: {0}")]
    Backend(sqlx::Error),
}

impl StoreError {
    /// True when the call gave up waiting for a free pooled connection.
    pub fn is_pool_timeout(&self) -> bool {
        matches!(self, StoreError::Backend(sqlx::Error::PoolTimedOut))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(db)
                if matches!(
                    db.kind(),
                    ErrorKind::UniqueViolation
                        | ErrorKind::ForeignKeyViolation
                        | ErrorKind::NotNullViolation
                        | ErrorKind::CheckViolation
                ) =>
            {
                StoreError::Constraint {
                    constraint: db.constraint().map(str::to_owned),
                    message: db.message().to_owned(),
                }
            }
            other => StoreError::Backend(other),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Random sample from `{table}` came back empty")]
    SampleEmpty { table: &'static str },

    #[error("Constraint violation")]
    Constraint(#[source] StoreError),

    #[error("Connection pool exhausted")]
    PoolExhausted(#[source] StoreError),

    #[error("Database error")]
    DbError(#[source] StoreError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound,
            err @ StoreError::Constraint { .. } => AppError::Constraint(err),
            err if err.is_pool_timeout() => AppError::PoolExhausted(err),
            err => AppError::DbError(err),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::SampleEmpty { .. }
            | AppError::Constraint(_)
            | AppError::PoolExhausted(_)
            | AppError::DbError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            AppError::Constraint(source)
            | AppError::PoolExhausted(source)
            | AppError::DbError(source) => source.to_string(),
            other => other.to_string(),
        };

        let body = ApiResponse {
            message: self.to_string(),
            data: Some(ErrorData { error: detail }),
            meta: Some(Meta::empty()),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_row_maps_to_not_found() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::NotFound));
        assert!(matches!(AppError::from(err), AppError::NotFound));
    }

    #[test]
    fn pool_timeout_maps_to_pool_exhausted() {
        let err = StoreError::from(sqlx::Error::PoolTimedOut);
        assert!(err.is_pool_timeout());

        let app = AppError::from(err);
        assert!(matches!(app, AppError::PoolExhausted(_)));
        assert_eq!(app.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn other_backend_failures_stay_db_errors() {
        let err = StoreError::from(sqlx::Error::PoolClosed);
        assert!(matches!(err, StoreError::Backend(sqlx::Error::PoolClosed)));
        assert!(!err.is_pool_timeout());
        assert!(matches!(AppError::from(err), AppError::DbError(_)));
    }
}
