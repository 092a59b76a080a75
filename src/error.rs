//! Application error types and their HTTP response mapping.
//!
//! Validation and uniqueness failures resolve before any storage mutation
//! and map to 4xx responses; storage failures are always surfaced as 5xx,
//! never silently swallowed.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Classification of storage backend failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    BackendFailure,
    Timeout,
    Serialization,
}

/// Failure reported by a storage backend.
///
/// Carries the logical operation name so failures can be diagnosed from
/// logs without leaking connection credentials.
#[derive(Debug, thiserror::Error)]
#[error("{operation}: {message}")]
pub struct StoreError {
    pub kind: StoreErrorKind,
    pub operation: &'static str,
    pub message: String,
}

impl StoreError {
    pub fn backend(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind: StoreErrorKind::BackendFailure,
            operation,
            message: message.into(),
        }
    }

    pub fn timeout(operation: &'static str) -> Self {
        Self {
            kind: StoreErrorKind::Timeout,
            operation,
            message: "operation timed out".to_string(),
        }
    }

    pub fn serialization(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind: StoreErrorKind::Serialization,
            operation,
            message: message.into(),
        }
    }
}

/// Application-level error taxonomy.
#[derive(Debug)]
pub enum AppError {
    /// A field of the incoming configuration failed validation.
    Validation { field: &'static str, message: String },
    /// A create would violate keyword uniqueness.
    DuplicateKeyword { keyword: String },
    /// A required argument was missing or blank.
    InvalidArgument { message: String },
    /// The referenced configuration does not exist.
    NotFound { message: String },
    /// The storage backend failed.
    Store(StoreError),
}

impl AppError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn duplicate_keyword(keyword: impl Into<String>) -> Self {
        Self::DuplicateKeyword {
            keyword: keyword.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
}

/// Error body shared by all failure responses.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, error) = match self {
            AppError::Validation { message, .. } => (StatusCode::BAD_REQUEST, message, None),
            AppError::DuplicateKeyword { .. } => (
                StatusCode::BAD_REQUEST,
                "Keyword already exists. Use a unique keyword.".to_string(),
                None,
            ),
            AppError::InvalidArgument { message } => (StatusCode::BAD_REQUEST, message, None),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message, None),
            AppError::Store(store_error) => {
                tracing::error!(
                    operation = store_error.operation,
                    kind = ?store_error.kind,
                    "Storage backend error: {}",
                    store_error.message
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(store_error.to_string()),
                )
            }
        };

        let body = ErrorBody {
            success: false,
            message,
            error,
        };

        (status, Json(body)).into_response()
    }
}

/// Returns true if the error is a database unique-constraint violation.
///
/// Used by the durable repository to turn an insert conflict on the
/// `keyword` column into [`AppError::DuplicateKeyword`].
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

/// Maps a sqlx error into the storage error taxonomy.
///
/// Decode failures indicate a row the entity mapping cannot represent and
/// are classified as serialization errors; everything else is a backend
/// failure. Unique violations are handled separately at the insert site,
/// where the offending keyword is known.
pub fn map_sqlx_error(operation: &'static str, e: sqlx::Error) -> AppError {
    let store_error = match e {
        sqlx::Error::Decode(source) => StoreError::serialization(operation, source.to_string()),
        sqlx::Error::ColumnDecode { source, .. } => {
            StoreError::serialization(operation, source.to_string())
        }
        other => StoreError::backend(operation, other.to_string()),
    };

    AppError::Store(store_error)
}
