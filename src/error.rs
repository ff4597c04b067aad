use actix_web::{HttpResponse, ResponseError};
use crate::models::ApiResponse;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 唯一约束冲突转换为业务冲突，其余数据库错误原样保留
    pub fn from_db_conflict(err: DbErr, message: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                log::warn!("Unique constraint violated: {detail}");
                AppError::Conflict(message.to_string())
            }
            _ => AppError::DatabaseError(err),
        }
    }

    pub fn status_and_code(&self) -> (actix_web::http::StatusCode, &'static str) {
        match self {
            AppError::ValidationError(_) => {
                (actix_web::http::StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            AppError::Conflict(_) => (actix_web::http::StatusCode::CONFLICT, "CONFLICT"),
            AppError::NotFound(_) => (actix_web::http::StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::DatabaseError(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
            ),
            _ => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
            ),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        self.status_and_code().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code) = self.status_and_code();
        let message = match self {
            AppError::ValidationError(msg) => {
                log::warn!("Validation error: {msg}");
                msg.clone()
            }
            AppError::Conflict(msg) => {
                log::warn!("Business conflict: {msg}");
                msg.clone()
            }
            AppError::NotFound(msg) => msg.clone(),
            AppError::DatabaseError(err) => {
                log::error!("Database error: {err}");
                "Database error".to_string()
            }
            _ => {
                log::error!("Internal error: {self}");
                "Internal server error".to_string()
            }
        };

        HttpResponse::build(status_code)
            .json(ApiResponse::<()>::error(error_code.to_string(), message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_business_errors_map_to_client_status() {
        assert_eq!(
            AppError::ValidationError("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Conflict("busy".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::NotFound("gone".into()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_storage_errors_are_opaque() {
        let err = AppError::DatabaseError(DbErr::Custom("connection reset".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.status_and_code().1, "DATABASE_ERROR");

        let err = AppError::InternalError("boom".into());
        assert_eq!(err.status_and_code().1, "INTERNAL_ERROR");
    }

    #[test]
    fn test_non_unique_db_error_is_not_conflict() {
        let err = AppError::from_db_conflict(DbErr::Custom("timeout".into()), "dup");
        assert!(matches!(err, AppError::DatabaseError(_)));
    }
}
