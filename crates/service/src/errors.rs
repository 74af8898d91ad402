use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("create failed: {0}")]
    CreateFailed(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i32) -> Self { Self::NotFound(format!("{entity} with ID {id} not found")) }

    /// Stable kind label for logs, metrics and error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "VALIDATION_FAILURE",
            ServiceError::NotFound(_) => "NOT_FOUND",
            ServiceError::CreateFailed(_) => "CREATE_FAILED",
            ServiceError::Db(_) => "STORE_FAILURE",
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ServiceError::Db(e.to_string()) }
}
