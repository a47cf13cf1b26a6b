use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    DuplicateKey(String),
    #[error("invalid date {0:?}, expected MM/DD/YYYY")]
    InvalidDate(String),
    #[error("seed error: {0}")]
    Seed(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i32) -> Self { Self::NotFound(format!("{entity} {id} not found")) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::NotFound(m) => Self::NotFound(m),
            ModelError::DuplicateKey(m) => Self::DuplicateKey(m),
            ModelError::InvalidDate(raw) => Self::InvalidDate(raw),
            ModelError::Db(m) => Self::Db(m),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}
