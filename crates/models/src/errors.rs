use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    DuplicateKey(String),
    #[error("invalid date {0:?}, expected MM/DD/YYYY")]
    InvalidDate(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    pub fn not_found(entity: &str, id: i32) -> Self { Self::NotFound(format!("{entity} {id} not found")) }

    pub fn duplicate(entity: &str, id: i32) -> Self { Self::DuplicateKey(format!("{entity} {id} already exists")) }

    /// Classify a store error raised while writing `entity` row `id`.
    pub fn from_db(entity: &str, id: i32, err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => Self::duplicate(entity, id),
            _ => Self::Db(err.to_string()),
        }
    }
}

impl From<sea_orm::DbErr> for ModelError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}
