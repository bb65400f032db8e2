use models::errors::ModelError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Business and storage failures surfaced by every service.
///
/// The set is closed: the HTTP layer matches it exhaustively.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("{0} already exists")]
    AlreadyExists(String),
    #[error("referenced {field} does not exist")]
    ReferenceNotFound { field: &'static str },
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0} not found")]
    ParentNotFound(String),
    #[error("province {0:?} not found")]
    ProvinceNotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(entity.to_string()) }

    pub fn already_exists(key: &str) -> Self { Self::AlreadyExists(key.to_string()) }

    pub fn parent_not_found(parent: &str) -> Self { Self::ParentNotFound(parent.to_string()) }

    pub fn storage(e: impl std::fmt::Display) -> Self { Self::Storage(e.to_string()) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::AlreadyExists(_) => 1002,
            ServiceError::ReferenceNotFound { .. } => 1003,
            ServiceError::NotFound(_) => 1004,
            ServiceError::ParentNotFound(_) => 1005,
            ServiceError::ProvinceNotFound(_) => 1006,
            ServiceError::Storage(_) => 1200,
        }
    }

    /// Short machine-readable kind used in response bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "validation",
            ServiceError::AlreadyExists(_) => "already_exists",
            ServiceError::ReferenceNotFound { .. } => "reference_not_found",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::ParentNotFound(_) => "parent_not_found",
            ServiceError::ProvinceNotFound(_) => "province_not_found",
            ServiceError::Storage(_) => "storage",
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            ModelError::Db(msg) => ServiceError::Storage(msg),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        // The unique indexes are the last line against concurrent check-then-insert.
        if let Some(SqlErr::UniqueConstraintViolation(detail)) = e.sql_err() {
            return ServiceError::AlreadyExists(detail);
        }
        match e {
            DbErr::RecordNotUpdated => ServiceError::not_found("record"),
            other => ServiceError::storage(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let all = [
            ServiceError::Validation(String::new()),
            ServiceError::already_exists("cid"),
            ServiceError::ReferenceNotFound { field: "locality_id" },
            ServiceError::not_found("seller"),
            ServiceError::parent_not_found("locality"),
            ServiceError::ProvinceNotFound("Nowhereville".into()),
            ServiceError::storage("down"),
        ];
        let mut codes: Vec<u16> = all.iter().map(ServiceError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn model_errors_keep_their_kind() {
        assert_eq!(
            ServiceError::from(ModelError::validation("address is required")),
            ServiceError::Validation("address is required".into())
        );
        assert_eq!(ServiceError::from(ModelError::Db("gone".into())).kind(), "storage");
    }

    #[test]
    fn unmatched_update_maps_to_not_found() {
        assert_eq!(ServiceError::from(DbErr::RecordNotUpdated).kind(), "not_found");
        assert_eq!(ServiceError::from(DbErr::Custom("boom".into())).kind(), "storage");
    }
}
