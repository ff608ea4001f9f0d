use thiserror::Error;
use uuid::Uuid;

use crate::validation::FieldViolation;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {}", summarize(.0))]
    Validation(Vec<FieldViolation>),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: Uuid) -> Self {
        Self::NotFound(format!("{} with id {} not found", entity, id))
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Db(e.to_string())
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_lists_fields() {
        let err = ServiceError::Validation(vec![
            FieldViolation::new("address", "must not be blank"),
            FieldViolation::new("latitude", "must be between -90 and 90"),
        ]);
        assert_eq!(
            err.to_string(),
            "validation error: address: must not be blank; latitude: must be between -90 and 90"
        );
    }

    #[test]
    fn not_found_names_entity_and_id() {
        let id = Uuid::nil();
        let err = ServiceError::not_found("pizza", id);
        assert_eq!(err.to_string(), format!("not found: pizza with id {} not found", id));
    }
}
