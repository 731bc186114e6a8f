// crates/shared-kernel/src/errors/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    #[error("{entity} not found with id '{id}'")]
    NotFound {
        entity: &'static str,
        id: String,
    },

    #[error("{entity} already exists with {field} = '{value}'")]
    AlreadyExists {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// Erreur d'un collaborateur externe (Postgres, géocodage, fournisseur d'identité)
    #[error("Infrastructure failure: {0}")]
    Infrastructure(String),

    #[error("Internal domain error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Vrai uniquement pour l'entité demandée : un NotFound sur une autre entité
    /// reste une erreur technique pour l'appelant.
    pub fn is_not_found_for(&self, expected: &str) -> bool {
        matches!(self, Self::NotFound { entity, .. } if *entity == expected)
    }
}
