use crate::errors::{AppError, DomainError};

/// RESULT DU DOMAINE (Interne)
/// Utilisé par : Use Cases, Repositories (Ports), clients externes.
pub type Result<T> = std::result::Result<T, DomainError>;

/// RESULT D'APPLICATION (Exécutable)
/// Utilisé par : bootstrap, configuration, binaire.
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Helper pour les erreurs de type "Internal" rapides
pub fn internal_err(msg: impl Into<String>) -> DomainError {
    DomainError::Internal(msg.into())
}

/// Helper pour les pannes de collaborateurs externes
pub fn infra_err(msg: impl Into<String>) -> DomainError {
    DomainError::Infrastructure(msg.into())
}
