use crate::errors::ErrorCode;
use std::fmt;

#[derive(Debug, Clone)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Variable d'environnement obligatoire absente
    pub fn missing_env(name: &str) -> Self {
        Self::new(ErrorCode::ConfigurationMissing, format!("{name} must be set"))
    }

    pub fn invalid_env(name: &str, value: &str) -> Self {
        Self::new(
            ErrorCode::ValidationFailed,
            format!("Invalid value '{value}' for {name}"),
        )
    }
}

// Pour transformer les erreurs SQL (sqlx) en AppError (migrations, connexion)
#[cfg(feature = "postgres")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database infrastructure error: {:?}", err);

        Self::new(
            ErrorCode::InfrastructureFailure,
            format!("A database error occurred: {err}"),
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
