// crates/shared-kernel/src/infrastructure/postgres/mappers/postgres_error_mapper.rs

use crate::domain::entities::EntityMetadata;
use crate::errors::DomainError;

const UNIQUE_VIOLATION: &str = "23505";

pub trait SqlxErrorExt<T> {
    /// Traduit une violation d'unicité en `AlreadyExists` sur le champ indiqué
    fn map_domain<E: EntityMetadata>(
        self,
        field: &'static str,
        value: &str,
    ) -> Result<T, DomainError>;
    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError>;
}

impl<T> SqlxErrorExt<T> for std::result::Result<T, sqlx::Error> {
    fn map_domain<E: EntityMetadata>(
        self,
        field: &'static str,
        value: &str,
    ) -> Result<T, DomainError> {
        self.map_err(|e| match e {
            sqlx::Error::Database(db_err)
                if db_err.code().map(|c| c == UNIQUE_VIOLATION).unwrap_or(false) =>
            {
                DomainError::AlreadyExists {
                    entity: E::entity_name(),
                    field,
                    value: value.to_string(),
                }
            }
            sqlx::Error::Database(db_err) => DomainError::Infrastructure(db_err.message().into()),
            _ => DomainError::Infrastructure(e.to_string()),
        })
    }

    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Infrastructure(format!("{}: {}", context, e)))
    }
}
