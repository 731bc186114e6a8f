// crates/farmer/src/infrastructure/postgres/rows/postgres_identity_row.rs

use chrono::{DateTime, Utc};
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::IdentityRecord;
use crate::domain::value_objects::{FarmerId, PhoneNumber};

#[derive(Debug, sqlx::FromRow)]
pub struct IdentityRow {
    pub uid: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<IdentityRow> for IdentityRecord {
    type Error = DomainError;

    fn try_from(row: IdentityRow) -> Result<Self> {
        Ok(IdentityRecord {
            uid: FarmerId::try_new(row.uid)?,
            phone_number: PhoneNumber::from_raw(row.phone_number),
            created_at: row.created_at,
        })
    }
}
