// crates/farmer/src/domain/entities/identity_record.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::entities::EntityMetadata;

use crate::domain::value_objects::{FarmerId, PhoneNumber};

/// Compte côté fournisseur d'identité, indépendant du profil métier.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityRecord {
    pub uid: FarmerId,
    pub phone_number: PhoneNumber,
    pub created_at: DateTime<Utc>,
}

impl EntityMetadata for IdentityRecord {
    fn entity_name() -> &'static str {
        "Identity"
    }
}
