use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use chrono::Utc;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::IdentityRecord;
use crate::domain::ports::IdentityGateway;
use crate::domain::value_objects::{BearerToken, FarmerId, PhoneNumber};

#[derive(Default)]
pub struct IdentityGatewayStub {
    /// Comptes en mémoire : numéro normalisé -> identité
    pub identities: Arc<Mutex<HashMap<PhoneNumber, IdentityRecord>>>,
    pub create_error: Arc<Mutex<Option<DomainError>>>,
    pub lookup_error: Arc<Mutex<Option<DomainError>>>,
    pub token_error: Arc<Mutex<Option<DomainError>>>,
    /// Numéros reçus par create_identity / find_by_phone_number
    pub received_phones: Arc<Mutex<Vec<String>>>,
}

impl IdentityGatewayStub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Helper pour enregistrer un compte existant avant un test
    pub fn add_identity(&self, uid: &str, phone: &str) {
        let record = IdentityRecord {
            uid: FarmerId::try_new(uid).unwrap(),
            phone_number: PhoneNumber::from_raw(phone),
            created_at: Utc::now(),
        };
        self.identities.lock().unwrap().insert(record.phone_number.clone(), record);
    }

    pub fn identity_count(&self) -> usize {
        self.identities.lock().unwrap().len()
    }

    fn check(slot: &Mutex<Option<DomainError>>) -> Result<()> {
        if let Some(err) = slot.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }
}

#[async_trait]
impl IdentityGateway for IdentityGatewayStub {
    async fn create_identity(&self, phone_number: &PhoneNumber) -> Result<FarmerId> {
        self.received_phones.lock().unwrap().push(phone_number.as_str().to_string());
        Self::check(&self.create_error)?;

        let mut identities = self.identities.lock().unwrap();
        if identities.contains_key(phone_number) {
            return Err(DomainError::AlreadyExists {
                entity: "Identity",
                field: "phone_number",
                value: phone_number.as_str().to_string(),
            });
        }

        let uid = FarmerId::try_new(format!("uid-{}", identities.len() + 1))?;
        identities.insert(
            phone_number.clone(),
            IdentityRecord {
                uid: uid.clone(),
                phone_number: phone_number.clone(),
                created_at: Utc::now(),
            },
        );
        Ok(uid)
    }

    async fn find_by_phone_number(
        &self,
        phone_number: &PhoneNumber,
    ) -> Result<Option<IdentityRecord>> {
        self.received_phones.lock().unwrap().push(phone_number.as_str().to_string());
        Self::check(&self.lookup_error)?;
        Ok(self.identities.lock().unwrap().get(phone_number).cloned())
    }

    async fn issue_token(&self, uid: &FarmerId) -> Result<BearerToken> {
        Self::check(&self.token_error)?;
        Ok(BearerToken::from_raw(format!("token-for-{}", uid)))
    }
}
