// crates/farmer/src/application/register_farmer/register_farmer_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::Result;

use crate::application::register_farmer::RegisterFarmerCommand;
use crate::domain::entities::FarmerProfile;
use crate::domain::ports::{DistrictResolver, IdentityGateway};
use crate::domain::repositories::FarmerRepository;

pub struct RegisterFarmerUseCase {
    district_resolver: Arc<dyn DistrictResolver>,
    identity_gateway: Arc<dyn IdentityGateway>,
    farmer_repo: Arc<dyn FarmerRepository>,
}

impl RegisterFarmerUseCase {
    pub fn new(
        district_resolver: Arc<dyn DistrictResolver>,
        identity_gateway: Arc<dyn IdentityGateway>,
        farmer_repo: Arc<dyn FarmerRepository>,
    ) -> Self {
        Self { district_resolver, identity_gateway, farmer_repo }
    }

    /// Étapes strictement séquentielles. Une identité créée n'est jamais
    /// supprimée si l'écriture du profil échoue ensuite.
    pub async fn execute(&self, cmd: RegisterFarmerCommand) -> Result<FarmerProfile> {
        tracing::info!(phone_number = %cmd.phone_number, "Registering farmer");

        // 1. Géocodage inverse des coordonnées
        let district = self
            .district_resolver
            .resolve_district(cmd.latitude, cmd.longitude)
            .await?;
        tracing::info!(district = district.as_str(), "District resolved");

        // 2. Création du compte chez le fournisseur d'identité
        let farmer_id = self.identity_gateway.create_identity(&cmd.phone_number).await?;
        tracing::info!(farmer_id = %farmer_id, "Identity created");

        // 3. Assemblage du document (les champs calculés gagnent)
        let profile = FarmerProfile::register(cmd.payload, &cmd.phone_number, farmer_id, &district);

        // 4. Persistance
        self.farmer_repo.put(&profile).await?;
        tracing::debug!(document = ?profile.document(), "Farmer profile stored");

        Ok(profile)
    }
}
