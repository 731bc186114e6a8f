// crates/farmer/src/application/authenticate_user/authenticate_user_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;

use crate::application::authenticate_user::{AuthenticateUserCommand, AuthenticatedUserResponse};
use crate::domain::ports::IdentityGateway;
use crate::domain::repositories::FarmerRepository;

pub struct AuthenticateUserUseCase {
    identity_gateway: Arc<dyn IdentityGateway>,
    farmer_repo: Arc<dyn FarmerRepository>,
}

impl AuthenticateUserUseCase {
    pub fn new(
        identity_gateway: Arc<dyn IdentityGateway>,
        farmer_repo: Arc<dyn FarmerRepository>,
    ) -> Self {
        Self { identity_gateway, farmer_repo }
    }

    pub async fn execute(&self, cmd: AuthenticateUserCommand) -> Result<AuthenticatedUserResponse> {
        tracing::info!(phone_number = %cmd.phone_number, "Authenticating user");

        // 1. Compte chez le fournisseur (absent = NotFound "Identity")
        let identity = self
            .identity_gateway
            .find_by_phone_number(&cmd.phone_number)
            .await?
            .ok_or_not_found(&cmd.phone_number)?;

        // 2. Profil métier (absent = NotFound "FarmerProfile")
        let profile = self
            .farmer_repo
            .get(&identity.uid)
            .await?
            .ok_or_not_found(&identity.uid)?;

        // 3. Jeton frais, jamais stocké
        let token = self.identity_gateway.issue_token(&identity.uid).await?;
        tracing::info!(farmer_id = %identity.uid, "User authenticated");

        Ok(AuthenticatedUserResponse::from_profile(&profile, token))
    }
}
