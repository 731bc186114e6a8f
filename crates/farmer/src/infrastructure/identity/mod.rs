mod custom_token_signer;
mod postgres_identity_gateway;

pub use custom_token_signer::{CustomTokenSigner, TokenClaims, DEFAULT_TOKEN_TTL_SECS};
pub use postgres_identity_gateway::PostgresIdentityGateway;
