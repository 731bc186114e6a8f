// crates/farmer/src/infrastructure/identity/custom_token_signer.rs

use std::sync::Arc;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use shared_kernel::clock::Clock;
use shared_kernel::errors::{internal_err, DomainError, Result};

use crate::domain::value_objects::{BearerToken, FarmerId};

type HmacSha256 = Hmac<Sha256>;

pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// En-tête fixe, encodé une seule fois par signature
const TOKEN_HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub uid: String,
    pub iat: i64,
    pub exp: i64,
}

/// Jetons au format JWT (header.claims.signature) signés en HMAC-SHA256.
pub struct CustomTokenSigner {
    secret: Vec<u8>,
    ttl_secs: i64,
    clock: Arc<dyn Clock>,
}

impl CustomTokenSigner {
    pub fn new(secret: impl Into<Vec<u8>>, ttl_secs: i64, clock: Arc<dyn Clock>) -> Self {
        Self { secret: secret.into(), ttl_secs, clock }
    }

    pub fn sign(&self, uid: &FarmerId) -> Result<BearerToken> {
        let iat = self.clock.now().timestamp();
        let claims = TokenClaims {
            uid: uid.as_str().to_string(),
            iat,
            exp: iat + self.ttl_secs,
        };

        let claims_json = serde_json::to_vec(&claims)
            .map_err(|e| internal_err(format!("Token claims serialization failed: {e}")))?;

        let signing_input = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(TOKEN_HEADER),
            URL_SAFE_NO_PAD.encode(claims_json)
        );
        let mac = self.mac(signing_input.as_bytes())?;
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(BearerToken::from_raw(format!("{signing_input}.{signature}")))
    }

    /// Vérifie signature et expiration, renvoie les claims
    pub fn verify(&self, token: &str) -> Result<TokenClaims> {
        let invalid = |reason: &str| DomainError::Validation {
            field: "token",
            reason: reason.to_string(),
        };

        let (signing_input, signature) = token
            .rsplit_once('.')
            .ok_or_else(|| invalid("malformed token"))?;
        let (_, claims_b64) = signing_input
            .split_once('.')
            .ok_or_else(|| invalid("malformed token"))?;

        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| invalid("malformed signature"))?;
        self.mac(signing_input.as_bytes())?
            .verify_slice(&signature)
            .map_err(|_| invalid("bad signature"))?;

        let claims_json = URL_SAFE_NO_PAD
            .decode(claims_b64)
            .map_err(|_| invalid("malformed claims"))?;
        let claims: TokenClaims =
            serde_json::from_slice(&claims_json).map_err(|_| invalid("malformed claims"))?;

        if claims.exp <= self.clock.now().timestamp() {
            return Err(invalid("token expired"));
        }

        Ok(claims)
    }

    fn mac(&self, input: &[u8]) -> Result<HmacSha256> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| internal_err(format!("Invalid token secret: {e}")))?;
        mac.update(input);
        Ok(mac)
    }
}
