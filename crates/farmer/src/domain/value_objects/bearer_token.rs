// crates/farmer/src/domain/value_objects/bearer_token.rs

use serde::Serialize;

/// Jeton court renvoyé au client ; jamais persisté.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn from_raw(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

// Le jeton ne doit pas fuiter dans les logs
impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken(***)")
    }
}
