use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Registered time claims the issuer owns; client-supplied copies are dropped.
pub const RESERVED_CLAIMS: [&str; 3] = ["exp", "iat", "nbf"];

/// Attributes asserted by the client at login. Only `email` is required;
/// anything else rides along in the token untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityClaim {
    pub email: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl IdentityClaim {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into(), attributes: Map::new() }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub(crate) fn strip_reserved(&mut self) {
        for key in RESERVED_CLAIMS {
            self.attributes.remove(key);
        }
    }
}

/// Token payload: the identity plus the issuer's validity window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(flatten)]
    pub identity: IdentityClaim,
    pub iat: i64,
    pub exp: i64,
}

/// Verified identity for the lifetime of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    pub identity: IdentityClaim,
    pub issued_at: i64,
    pub expires_at: i64,
}

impl SessionContext {
    pub fn email(&self) -> &str {
        &self.identity.email
    }
}

impl From<TokenClaims> for SessionContext {
    fn from(c: TokenClaims) -> Self {
        Self { identity: c.identity, issued_at: c.iat, expires_at: c.exp }
    }
}
