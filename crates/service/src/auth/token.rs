use std::fmt;
use std::sync::Arc;

use jsonwebtoken::{encode, Algorithm, DecodingKey, EncodingKey, Header};
use tracing::{debug, instrument};

use super::claims::{IdentityClaim, TokenClaims};
use super::errors::AuthError;

pub const DEFAULT_TTL_SECS: u64 = 3600;

/// HMAC key pair derived from the server secret. Built once at startup.
#[derive(Clone)]
pub struct SigningKeys {
    pub(crate) encoding: EncodingKey,
    pub(crate) decoding: DecodingKey,
}

impl SigningKeys {
    pub fn from_secret(secret: &[u8]) -> Result<Self, AuthError> {
        if secret.iter().all(u8::is_ascii_whitespace) {
            return Err(AuthError::MissingSecret);
        }
        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        })
    }
}

impl fmt::Debug for SigningKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKeys(<redacted>)")
    }
}

/// A freshly minted credential and the window it is good for.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub issued_at: i64,
    pub expires_at: i64,
}

impl IssuedToken {
    pub fn max_age_secs(&self) -> i64 {
        self.expires_at - self.issued_at
    }
}

/// Mints HS256 session tokens with a fixed lifetime.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use service::auth::{AccessGuard, IdentityClaim, SigningKeys, TokenIssuer};
/// let keys = Arc::new(SigningKeys::from_secret(b"secret").unwrap());
/// let issuer = TokenIssuer::new(keys.clone(), 3600);
/// let issued = issuer.issue(IdentityClaim::new("a@x.com")).unwrap();
/// let session = AccessGuard::new(keys).verify(Some(&issued.token)).unwrap();
/// assert_eq!(session.email(), "a@x.com");
/// ```
#[derive(Clone, Debug)]
pub struct TokenIssuer {
    keys: Arc<SigningKeys>,
    ttl_secs: u64,
}

impl TokenIssuer {
    pub fn new(keys: Arc<SigningKeys>, ttl_secs: u64) -> Self {
        Self { keys, ttl_secs }
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    pub fn issue(&self, claim: IdentityClaim) -> Result<IssuedToken, AuthError> {
        self.issue_at(claim, chrono::Utc::now().timestamp())
    }

    /// Issue as if the clock read `now` (unix seconds).
    #[instrument(skip(self, claim), fields(email = %claim.email))]
    pub fn issue_at(&self, mut claim: IdentityClaim, now: i64) -> Result<IssuedToken, AuthError> {
        claim.email = claim.email.trim().to_string();
        if claim.email.is_empty() {
            return Err(AuthError::InvalidClaim("email must not be empty".into()));
        }
        claim.strip_reserved();

        let ttl = i64::try_from(self.ttl_secs).map_err(|_| AuthError::TokenError("ttl out of range".into()))?;
        let exp = now.checked_add(ttl).ok_or_else(|| AuthError::TokenError("expiry out of range".into()))?;
        let claims = TokenClaims { identity: claim, iat: now, exp };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(|e| AuthError::TokenError(e.to_string()))?;
        debug!(exp, "token_issued");
        Ok(IssuedToken { token, issued_at: now, expires_at: exp })
    }
}
