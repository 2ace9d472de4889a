use std::sync::Arc;

use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, Validation};
use tracing::debug;

use super::claims::{SessionContext, TokenClaims};
use super::errors::{AuthError, RejectReason};
use super::token::SigningKeys;

/// Per-request credential check: signature first, then `now < exp`.
///
/// Each call is independent; there is no revocation list, so a token stays
/// valid until its expiry even after the client logged out.
#[derive(Clone, Debug)]
pub struct AccessGuard {
    keys: Arc<SigningKeys>,
    validation: Validation,
}

impl AccessGuard {
    pub fn new(keys: Arc<SigningKeys>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked below against an explicit clock with no leeway.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp"]);
        Self { keys, validation }
    }

    pub fn verify(&self, credential: Option<&str>) -> Result<SessionContext, AuthError> {
        self.verify_at(credential, chrono::Utc::now().timestamp())
    }

    /// Verify as if the clock read `now` (unix seconds).
    pub fn verify_at(&self, credential: Option<&str>, now: i64) -> Result<SessionContext, AuthError> {
        let token = match credential.map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => return Err(AuthError::Unauthenticated(RejectReason::Missing)),
        };

        let claims = decode::<TokenClaims>(token, &self.keys.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let reason = match e.kind() {
                    ErrorKind::InvalidSignature => RejectReason::BadSignature,
                    ErrorKind::ExpiredSignature => RejectReason::Expired,
                    _ => RejectReason::Malformed,
                };
                debug!(%reason, err = %e, "token_rejected");
                AuthError::Unauthenticated(reason)
            })?;

        if now >= claims.exp {
            debug!(exp = claims.exp, now, "token_expired");
            return Err(AuthError::Unauthenticated(RejectReason::Expired));
        }
        Ok(SessionContext::from(claims))
    }
}
