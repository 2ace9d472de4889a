use std::fmt;

use thiserror::Error;

/// Why a credential was refused. Only ever logged; responses stay generic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Missing,
    Expired,
    BadSignature,
    Malformed,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RejectReason::Missing => "missing",
            RejectReason::Expired => "expired",
            RejectReason::BadSignature => "bad_signature",
            RejectReason::Malformed => "malformed",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("unauthenticated ({0})")]
    Unauthenticated(RejectReason),
    #[error("requested owner does not match the session")]
    Forbidden,
    #[error("signing secret is not configured")]
    MissingSecret,
    #[error("invalid identity claim: {0}")]
    InvalidClaim(String),
    #[error("token error: {0}")]
    TokenError(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::Unauthenticated(_) => 1001,
            AuthError::Forbidden => 1002,
            AuthError::InvalidClaim(_) => 1003,
            AuthError::MissingSecret => 1101,
            AuthError::TokenError(_) => 1102,
        }
    }
}
