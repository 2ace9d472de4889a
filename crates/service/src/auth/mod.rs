//! Auth module: token issuing, request verification and ownership checks.
//!
//! Stateless by construction: nothing here touches storage, and the only
//! shared value is the read-only signing key.

pub mod claims;
pub mod errors;
pub mod guard;
pub mod ownership;
pub mod token;

pub use claims::{IdentityClaim, SessionContext};
pub use errors::{AuthError, RejectReason};
pub use guard::AccessGuard;
pub use ownership::{authorize, ListPolicy, OwnerScope};
pub use token::{IssuedToken, SigningKeys, TokenIssuer};
