use std::collections::HashSet;

use tracing::debug;

use super::claims::SessionContext;
use super::errors::AuthError;

/// Allow only when the requested owner is exactly the session's email.
pub fn authorize(requested: &str, session: &SessionContext) -> Result<(), AuthError> {
    if requested == session.email() {
        Ok(())
    } else {
        debug!(requested, caller = session.email(), "owner_mismatch");
        Err(AuthError::Forbidden)
    }
}

/// Which bookings a listing may return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerScope {
    Owner(String),
    All,
}

/// Decides what an unfiltered listing means: the caller's own records,
/// or everything for configured admins.
#[derive(Debug, Clone, Default)]
pub struct ListPolicy {
    admin_emails: HashSet<String>,
}

impl ListPolicy {
    pub fn with_admins<I, S>(admins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { admin_emails: admins.into_iter().map(Into::into).collect() }
    }

    pub fn is_admin(&self, email: &str) -> bool {
        self.admin_emails.contains(email)
    }

    /// An empty filter counts as no filter; anything else is compared verbatim.
    pub fn resolve(&self, requested: Option<&str>, session: &SessionContext) -> Result<OwnerScope, AuthError> {
        match requested.filter(|r| !r.is_empty()) {
            Some(owner) => {
                authorize(owner, session)?;
                Ok(OwnerScope::Owner(owner.to_string()))
            }
            None if self.is_admin(session.email()) => Ok(OwnerScope::All),
            None => Ok(OwnerScope::Owner(session.email().to_string())),
        }
    }
}
