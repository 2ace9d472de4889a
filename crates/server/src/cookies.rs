//! Attributes of the `token` session cookie.

use axum_extra::extract::cookie::{Cookie, SameSite};
use configs::Environment;
use service::auth::IssuedToken;

pub const SESSION_COOKIE: &str = "token";

/// Production serves the SPA cross-site over TLS, so the cookie needs
/// `Secure` + `SameSite=None`; local development runs same-site over http.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookiePolicy {
    pub secure: bool,
    pub same_site: SameSite,
}

impl CookiePolicy {
    pub fn for_environment(env: Environment) -> Self {
        if env.is_production() {
            Self { secure: true, same_site: SameSite::None }
        } else {
            Self { secure: false, same_site: SameSite::Strict }
        }
    }

    pub fn session_cookie(&self, issued: &IssuedToken) -> Cookie<'static> {
        self.build(issued.token.clone(), issued.max_age_secs())
    }

    /// Same name and attributes as the session cookie, empty and already expired.
    pub fn cleared_cookie(&self) -> Cookie<'static> {
        self.build(String::new(), 0)
    }

    fn build(&self, value: String, max_age_secs: i64) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, value))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(self.same_site)
            .max_age(time::Duration::seconds(max_age_secs))
            .build()
    }
}
