//! # Admin Session Gate
//!
//! Decides whether admin commands may run.
//!
//! **This is a demo placeholder, not a security boundary.** The credentials
//! are a hardcoded literal pair, nothing is hashed, and there is no token,
//! expiry or per-user identity. Anyone with access to the process can read
//! or flip the flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Demo admin username.
pub const DEMO_ADMIN_USERNAME: &str = "admin";

/// Demo admin password.
pub const DEMO_ADMIN_PASSWORD: &str = "admin123";

/// Whether the admin panel is unlocked for this session.
#[derive(Debug, Clone, Default)]
pub struct AdminSession {
    authenticated: Arc<AtomicBool>,
}

impl AdminSession {
    pub fn new() -> Self {
        AdminSession::default()
    }

    /// Unlocks the session when the pair matches the demo credentials.
    ///
    /// A failed attempt leaves an existing session untouched.
    pub fn login(&self, username: &str, password: &str) -> bool {
        let ok = username == DEMO_ADMIN_USERNAME && password == DEMO_ADMIN_PASSWORD;
        if ok {
            self.authenticated.store(true, Ordering::SeqCst);
        }
        ok
    }

    pub fn logout(&self) {
        self.authenticated.store(false, Ordering::SeqCst);
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_exact_pair() {
        let session = AdminSession::new();
        assert!(!session.is_authenticated());

        assert!(!session.login("admin", "wrong"));
        assert!(!session.login("Admin", "admin123"));
        assert!(!session.is_authenticated());

        assert!(session.login("admin", "admin123"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_logout_and_shared_handles() {
        let session = AdminSession::new();
        let other = session.clone();
        session.login(DEMO_ADMIN_USERNAME, DEMO_ADMIN_PASSWORD);
        assert!(other.is_authenticated());

        other.logout();
        assert!(!session.is_authenticated());
    }
}
