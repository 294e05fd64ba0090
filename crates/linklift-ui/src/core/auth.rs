//! Session primitives shared across the UI.
//!
//! # Design
//! - Keep session state as simple data so callers can store/clear it
//!   without side effects.
//! - Treat an empty token as unauthenticated at the call site.
//! - Leave header encoding to the transport client to keep core DOM-free.

/// Outcome of the mount-time session validation gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// The validation call is in flight (or has not started yet).
    #[default]
    Validating,
    /// The stored token was accepted by the backend.
    Valid,
    /// No token exists, or the backend rejected it.
    Invalid,
}

/// A bearer token persisted in client storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw token, rejecting blank values.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// The raw token value for header encoding.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionPhase, SessionToken};

    #[test]
    fn blank_tokens_are_rejected() {
        assert!(SessionToken::new("").is_none());
        assert!(SessionToken::new("   ").is_none());
        let token = SessionToken::new("jwt-abc").unwrap();
        assert_eq!(token.as_str(), "jwt-abc");
    }

    #[test]
    fn guard_starts_in_validating() {
        assert_eq!(SessionPhase::default(), SessionPhase::Validating);
    }
}
