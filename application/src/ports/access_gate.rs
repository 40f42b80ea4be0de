//! Access gate port
//!
//! A shared-secret check in front of the enhancement path. The gate keeps
//! its own attempt counter; callers only ask whether access is granted.

/// Result of one verification attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed,
    /// Wrong secret; `remaining` attempts are left
    Denied { attempts: u32, remaining: u32 },
    /// No attempts left; the gate stays closed for this session
    Locked { attempts: u32 },
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allowed)
    }
}

/// Shared-secret gate protecting the enhancement call
pub trait AccessGate: Send + Sync {
    /// Check a supplied secret, counting the attempt
    fn verify(&self, secret: &str) -> AccessDecision;

    /// Whether a previous `verify` succeeded
    fn is_allowed(&self) -> bool;

    /// Attempts made so far
    fn attempts(&self) -> u32;

    /// Attempts left before the gate locks
    fn remaining_attempts(&self) -> u32;
}

/// Gate that is always open (for setups without a shared secret)
pub struct AlwaysAllow;

impl AccessGate for AlwaysAllow {
    fn verify(&self, _secret: &str) -> AccessDecision {
        AccessDecision::Allowed
    }

    fn is_allowed(&self) -> bool {
        true
    }

    fn attempts(&self) -> u32 {
        0
    }

    fn remaining_attempts(&self) -> u32 {
        u32::MAX
    }
}
