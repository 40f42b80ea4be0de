//! Shared-secret access gate

use crate::config::FileAccessConfig;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info, warn};
use valuecards_application::{AccessDecision, AccessGate};

#[derive(Debug, Default)]
struct GateState {
    attempts: u32,
    allowed: bool,
}

/// Compares a supplied secret with one read from the environment.
///
/// Attempts are bounded; once the bound is reached the gate stays locked for
/// the rest of the process. A gate without a configured secret never opens.
pub struct SharedSecretGate {
    secret: Option<String>,
    max_attempts: u32,
    state: Mutex<GateState>,
}

impl SharedSecretGate {
    pub fn new(secret: Option<String>, max_attempts: u32) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
            max_attempts,
            state: Mutex::new(GateState::default()),
        }
    }

    /// Read the secret from the environment variable named in config
    pub fn from_config(config: &FileAccessConfig) -> Self {
        let secret = std::env::var(&config.secret_env).ok();
        if secret.is_none() {
            debug!("{} is not set", config.secret_env);
        }
        Self::new(secret, config.max_attempts)
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, GateState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Byte comparison that looks at every byte regardless of where the first
/// mismatch is
fn secrets_match(expected: &str, supplied: &str) -> bool {
    let (a, b) = (expected.as_bytes(), supplied.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

impl AccessGate for SharedSecretGate {
    fn verify(&self, secret: &str) -> AccessDecision {
        let mut state = self.state();
        if state.allowed {
            return AccessDecision::Allowed;
        }
        if state.attempts >= self.max_attempts {
            return AccessDecision::Locked {
                attempts: state.attempts,
            };
        }

        state.attempts += 1;
        if !self.is_configured() {
            warn!("No access secret is configured; enhancement cannot be unlocked");
        }
        let matched = self
            .secret
            .as_deref()
            .is_some_and(|expected| secrets_match(expected, secret.trim()));

        if matched {
            info!("Access gate unlocked after {} attempt(s)", state.attempts);
            state.allowed = true;
            return AccessDecision::Allowed;
        }

        let remaining = self.max_attempts - state.attempts;
        warn!("Access denied ({} attempt(s) left)", remaining);
        if remaining == 0 {
            AccessDecision::Locked {
                attempts: state.attempts,
            }
        } else {
            AccessDecision::Denied {
                attempts: state.attempts,
                remaining,
            }
        }
    }

    fn is_allowed(&self) -> bool {
        self.state().allowed
    }

    fn attempts(&self) -> u32 {
        self.state().attempts
    }

    fn remaining_attempts(&self) -> u32 {
        self.max_attempts.saturating_sub(self.state().attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_secret_opens_gate() {
        let gate = SharedSecretGate::new(Some("open sesame".into()), 3);
        assert!(!gate.is_allowed());
        assert_eq!(gate.verify("open sesame"), AccessDecision::Allowed);
        assert!(gate.is_allowed());
        assert_eq!(gate.attempts(), 1);
    }

    #[test]
    fn test_wrong_secret_counts_down_then_locks() {
        let gate = SharedSecretGate::new(Some("open sesame".into()), 2);
        assert_eq!(
            gate.verify("nope"),
            AccessDecision::Denied {
                attempts: 1,
                remaining: 1
            }
        );
        assert_eq!(gate.verify("nope"), AccessDecision::Locked { attempts: 2 });
        // Locked: even the right secret is refused and not counted
        assert_eq!(gate.verify("open sesame"), AccessDecision::Locked { attempts: 2 });
        assert!(!gate.is_allowed());
        assert_eq!(gate.remaining_attempts(), 0);
    }

    #[test]
    fn test_unconfigured_gate_never_opens() {
        let gate = SharedSecretGate::new(None, 3);
        assert!(!gate.is_configured());
        assert!(!gate.verify("").is_allowed());

        let empty = SharedSecretGate::new(Some(String::new()), 3);
        assert!(!empty.verify("").is_allowed());
    }

    #[test]
    fn test_missing_env_secret_denies_on_verify() {
        let config = FileAccessConfig {
            secret_env: "VALUE_CARDS_TEST_SECRET_THAT_IS_NEVER_SET".to_string(),
            max_attempts: 2,
            ..FileAccessConfig::default()
        };
        let gate = SharedSecretGate::from_config(&config);
        assert!(!gate.is_configured());
        assert_eq!(gate.attempts(), 0, "building the gate verifies nothing");

        assert_eq!(
            gate.verify("anything"),
            AccessDecision::Denied {
                attempts: 1,
                remaining: 1
            }
        );
    }

    #[test]
    fn test_secrets_match() {
        assert!(secrets_match("abc", "abc"));
        assert!(!secrets_match("abc", "abd"));
        assert!(!secrets_match("abc", "abcd"));
    }
}
