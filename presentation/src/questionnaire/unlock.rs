//! Reading the access secret from the terminal without echo

use crate::ConsoleFormatter;
use std::io;
use valuecards_application::{AccessDecision, AccessGate};

const SECRET_PROMPT: &str = "Access secret: ";

/// Read one secret from the terminal. Nothing typed is echoed.
pub fn read_secret() -> io::Result<String> {
    rpassword::prompt_password(SECRET_PROMPT).map(|secret| secret.trim().to_string())
}

/// Ask for the access secret until the gate opens or locks.
///
/// Returns whether enhancement is allowed afterwards.
pub fn prompt_unlock(gate: &dyn AccessGate) -> io::Result<bool> {
    if gate.is_allowed() {
        return Ok(true);
    }

    while gate.remaining_attempts() > 0 {
        let secret = match read_secret() {
            Ok(secret) => secret,
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => return Ok(false),
            Err(err) => return Err(err),
        };
        let decision = gate.verify(&secret);
        eprintln!("{}", ConsoleFormatter::format_access(decision));
        match decision {
            AccessDecision::Allowed => return Ok(true),
            AccessDecision::Locked { .. } => return Ok(false),
            AccessDecision::Denied { .. } => {}
        }
    }
    Ok(false)
}
