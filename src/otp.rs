//! TOTP code generation
//!
//! Computes the current RFC 6238 code (SHA-1, 6 digits, 30-second step)
//! from the base32 secret stored in the credential file. The secret is
//! decoded but otherwise not validated; most authenticator providers hand
//! out 16-character secrets, below the 128-bit minimum the strict RFC
//! constructor enforces, so the unchecked constructor is used.

use thiserror::Error;
use totp_rs::{Algorithm, Secret, TOTP};

#[derive(Error, Debug)]
pub enum OtpError {
    #[error("Failed to decode OTP secret as base32: {0:?}")]
    Secret(totp_rs::SecretParseError),
    #[error("System clock error: {0}")]
    Clock(#[from] std::time::SystemTimeError),
}

/// Compute the TOTP code for the current time step
pub fn current_code(secret: &str) -> Result<String, OtpError> {
    let totp = build(secret)?;
    Ok(totp.generate_current()?)
}

/// Compute the TOTP code for a fixed Unix timestamp (for testing)
pub fn code_at(secret: &str, unix_time: u64) -> Result<String, OtpError> {
    let totp = build(secret)?;
    Ok(totp.generate(unix_time))
}

fn build(secret: &str) -> Result<TOTP, OtpError> {
    let key = Secret::Encoded(secret.trim().to_string())
        .to_bytes()
        .map_err(OtpError::Secret)?;
    Ok(TOTP::new_unchecked(Algorithm::SHA1, 6, 1, 30, key))
}
