//! Credential store handling
//!
//! Long-term credentials live in `~/.vpn-credentials`: a TOML file with a
//! single `[otp-vpn]` table holding the OTP secret, the VPN username and
//! the VPN password. On first run a commented placeholder template is
//! written instead and the program stops so the user can fill it in.
//!
//! Values are taken as-is. Nothing here checks that the secret is valid
//! base32 or that the placeholders were replaced; bad values surface later
//! when the OTP is computed or the VPN client reads the auth file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

const TEMPLATE: &str = include_str!("../templates/vpn-credentials.toml");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read credential file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse credential file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Credentials loaded from the `[otp-vpn]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub otp_secret: String,
    pub vpn_user: String,
    pub vpn_password: String,
}

/// On-disk layout of the credential store
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CredentialsFile {
    #[serde(rename = "otp-vpn")]
    otp_vpn: Credentials,
}

impl Credentials {
    /// Load credentials from the store
    ///
    /// A missing `[otp-vpn]` table or missing key is a parse error; there
    /// is no fallback or default for credentials.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let file: CredentialsFile = toml::from_str(&content)?;
        Ok(file.otp_vpn)
    }

    /// Write the placeholder template for the user to edit
    ///
    /// The template keeps default file modes here; the restrictive 0640
    /// mode is applied by the permission phase of the next successful run.
    pub fn write_template(path: &Path) -> Result<(), ConfigError> {
        std::fs::write(path, TEMPLATE)?;
        Ok(())
    }
}
