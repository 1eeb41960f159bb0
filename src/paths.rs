//! Fixed filesystem locations for one VPN session bootstrap
//!
//! Everything the program reads or writes lives at a well-known path:
//!
//! | Path | Role |
//! |------|------|
//! | `~/.vpn-credentials` | long-term secret + VPN credentials |
//! | `~/.client.ovpn` | generated OpenVPN client profile |
//! | `~/.vpn-auth` | generated username/password+OTP file |
//! | `/tmp/otp_vpn_auto_setup.sh` | one-shot self-update script |
//! | `~/bin/jump_on.sh` | user-provided connect script |

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathsError {
    #[error("could not determine the user's home directory")]
    NoHomeDir,
}

/// Resolved output locations for a single run
#[derive(Debug, Clone)]
pub struct SessionPaths {
    /// The user's home directory
    pub home: PathBuf,
    /// Credential store, created with placeholders on first run
    pub credentials: PathBuf,
    /// Generated OpenVPN client profile
    pub client_profile: PathBuf,
    /// Generated auth-user-pass file
    pub auth_file: PathBuf,
    /// One-shot setup script, removes itself after running
    pub setup_script: PathBuf,
    /// Pre-existing user script that brings the tunnel up
    pub jump_script: PathBuf,
}

impl SessionPaths {
    /// Resolve all paths from the current user's home directory
    pub fn discover() -> Result<Self, PathsError> {
        let home = dirs::home_dir().ok_or(PathsError::NoHomeDir)?;
        Ok(Self::for_home(home))
    }

    /// Resolve all paths from an explicit home directory (for testing)
    pub fn for_home(home: PathBuf) -> Self {
        Self {
            credentials: home.join(".vpn-credentials"),
            client_profile: home.join(".client.ovpn"),
            auth_file: home.join(".vpn-auth"),
            setup_script: PathBuf::from("/tmp/otp_vpn_auto_setup.sh"),
            jump_script: home.join("bin").join("jump_on.sh"),
            home,
        }
    }
}
