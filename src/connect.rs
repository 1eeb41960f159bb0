//! Session bootstrap orchestration
//!
//! One linear pass per invocation:
//!
//! 1. Check that the required external tools are on PATH
//! 2. Load the credential store, or write the template on first run
//! 3. Compute the current TOTP code
//! 4. Write the auth file, client profile and setup script
//! 5. Restrict file modes
//! 6. Spawn the setup script and the jump script, without waiting
//!
//! Steps 1 and 2 can end the run early; both are ordinary outcomes, not
//! errors, and happen before anything is written besides the credential
//! template. Everything after step 2 fails the run on the first error.

use crate::config::{ConfigError, Credentials};
use crate::launch::{self, LaunchError};
use crate::otp::{self, OtpError};
use crate::paths::SessionPaths;
use crate::profile::{self, ProfileError};
use crate::tools;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("Config error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("OTP error: {0}")]
    OtpError(#[from] OtpError),
    #[error("Profile error: {0}")]
    ProfileError(#[from] ProfileError),
    #[error("Launch error: {0}")]
    LaunchError(#[from] LaunchError),
}

/// How a bootstrap pass ended
#[derive(Debug)]
pub enum Outcome {
    /// A required tool is not on PATH; nothing was done
    MissingTool(String),
    /// First run: the credential template was written for the user to edit
    CredentialsCreated(PathBuf),
    /// Files written, permissions set, both scripts spawned
    Launched,
}

/// Run one bootstrap pass with the default tool requirements
pub fn run(paths: &SessionPaths) -> Result<Outcome, ConnectError> {
    run_with_tools(paths, tools::REQUIRED_TOOLS)
}

/// Run one bootstrap pass against an explicit tool list (for testing)
pub fn run_with_tools(
    paths: &SessionPaths,
    required_tools: &[&str],
) -> Result<Outcome, ConnectError> {
    if let Some(tool) = tools::find_missing(required_tools) {
        debug!("Required tool not found: {}", tool);
        return Ok(Outcome::MissingTool(tool));
    }

    if !paths.credentials.is_file() {
        info!("No credential file, writing template");
        Credentials::write_template(&paths.credentials)?;
        return Ok(Outcome::CredentialsCreated(paths.credentials.clone()));
    }

    let creds = Credentials::load(&paths.credentials)?;
    debug!("Loaded credentials for {}", creds.vpn_user);

    let code = otp::current_code(&creds.otp_secret)?;

    profile::materialize(paths, &creds, &code)?;
    profile::restrict_modes(paths)?;
    info!(
        "Wrote {} and {}",
        paths.auth_file.display(),
        paths.client_profile.display()
    );

    launch::spawn_script(&paths.setup_script)?;
    launch::spawn_script(&paths.jump_script)?;

    Ok(Outcome::Launched)
}
