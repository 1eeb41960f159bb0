//! Generated session files
//!
//! Renders and writes the three artifacts consumed outside this program:
//!
//! 1. Auth file - username on the first line, password immediately followed
//!    by the current OTP code on the second. The VPN endpoint expects
//!    password and token as one field, so there is no separator.
//! 2. OpenVPN client profile - a fixed profile with the CA certificate
//!    inline, parameterized only by the home directory and the auth file
//!    path.
//! 3. Setup script - a one-shot shell script that refreshes the
//!    installation and removes itself.
//!
//! The profile and script texts are embedded resources; rendering is a
//! plain placeholder substitution so repeated runs produce byte-identical
//! output for the same home directory. Writes are full overwrites of the
//! previous run's files.

use crate::config::Credentials;
use crate::paths::SessionPaths;
use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

const CLIENT_PROFILE: &str = include_str!("../templates/client.ovpn");
const SETUP_SCRIPT: &str = include_str!("../templates/setup.sh");

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to write {}: {source}", path.display())]
    WriteError { path: PathBuf, source: io::Error },
    #[error("Failed to set mode on {}: {source}", path.display())]
    ChmodError { path: PathBuf, source: io::Error },
}

/// Render the auth-user-pass file content
///
/// Password and OTP code are concatenated with no separator.
pub fn render_auth_file(creds: &Credentials, otp_code: &str) -> String {
    format!("{}\n{}{}\n", creds.vpn_user, creds.vpn_password, otp_code)
}

/// Render the OpenVPN client profile
pub fn render_client_profile(home: &Path, auth_file: &Path) -> String {
    CLIENT_PROFILE
        .replace("{home}", &home.display().to_string())
        .replace("{auth_file}", &auth_file.display().to_string())
}

/// Render the one-shot setup script
///
/// The script path appears in its own self-cleanup line.
pub fn render_setup_script(script_path: &Path) -> String {
    SETUP_SCRIPT.replace("{setup_script}", &script_path.display().to_string())
}

/// Write the auth file, client profile and setup script
pub fn materialize(
    paths: &SessionPaths,
    creds: &Credentials,
    otp_code: &str,
) -> Result<(), ProfileError> {
    write(&paths.auth_file, &render_auth_file(creds, otp_code))?;
    write(
        &paths.client_profile,
        &render_client_profile(&paths.home, &paths.auth_file),
    )?;
    write(&paths.setup_script, &render_setup_script(&paths.setup_script))?;
    Ok(())
}

/// Restrict modes on the generated files and the credential store
///
/// Setup script 0755, auth file 0600, credential file 0640. Covers the
/// credential template left world-readable by a first-run bootstrap.
pub fn restrict_modes(paths: &SessionPaths) -> Result<(), ProfileError> {
    chmod(&paths.setup_script, 0o755)?;
    chmod(&paths.auth_file, 0o600)?;
    chmod(&paths.credentials, 0o640)?;
    Ok(())
}

fn write(path: &Path, content: &str) -> Result<(), ProfileError> {
    debug!("Writing {}", path.display());
    fs::write(path, content).map_err(|source| ProfileError::WriteError {
        path: path.to_path_buf(),
        source,
    })
}

fn chmod(path: &Path, mode: u32) -> Result<(), ProfileError> {
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(|source| {
        ProfileError::ChmodError {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_creds() -> Credentials {
        Credentials {
            otp_secret: "GEZDGNBVGY3TQOJQ".to_string(),
            vpn_user: "alice.vpn".to_string(),
            vpn_password: "hunter2".to_string(),
        }
    }

    fn test_paths(temp_dir: &TempDir) -> SessionPaths {
        let home = temp_dir.path().to_path_buf();
        SessionPaths {
            credentials: home.join(".vpn-credentials"),
            client_profile: home.join(".client.ovpn"),
            auth_file: home.join(".vpn-auth"),
            setup_script: home.join("otp_vpn_auto_setup.sh"),
            jump_script: home.join("bin").join("jump_on.sh"),
            home,
        }
    }

    #[test]
    fn test_auth_file_concatenates_password_and_code() {
        let content = render_auth_file(&test_creds(), "287082");
        assert_eq!(content, "alice.vpn\nhunter2287082\n");
    }

    #[test]
    fn test_auth_file_with_computed_code() {
        let creds = Credentials {
            // RFC 6238 test secret; at t=59 the 6-digit code is 287082
            otp_secret: "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ".to_string(),
            vpn_user: "alice.vpn".to_string(),
            vpn_password: "hunter2".to_string(),
        };
        let code = crate::otp::code_at(&creds.otp_secret, 59).unwrap();

        assert_eq!(render_auth_file(&creds, &code), "alice.vpn\nhunter2287082\n");
    }

    #[test]
    fn test_profile_substitutes_auth_file_path() {
        let content = render_client_profile(
            Path::new("/home/alice"),
            Path::new("/home/alice/.vpn-auth"),
        );

        assert!(content.contains("auth-user-pass /home/alice/.vpn-auth\n"));
        assert!(content.contains("#log /home/alice/jump.log\n"));
        assert!(!content.contains("{home}"));
        assert!(!content.contains("{auth_file}"));
    }

    #[test]
    fn test_profile_embeds_ca_certificate() {
        let content =
            render_client_profile(Path::new("/home/alice"), Path::new("/home/alice/.vpn-auth"));

        assert!(content.contains("<ca>\n-----BEGIN CERTIFICATE-----"));
        assert!(content.contains("-----END CERTIFICATE-----\n</ca>"));
        assert!(content.contains("remote 83.97.92.126 1194"));
    }

    #[test]
    fn test_profile_is_deterministic() {
        let home = Path::new("/home/alice");
        let auth = Path::new("/home/alice/.vpn-auth");
        assert_eq!(
            render_client_profile(home, auth),
            render_client_profile(home, auth)
        );
    }

    #[test]
    fn test_setup_script_names_itself() {
        let content = render_setup_script(Path::new("/tmp/otp_vpn_auto_setup.sh"));

        assert!(content.starts_with("#!/bin/bash\n"));
        assert!(content.contains("rm -rf $(pwd) /tmp/otp_vpn_auto_setup.sh"));
    }

    #[test]
    fn test_materialize_writes_three_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = test_paths(&temp_dir);

        materialize(&paths, &test_creds(), "287082").unwrap();

        let auth = fs::read_to_string(&paths.auth_file).unwrap();
        assert_eq!(auth, "alice.vpn\nhunter2287082\n");

        let profile = fs::read_to_string(&paths.client_profile).unwrap();
        assert!(profile.contains(&format!("auth-user-pass {}", paths.auth_file.display())));

        let script = fs::read_to_string(&paths.setup_script).unwrap();
        assert!(script.contains(&paths.setup_script.display().to_string()));
    }

    #[test]
    fn test_materialize_overwrites_previous_run() {
        let temp_dir = TempDir::new().unwrap();
        let paths = test_paths(&temp_dir);

        materialize(&paths, &test_creds(), "111111").unwrap();
        materialize(&paths, &test_creds(), "222222").unwrap();

        let auth = fs::read_to_string(&paths.auth_file).unwrap();
        assert_eq!(auth, "alice.vpn\nhunter2222222\n");
    }

    #[test]
    fn test_restrict_modes() {
        let temp_dir = TempDir::new().unwrap();
        let paths = test_paths(&temp_dir);
        fs::write(&paths.credentials, "placeholder").unwrap();

        materialize(&paths, &test_creds(), "287082").unwrap();
        restrict_modes(&paths).unwrap();

        let mode = |path: &Path| fs::metadata(path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&paths.setup_script), 0o755);
        assert_eq!(mode(&paths.auth_file), 0o600);
        assert_eq!(mode(&paths.credentials), 0o640);
    }

    #[test]
    fn test_restrict_modes_fails_on_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = test_paths(&temp_dir);

        let result = restrict_modes(&paths);

        assert!(matches!(
            result.unwrap_err(),
            ProfileError::ChmodError { .. }
        ));
    }

    #[test]
    fn test_write_error_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let missing_dir = temp_dir.path().join("no-such-dir").join("out");

        let err = write(&missing_dir, "content").unwrap_err();

        assert!(err.to_string().contains("no-such-dir"));
    }
}
