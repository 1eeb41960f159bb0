//! Fire-and-forget process launching
//!
//! The final phase hands the session over to two shell scripts: the
//! freshly written setup script and the user's `~/bin/jump_on.sh`. Both
//! are started through `sh -c` and never awaited; their combined output is
//! piped but never read, and their exit status is nobody's business but
//! their own. A target script that does not exist still spawns cleanly at
//! this level - the shell exits 127 with no one watching.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Failed to spawn {}: {source}", script.display())]
    SpawnError {
        script: PathBuf,
        source: std::io::Error,
    },
}

/// Spawn a script through the shell without waiting for it
pub fn spawn_script(script: &Path) -> Result<(), LaunchError> {
    debug!("Spawning {}", script.display());
    Command::new("sh")
        .arg("-c")
        .arg(script)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map(drop)
        .map_err(|source| LaunchError::SpawnError {
            script: script.to_path_buf(),
            source,
        })
}
