//! otp-vpn - OpenVPN session bootstrap with TOTP one-time passwords
//!
//! This crate prepares everything an OpenVPN session with token-based
//! authentication needs: it combines the stored VPN credentials with the
//! current TOTP code into an auth file, regenerates the client profile,
//! and hands off to the external scripts that bring the tunnel up.
//!
//! # Architecture
//!
//! - `tools`: prerequisite checks for external executables
//! - `config`: credential store handling (TOML, first-run template)
//! - `otp`: TOTP code generation (RFC 6238)
//! - `paths`: fixed output locations under the user's home
//! - `profile`: auth file, client profile and setup script generation
//! - `launch`: fire-and-forget process spawning
//! - `connect`: the linear bootstrap pass tying it all together
//!
//! # Usage
//!
//! ```bash
//! otp-vpn
//! ```
//!
//! The first invocation writes `~/.vpn-credentials` with placeholders and
//! stops; fill it in and run again.

pub mod config;
pub mod connect;
pub mod launch;
pub mod otp;
pub mod paths;
pub mod profile;
pub mod tools;

pub use config::Credentials;
pub use connect::{run, Outcome};
pub use paths::SessionPaths;
