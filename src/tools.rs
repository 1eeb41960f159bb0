//! Prerequisite checks for external executables
//!
//! The bootstrap delegates all heavy lifting to external programs, so the
//! first thing each run does is make sure they resolve on `PATH`. Nothing
//! has been written to disk at that point, so a missing tool is a clean
//! early exit rather than an error.

/// External programs the session depends on
pub const REQUIRED_TOOLS: &[&str] = &["rxvt-unicode", "openvpn", "git"];

/// Return the first tool that does not resolve on `PATH`, if any
pub fn find_missing(tools: &[&str]) -> Option<String> {
    tools
        .iter()
        .find(|tool| which::which(tool).is_err())
        .map(|tool| tool.to_string())
}
