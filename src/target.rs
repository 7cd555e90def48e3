// local imports
use crate::error::{Error, Result};
use crate::store::COMMON;

// ---

#[cfg(target_os = "macos")]
const PLATFORM: &str = "osx";

#[cfg(target_os = "windows")]
const PLATFORM: &str = "windows";

#[cfg(any(target_os = "solaris", target_os = "illumos"))]
const PLATFORM: &str = "sunos";

#[cfg(not(any(
    target_os = "macos",
    target_os = "windows",
    target_os = "solaris",
    target_os = "illumos"
)))]
const PLATFORM: &str = "linux";

/// Returns the name of the page bucket for the platform the program runs on.
pub fn current_platform() -> &'static str {
    PLATFORM
}

/// Resolves the effective platform, preferring an explicit override.
pub fn resolve(platform: Option<&str>) -> Result<&str> {
    match platform {
        Some(COMMON) => Err(Error::CommonIsNotPlatform),
        Some(platform) => Ok(platform),
        None => Ok(current_platform()),
    }
}
