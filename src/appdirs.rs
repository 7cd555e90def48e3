// std imports
use std::{env, ffi::OsString, path::PathBuf};

// ---

pub const APP_NAME: &str = "tldr";

/// Environment variable overriding the location of the configuration file.
pub const CONFIG_ENV: &str = "TLDR_CONFIG";

/// Returns the path of the user configuration file, if it can be determined.
pub fn config_file() -> Option<PathBuf> {
    config_file_or(env::var_os(CONFIG_ENV))
}

fn config_file_or(explicit: Option<OsString>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }

    Some(sys::config_dir()?.join(APP_NAME).join("config.yaml"))
}

#[cfg(target_os = "macos")]
mod sys {
    use super::*;

    pub(crate) fn config_dir() -> Option<PathBuf> {
        env::var_os("XDG_CONFIG_HOME")
            .and_then(dirs_sys::is_absolute_path)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
    }
}

#[cfg(not(target_os = "macos"))]
mod sys {
    use super::*;

    pub(crate) fn config_dir() -> Option<PathBuf> {
        dirs::config_dir()
    }
}
