use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base params config directory (~/.config/params/ on Unix-like systems)
pub fn params() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("params"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("params"))
    }
}

/// Slug config file path
pub fn params_slug_json() -> Result<PathBuf> {
    Ok(params()?.join("params-slug.json"))
}
