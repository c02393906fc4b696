use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::paths;
use crate::slugify::SlugPolicy;
use crate::utils::io;

/// Root configuration structure for params-slug.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SlugConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via params-slug.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Defaults {
    #[serde(default)]
    pub slug: SlugPolicy,
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load the configured slug policy. An unreadable or invalid
/// params-slug.json is an error, never a silent reset to defaults.
pub fn load_policy() -> crate::Result<SlugPolicy> {
    Ok(load_config_checked()?.defaults.slug)
}

/// Load params-slug.json, reporting invalid content.
/// A missing file yields the defaults.
pub fn load_config_checked() -> crate::Result<SlugConfig> {
    load_config_from(&paths::params_slug_json()?)
}

/// Load the full config for display, falling back to defaults on any error.
pub fn load_config() -> SlugConfig {
    load_config_checked().unwrap_or_default()
}

/// Load config from an explicit file. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> crate::Result<SlugConfig> {
    if !path.exists() {
        return Ok(SlugConfig::default());
    }

    let content = io::read_file(path, &format!("read {}", path.display()))?;

    let config: SlugConfig = serde_json::from_str(&content)
        .map_err(|e| crate::Error::config_invalid_json(path.display().to_string(), e))?;

    config.defaults.slug.validate()?;

    Ok(config)
}

/// Save config to params-slug.json (creates if missing).
pub fn save_config(config: &SlugConfig) -> crate::Result<()> {
    save_config_to(&paths::params_slug_json()?, config)
}

/// Save config to an explicit file, creating parent directories.
pub fn save_config_to(path: &Path, config: &SlugConfig) -> crate::Result<()> {
    config.defaults.slug.validate()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            crate::Error::internal_io(e.to_string(), Some(format!("create {}", parent.display())))
        })?;
    }

    let content = serde_json::to_string_pretty(config).map_err(|e| {
        crate::Error::internal_json(e.to_string(), Some("serialize params-slug.json".to_string()))
    })?;

    io::write_file_atomic(path, &content, &format!("write {}", path.display()))?;
    crate::log_status!("config", "Wrote {}", path.display());

    Ok(())
}

/// Check if params-slug.json exists
pub fn config_exists() -> bool {
    paths::params_slug_json()
        .map(|p| p.exists())
        .unwrap_or(false)
}

/// Delete params-slug.json (reset to defaults)
pub fn reset_config() -> crate::Result<bool> {
    reset_config_at(&paths::params_slug_json()?)
}

/// Delete an explicit config file. Returns whether anything was removed.
pub fn reset_config_at(path: &Path) -> crate::Result<bool> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| {
            crate::Error::internal_io(e.to_string(), Some(format!("delete {}", path.display())))
        })?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Get the path to params-slug.json (for display purposes)
pub fn config_path() -> crate::Result<String> {
    Ok(paths::params_slug_json()?.display().to_string())
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> Defaults {
    Defaults::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config_from(&dir.path().join("params-slug.json")).unwrap();
        assert_eq!(config, SlugConfig::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("params-slug.json");
        fs::write(&path, r#"{"defaults":{"slug":{"reserved":["api"]}}}"#).unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.defaults.slug.reserved, vec!["api".to_string()]);
        assert_eq!(config.defaults.slug.max_length, None);
    }

    #[test]
    fn invalid_json_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("params-slug.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidJson);
    }

    #[test]
    fn invalid_value_is_reported_instead_of_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("params-slug.json");
        fs::write(
            &path,
            r#"{"defaults":{"slug":{"max_length":0,"reserved":["admin"]}}}"#,
        )
        .unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidValue);
        assert_eq!(err.details["key"], "defaults.slug.max_length");

        // The file is left as written so the user can fix it.
        assert!(fs::read_to_string(&path).unwrap().contains("admin"));
    }

    #[test]
    fn save_then_load_and_reset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("params-slug.json");
        let config = SlugConfig {
            defaults: Defaults {
                slug: SlugPolicy {
                    max_length: Some(40),
                    reserved: vec!["new".to_string()],
                },
            },
        };

        save_config_to(&path, &config).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), config);

        assert!(reset_config_at(&path).unwrap());
        assert!(!reset_config_at(&path).unwrap());
    }

    #[test]
    fn save_rejects_zero_length_policy() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("params-slug.json");
        let mut config = SlugConfig::default();
        config.defaults.slug.max_length = Some(0);

        let err = save_config_to(&path, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidValue);
        assert!(!path.exists());
    }
}
