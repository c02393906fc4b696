use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::Value;

use params_slug::config::{remove_config_value, set_config_value};
use params_slug::defaults::{self, Defaults, SlugConfig};

use super::CmdResult;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Display configuration (merged defaults + file)
    Show {
        /// Show only built-in defaults (ignore params-slug.json)
        #[arg(long)]
        builtin: bool,
    },
    /// Set a configuration value at a JSON pointer path
    Set {
        /// JSON pointer path (e.g., /defaults/slug/max_length)
        pointer: String,
        /// Value to set (JSON)
        value: String,
    },
    /// Remove a configuration value at a JSON pointer path
    Remove {
        /// JSON pointer path (e.g., /defaults/slug/reserved)
        pointer: String,
    },
    /// Reset configuration to built-in defaults (deletes params-slug.json)
    Reset,
    /// Show the path to params-slug.json
    Path,
}

#[derive(Debug, Default, Serialize)]
pub struct ConfigOutput {
    command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<SlugConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    defaults: Option<Defaults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exists: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pointer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deleted: Option<bool>,
}

pub fn run(args: ConfigArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<ConfigOutput> {
    match args.command {
        ConfigCommand::Show { builtin } => show(builtin),
        ConfigCommand::Set { pointer, value } => set(pointer, &value),
        ConfigCommand::Remove { pointer } => remove(pointer),
        ConfigCommand::Reset => reset(),
        ConfigCommand::Path => path(),
    }
}

fn show(builtin: bool) -> CmdResult<ConfigOutput> {
    let output = if builtin {
        ConfigOutput {
            command: "config.show".to_string(),
            defaults: Some(defaults::builtin_defaults()),
            ..Default::default()
        }
    } else {
        ConfigOutput {
            command: "config.show".to_string(),
            config: Some(defaults::load_config()),
            ..Default::default()
        }
    };

    Ok((output, 0))
}

fn set(pointer: String, value_str: &str) -> CmdResult<ConfigOutput> {
    let value: Value = serde_json::from_str(value_str).map_err(|e| {
        params_slug::Error::validation_invalid_json(e, Some("parse value".to_string()))
    })?;

    let config = set_config_value(&defaults::load_config_checked()?, &pointer, value.clone())?;
    defaults::save_config(&config)?;

    Ok((
        ConfigOutput {
            command: "config.set".to_string(),
            config: Some(config),
            pointer: Some(pointer),
            value: Some(value),
            ..Default::default()
        },
        0,
    ))
}

fn remove(pointer: String) -> CmdResult<ConfigOutput> {
    let config = remove_config_value(&defaults::load_config_checked()?, &pointer)?;
    defaults::save_config(&config)?;

    Ok((
        ConfigOutput {
            command: "config.remove".to_string(),
            config: Some(config),
            pointer: Some(pointer),
            ..Default::default()
        },
        0,
    ))
}

fn reset() -> CmdResult<ConfigOutput> {
    let deleted = defaults::reset_config()?;

    Ok((
        ConfigOutput {
            command: "config.reset".to_string(),
            defaults: Some(defaults::builtin_defaults()),
            path: Some(defaults::config_path()?),
            deleted: Some(deleted),
            ..Default::default()
        },
        0,
    ))
}

fn path() -> CmdResult<ConfigOutput> {
    Ok((
        ConfigOutput {
            command: "config.path".to_string(),
            path: Some(defaults::config_path()?),
            exists: Some(defaults::config_exists()),
            ..Default::default()
        },
        0,
    ))
}
