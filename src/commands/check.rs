use clap::Args;
use serde::Serialize;

use params_slug::slugify::{slugify_with, validate_slug};
use params_slug::SlugPolicy;

use super::CmdResult;

#[derive(Args)]
pub struct CheckArgs {
    /// Values to check ('-' reads one entry per line from stdin)
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub inputs: Vec<String>,

    /// Maximum slug length (overrides defaults.slug.max_length)
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CheckItem {
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckOutput {
    command: String,
    valid: usize,
    invalid: usize,
    results: Vec<CheckItem>,
}

pub fn run(args: CheckArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<CheckOutput> {
    let inputs = super::collect_inputs(args.inputs)?;
    let policy = super::resolve_policy(args.max_length)?;

    Ok(check_inputs(inputs, &policy))
}

/// Exits 1 when any input fails, so shell callers can branch on it.
fn check_inputs(inputs: Vec<String>, policy: &SlugPolicy) -> (CheckOutput, i32) {
    let results: Vec<CheckItem> = inputs
        .into_iter()
        .map(|input| match validate_slug(&input, "slug", policy) {
            Ok(()) => CheckItem {
                input,
                valid: true,
                error: None,
                suggestion: None,
            },
            Err(err) => {
                let suggestion = slugify_with(&input, policy);
                CheckItem {
                    valid: false,
                    error: Some(err.code.as_str().to_string()),
                    suggestion: (!suggestion.is_empty() && suggestion != input)
                        .then_some(suggestion),
                    input,
                }
            }
        })
        .collect();

    let invalid = results.iter().filter(|r| !r.valid).count();
    let exit_code = if invalid > 0 { 1 } else { 0 };

    (
        CheckOutput {
            command: "check".to_string(),
            valid: results.len() - invalid,
            invalid,
            results,
        },
        exit_code,
    )
}
