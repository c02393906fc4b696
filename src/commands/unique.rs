use std::collections::HashSet;

use clap::Args;
use serde::Serialize;

use params_slug::slugify::{slugify, slugify_with, unique_slug};
use params_slug::SlugPolicy;

use super::CmdResult;

#[derive(Args)]
pub struct UniqueArgs {
    /// Text to derive the slug from
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub input: String,

    /// Slugs or names already in use (comma-separated or repeated)
    #[arg(long, value_name = "SLUG", value_delimiter = ',')]
    pub taken: Vec<String>,

    /// Maximum slug length (overrides defaults.slug.max_length)
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct UniqueOutput {
    command: String,
    input: String,
    slug: String,
    suffixed: bool,
}

pub fn run(args: UniqueArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<UniqueOutput> {
    let policy = super::resolve_policy(args.max_length)?;
    let output = derive_unique(args.input, &args.taken, &policy)?;
    Ok((output, 0))
}

/// Taken entries are slugified first, so `Team Sync` blocks `team-sync`.
fn derive_unique(
    input: String,
    taken: &[String],
    policy: &SlugPolicy,
) -> params_slug::Result<UniqueOutput> {
    let taken: HashSet<String> = taken
        .iter()
        .map(|entry| slugify(entry))
        .filter(|slug| !slug.is_empty())
        .collect();

    let slug = unique_slug(&input, "slug", policy, |candidate| {
        taken.contains(candidate)
    })?;
    let suffixed = slug != slugify_with(&input, policy);

    Ok(UniqueOutput {
        command: "unique".to_string(),
        input,
        slug,
        suffixed,
    })
}
