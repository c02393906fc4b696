use clap::Args;
use serde::Serialize;

use params_slug::slugify::{require_slug, slugify_with};
use params_slug::SlugPolicy;

use super::CmdResult;

#[derive(Args)]
pub struct SlugifyArgs {
    /// Text to normalize ('-' reads one entry per line from stdin)
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub inputs: Vec<String>,

    /// Fail on empty or reserved results instead of returning ""
    #[arg(long)]
    pub strict: bool,

    /// Maximum slug length (overrides defaults.slug.max_length)
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SlugifyItem {
    pub input: String,
    pub slug: String,
    pub empty: bool,
}

#[derive(Debug, Serialize)]
pub struct SlugifyOutput {
    command: String,
    results: Vec<SlugifyItem>,
}

pub fn run(args: SlugifyArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<SlugifyOutput> {
    let inputs = super::collect_inputs(args.inputs)?;
    let policy = super::resolve_policy(args.max_length)?;

    Ok((slugify_inputs(inputs, args.strict, &policy)?, 0))
}

fn slugify_inputs(
    inputs: Vec<String>,
    strict: bool,
    policy: &SlugPolicy,
) -> params_slug::Result<SlugifyOutput> {
    let mut results = Vec::with_capacity(inputs.len());
    for input in inputs {
        let slug = if strict {
            require_slug(&input, "slug", policy)?
        } else {
            slugify_with(&input, policy)
        };

        results.push(SlugifyItem {
            empty: slug.is_empty(),
            input,
            slug,
        });
    }

    Ok(SlugifyOutput {
        command: "slugify".to_string(),
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use params_slug::ErrorCode;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn reserving(words: &[&str]) -> SlugPolicy {
        SlugPolicy {
            max_length: None,
            reserved: strings(words),
        }
    }

    #[test]
    fn lenient_mode_reports_empty_results() {
        let output =
            slugify_inputs(strings(&["Hello World", "!!!"]), false, &SlugPolicy::default())
                .unwrap();

        assert_eq!(output.results[0].slug, "hello-world");
        assert!(!output.results[0].empty);
        assert_eq!(output.results[1].slug, "");
        assert!(output.results[1].empty);
    }

    #[test]
    fn lenient_mode_ignores_reserved_words() {
        let output = slugify_inputs(strings(&["Admin"]), false, &reserving(&["admin"])).unwrap();
        assert_eq!(output.results[0].slug, "admin");
    }

    #[test]
    fn strict_mode_rejects_reserved_words() {
        let err = slugify_inputs(strings(&["Admin"]), true, &reserving(&["admin"])).unwrap_err();
        assert_eq!(err.code, ErrorCode::SlugReserved);
    }

    #[test]
    fn strict_mode_rejects_empty_results() {
        let err =
            slugify_inputs(strings(&["ok", "   "]), true, &SlugPolicy::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::SlugEmpty);
    }

    #[test]
    fn max_length_applies_in_both_modes() {
        let policy = SlugPolicy {
            max_length: Some(5),
            reserved: Vec::new(),
        };
        for strict in [false, true] {
            let output = slugify_inputs(strings(&["abcd efgh"]), strict, &policy).unwrap();
            assert_eq!(output.results[0].slug, "abcd");
        }
    }
}
