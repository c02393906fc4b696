use params_slug::utils::{io, validation};
use params_slug::SlugPolicy;

pub type CmdResult<T> = params_slug::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod check;
pub mod config;
pub mod slugify;
pub mod unique;

/// Expand positional inputs, replacing a lone `-` with stdin lines.
pub(crate) fn collect_inputs(inputs: Vec<String>) -> params_slug::Result<Vec<String>> {
    expand_inputs(inputs, read_stdin_inputs)
}

fn read_stdin_inputs() -> params_slug::Result<Vec<String>> {
    if crate::tty::is_stdin_tty() {
        return Err(params_slug::Error::validation_invalid_argument(
            "text",
            "Cannot read inputs from stdin when stdin is a TTY",
            None,
            None,
        ));
    }

    crate::tty::status("Reading inputs from stdin...");
    io::read_lines(std::io::stdin().lock(), "read stdin")
}

fn expand_inputs<F>(inputs: Vec<String>, read_stdin: F) -> params_slug::Result<Vec<String>>
where
    F: FnOnce() -> params_slug::Result<Vec<String>>,
{
    validation::require_non_empty_vec(&inputs, "text")?;

    if inputs.iter().filter(|input| *input == "-").count() > 1 {
        return Err(params_slug::Error::validation_invalid_argument(
            "text",
            "Stdin ('-') can only be given once",
            None,
            None,
        ));
    }

    let mut read_stdin = Some(read_stdin);
    let mut expanded = Vec::with_capacity(inputs.len());

    for input in inputs {
        if input == "-" {
            if let Some(read) = read_stdin.take() {
                expanded.extend(read()?);
                continue;
            }
        }
        expanded.push(input);
    }

    Ok(expanded)
}

/// Resolve the slug policy from config, with an optional length override.
pub(crate) fn resolve_policy(max_length: Option<usize>) -> params_slug::Result<SlugPolicy> {
    apply_max_length(params_slug::defaults::load_policy()?, max_length)
}

fn apply_max_length(
    mut policy: SlugPolicy,
    max_length: Option<usize>,
) -> params_slug::Result<SlugPolicy> {
    if let Some(max) = max_length {
        if max == 0 {
            return Err(params_slug::Error::validation_invalid_argument(
                "max_length",
                "--max-length must be at least 1",
                Some(max.to_string()),
                None,
            ));
        }
        policy.max_length = Some(max);
    }

    Ok(policy)
}

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (params_slug::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Slugify(args) => dispatch!(args, global, slugify),
        crate::Commands::Check(args) => dispatch!(args, global, check),
        crate::Commands::Unique(args) => dispatch!(args, global, unique),
        crate::Commands::Config(args) => dispatch!(args, global, config),
    }
}
