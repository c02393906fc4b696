use clap::{Parser, Subcommand};

mod commands;
mod output;
mod tty;

use commands::{check, config, slugify, unique, GlobalArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "params-slug")]
#[command(version = VERSION)]
#[command(about = "Normalize and validate URL slugs for params routes and records")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert text into slugs
    Slugify(slugify::SlugifyArgs),
    /// Check whether values already are valid slugs
    Check(check::CheckArgs),
    /// Derive a slug that does not collide with existing ones
    Unique(unique::UniqueArgs),
    /// Manage slug configuration
    Config(config::ConfigArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    let (json_result, exit_code) = commands::run_json(cli.command, &global);

    if let Err(err) = output::print_json_result(json_result) {
        eprintln!("params-slug: {}", err);
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
