use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lib::config::{resolve_root, Config};

#[derive(Parser)]
#[command(name = "skillcheck")]
#[command(about = "Check that every skill folder has a SKILL.md with name and description frontmatter", long_about = None)]
struct Cli {
    /// Directory to scan (default: SKILLCHECK_ROOT or the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version
    Version,

    /// Validate every discovered skill (the default when no command is given). Scans <root>/*/SKILL.md, <root>/skills/*/SKILL.md and <root>/.skills/*/SKILL.md.
    Validate,

    /// List discovered SKILL.md files without validating them.
    List,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Validate) {
        Commands::Version => {
            println!("skillcheck {}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Validate => match run_validate(cli.root) {
            Ok(true) => {}
            Ok(false) => std::process::exit(1),
            Err(e) => {
                log::error!("validate failed: {:#}", e);
                std::process::exit(1);
            }
        },
        Commands::List => match run_list(cli.root) {
            Ok(true) => {}
            Ok(false) => std::process::exit(1),
            Err(e) => {
                log::error!("list failed: {:#}", e);
                std::process::exit(1);
            }
        },
    }
}

/// Returns Ok(false) when the run should exit non-zero after its messages were printed.
fn run_validate(root: Option<PathBuf>) -> anyhow::Result<bool> {
    let config = Config::new(resolve_root(root)?);
    let report = match lib::skills::run(&config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(false);
        }
    };
    if report.is_ok() {
        println!("{}", report.summary());
        return Ok(true);
    }
    for issue in &report.issues {
        eprintln!("{}", issue);
    }
    Ok(false)
}

fn run_list(root: Option<PathBuf>) -> anyhow::Result<bool> {
    let config = Config::new(resolve_root(root)?);
    match lib::skills::discover_required(&config) {
        Ok(found) => {
            for candidate in &found {
                println!("{}", candidate.relative.display());
            }
            Ok(true)
        }
        Err(e) => {
            eprintln!("{}", e);
            Ok(false)
        }
    }
}
