mod cmd;
mod console;
mod output;
mod root;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use ocm_core::InitOptions;
use owo_colors::OwoColorize;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  opencode-context-manager init
  opencode-context-manager init --force
  opencode-context-manager init --global";

#[derive(Parser)]
#[command(
    name = "opencode-context-manager",
    about = "OpenCode Context Manager: install the context-update skill and command",
    version,
    after_help = EXAMPLES
)]
struct Cli {
    /// Overwrite existing files without asking
    #[arg(long, short = 'f', global = true)]
    force: bool,

    /// Install to ~/.config/opencode/ instead of the current directory
    #[arg(long, short = 'g', global = true)]
    global: bool,

    /// Read bundled assets from this directory instead of the embedded copies
    #[arg(long, global = true, env = "OCM_ASSETS_DIR", value_name = "DIR")]
    assets_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the context-update skill and command
    Init,
}

fn main() {
    // Bare invocation: usage on stdout, before env-backed args are read
    if std::env::args_os().len() <= 1 {
        let _ = Cli::command().print_help();
        std::process::exit(0);
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                std::process::exit(0);
            }
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let options = InitOptions {
        force: cli.force,
        global: cli.global,
    };

    let result = match cli.command {
        Some(Commands::Init) => root::resolve_target(options.global)
            .and_then(|target| cmd::init::run(&target, options, cli.assets_dir.as_deref())),
        None => Err(anyhow::anyhow!(
            "no command given\nRun {} for usage.",
            "opencode-context-manager --help".cyan()
        )),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
