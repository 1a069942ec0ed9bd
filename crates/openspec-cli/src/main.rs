mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "openspec",
    about = "Spec-driven change management — install OpenSpec slash commands into AI coding assistants",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from openspec/ or .git/)
    #[arg(long, global = true, env = "OPENSPEC_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize OpenSpec and install slash commands for AI tools
    Init {
        /// Configure only this tool (repeatable; default: all available tools)
        #[arg(long = "tool")]
        tools: Vec<String>,
    },

    /// Refresh scaffolding and slash commands for already-configured tools
    Update,

    /// List supported tools
    List {
        /// List the slash commands instead of the tools
        #[arg(long)]
        commands: bool,
    },

    /// Print a generated command file without writing it
    Show {
        /// Slash command (proposal, apply, archive, research, audit)
        command: String,

        /// Tool to generate for (see 'openspec list')
        #[arg(long)]
        tool: String,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    tracing::debug!("project root: {}", root.display());

    let result = match cli.command {
        Commands::Init { tools } => cmd::init::run(&root, &tools),
        Commands::Update => cmd::update::run(&root),
        Commands::List { commands } => cmd::list::run(&root, commands, cli.json),
        Commands::Show { command, tool } => cmd::show::run(&command, &tool, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
