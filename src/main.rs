use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use shipmate::context::note_status;
use shipmate::models::BumpLevel;
use shipmate::{ReleaseContext, Result};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shipmate")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Release automation with a project status badge", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Project root (default: current directory)
    #[arg(short = 'C', long, global = true)]
    project: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bump the version in the package manifest
    Bump {
        /// Version component to increment
        #[arg(short, long, value_enum, default_value_t = BumpLevel::Patch)]
        level: BumpLevel,
    },

    /// Move the Unreleased changelog section under the next patch version
    Changelog,

    /// Record the current release in the memory log
    Memory,

    /// Move the packaged artifact from dist/ to releases/
    #[command(name = "move-to-releases")]
    MoveToReleases,

    /// Run changelog, bump and memory for a patch release
    Release,

    /// Show or change the project status badge
    Status(shipmate::cli::status::StatusArgs),

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    shipmate::cli::init_tracing(cli.verbose);

    if let Commands::Completions { shell } = &cli.command {
        generate(*shell, &mut Cli::command(), "shipmate", &mut io::stdout());
        return;
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{}", format!("Error: failed to create tokio runtime: {}", e).red());
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run_async(cli)) {
        eprintln!("{}", format!("❌ Error: {:#}", e).red());
        std::process::exit(1);
    }
}

async fn run_async(cli: Cli) -> Result<()> {
    let ctx = ReleaseContext::load(cli.project.as_deref())?;

    if let Commands::Status(args) = cli.command {
        return shipmate::cli::status::run(&ctx, args).await;
    }

    ctx.attach_status();
    let result = match cli.command {
        Commands::Bump { level } => shipmate::cli::bump::run(&ctx, level).map(|_| ()),
        Commands::Changelog => shipmate::cli::changelog::run(&ctx).map(|_| ()),
        Commands::Memory => shipmate::cli::memory::run(&ctx).map(|_| ()),
        Commands::MoveToReleases => shipmate::cli::releases::run(&ctx).map(|_| ()),
        Commands::Release => shipmate::cli::release::run(&ctx),
        Commands::Status(_) | Commands::Completions { .. } => Ok(()),
    };

    // The badge goes back to idle whether or not the command succeeded
    note_status(ctx.status.set_idle());
    result
}
