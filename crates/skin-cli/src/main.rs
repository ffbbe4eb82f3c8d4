#![allow(clippy::unused_async)]

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use skin_config::{STATE_DIR, SkinConfig};

mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("skinsense error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    // `.env` may carry SKINSENSE_LOG, so it has to land before the subscriber.
    if let Ok(cwd) = std::env::current_dir() {
        skin_config::load_dotenv(&cwd);
    }
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    output::configure(&flags);

    if let cli::Commands::Init(args) = &cli.command {
        return commands::init::handle(args, &flags).await;
    }

    let project_root = resolve_project_root(flags.project.as_deref())?;
    let config = SkinConfig::load_for_project_with_dotenv(&project_root)
        .context("failed to load skinsense configuration")?;

    let mut ctx = context::AppContext::init(&project_root, config, &flags)
        .await
        .context("failed to initialize skinsense application context")?;

    commands::dispatch::dispatch(cli.command, &mut ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SKINSENSE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = PathBuf::from(path);

        if explicit
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name == STATE_DIR)
        {
            return explicit
                .parent()
                .map(Path::to_path_buf)
                .context("invalid --project path: '.skinsense' directory has no parent");
        }

        if explicit.join(STATE_DIR).is_dir() {
            return Ok(explicit);
        }

        anyhow::bail!(
            "invalid --project '{}': no .skinsense directory. Run 'skinsense init --path {}' first.",
            explicit.display(),
            explicit.display()
        );
    }

    let start = std::env::current_dir().context("failed to read current directory")?;
    context::find_project_root(&start)
        .context("not a skinsense project (no .skinsense directory found). Run 'skinsense init' first.")
}
