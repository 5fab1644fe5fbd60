use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

use create_order_patch::{
    config::{ConfigLoader, PatcherConfig},
    diff::{diff_stats, unified_diff},
    SourcePatcher, SUCCESS_MESSAGE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to rewrite (defaults to services/database_service.py)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Config file (defaults to .create-order-patch.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the diff instead of writing the file
    #[arg(long)]
    dry_run: bool,

    /// Fail when the create_order method is not found
    #[arg(long)]
    strict: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<PatcherConfig> {
        let loader = match &self.config {
            Some(path) => ConfigLoader::with_path(path),
            None => ConfigLoader::new(),
        };
        let mut config = loader.load().with_context(|| {
            format!("Failed to load config from {}", loader.config_path().display())
        })?;

        if let Some(path) = &self.path {
            config.target = path.clone();
        }
        config.strict |= self.strict;
        config.dry_run = self.dry_run;
        Ok(config)
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.resolve_config()?;
    debug!(
        "Target: {}, strict: {}, dry run: {}",
        config.target.display(),
        config.strict,
        config.dry_run
    );

    let patcher = SourcePatcher::create_order().strict(config.strict);

    if config.dry_run {
        let preview = patcher
            .preview(&config.target)
            .with_context(|| format!("Failed to patch {}", config.target.display()))?;
        let name = config.target.to_string_lossy();
        let rendered = unified_diff(&name, &preview.original, &preview.patched);
        if rendered.is_empty() {
            println!("no changes");
        } else {
            let stats = diff_stats(&preview.original, &preview.patched);
            info!("Dry run: +{} -{} lines", stats.inserted, stats.deleted);
            print!("{}", rendered);
        }
        return Ok(());
    }

    let report = patcher
        .patch(&config.target)
        .with_context(|| format!("Failed to patch {}", config.target.display()))?;
    info!("{}: {}", report.path.display(), report.outcome);

    println!("{}", SUCCESS_MESSAGE);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    create_order_patch::init_logging(cli.verbose);
    run(cli)
}
