//! iconfont-sync: download an icon-font stylesheet and its fonts.
//!
//! Reads `.iconfont.yml` (or `.iconfont.yaml`) from the current directory,
//! or the file given with `--config`, then runs one sync.

use anyhow::{Context, Result};
use clap::Parser;
use iconfont_sync::config;
use iconfont_sync::fetch::HttpFetcher;
use iconfont_sync::logger::ConsoleLogger;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "iconfont-sync",
    version,
    about = "Sync an icon-font stylesheet and its font files into a local project"
)]
struct Cli {
    /// Configuration file. Defaults to .iconfont.yml or .iconfont.yaml in the
    /// current directory.
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    let cwd = std::env::current_dir().context("failed to read the current directory")?;
    let options = config::load_options(cli.config.as_deref(), &cwd)?;

    let report = iconfont_sync::sync_icon_font(&options, &HttpFetcher::new(), &ConsoleLogger)?;
    log::info!(
        "synced {} icons and {} font files",
        report.icon_count,
        report.font_paths.len()
    );
    Ok(())
}

/// `[HH:MM:SS] message` on stdout; `RUST_LOG` overrides the level.
fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stdout)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.args()
            )
        })
        .init();
}
