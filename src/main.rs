use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use talks::model::SiteConfig;
use talks::source::{FileSource, HttpSource, TalkSource};
use talks::view::{Filter, SortAxis};

mod cli_exec;

#[derive(Parser)]
#[command(name = "talks")]
#[command(about = "Browse the talks list", long_about = None)]
pub(crate) struct Cli {
    /// Site config (JSON)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Site base URL (overrides config)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Path of the talk collection under the base URL (overrides config)
    #[arg(long, global = true)]
    data_path: Option<String>,

    /// Read the talk collection from a local file instead of the site
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Interactive list (default)
    Tui,

    /// Render the page as HTML
    Render {
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Filter: all|weekly-nerd|guest-teacher
        #[arg(long, default_value = "all")]
        filter: Filter,
        /// Activate a sort toggle (date|alpha); repeat to cycle
        #[arg(long)]
        sort: Vec<SortAxis>,
        /// Fill photo slots from the photo API
        #[arg(long)]
        photos: bool,
    },

    /// Print the derived list
    List {
        /// Filter: all|weekly-nerd|guest-teacher
        #[arg(long, default_value = "all")]
        filter: Filter,
        /// Activate a sort toggle (date|alpha); repeat to cycle
        #[arg(long)]
        sort: Vec<SortAxis>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Load one random photo per slot
    Photos {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the marquee strip
    Marquee {
        /// Emit the HTML track instead of plain labels
        #[arg(long)]
        html: bool,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    // Log lines would draw over the TUI's alternate screen.
    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    talks::logging::init(if interactive { "off" } else { "warn" });

    let mut cfg = match &cli.config {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    };
    if let Some(url) = cli.base_url.clone() {
        cfg.base_url = url;
    }
    if let Some(path) = cli.data_path.clone() {
        cfg.data_path = path;
    }

    let source = build_source(&cli, &cfg)?;
    cli_exec::handle_command(cli.command.unwrap_or(Commands::Tui), &cfg, source)
}

fn build_source(cli: &Cli, cfg: &SiteConfig) -> Result<Box<dyn TalkSource>> {
    match &cli.file {
        Some(path) => Ok(Box::new(FileSource::new(path.clone()))),
        None => Ok(Box::new(HttpSource::from_config(cfg)?)),
    }
}
