//! termfolio: a multi-page portfolio that runs in the terminal.
//!
//! Pages are columns of content blocks laid out into an off-screen document
//! and scrolled through a viewport, keeping the interactive touches of a
//! portfolio site: sections reveal as they scroll into view, a demo reel
//! plays a scripted exchange on a timer, skill bars animate out to their
//! widths, a contact form validates input and simulates a send, and FAQ
//! entries expand in place.
//!
//! [`run`] is the whole lifecycle: flags, config, logging, content, then the
//! event loop until quit.

pub mod cli;
pub mod config;
pub mod content;
pub mod guard;
pub mod logging;
pub mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::cli::Args;
use crate::config::Config;
use crate::content::Portfolio;
use crate::ui::app::App;

pub fn run() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    // Flags win over the file.
    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    if let Some(tick) = args.tick_rate {
        config.tick_rate_ms = tick;
    }
    if let Some(page) = &args.page {
        config.start_page = Some(page.clone());
    }
    if let Some(content) = &args.content {
        config.content = Some(content.clone());
    }
    if args.no_guard {
        config.guard.enabled = false;
    }
    config.validate().context("invalid settings")?;

    let portfolio = match &config.content {
        Some(path) => Portfolio::load(path)
            .with_context(|| format!("loading portfolio from {}", path.display()))?,
        None => Portfolio::builtin(),
    };

    if args.list_pages {
        for page in &portfolio.pages {
            println!("{:<12} {}", page.id, page.title);
        }
        return Ok(());
    }

    let _log_guard = logging::init(&config.log, args.log_filter.as_deref())
        .context("initializing logging")?;

    let start_page = match config.start_page.as_deref() {
        Some(id) => portfolio.page_index(id).with_context(|| {
            format!(
                "no page with id '{id}' (have: {})",
                portfolio.page_ids().join(", ")
            )
        })?,
        None => 0,
    };

    info!(
        version = env!("CARGO_PKG_VERSION"),
        pages = portfolio.pages.len(),
        theme = config.theme.name(),
        guard = config.guard.enabled,
        "starting"
    );

    let mut app = App::new(portfolio, start_page, config.theme, config.guard.enabled);
    ui::tui::run(&mut app, config.tick_rate())
}
