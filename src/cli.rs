//! Command-line interface.
//!
//! Flags mirror the config file and win over it; anything unset falls back to
//! the config, then to built-in defaults.

use std::path::PathBuf;

use clap::Parser;

use crate::ui::components::theme::ThemePreset;

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    about = "Interactive multi-page portfolio for the terminal"
)]
pub struct Args {
    /// Page to open first, by id (e.g. `projects`)
    #[arg(long)]
    pub page: Option<String>,

    /// Portfolio content file (TOML); the built-in portfolio when omitted
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Config file path (defaults to the XDG location)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Color theme: dark, light, or high-contrast
    #[arg(long)]
    pub theme: Option<ThemePreset>,

    /// Milliseconds between animation ticks (10-1000)
    #[arg(long)]
    pub tick_rate: Option<u64>,

    /// Disable the input deterrents
    #[arg(long)]
    pub no_guard: bool,

    /// Tracing filter directive, e.g. `termfolio=debug`
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Print the portfolio's page ids and titles, then exit
    #[arg(long)]
    pub list_pages: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn theme_flag_parses_preset_names() {
        let args = Args::try_parse_from(["folio", "--theme", "high-contrast"]).unwrap();
        assert_eq!(args.theme, Some(ThemePreset::HighContrast));

        assert!(Args::try_parse_from(["folio", "--theme", "sepia"]).is_err());
    }

    #[test]
    fn flags_default_to_unset() {
        let args = Args::try_parse_from(["folio"]).unwrap();
        assert!(args.page.is_none());
        assert!(args.theme.is_none());
        assert!(!args.no_guard);
        assert!(!args.list_pages);
    }
}
