//! CLI argument definitions.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use regatta_cli::logging::{LogConfig, LogFormat};
use regatta_report::{CrewCell, EntriesFilter, RowerSort};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "regatta",
    version,
    about = "Regatta entry reports - reconcile entry-system exports into crew and club reports",
    long_about = "Reconcile the teams and team members exports of a regatta entry system.\n\n\
                  Coxes declared only on the teams export are added to the members table,\n\
                  with their details looked up by name in an optional community roster."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow rower and cox names in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

impl Cli {
    /// Logging settings. An explicit `--log-level` beats `-v`/`-q`, and
    /// either one disables `RUST_LOG`.
    pub fn log_config(&self) -> LogConfig {
        let level_filter = self
            .log_level
            .map_or_else(|| self.verbosity.tracing_level_filter(), LevelFilter::from);
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig {
            level_filter,
            use_env_filter: self.log_level.is_none() && !self.verbosity.is_present(),
            format: self.log_format.into(),
            with_ansi,
            log_file: self.log_file.clone(),
            log_data: self.log_data,
            ..LogConfig::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Reconcile the exports and write every report.
    Run(RunArgs),

    /// List the available report views.
    Views,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Teams export (one row per crew).
    #[arg(long = "teams", value_name = "CSV")]
    pub teams: PathBuf,

    /// Team members export (one row per rower).
    #[arg(long = "members", value_name = "CSV")]
    pub members: PathBuf,

    /// Community members export used to look up cox details.
    #[arg(long = "roster", value_name = "CSV")]
    pub roster: Option<PathBuf>,

    /// Field-mapping configuration.
    #[arg(long = "mapping", value_name = "TOML")]
    pub mapping: PathBuf,

    /// Output directory for report files (default: ./reports).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the summary without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// What to show in each seat of the crew list.
    #[arg(long = "crew-cell", value_enum, default_value = "name")]
    pub crew_cell: CrewCellArg,

    /// Restrict the crew list, club rowers and rowers reports to one club.
    #[arg(long = "club", value_name = "NAME")]
    pub club: Option<String>,

    /// Sort order of the rowers report.
    #[arg(long = "sort-rowers", value_enum, default_value = "name")]
    pub sort_rowers: RowerSortArg,

    /// Rows kept in the entries report.
    #[arg(long = "entries", value_enum, default_value = "all")]
    pub entries: EntriesFilterArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CrewCellArg {
    Name,
    MembershipNumber,
}

impl From<CrewCellArg> for CrewCell {
    fn from(arg: CrewCellArg) -> Self {
        match arg {
            CrewCellArg::Name => Self::Name,
            CrewCellArg::MembershipNumber => Self::MembershipNumber,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RowerSortArg {
    Name,
    Club,
    MembershipNumber,
}

impl From<RowerSortArg> for RowerSort {
    fn from(arg: RowerSortArg) -> Self {
        match arg {
            RowerSortArg::Name => Self::Name,
            RowerSortArg::Club => Self::Club,
            RowerSortArg::MembershipNumber => Self::MembershipNumber,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EntriesFilterArg {
    All,
    Unverified,
    MissingCox,
}

impl From<EntriesFilterArg> for EntriesFilter {
    fn from(arg: EntriesFilterArg) -> Self {
        match arg {
            EntriesFilterArg::All => Self::All,
            EntriesFilterArg::Unverified => Self::Unverified,
            EntriesFilterArg::MissingCox => Self::MissingCox,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}
