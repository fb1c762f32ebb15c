use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::checker::{Category, CheckLevel, Severity};
use crate::config::LOCAL_CONFIG_NAME;
use crate::engine::CheckScope;
use crate::output::{OutputFormat, StatsFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "rpgle-guard")]
#[command(author, version, about = "Fixed-format ILE-RPG source checker")]
#[command(long_about = "Checks fixed-column ILE-RPG source for column shifts, \
    specification order, naming and legacy constructs.\n\n\
    Exit codes:\n  \
    0 - No errors found\n  \
    1 - Errors found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check RPG sources ('-' reads standard input)
    Check(CheckArgs),

    /// Display line and specification statistics
    Stats(StatsArgs),

    /// Manage custom pattern rules
    Rules(RulesArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckArgs {
    /// Files or directories to check; '-' reads standard input
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Check level [possible values: basic, standard, strict]
    #[arg(short, long)]
    pub level: Option<CheckLevel>,

    /// Output format [possible values: text, json, markdown]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Measure line length in DBCS bytes
    #[arg(long)]
    pub dbcs: bool,

    /// Maximum line length (overrides config)
    #[arg(long)]
    pub max_line_length: Option<usize>,

    /// Custom rules JSON file (overrides config)
    #[arg(long)]
    pub custom_rules: Option<PathBuf>,

    /// Rule ids to suppress (comma-separated or repeated)
    #[arg(long, value_delimiter = ',')]
    pub disable: Vec<String>,

    /// Run only one group of checks [possible values: all, order, columns, naming, best-practice]
    #[arg(long, default_value = "all")]
    pub only: CheckScope,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// File extensions to check (comma-separated, e.g., rpgle,sqlrpgle)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Only report, always exit 0
    #[arg(long)]
    pub warn_only: bool,

    /// Treat warnings as failures (exit code 1)
    #[arg(long)]
    pub warnings_as_errors: bool,
}

#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Files or directories to analyze; '-' reads standard input
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: StatsFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// File extensions to include (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,
}

#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Custom rules file (default: config value, then rpg-custom-rules.json)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub action: RulesAction,
}

#[derive(Subcommand, Debug)]
pub enum RulesAction {
    /// List all custom rules
    List,

    /// Show one rule as JSON
    Show {
        /// Rule id
        id: String,
    },

    /// Add a new rule
    Add(RuleAddArgs),

    /// Remove a rule
    Remove {
        /// Rule id
        id: String,
    },

    /// Enable a rule
    Enable {
        /// Rule id
        id: String,
    },

    /// Disable a rule
    Disable {
        /// Rule id
        id: String,
    },

    /// Print the rules file as JSON
    Export {
        /// Write to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import rules from a JSON file
    Import {
        /// JSON file with a "rules" array
        source: PathBuf,

        /// Merge by id instead of replacing all rules
        #[arg(long)]
        merge: bool,
    },

    /// Remove every rule
    Reset,
}

#[derive(Args, Debug)]
pub struct RuleAddArgs {
    /// Unique rule id, e.g. NO_DSPLY
    pub id: String,

    /// Case-insensitive regex matched against each source line
    #[arg(long)]
    pub pattern: Option<String>,

    /// Message reported on a match
    #[arg(long)]
    pub message: String,

    /// Display name (defaults to the id)
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// [possible values: structure, syntax, naming, best-practice, deprecated]
    #[arg(long, default_value = "best-practice")]
    pub category: Category,

    /// [possible values: error, warning, info]
    #[arg(long, default_value = "warning")]
    pub severity: Severity,

    #[arg(long)]
    pub suggestion: Option<String>,

    /// Add the rule disabled
    #[arg(long)]
    pub disabled: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
