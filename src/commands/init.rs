use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, RpgGuardError};

use super::context::report_error;

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the default configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(RpgGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# rpgle-guard configuration file
version = "1"

[check]
# basic: column shifts, order and hard errors
# standard: adds naming, indicators and GOTO (default)
# strict: adds modernization hints
level = "standard"

# Measure line length in bytes, counting DBCS characters twice plus
# shift-out/shift-in framing
consider_dbcs = false

# Maximum line length in columns
max_line_length = 100

# Rule ids to suppress, e.g. ["INDICATOR_USAGE", "RECOMMEND_FULLY_FREE"]
disabled_rules = []

# Custom pattern rules managed by `rpgle-guard rules`
# custom_rules = "rpg-custom-rules.json"

[scanner]
# File extensions treated as RPG source
extensions = ["rpgle", "rpg", "sqlrpgle"]

# Exclude patterns (glob syntax)
exclude = [
    "**/.git/**",
    "**/backup/**",
]

# Descend into subdirectories
recursive = true
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
