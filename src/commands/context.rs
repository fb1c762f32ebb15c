use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::cli::ColorChoice;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::{Result, RpgGuardError};
use crate::output::{ColorMode, print_error_full, print_warning};
use crate::rules::{CompiledRuleSet, CustomRuleStore, DEFAULT_RULES_FILE};
use crate::scanner::SourceInput;

/// Source text paired with the name used in reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LoadedSource {
    pub name: String,
    pub content: String,
}

#[must_use]
pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration from `config_path`, or search the default locations.
///
/// # Errors
/// Returns an error if the configuration file cannot be read or parsed.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }
    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Rules file in effect: explicit path, then the config value, then
/// `rpg-custom-rules.json` in the working directory.
#[must_use]
pub(crate) fn resolve_rules_path(explicit: Option<&Path>, config: &Config) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| config.check.custom_rules.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RULES_FILE))
}

/// Compile the enabled custom rules from `path`. A missing file yields no
/// rules; rules with invalid patterns are reported and skipped.
///
/// # Errors
/// Returns an error if the rules file exists but is not valid JSON.
pub(crate) fn load_custom_rules(path: &Path, quiet: bool) -> Result<CompiledRuleSet> {
    let store = CustomRuleStore::open(path)?;
    let (rules, diagnostics) = CompiledRuleSet::compile(store.rules());
    if !quiet {
        for diagnostic in diagnostics {
            print_warning(&diagnostic.to_string(), diagnostic.detail().as_deref());
        }
    }
    Ok(rules)
}

/// Read every source. Standard input is read once; files that cannot be
/// read are reported and skipped. Invalid UTF-8 is replaced.
///
/// # Errors
/// Returns an error if standard input cannot be read.
pub(crate) fn read_sources(sources: &[SourceInput], quiet: bool) -> Result<Vec<LoadedSource>> {
    let stdin = if sources.contains(&SourceInput::Stdin) {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        Some(String::from_utf8_lossy(&buffer).into_owned())
    } else {
        None
    };

    let loaded = sources
        .par_iter()
        .filter_map(|source| {
            let content = match source {
                SourceInput::Stdin => stdin.clone(),
                SourceInput::File(path) => match fs::read(path) {
                    Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
                    Err(e) => {
                        if !quiet {
                            print_warning(
                                &format!("Skipping unreadable file: {}", path.display()),
                                Some(&e.to_string()),
                            );
                        }
                        None
                    }
                },
            };
            content.map(|content| LoadedSource {
                name: source.display_name(),
                content,
            })
        })
        .collect();
    Ok(loaded)
}

/// Write output to a file or stdout.
///
/// File writes create missing parent directories and ignore `quiet`.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub(crate) fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

/// Print `error` to stderr with its detail and help lines.
pub(crate) fn report_error(error: &RpgGuardError) {
    print_error_full(
        error.error_type(),
        &error.to_string(),
        error.detail().as_deref(),
        error.suggestion(),
    );
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
