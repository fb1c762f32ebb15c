use rayon::prelude::*;

use crate::cli::{CheckArgs, Cli};
use crate::config::Config;
use crate::engine::{CheckReport, Engine, EngineOptions};
use crate::output::{
    ColorMode, JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter, ScanProgress,
    TextFormatter,
};
use crate::scanner::collect_sources;
use crate::{EXIT_CONFIG_ERROR, EXIT_ISSUES_FOUND, EXIT_SUCCESS, Result};

use super::context::{
    color_choice_to_mode, load_config, load_custom_rules, read_sources, report_error,
    resolve_rules_path, write_output,
};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// # Errors
/// Returns an error if configuration, custom rules or output cannot be
/// loaded or written.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Configuration with CLI overrides
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);

    // 2. Engine with compiled custom rules
    let rules_path = resolve_rules_path(None, &config);
    let custom_rules = load_custom_rules(&rules_path, cli.quiet)?;
    let engine = Engine::new(EngineOptions::from_config(&config.check, custom_rules));

    // 3. Sources
    let sources = collect_sources(&args.paths, &config.scanner, &args.exclude)?;
    let inputs = read_sources(&sources, cli.quiet)?;

    // 4. Check in parallel; report order follows source order
    let progress = ScanProgress::new(inputs.len() as u64, cli.quiet, "Checking");
    let reports: Vec<CheckReport> = inputs
        .par_iter()
        .map(|input| {
            let report = engine.check_scoped(&input.content, Some(&input.name), args.only);
            progress.inc();
            report
        })
        .collect();
    progress.finish();

    // 5. Output
    let color_mode = if args.output.is_some() {
        ColorMode::Never
    } else {
        color_choice_to_mode(cli.color)
    };
    let output = format_reports(&reports, args.format, color_mode, cli.verbose)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(check_exit_code(
        &reports,
        args.warn_only,
        args.warnings_as_errors,
    ))
}

fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(level) = args.level {
        config.check.level = level;
    }
    if args.dbcs {
        config.check.consider_dbcs = true;
    }
    if let Some(max) = args.max_line_length {
        config.check.max_line_length = max;
    }
    if let Some(ref path) = args.custom_rules {
        config.check.custom_rules = Some(path.clone());
    }
    config.check.disabled_rules.extend(args.disable.iter().cloned());
    if let Some(ref extensions) = args.ext {
        config.scanner.extensions.clone_from(extensions);
    }
}

fn format_reports(
    reports: &[CheckReport],
    format: OutputFormat,
    color_mode: ColorMode,
    verbose: u8,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(reports),
        OutputFormat::Json => JsonFormatter.format(reports),
        OutputFormat::Markdown => MarkdownFormatter::new(verbose > 0).format(reports),
    }
}

/// Exit code for a finished check: 1 when any report has errors, or has
/// warnings and `warnings_as_errors` is set. `warn_only` always yields 0.
#[must_use]
pub fn check_exit_code(reports: &[CheckReport], warn_only: bool, warnings_as_errors: bool) -> i32 {
    if warn_only {
        return EXIT_SUCCESS;
    }
    let failed = reports
        .iter()
        .any(|report| !report.valid || (warnings_as_errors && report.has_warnings()));
    if failed { EXIT_ISSUES_FOUND } else { EXIT_SUCCESS }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
