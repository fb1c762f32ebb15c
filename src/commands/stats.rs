use rayon::prelude::*;

use crate::cli::{Cli, StatsArgs};
use crate::counter::LineStatistics;
use crate::output::{
    FileStatistics, ProjectStatistics, ScanProgress, StatsFormat, StatsFormatter,
    StatsJsonFormatter, StatsTextFormatter,
};
use crate::parser::classify;
use crate::scanner::collect_sources;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{LoadedSource, load_config, read_sources, report_error, write_output};

#[must_use]
pub fn run_stats(args: &StatsArgs, cli: &Cli) -> i32 {
    match run_stats_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// # Errors
/// Returns an error if configuration cannot be loaded or output cannot be
/// written.
pub fn run_stats_impl(args: &StatsArgs, cli: &Cli) -> Result<i32> {
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    if let Some(ref extensions) = args.ext {
        config.scanner.extensions.clone_from(extensions);
    }

    let sources = collect_sources(&args.paths, &config.scanner, &args.exclude)?;
    let inputs = read_sources(&sources, cli.quiet)?;

    let progress = ScanProgress::new(inputs.len() as u64, cli.quiet, "Counting");
    let files: Vec<FileStatistics> = inputs
        .par_iter()
        .map(|input| {
            let stats = file_statistics(input);
            progress.inc();
            stats
        })
        .collect();
    progress.finish();

    let project = ProjectStatistics::new(files);
    let output = match args.format {
        StatsFormat::Text => StatsTextFormatter.format(&project)?,
        StatsFormat::Json => StatsJsonFormatter.format(&project)?,
    };
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(EXIT_SUCCESS)
}

fn file_statistics(input: &LoadedSource) -> FileStatistics {
    FileStatistics {
        path: input.name.clone(),
        stats: LineStatistics::collect(&classify(&input.content)),
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
