use serde::Serialize;

use crate::engine::{CheckReport, Summary};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    summary: JsonSummary,
    reports: &'a [CheckReport],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    total_files: usize,
    valid_files: usize,
    #[serde(flatten)]
    totals: Summary,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[CheckReport]) -> Result<String> {
        let output = JsonOutput {
            summary: JsonSummary {
                total_files: reports.len(),
                valid_files: reports.iter().filter(|report| report.valid).count(),
                totals: CheckReport::aggregate(reports),
            },
            reports,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
