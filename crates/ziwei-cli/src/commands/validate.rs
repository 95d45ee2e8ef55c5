use serde::Serialize;
use ziwei_core::entities::CoverageReport;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ChartArgs;
use crate::commands::load_chart;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<CoverageReport>,
}

/// Handle `ziwei validate`. Exits non-zero when the chart is invalid.
pub fn handle(args: &ChartArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = run(args);
    output(&response, flags.format)?;
    if !response.valid {
        anyhow::bail!("chart {} failed validation", args.chart.display());
    }
    Ok(())
}

pub fn run(args: &ChartArgs) -> ValidateResponse {
    match load_chart(&args.chart) {
        Ok(chart) => {
            let coverage = chart.check_coverage();
            ValidateResponse {
                valid: coverage.is_contiguous(),
                error: (!coverage.is_contiguous())
                    .then(|| "10-year cycles have gaps or overlaps".to_string()),
                coverage: Some(coverage),
            }
        }
        Err(error) => ValidateResponse {
            valid: false,
            error: Some(format!("{error:#}")),
            coverage: None,
        },
    }
}
