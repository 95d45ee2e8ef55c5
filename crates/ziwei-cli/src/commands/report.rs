use ziwei_config::ZiweiConfig;
use ziwei_core::responses::FortuneReport;
use ziwei_engine::ReportRequest;
use ziwei_engine::report::nominal_age;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReportArgs;
use crate::commands::{load_chart, today};
use crate::output::output;

/// Handle `ziwei report`.
pub fn handle(args: &ReportArgs, config: &ZiweiConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&run(args, config)?, flags.format)
}

pub fn run(args: &ReportArgs, config: &ZiweiConfig) -> anyhow::Result<FortuneReport> {
    let chart = load_chart(&args.input.chart)?;
    let creation_date = args.date.unwrap_or_else(today);
    let request = ReportRequest {
        age: args
            .age
            .unwrap_or_else(|| nominal_age(chart.subject().birth_year, creation_date)),
        creation_date,
    };
    Ok(ziwei_engine::build_report(&chart, &request, config)?)
}
