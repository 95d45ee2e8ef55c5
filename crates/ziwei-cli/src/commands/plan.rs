use ziwei_config::ZiweiConfig;
use ziwei_core::responses::MonthlyPlan;
use ziwei_engine::monthly::build_month_plan;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PlanArgs;
use crate::commands::{load_chart, today};
use crate::output::output;

/// Handle `ziwei plan`.
pub fn handle(args: &PlanArgs, config: &ZiweiConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&run(args, config)?, flags.format)
}

pub fn run(args: &PlanArgs, config: &ZiweiConfig) -> anyhow::Result<MonthlyPlan> {
    let chart = load_chart(&args.input.chart)?;
    let creation_date = args.date.unwrap_or_else(today);
    let horizon = args.months.unwrap_or(config.plan.horizon_months);
    Ok(build_month_plan(
        &chart,
        creation_date,
        horizon,
        &config.scoring,
    )?)
}
