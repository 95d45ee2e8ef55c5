use serde::Serialize;
use ziwei_core::responses::CycleResult;
use ziwei_engine::cycle::resolve_current_cycle;
use ziwei_engine::season::{self, SeasonAccent};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CycleArgs;
use crate::commands::load_chart;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct CycleResponse {
    pub age: i32,
    pub cycle: Option<CycleResult>,
    /// Display colour and icon for the cycle's season.
    pub accent: Option<SeasonAccent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Handle `ziwei cycle`.
pub fn handle(args: &CycleArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&run(args)?, flags.format)
}

pub fn run(args: &CycleArgs) -> anyhow::Result<CycleResponse> {
    let chart = load_chart(&args.input.chart)?;
    let cycle = resolve_current_cycle(&chart, args.age);
    let accent = cycle.as_ref().map(|c| season::accent(c.season));
    let reason = cycle
        .is_none()
        .then(|| format!("no 10-year cycle covers age {}", args.age));
    Ok(CycleResponse {
        age: args.age,
        cycle,
        accent,
        reason,
    })
}

#[cfg(test)]
mod tests {
    use ziwei_core::enums::PalaceKind;

    use super::*;
    use crate::cli::root_commands::ChartArgs;
    use crate::commands::test_support::sample_chart_file;

    #[test]
    fn resolves_cycle_from_file() {
        let (_dir, chart) = sample_chart_file();
        let response = run(&CycleArgs {
            input: ChartArgs { chart },
            age: 36,
        })
        .unwrap();
        assert_eq!(response.cycle.unwrap().palace, PalaceKind::Property);
        assert_eq!(response.accent.unwrap().icon, "leaf");
        assert!(response.reason.is_none());
    }

    #[test]
    fn uncovered_age_has_reason() {
        let (_dir, chart) = sample_chart_file();
        let response = run(&CycleArgs {
            input: ChartArgs { chart },
            age: 1,
        })
        .unwrap();
        assert!(response.cycle.is_none());
        assert!(response.reason.unwrap().contains("age 1"));
    }
}
