use anyhow::Context;
use serde::Serialize;
use ziwei_config::ZiweiConfig;
use ziwei_core::enums::{ArchetypeKey, PalaceKind};
use ziwei_engine::monthly::{MonthOutcome, resolve_month};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MonthArgs;
use crate::commands::load_chart;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct MonthResponse {
    pub year: i32,
    pub month: u32,
    pub month_index: u8,
    pub palace_number: Option<u8>,
    pub governing_palace: Option<PalaceKind>,
    pub archetype: Option<ArchetypeKey>,
    pub label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Handle `ziwei month`.
pub fn handle(args: &MonthArgs, config: &ZiweiConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&run(args, config)?, flags.format)
}

pub fn run(args: &MonthArgs, config: &ZiweiConfig) -> anyhow::Result<MonthResponse> {
    let chart = load_chart(&args.input.chart)?;
    let month_index = u8::try_from(args.month.saturating_sub(1))
        .context("month must be between 1 and 12")?;

    let mut response = MonthResponse {
        year: args.year,
        month: args.month,
        month_index,
        palace_number: None,
        governing_palace: None,
        archetype: None,
        label: None,
        reason: None,
    };

    match resolve_month(&chart, args.year, month_index, &config.scoring)? {
        MonthOutcome::Resolved(resolution) => {
            response.palace_number = Some(resolution.palace_number);
            response.governing_palace = Some(resolution.governing_palace);
            response.archetype = resolution.profile.top();
            response.label = response.archetype.map(ArchetypeKey::label);
            if response.archetype.is_none() {
                response.reason = Some("no recognized wealth markers for this month".to_string());
            }
        }
        MonthOutcome::Unavailable(reason) => response.reason = Some(reason),
    }

    Ok(response)
}
