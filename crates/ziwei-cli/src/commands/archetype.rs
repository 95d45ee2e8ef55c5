use serde::Serialize;
use ziwei_config::ZiweiConfig;
use ziwei_core::responses::ArchetypeProfile;
use ziwei_engine::archetype::{catalog, profile_chart};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ChartArgs;
use crate::commands::load_chart;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct ArchetypeResponse {
    /// Label of the top archetype, e.g. "strategy-oriented".
    pub label: Option<&'static str>,
    pub title: Option<&'static str>,
    #[serde(flatten)]
    pub profile: ArchetypeProfile,
}

/// Handle `ziwei archetype`.
pub fn handle(args: &ChartArgs, config: &ZiweiConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&run(args, config)?, flags.format)
}

pub fn run(args: &ChartArgs, config: &ZiweiConfig) -> anyhow::Result<ArchetypeResponse> {
    let chart = load_chart(&args.chart)?;
    let profile = profile_chart(&chart, &config.scoring);
    let top = profile.top();
    Ok(ArchetypeResponse {
        label: top.map(|key| key.label()),
        title: top.map(|key| catalog::entry(key).title),
        profile,
    })
}
