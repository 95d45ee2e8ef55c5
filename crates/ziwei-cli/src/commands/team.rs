use serde::Serialize;
use ziwei_config::ZiweiConfig;
use ziwei_core::enums::RoleGroupKey;
use ziwei_core::responses::RoleGroupProfile;
use ziwei_engine::role_group::{catalog, classify_chart_groups};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ChartArgs;
use crate::commands::load_chart;
use crate::output::output;

/// Catalog copy for a group present in the team palace.
#[derive(Debug, Serialize)]
pub struct GroupDetail {
    pub key: RoleGroupKey,
    pub title: &'static str,
    pub traits: &'static [&'static str],
    pub occupations: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct TeamResponse {
    #[serde(flatten)]
    pub profile: RoleGroupProfile,
    pub details: Vec<GroupDetail>,
}

/// Handle `ziwei team`.
pub fn handle(args: &ChartArgs, config: &ZiweiConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&run(args, config)?, flags.format)
}

pub fn run(args: &ChartArgs, config: &ZiweiConfig) -> anyhow::Result<TeamResponse> {
    let chart = load_chart(&args.chart)?;
    let profile = classify_chart_groups(&chart, &config.scoring);
    let details = profile
        .present_groups
        .iter()
        .map(|&key| {
            let entry = catalog::entry(key);
            GroupDetail {
                key,
                title: entry.title,
                traits: entry.traits,
                occupations: entry.occupations,
            }
        })
        .collect();
    Ok(TeamResponse { profile, details })
}
