use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use ziwei_config::ZiweiConfig;
use ziwei_core::entities::Chart;

use crate::cli::{Commands, GlobalFlags};

pub mod archetype;
pub mod cycle;
pub mod month;
pub mod plan;
pub mod report;
pub mod schema;
pub mod show_config;
pub mod team;
pub mod validate;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, config: &ZiweiConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Cycle(args) => cycle::handle(args, flags),
        Commands::Archetype(args) => archetype::handle(args, config, flags),
        Commands::Team(args) => team::handle(args, config, flags),
        Commands::Month(args) => month::handle(args, config, flags),
        Commands::Plan(args) => plan::handle(args, config, flags),
        Commands::Report(args) => report::handle(args, config, flags),
        Commands::Validate(args) => validate::handle(args, flags),
        Commands::Schema(args) => schema::handle(args, flags),
        Commands::Config => show_config::handle(config),
    }
}

/// Read and validate a chart file.
pub fn load_chart(path: &Path) -> anyhow::Result<Chart> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read chart file {}", path.display()))?;
    Chart::from_json(&raw).with_context(|| format!("invalid chart in {}", path.display()))
}

/// Local calendar date, used when `--date` is omitted.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
