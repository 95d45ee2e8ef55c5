use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Current 10-year cycle for an age.
    Cycle(CycleArgs),
    /// Wealth archetype profile.
    Archetype(ChartArgs),
    /// Team role-group profile.
    Team(ChartArgs),
    /// Archetype for a single month.
    Month(MonthArgs),
    /// Month plan starting after a date.
    Plan(PlanArgs),
    /// Full report: cycle, archetypes, team, and month plan.
    Report(ReportArgs),
    /// Check chart structure and cycle coverage.
    Validate(ChartArgs),
    /// Dump JSON schema for a chart or report type.
    Schema(SchemaArgs),
    /// Print the effective configuration as TOML.
    Config,
}

/// Chart input shared by every chart command.
#[derive(Clone, Debug, Args)]
pub struct ChartArgs {
    /// Chart JSON file produced by the chart generator.
    #[arg(long, value_name = "FILE")]
    pub chart: PathBuf,
}

/// Arguments for `ziwei cycle`.
#[derive(Clone, Debug, Args)]
pub struct CycleArgs {
    #[command(flatten)]
    pub input: ChartArgs,
    /// Age to resolve.
    #[arg(long)]
    pub age: i32,
}

/// Arguments for `ziwei month`.
#[derive(Clone, Debug, Args)]
pub struct MonthArgs {
    #[command(flatten)]
    pub input: ChartArgs,
    /// Reference year whose annual flow anchors the rotation.
    #[arg(long)]
    pub year: i32,
    /// Calendar month.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,
}

/// Arguments for `ziwei plan`.
#[derive(Clone, Debug, Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub input: ChartArgs,
    /// Creation date (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Months to plan; defaults to `plan.horizon_months`.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub months: Option<u32>,
}

/// Arguments for `ziwei report`.
#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: ChartArgs,
    /// Age to resolve; defaults to the nominal age on `--date`.
    #[arg(long)]
    pub age: Option<i32>,
    /// Creation date (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

/// Arguments for `ziwei schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type to describe.
    #[arg(value_enum)]
    pub kind: SchemaKind,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaKind {
    /// Chart input document.
    Chart,
    /// Full report output.
    Report,
}
