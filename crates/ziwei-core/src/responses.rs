//! Report output types consumed by the rendering layer.
//!
//! Absence is explicit everywhere: a cycle is `None`, an archetype profile has
//! `recognized_any = false`, a planned month has `archetype = None` plus a reason.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Subject;
use crate::enums::{ArchetypeKey, CyclePhase, PalaceKind, ProfileShape, RoleGroupKey, SeasonCategory};

/// Compact description of a neighbouring 10-year cycle.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CycleSummary {
    pub palace_number: u8,
    pub palace: PalaceKind,
    pub season: SeasonCategory,
    pub start_age: i32,
    pub end_age: i32,
    pub start_year: i32,
    pub end_year: i32,
}

/// The 10-year cycle containing the subject's current age.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CycleResult {
    pub palace_number: u8,
    pub palace: PalaceKind,
    pub season: SeasonCategory,
    pub theme: String,
    pub message: String,
    pub age: i32,
    pub start_age: i32,
    pub end_age: i32,
    pub start_year: i32,
    pub end_year: i32,
    pub current_year: i32,
    /// 1-based year inside the cycle.
    pub year_in_cycle: i32,
    pub phase: CyclePhase,
    pub previous: Option<CycleSummary>,
    pub next: Option<CycleSummary>,
}

/// One entry of a ranked archetype vector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ArchetypeScore {
    pub key: ArchetypeKey,
    pub score: f64,
}

/// Which palace's markers a score was computed from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScoreSource {
    pub palace_number: u8,
    pub palace: PalaceKind,
    /// True when the designated palace was empty and a substitute was used.
    pub substituted: bool,
}

/// Wealth archetype profile.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ArchetypeProfile {
    pub recognized_any: bool,
    /// Sorted descending by score; empty when nothing was recognized.
    pub vector: Vec<ArchetypeScore>,
    pub shape: Option<ProfileShape>,
    pub source: Option<ScoreSource>,
    pub recognized_markers: Vec<String>,
    pub strengths: Vec<String>,
    pub blind_spots: Vec<String>,
    pub ideal_roles: Vec<String>,
    pub non_ideal_roles: Vec<String>,
}

impl ArchetypeProfile {
    /// Highest-ranked archetype, if any marker was recognized.
    #[must_use]
    pub fn top(&self) -> Option<ArchetypeKey> {
        self.vector.first().map(|entry| entry.key)
    }
}

/// Coverage score of one role group.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RoleGroupScore {
    pub key: RoleGroupKey,
    pub score: f64,
    pub count: u32,
    pub matched_markers: Vec<String>,
}

/// Role-group classification of the team palace.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RoleGroupProfile {
    /// One entry per group, in catalog order.
    pub scores: Vec<RoleGroupScore>,
    pub present_groups: Vec<RoleGroupKey>,
    pub missing_groups: Vec<RoleGroupKey>,
    pub source: Option<ScoreSource>,
}

/// One month of a month plan.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PlannedMonth {
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// 0-based month index used by the palace rotation.
    pub month_index: u8,
    pub label: String,
    pub archetype: Option<ArchetypeKey>,
    /// Palace governing the month; keys month-specific guidance content.
    pub governing_palace: Option<PalaceKind>,
    pub palace_number: Option<u8>,
    /// Original top archetype when deduplication replaced it.
    pub replaced: Option<ArchetypeKey>,
    /// True when every archetype was already claimed and the duplicate was kept.
    pub duplicate: bool,
    /// Why `archetype` is `None`.
    pub reason: Option<String>,
}

/// Month-by-month archetype plan.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MonthlyPlan {
    pub reference_year: i32,
    pub months: Vec<PlannedMonth>,
}

/// Everything the report layer needs for one subject.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FortuneReport {
    pub subject: Subject,
    pub age: i32,
    pub cycle: Option<CycleResult>,
    pub archetypes: ArchetypeProfile,
    pub role_groups: RoleGroupProfile,
    pub plan: MonthlyPlan,
}
