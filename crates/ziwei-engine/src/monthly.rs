//! Month-level archetype mapping.
//!
//! The palace carrying the reference year's annual flow (`P0`) anchors a
//! rotation of the twelve palaces over the twelve months. The month index of
//! palace `P` is
//!
//! ```text
//! month(P) = (start + ((P - P0) mod 12)) mod 12
//! ```
//!
//! where `start` is the category ordinal of the palace at the 10th position
//! of the chart. For a given month the chart is relabeled so that palace `P`
//! becomes the Life palace, and the wealth scorer runs on the relabeled chart
//! unchanged.
//!
//! A plan covers the months after a creation date. Each month keeps its top
//! archetype unless an earlier month already claimed it, in which case the
//! month takes its highest unclaimed archetype instead.

use chrono::{Datelike, NaiveDate};
use ziwei_config::ScoringConfig;
use ziwei_core::entities::{Chart, PALACE_COUNT, Palace};
use ziwei_core::enums::{ArchetypeKey, PalaceKind};
use ziwei_core::errors::CoreError;
use ziwei_core::responses::{ArchetypeProfile, MonthlyPlan, PlannedMonth};

use crate::archetype;
use crate::error::EngineError;

/// Chart position whose category seeds the month rotation.
pub const START_POSITION: usize = 9;

/// Months in the default plan.
pub const DEFAULT_HORIZON: u32 = 3;

const CYCLE: u8 = 12;

/// Palace whose annual flow equals `reference_year`.
#[must_use]
pub fn annual_palace(chart: &Chart, reference_year: i32) -> Option<&Palace> {
    chart
        .palaces()
        .iter()
        .find(|p| p.annual_flow.is_some_and(|flow| flow.year == reference_year))
}

/// Month index the rotation starts from.
#[must_use]
pub fn starting_month_index(chart: &Chart) -> Option<u8> {
    chart
        .palace_at(START_POSITION)
        .and_then(|palace| u8::try_from(palace.kind.ordinal()).ok())
}

/// Month index (0-11) governed by palace `palace_number`.
#[must_use]
pub const fn month_for_palace(start: u8, anchor: u8, palace_number: u8) -> u8 {
    let offset = (palace_number % CYCLE + CYCLE - anchor % CYCLE) % CYCLE;
    (start % CYCLE + offset) % CYCLE
}

/// Palace number (1-12) governing `month_index`.
#[must_use]
pub fn palace_for_month(start: u8, anchor: u8, month_index: u8) -> Option<u8> {
    (1..=CYCLE).find(|&number| month_for_palace(start, anchor, number) == month_index)
}

/// Copy of `chart` where palace `pivot` becomes the Life palace and every
/// other palace is renamed to keep the wheel order.
pub fn relabel_chart(chart: &Chart, pivot: u8) -> Result<Chart, CoreError> {
    let palaces = chart
        .palaces()
        .iter()
        .map(|palace| {
            let steps =
                (usize::from(pivot) + PALACE_COUNT - usize::from(palace.number)) % PALACE_COUNT;
            let mut relabeled = palace.clone();
            relabeled.kind = PalaceKind::from_ordinal(steps);
            relabeled
        })
        .collect();
    Chart::new(chart.subject().clone(), palaces)
}

/// A month that could be mapped onto a palace.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthResolution {
    pub month_index: u8,
    pub palace_number: u8,
    /// Category of the governing palace in the natal chart.
    pub governing_palace: PalaceKind,
    /// Wealth profile of the relabeled chart.
    pub profile: ArchetypeProfile,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MonthOutcome {
    Resolved(MonthResolution),
    /// The month cannot be mapped; the string says why.
    Unavailable(String),
}

/// Map one month onto its governing palace and score it.
pub fn resolve_month(
    chart: &Chart,
    reference_year: i32,
    month_index: u8,
    config: &ScoringConfig,
) -> Result<MonthOutcome, EngineError> {
    if month_index >= CYCLE {
        return Err(EngineError::InvalidArgument(format!(
            "month index {month_index} is outside 0..=11"
        )));
    }

    let Some(anchor) = annual_palace(chart, reference_year) else {
        tracing::debug!(reference_year, "no palace carries the annual flow");
        return Ok(MonthOutcome::Unavailable(format!(
            "no palace carries the annual flow for {reference_year}"
        )));
    };
    let Some(start) = starting_month_index(chart) else {
        return Ok(MonthOutcome::Unavailable(
            "chart has no palace at the rotation start position".to_string(),
        ));
    };
    let Some(palace) =
        palace_for_month(start, anchor.number, month_index).and_then(|n| chart.palace(n))
    else {
        return Ok(MonthOutcome::Unavailable(format!(
            "no palace governs month index {month_index}"
        )));
    };

    let relabeled = relabel_chart(chart, palace.number)?;
    Ok(MonthOutcome::Resolved(MonthResolution {
        month_index,
        palace_number: palace.number,
        governing_palace: palace.kind,
        profile: archetype::profile_chart(&relabeled, config),
    }))
}

/// Top archetype for a month, or `None` when the month cannot be mapped or
/// its wealth palace has no recognized markers.
pub fn map_month_to_archetypes(
    chart: &Chart,
    reference_year: i32,
    month_index: u8,
    config: &ScoringConfig,
) -> Result<Option<ArchetypeKey>, EngineError> {
    Ok(match resolve_month(chart, reference_year, month_index, config)? {
        MonthOutcome::Resolved(resolution) => resolution.profile.top(),
        MonthOutcome::Unavailable(_) => None,
    })
}

/// Archetype chosen for a month after deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DedupChoice {
    pub key: ArchetypeKey,
    /// Original top when it was already claimed by an earlier month.
    pub replaced: Option<ArchetypeKey>,
    /// Every archetype was already claimed; the top was kept anyway.
    pub duplicate: bool,
}

/// Greedy left-to-right deduplication of ranked archetype lists.
///
/// Months without a ranking stay `None` and claim nothing.
#[must_use]
pub fn dedupe_top_archetypes(rankings: &[Option<Vec<ArchetypeKey>>]) -> Vec<Option<DedupChoice>> {
    let mut claimed: Vec<ArchetypeKey> = Vec::with_capacity(rankings.len());
    rankings
        .iter()
        .enumerate()
        .map(|(position, ranking)| {
            let ranking = ranking.as_deref()?;
            let top = *ranking.first()?;

            let choice = match ranking.iter().copied().find(|key| !claimed.contains(key)) {
                Some(key) => DedupChoice {
                    key,
                    replaced: (key != top).then_some(top),
                    duplicate: false,
                },
                None => {
                    tracing::warn!(
                        position,
                        archetype = top.as_str(),
                        "every archetype already claimed, keeping duplicate"
                    );
                    DedupChoice {
                        key: top,
                        replaced: None,
                        duplicate: true,
                    }
                }
            };

            if !claimed.contains(&choice.key) {
                claimed.push(choice.key);
            }
            Some(choice)
        })
        .collect()
}

/// Calendar months `(year, month)` following `creation_date`.
#[must_use]
pub fn months_after(creation_date: NaiveDate, count: u32) -> Vec<(i32, u32)> {
    let mut year = creation_date.year();
    let mut month = creation_date.month();
    (0..count)
        .map(|_| {
            if month == 12 {
                year += 1;
                month = 1;
            } else {
                month += 1;
            }
            (year, month)
        })
        .collect()
}

/// Plan for `horizon` months after `creation_date`.
///
/// Every month resolves against the annual flow of the creation year.
pub fn build_month_plan(
    chart: &Chart,
    creation_date: NaiveDate,
    horizon: u32,
    config: &ScoringConfig,
) -> Result<MonthlyPlan, EngineError> {
    let reference_year = creation_date.year();
    let mut months = Vec::new();
    let mut rankings = Vec::new();

    for (year, month) in months_after(creation_date, horizon) {
        let month_index = u8::try_from(month - 1)
            .map_err(|_| EngineError::InvalidArgument(format!("month {month} is out of range")))?;
        let label = format!("{year}年{month}月");
        let mut planned = PlannedMonth {
            year,
            month,
            month_index,
            label,
            archetype: None,
            governing_palace: None,
            palace_number: None,
            replaced: None,
            duplicate: false,
            reason: None,
        };

        let ranking = match resolve_month(chart, reference_year, month_index, config)? {
            MonthOutcome::Resolved(resolution) => {
                planned.governing_palace = Some(resolution.governing_palace);
                planned.palace_number = Some(resolution.palace_number);
                if resolution.profile.recognized_any {
                    Some(resolution.profile.vector.iter().map(|e| e.key).collect())
                } else {
                    planned.reason = Some(format!(
                        "no recognized wealth markers for {}",
                        planned.label
                    ));
                    None
                }
            }
            MonthOutcome::Unavailable(reason) => {
                planned.reason = Some(reason);
                None
            }
        };

        months.push(planned);
        rankings.push(ranking);
    }

    for (planned, choice) in months.iter_mut().zip(dedupe_top_archetypes(&rankings)) {
        if let Some(choice) = choice {
            planned.archetype = Some(choice.key);
            planned.replaced = choice.replaced;
            planned.duplicate = choice.duplicate;
        }
    }

    Ok(MonthlyPlan {
        reference_year,
        months,
    })
}

/// Plan for the three months after `creation_date`.
pub fn build_three_month_plan(
    chart: &Chart,
    creation_date: NaiveDate,
    config: &ScoringConfig,
) -> Result<MonthlyPlan, EngineError> {
    build_month_plan(chart, creation_date, DEFAULT_HORIZON, config)
}
