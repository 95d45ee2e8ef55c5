//! Team-fit role groups from a palace's markers.
//!
//! Each group scores by coverage: how many distinct members of the group
//! appear in the palace. One member lands at 6, the full set at 10.

pub mod catalog;

use ziwei_config::ScoringConfig;
use ziwei_core::entities::{Chart, Marker};
use ziwei_core::enums::RoleGroupKey;
use ziwei_core::responses::{RoleGroupProfile, RoleGroupScore, ScoreSource};

use crate::archetype::round_score;

/// Group scores plus presence partition, without chart provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupClassification {
    pub scores: Vec<RoleGroupScore>,
    pub present_groups: Vec<RoleGroupKey>,
    pub missing_groups: Vec<RoleGroupKey>,
}

impl GroupClassification {
    /// True when at least one marker matched a group.
    #[must_use]
    pub fn any_present(&self) -> bool {
        !self.present_groups.is_empty()
    }
}

/// Coverage score for `count` distinct members of a group of `size`.
///
/// The result is clamped to `[0, 10]` and rounded to one decimal like every
/// archetype score, so 2 of 7 members yields 6.7 rather than 6.666...
#[must_use]
pub fn coverage_score(count: u32, size: u32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    if size <= 1 {
        return 10.0;
    }
    let raw = 6.0 + f64::from(count - 1) / f64::from(size - 1) * 4.0;
    round_score(raw)
}

/// Score every group against `markers`. Unmatched markers are ignored.
pub fn classify_groups<'a>(markers: impl IntoIterator<Item = &'a Marker>) -> GroupClassification {
    let mut matched: [Vec<String>; 4] = Default::default();
    for marker in markers {
        let name = marker.canonical_name();
        if let Some(key) = catalog::group_of(name) {
            let slot = &mut matched[key.ordinal()];
            if !slot.iter().any(|existing| existing == name) {
                slot.push(name.to_string());
            }
        }
    }

    let scores: Vec<RoleGroupScore> = RoleGroupKey::ALL
        .iter()
        .zip(matched)
        .map(|(&key, matched_markers)| {
            let count = u32::try_from(matched_markers.len()).unwrap_or(u32::MAX);
            RoleGroupScore {
                key,
                score: coverage_score(count, catalog::entry(key).size()),
                count,
                matched_markers,
            }
        })
        .collect();

    let (present, missing): (Vec<_>, Vec<_>) = scores.iter().partition(|s| s.count > 0);
    GroupClassification {
        present_groups: present.iter().map(|s| s.key).collect(),
        missing_groups: missing.iter().map(|s| s.key).collect(),
        scores,
    }
}

/// Role groups of a chart's team palace, substituting the configured fallback
/// palace when the team palace has no recognized markers.
#[must_use]
pub fn classify_chart_groups(chart: &Chart, config: &ScoringConfig) -> RoleGroupProfile {
    let primary = chart.palace_of(config.team_palace);
    let mut used = primary;
    let mut substituted = false;
    let mut classification = classify_groups(primary.markers.natal());

    if !classification.any_present() {
        let fallback = chart.palace_of(config.team_fallback);
        let candidate = classify_groups(fallback.markers.natal());
        if candidate.any_present() {
            tracing::debug!(
                primary = primary.kind.english(),
                fallback = fallback.kind.english(),
                "team palace has no recognized markers, using substitute palace"
            );
            classification = candidate;
            used = fallback;
            substituted = true;
        }
    }

    let source = classification.any_present().then_some(ScoreSource {
        palace_number: used.number,
        palace: used.kind,
        substituted,
    });

    RoleGroupProfile {
        scores: classification.scores,
        present_groups: classification.present_groups,
        missing_groups: classification.missing_groups,
        source,
    }
}
