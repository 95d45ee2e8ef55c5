//! Wealth archetype scoring.
//!
//! Recognized markers of the designated palace are aggregated per archetype
//! with diminishing weights: the i-th contribution (0-indexed, input order)
//! weighs `1/(i+1)` and the score is the weighted mean. Duplicate or weak
//! markers therefore cannot push a score past what the strongest evidence
//! supports.
//!
//! Scores are clamped to `[0, 10]`, rounded to one decimal, and ranked
//! descending with catalog order breaking ties.

pub mod catalog;

use ziwei_config::ScoringConfig;
use ziwei_core::entities::{Chart, Marker};
use ziwei_core::enums::{ArchetypeKey, ProfileShape};
use ziwei_core::responses::{ArchetypeProfile, ArchetypeScore, ScoreSource};

use catalog::MarkerContribution;

pub const STRENGTH_LIMIT: usize = 4;
pub const BLIND_SPOT_LIMIT: usize = 4;
pub const IDEAL_ROLE_LIMIT: usize = 6;
pub const NON_IDEAL_ROLE_LIMIT: usize = 4;

/// Outcome of scoring a marker set.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchetypeScoring {
    /// Ranked vector; empty when nothing was recognized.
    pub vector: Vec<ArchetypeScore>,
    pub recognized_any: bool,
    /// True when the primary set had no recognized markers and the fallback set was used.
    pub used_fallback: bool,
    /// Canonical names of the markers that contributed, in input order.
    pub recognized_markers: Vec<String>,
}

/// Copy pulled from the top two archetypes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Guidance {
    pub strengths: Vec<String>,
    pub blind_spots: Vec<String>,
    pub ideal_roles: Vec<String>,
    pub non_ideal_roles: Vec<String>,
}

/// Catalog entries for every recognized marker, in input order.
pub fn recognize<'a>(
    markers: impl IntoIterator<Item = &'a Marker>,
) -> Vec<&'static MarkerContribution> {
    markers
        .into_iter()
        .filter_map(|marker| catalog::lookup(marker.canonical_name()))
        .collect()
}

/// Score a primary marker set, falling back once to `fallback` when the
/// primary set has no recognized markers.
///
/// An empty result (`recognized_any == false`) is an expected outcome for
/// sparse charts, not a fault.
pub fn score_archetypes<'a, 'b>(
    primary: impl IntoIterator<Item = &'a Marker>,
    fallback: impl IntoIterator<Item = &'b Marker>,
) -> ArchetypeScoring {
    let mut recognized = recognize(primary);
    let mut used_fallback = false;
    if recognized.is_empty() {
        recognized = recognize(fallback);
        used_fallback = !recognized.is_empty();
    }

    ArchetypeScoring {
        vector: rank(&recognized),
        recognized_any: !recognized.is_empty(),
        used_fallback,
        recognized_markers: recognized.iter().map(|c| c.marker.to_string()).collect(),
    }
}

/// Ranked score vector for a set of recognized markers. Empty input yields an
/// empty vector.
#[must_use]
pub fn rank(recognized: &[&MarkerContribution]) -> Vec<ArchetypeScore> {
    if recognized.is_empty() {
        return Vec::new();
    }

    let mut vector: Vec<ArchetypeScore> = ArchetypeKey::ALL
        .iter()
        .map(|&key| {
            let aggregate =
                diminishing_average(recognized.iter().map(|c| c.score_for(key))).unwrap_or(0.0);
            ArchetypeScore {
                key,
                score: round_score(aggregate),
            }
        })
        .collect();

    // Stable: equal scores keep catalog order.
    vector.sort_by(|a, b| b.score.total_cmp(&a.score));
    vector
}

/// Weighted mean with weight `1/(i+1)` for the i-th value. `None` for no values.
pub fn diminishing_average(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    let mut position = 0.0;
    for value in values {
        position += 1.0;
        let weight = 1.0 / position;
        weighted_sum += value * weight;
        weight_sum += weight;
    }
    (weight_sum > 0.0).then(|| weighted_sum / weight_sum)
}

/// Clamp to `[0, 10]` and round to one decimal.
#[must_use]
pub fn round_score(score: f64) -> f64 {
    (score.clamp(0.0, 10.0) * 10.0).round() / 10.0
}

/// Shape of a ranked vector. `None` for an empty vector.
#[must_use]
pub fn classify_profile(vector: &[ArchetypeScore]) -> Option<ProfileShape> {
    let scores: Vec<f64> = vector.iter().map(|entry| entry.score).collect();
    classify_shape(&scores)
}

/// Shape of a set of scores, in any order.
///
/// Rules are evaluated in order:
/// 1. specialized: top > 7.5 and runner-up < 6
/// 2. balanced: max - min <= 2
/// 3. hybrid: top two both > 6.5 and differ by < 2.5
/// 4. otherwise specialized
#[must_use]
pub fn classify_shape(scores: &[f64]) -> Option<ProfileShape> {
    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));

    let top = *sorted.first()?;
    let runner_up = sorted.get(1).copied().unwrap_or(0.0);
    let bottom = sorted.last().copied().unwrap_or(top);

    let shape = if top > 7.5 && runner_up < 6.0 {
        ProfileShape::Specialized
    } else if top - bottom <= 2.0 {
        ProfileShape::Balanced
    } else if top > 6.5 && runner_up > 6.5 && top - runner_up < 2.5 {
        ProfileShape::Hybrid
    } else {
        ProfileShape::Specialized
    };
    Some(shape)
}

/// Strengths, blind spots, and role lists from the top two archetypes,
/// deduplicated and capped.
#[must_use]
pub fn derive_guidance(vector: &[ArchetypeScore]) -> Guidance {
    let top: Vec<&catalog::ArchetypeEntry> = vector
        .iter()
        .take(2)
        .map(|entry| catalog::entry(entry.key))
        .collect();

    Guidance {
        strengths: merge_capped(top.iter().map(|e| e.strengths), STRENGTH_LIMIT),
        blind_spots: merge_capped(top.iter().map(|e| e.blind_spots), BLIND_SPOT_LIMIT),
        ideal_roles: merge_capped(top.iter().map(|e| e.ideal_roles), IDEAL_ROLE_LIMIT),
        non_ideal_roles: merge_capped(top.iter().map(|e| e.non_ideal_roles), NON_IDEAL_ROLE_LIMIT),
    }
}

fn merge_capped<'a>(lists: impl Iterator<Item = &'a [&'static str]>, cap: usize) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(cap);
    for item in lists.flatten() {
        if merged.len() == cap {
            break;
        }
        if !merged.iter().any(|existing| existing == *item) {
            merged.push((*item).to_string());
        }
    }
    merged
}

/// Assemble a full profile from a scoring outcome.
#[must_use]
pub fn build_profile(scoring: ArchetypeScoring, source: Option<ScoreSource>) -> ArchetypeProfile {
    let shape = classify_profile(&scoring.vector);
    let guidance = derive_guidance(&scoring.vector);
    ArchetypeProfile {
        recognized_any: scoring.recognized_any,
        shape,
        source: if scoring.recognized_any { source } else { None },
        recognized_markers: scoring.recognized_markers,
        vector: scoring.vector,
        strengths: guidance.strengths,
        blind_spots: guidance.blind_spots,
        ideal_roles: guidance.ideal_roles,
        non_ideal_roles: guidance.non_ideal_roles,
    }
}

/// Archetype profile of a chart's wealth palace, with the configured
/// substitute palace as fallback.
#[must_use]
pub fn profile_chart(chart: &Chart, config: &ScoringConfig) -> ArchetypeProfile {
    let primary = chart.palace_of(config.wealth_palace);
    let fallback = chart.palace_of(config.wealth_fallback);
    let scoring = score_archetypes(primary.markers.natal(), fallback.markers.natal());

    let used = if scoring.used_fallback {
        tracing::debug!(
            primary = primary.kind.english(),
            fallback = fallback.kind.english(),
            "wealth palace has no recognized markers, scoring substitute palace"
        );
        fallback
    } else {
        primary
    };

    let source = ScoreSource {
        palace_number: used.number,
        palace: used.kind,
        substituted: scoring.used_fallback,
    };
    build_profile(scoring, Some(source))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use ziwei_core::enums::PalaceKind;

    use super::*;
    use crate::test_support::helpers::{markers, sample_chart, sparse_chart, with_main_markers};

    const NO_MARKERS: &[Marker] = &[];

    fn score_of(vector: &[ArchetypeScore], key: ArchetypeKey) -> f64 {
        vector.iter().find(|e| e.key == key).unwrap().score
    }

    #[test]
    fn wealth_palace_scenario() {
        let scoring = score_archetypes(&markers(&["紫微", "天機"]), NO_MARKERS);

        assert!(scoring.recognized_any);
        assert!(!scoring.used_fallback);
        assert_eq!(scoring.recognized_markers, vec!["紫微", "天机"]);
        assert_eq!(scoring.vector[0].key, ArchetypeKey::Strategy);
        assert_eq!(scoring.vector[0].score, 9.0);
        assert_eq!(
            scoring.vector.iter().map(|e| e.key).collect::<Vec<_>>(),
            vec![
                ArchetypeKey::Strategy,
                ArchetypeKey::Systems,
                ArchetypeKey::Brand,
                ArchetypeKey::Partnership,
            ]
        );
        assert_eq!(score_of(&scoring.vector, ArchetypeKey::Systems), 7.2);
        assert_eq!(score_of(&scoring.vector, ArchetypeKey::Brand), 7.0);
        assert_eq!(score_of(&scoring.vector, ArchetypeKey::Partnership), 5.8);
    }

    #[test]
    fn unrecognized_markers_are_ignored() {
        let with_noise = score_archetypes(&markers(&["红鸾", "紫微", "地空"]), NO_MARKERS);
        let clean = score_archetypes(&markers(&["紫微"]), NO_MARKERS);
        assert_eq!(with_noise.vector, clean.vector);
    }

    #[test]
    fn falls_back_once_when_primary_is_empty() {
        let scoring = score_archetypes(&markers(&["红鸾"]), &markers(&["天同"]));
        assert!(scoring.recognized_any);
        assert!(scoring.used_fallback);
        assert_eq!(scoring.vector[0].key, ArchetypeKey::Partnership);
    }

    #[test]
    fn nothing_recognized_is_empty_not_error() {
        let scoring = score_archetypes(&markers(&["红鸾"]), &markers(&["天喜"]));
        assert!(!scoring.recognized_any);
        assert!(!scoring.used_fallback);
        assert!(scoring.vector.is_empty());
        assert_eq!(classify_profile(&scoring.vector), None);
    }

    #[test]
    fn ties_keep_catalog_order() {
        // 左辅: strategy 5.0, brand 5.0, systems 6.5, partnership 8.0
        let scoring = score_archetypes(&markers(&["左辅"]), NO_MARKERS);
        assert_eq!(
            scoring.vector.iter().map(|e| e.key).collect::<Vec<_>>(),
            vec![
                ArchetypeKey::Partnership,
                ArchetypeKey::Systems,
                ArchetypeKey::Strategy,
                ArchetypeKey::Brand,
            ]
        );
    }

    #[test]
    fn duplicates_do_not_inflate() {
        let once = score_archetypes(&markers(&["紫微"]), NO_MARKERS);
        let many = score_archetypes(&markers(&["紫微"; 5]), NO_MARKERS);
        assert_eq!(once.vector, many.vector);
    }

    #[test]
    fn scores_stay_within_bounds() {
        let all: Vec<&str> = catalog::MARKER_CONTRIBUTIONS.iter().map(|c| c.marker).collect();
        let scoring = score_archetypes(&markers(&all), NO_MARKERS);
        assert_eq!(scoring.vector.len(), 4);
        assert!(scoring.vector.iter().all(|e| (0.0..=10.0).contains(&e.score)));

        assert_eq!(round_score(12.34), 10.0);
        assert_eq!(round_score(-3.0), 0.0);
        assert_eq!(round_score(7.16), 7.2);
    }

    #[test]
    fn marginal_effect_shrinks_with_each_added_marker() {
        let mut values = vec![9.0];
        let mut previous = diminishing_average(values.iter().copied()).unwrap();
        let mut previous_shift = f64::INFINITY;
        for _ in 0..5 {
            values.push(4.0);
            let current = diminishing_average(values.iter().copied()).unwrap();
            let shift = (current - previous).abs();
            assert!(shift < previous_shift, "shift {shift} did not shrink");
            previous_shift = shift;
            previous = current;
        }
    }

    #[test]
    fn stronger_evidence_never_decreases_score() {
        let base = [7.0, 6.0, 5.0];
        let before = diminishing_average(base.iter().copied()).unwrap();
        for extra in [before, 8.0, 10.0] {
            let after =
                diminishing_average(base.iter().copied().chain(std::iter::once(extra))).unwrap();
            assert!(after >= before, "adding {extra} lowered {before} to {after}");
        }
    }

    #[test]
    fn diminishing_average_of_nothing_is_none() {
        assert_eq!(diminishing_average(std::iter::empty()), None);
    }

    #[rstest]
    #[case(&[8.0, 5.0, 3.0, 1.0], ProfileShape::Specialized)]
    #[case(&[6.0, 6.0, 5.5, 5.0], ProfileShape::Balanced)]
    #[case(&[7.0, 6.8, 4.0, 2.0], ProfileShape::Hybrid)]
    #[case(&[9.0, 7.2, 7.0, 5.8], ProfileShape::Hybrid)]
    #[case(&[7.5, 5.0, 3.0, 1.0], ProfileShape::Specialized)]
    #[case(&[8.0, 6.0, 6.0, 6.0], ProfileShape::Balanced)]
    #[case(&[9.0, 6.5, 4.0, 2.0], ProfileShape::Specialized)]
    #[case(&[1.0, 3.0, 8.0, 5.0], ProfileShape::Specialized)]
    fn profile_shape_boundaries(#[case] scores: &[f64], #[case] expected: ProfileShape) {
        assert_eq!(classify_shape(scores), Some(expected));
    }

    #[test]
    fn guidance_merges_top_two_with_caps() {
        let scoring = score_archetypes(&markers(&["紫微", "天機"]), NO_MARKERS);
        let guidance = derive_guidance(&scoring.vector);

        assert_eq!(guidance.strengths, vec!["全局视野", "判断时机", "长线规划", "流程搭建"]);
        assert_eq!(guidance.blind_spots.len(), BLIND_SPOT_LIMIT);
        assert_eq!(
            guidance.ideal_roles,
            vec!["投资经理", "战略顾问", "创业者", "资产配置", "运营管理", "财务规划"]
        );
        assert_eq!(
            guidance.non_ideal_roles,
            vec!["流水线执行", "纯销售岗", "重复性事务", "高风险投机"]
        );
    }

    #[test]
    fn chart_profile_reads_wealth_palace() {
        let profile = profile_chart(&sample_chart(), &ScoringConfig::default());

        assert!(profile.recognized_any);
        assert_eq!(profile.top(), Some(ArchetypeKey::Strategy));
        assert_eq!(profile.shape, Some(ProfileShape::Hybrid));
        let source = profile.source.unwrap();
        assert_eq!(source.palace, PalaceKind::Wealth);
        assert_eq!(source.palace_number, 11);
        assert!(!source.substituted);
    }

    #[test]
    fn chart_profile_reports_substitution() {
        let chart = with_main_markers(&sample_chart(), PalaceKind::Wealth, &[]);
        let profile = profile_chart(&chart, &ScoringConfig::default());

        assert!(profile.recognized_any);
        let source = profile.source.unwrap();
        assert_eq!(source.palace, PalaceKind::Wellbeing);
        assert!(source.substituted);
        assert_eq!(profile.recognized_markers, vec!["天同", "太阴"]);
    }

    #[test]
    fn empty_chart_profile_has_no_source() {
        let profile = profile_chart(&sparse_chart(), &ScoringConfig::default());
        assert!(!profile.recognized_any);
        assert!(profile.source.is_none());
        assert!(profile.vector.is_empty());
        assert!(profile.strengths.is_empty());
    }
}
