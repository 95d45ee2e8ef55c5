//! Current 10-year cycle resolution.
//!
//! A cycle is the age interval ([`MajorLimit`]) a palace governs. On a valid
//! chart the intervals are contiguous, so at most one palace contains any age.
//! Ages outside every interval (very young or very old subjects) resolve to
//! `None`, which callers render as "cycle unavailable".

use ziwei_core::entities::{Chart, MajorLimit, Palace};
use ziwei_core::enums::CyclePhase;
use ziwei_core::responses::{CycleResult, CycleSummary};

use crate::season;

/// Cycles immediately before and after a given cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacent<'a> {
    pub previous: Option<&'a Palace>,
    pub next: Option<&'a Palace>,
}

/// Palace whose major limit contains `age` (inclusive both ends).
///
/// Overlapping intervals resolve to the first match in chart order.
#[must_use]
pub fn find_cycle_palace(chart: &Chart, age: i32) -> Option<&Palace> {
    let mut matches = chart
        .palaces()
        .iter()
        .filter(|p| p.major_limit.is_some_and(|limit| limit.contains(age)));
    let first = matches.next()?;
    let extra: Vec<u8> = matches.map(|p| p.number).collect();
    if !extra.is_empty() {
        tracing::debug!(
            age,
            chosen = first.number,
            ignored = ?extra,
            "major limits overlap, using first palace in chart order"
        );
    }
    Some(first)
}

/// Neighbouring cycles of `current`.
///
/// `previous` is the palace with the greatest `end_age` strictly below the
/// current `start_age`; `next` is the palace with the least `start_age`
/// strictly above the current `end_age`. Either is absent at the ends of the
/// lifespan, and both are absent when `current` has no major limit.
#[must_use]
pub fn find_adjacent<'a>(chart: &'a Chart, current: &Palace) -> Adjacent<'a> {
    let Some(limit) = current.major_limit else {
        return Adjacent {
            previous: None,
            next: None,
        };
    };

    let with_limits = || {
        chart
            .palaces()
            .iter()
            .filter_map(|p| p.major_limit.map(|l| (p, l)))
    };

    let previous = with_limits()
        .filter(|(_, l)| l.end_age < limit.start_age)
        .max_by_key(|(_, l)| l.end_age)
        .map(|(p, _)| p);
    let next = with_limits()
        .filter(|(_, l)| l.start_age > limit.end_age)
        .min_by_key(|(_, l)| l.start_age)
        .map(|(p, _)| p);

    Adjacent { previous, next }
}

/// Resolve the cycle containing `age` for the chart's subject.
///
/// Returns `None` when no palace's interval contains the age.
#[must_use]
pub fn resolve_current_cycle(chart: &Chart, age: i32) -> Option<CycleResult> {
    let Some(palace) = find_cycle_palace(chart, age) else {
        tracing::debug!(age, "no major limit contains age");
        return None;
    };
    let limit = palace.major_limit?;
    let birth_year = chart.subject().birth_year;
    let season = season::classify_kind(palace.kind);
    let year_in_cycle = age - limit.start_age + 1;
    let adjacent = find_adjacent(chart, palace);

    Some(CycleResult {
        palace_number: palace.number,
        palace: palace.kind,
        season,
        theme: season::theme_for(season).to_string(),
        message: season::message_for(season).to_string(),
        age,
        start_age: limit.start_age,
        end_age: limit.end_age,
        start_year: birth_year.saturating_add(limit.start_age),
        end_year: birth_year.saturating_add(limit.end_age),
        current_year: birth_year.saturating_add(age),
        year_in_cycle,
        phase: CyclePhase::for_year_in_cycle(year_in_cycle),
        previous: adjacent.previous.and_then(|p| summarize(p, birth_year)),
        next: adjacent.next.and_then(|p| summarize(p, birth_year)),
    })
}

/// Compact summary of a palace's cycle, or `None` if it has no major limit.
#[must_use]
pub fn summarize(palace: &Palace, birth_year: i32) -> Option<CycleSummary> {
    let MajorLimit { start_age, end_age } = palace.major_limit?;
    Some(CycleSummary {
        palace_number: palace.number,
        palace: palace.kind,
        season: season::classify_kind(palace.kind),
        start_age,
        end_age,
        start_year: birth_year.saturating_add(start_age),
        end_year: birth_year.saturating_add(end_age),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ziwei_core::enums::{PalaceKind, SeasonCategory};

    use super::*;
    use crate::test_support::helpers::{sample_chart, sparse_chart};

    #[test]
    fn resolves_cycle_with_years_and_phase() {
        let chart = sample_chart();
        let cycle = resolve_current_cycle(&chart, 36).unwrap();

        assert_eq!(cycle.palace, PalaceKind::Property);
        assert_eq!(cycle.palace_number, 6);
        assert_eq!(cycle.season, SeasonCategory::Autumn);
        assert_eq!((cycle.start_age, cycle.end_age), (33, 42));
        assert_eq!((cycle.start_year, cycle.end_year), (2023, 2032));
        assert_eq!(cycle.current_year, 2026);
        assert_eq!(cycle.year_in_cycle, 4);
        assert_eq!(cycle.phase, CyclePhase::Peak);
        assert_eq!(cycle.theme, season::theme_for(SeasonCategory::Autumn));
    }

    #[test]
    fn interval_bounds_are_inclusive() {
        let chart = sample_chart();
        assert_eq!(resolve_current_cycle(&chart, 33).unwrap().palace_number, 6);
        assert_eq!(resolve_current_cycle(&chart, 42).unwrap().palace_number, 6);
        assert_eq!(resolve_current_cycle(&chart, 43).unwrap().palace_number, 7);
    }

    #[test]
    fn phase_boundaries_within_cycle() {
        let chart = sample_chart();
        let phase_at = |age| resolve_current_cycle(&chart, age).unwrap().phase;
        assert_eq!(phase_at(35), CyclePhase::Building);
        assert_eq!(phase_at(36), CyclePhase::Peak);
        assert_eq!(phase_at(38), CyclePhase::Peak);
        assert_eq!(phase_at(39), CyclePhase::Integration);
        assert_eq!(phase_at(42), CyclePhase::Integration);
    }

    #[test]
    fn neighbours_are_reported() {
        let chart = sample_chart();
        let cycle = resolve_current_cycle(&chart, 36).unwrap();

        let previous = cycle.previous.unwrap();
        assert_eq!(previous.palace, PalaceKind::Wellbeing);
        assert_eq!((previous.start_age, previous.end_age), (23, 32));
        assert_eq!((previous.start_year, previous.end_year), (2013, 2022));

        let next = cycle.next.unwrap();
        assert_eq!(next.palace, PalaceKind::Career);
        assert_eq!(next.start_age, 43);
    }

    #[test]
    fn first_and_last_cycles_have_one_neighbour() {
        let chart = sample_chart();
        let first = resolve_current_cycle(&chart, 3).unwrap();
        assert!(first.previous.is_none());
        assert!(first.next.is_some());

        let last = resolve_current_cycle(&chart, 122).unwrap();
        assert!(last.previous.is_some());
        assert!(last.next.is_none());
    }

    #[test]
    fn ages_outside_every_interval_are_not_found() {
        let chart = sample_chart();
        assert!(resolve_current_cycle(&chart, 2).is_none());
        assert!(resolve_current_cycle(&chart, 123).is_none());
        assert!(resolve_current_cycle(&chart, -1).is_none());
    }

    #[test]
    fn chart_without_limits_has_no_cycle() {
        let chart = sparse_chart();
        assert!(resolve_current_cycle(&chart, 30).is_none());
        let palace = chart.palace_of(PalaceKind::Life);
        assert_eq!(
            find_adjacent(&chart, palace),
            Adjacent {
                previous: None,
                next: None
            }
        );
    }

    #[test]
    fn overlapping_limits_resolve_in_chart_order() {
        let mut palaces = sample_chart().palaces().to_vec();
        let (first, second) = (palaces[0].number, palaces[1].number);
        palaces[0] = palaces[0].clone().with_major_limit(30, 39);
        palaces[1] = palaces[1].clone().with_major_limit(35, 44);
        let chart = Chart::new(sample_chart().subject().clone(), palaces).unwrap();
        assert!(!chart.check_coverage().overlaps.is_empty());

        assert_eq!(find_cycle_palace(&chart, 36).unwrap().number, first);
        assert_eq!(find_cycle_palace(&chart, 44).unwrap().number, second);
    }

    #[test]
    fn extreme_birth_year_does_not_overflow() {
        let chart = sample_chart();
        let mut subject = chart.subject().clone();
        subject.birth_year = i32::MAX - 40;
        let chart = Chart::new(subject, chart.palaces().to_vec()).unwrap();

        let cycle = resolve_current_cycle(&chart, 36).unwrap();
        assert_eq!(cycle.start_year, i32::MAX - 7);
        assert_eq!(cycle.end_year, i32::MAX);
        assert_eq!(cycle.current_year, i32::MAX - 4);
        assert_eq!(cycle.next.unwrap().end_year, i32::MAX);
    }

    #[test]
    fn every_age_in_range_hits_exactly_one_palace() {
        let chart = sample_chart();
        let report = chart.check_coverage();
        let (first, last) = (report.first_age.unwrap(), report.last_age.unwrap());
        for age in first..=last {
            let hits = chart
                .palaces()
                .iter()
                .filter(|p| p.major_limit.is_some_and(|l| l.contains(age)))
                .count();
            assert_eq!(hits, 1, "age {age} covered by {hits} palaces");
        }
    }
}
