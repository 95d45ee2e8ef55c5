//! Full report assembly.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use ziwei_config::ZiweiConfig;
use ziwei_core::entities::{Chart, Subject};
use ziwei_core::responses::FortuneReport;

use crate::error::EngineError;
use crate::{archetype, cycle, monthly, role_group};

/// Inputs for one report besides the chart itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Age used for cycle resolution.
    pub age: i32,
    /// The month plan starts with the month after this date.
    pub creation_date: NaiveDate,
}

impl ReportRequest {
    /// Request for `creation_date` with the subject's nominal age on that date.
    #[must_use]
    pub fn on_date(subject: &Subject, creation_date: NaiveDate) -> Self {
        Self {
            age: nominal_age(subject.birth_year, creation_date),
            creation_date,
        }
    }
}

/// Age counted the traditional way: 1 in the birth year, +1 each calendar year.
#[must_use]
pub fn nominal_age(birth_year: i32, on: NaiveDate) -> i32 {
    on.year().saturating_sub(birth_year).saturating_add(1)
}

/// Run every scorer over `chart` and bundle the results.
pub fn build_report(
    chart: &Chart,
    request: &ReportRequest,
    config: &ZiweiConfig,
) -> Result<FortuneReport, EngineError> {
    let cycle = cycle::resolve_current_cycle(chart, request.age);
    let archetypes = archetype::profile_chart(chart, &config.scoring);
    let role_groups = role_group::classify_chart_groups(chart, &config.scoring);
    let plan = monthly::build_month_plan(
        chart,
        request.creation_date,
        config.plan.horizon_months,
        &config.scoring,
    )?;

    tracing::debug!(
        subject = %chart.subject().name,
        age = request.age,
        cycle = cycle.is_some(),
        archetype = archetypes.top().map(|key| key.as_str()),
        months = plan.months.len(),
        "report assembled"
    );

    Ok(FortuneReport {
        subject: chart.subject().clone(),
        age: request.age,
        cycle,
        archetypes,
        role_groups,
        plan,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ziwei_core::enums::{ArchetypeKey, PalaceKind};

    use super::*;
    use crate::test_support::helpers::{sample_chart, sparse_chart};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn nominal_age_counts_birth_year_as_one() {
        assert_eq!(nominal_age(1990, date(1990, 12, 31)), 1);
        assert_eq!(nominal_age(1990, date(2026, 10, 18)), 37);
        assert_eq!(nominal_age(i32::MIN, date(2026, 10, 18)), i32::MAX);
    }

    #[test]
    fn report_bundles_every_section() {
        let chart = sample_chart();
        let request = ReportRequest {
            age: 36,
            creation_date: date(2026, 10, 18),
        };
        let report = build_report(&chart, &request, &ZiweiConfig::default()).unwrap();

        assert_eq!(report.subject.name, "林晓");
        assert_eq!(report.cycle.unwrap().palace, PalaceKind::Property);
        assert_eq!(report.archetypes.top(), Some(ArchetypeKey::Strategy));
        assert_eq!(report.role_groups.present_groups.len(), 3);
        assert_eq!(report.plan.months.len(), 3);
    }

    #[test]
    fn horizon_follows_config() {
        let mut config = ZiweiConfig::default();
        config.plan.horizon_months = 6;
        let request = ReportRequest::on_date(sample_chart().subject(), date(2026, 10, 18));
        let report = build_report(&sample_chart(), &request, &config).unwrap();

        assert_eq!(request.age, 37);
        assert_eq!(report.plan.months.len(), 6);
        assert_eq!(report.plan.months[5].label, "2027年4月");
    }

    #[test]
    fn sparse_chart_reports_absence_without_failing() {
        let request = ReportRequest {
            age: 36,
            creation_date: date(2026, 10, 18),
        };
        let report = build_report(&sparse_chart(), &request, &ZiweiConfig::default()).unwrap();

        assert!(report.cycle.is_none());
        assert!(!report.archetypes.recognized_any);
        assert!(report.role_groups.present_groups.is_empty());
        assert!(report.plan.months.iter().all(|m| m.archetype.is_none()));
    }
}
