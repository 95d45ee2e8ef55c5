use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{AnnualFlow, MajorLimit, MarkerSet, Palace};
use crate::enums::PalaceKind;
use crate::errors::CoreError;

/// Number of palaces on every chart wheel.
pub const PALACE_COUNT: usize = 12;

/// Oldest age a major limit may reach.
pub const MAX_AGE: i32 = 200;

/// Birth data the chart was generated from.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Subject {
    pub name: String,
    pub birth_year: i32,
    pub birth_month: u32,
    pub birth_day: u32,
    pub birth_hour: u32,
}

/// Wire form of a palace as produced by the chart generator. The name is still a
/// raw string here; [`Chart`] folds it into a [`PalaceKind`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PalaceDocument {
    pub number: u8,
    pub name: String,
    #[serde(default)]
    pub major_limit: Option<MajorLimit>,
    #[serde(default)]
    pub annual_flow: Option<AnnualFlow>,
    #[serde(default)]
    pub markers: MarkerSet,
}

/// Wire form of a chart, before validation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChartDocument {
    pub subject: Subject,
    pub palaces: Vec<PalaceDocument>,
}

/// A validated 12-palace natal chart.
///
/// Invariants (checked by [`Chart::new`]):
/// - exactly 12 palaces
/// - palace numbers are unique and within `1..=12`
/// - every palace category appears exactly once
/// - every major limit has `0 <= start_age <= end_age <= MAX_AGE`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "ChartDocument")]
pub struct Chart {
    subject: Subject,
    palaces: Vec<Palace>,
    #[serde(skip)]
    by_kind: [usize; PALACE_COUNT],
}

impl Chart {
    /// Build a chart, enforcing the structural invariants.
    pub fn new(subject: Subject, palaces: Vec<Palace>) -> Result<Self, CoreError> {
        if palaces.len() != PALACE_COUNT {
            return Err(CoreError::InvalidChart(format!(
                "expected {PALACE_COUNT} palaces, found {}",
                palaces.len()
            )));
        }

        let mut seen_numbers = [false; PALACE_COUNT];
        let mut by_kind = [usize::MAX; PALACE_COUNT];

        for (idx, palace) in palaces.iter().enumerate() {
            let number = usize::from(palace.number);
            if !(1..=PALACE_COUNT).contains(&number) {
                return Err(CoreError::InvalidChart(format!(
                    "palace number {number} is outside 1..=12"
                )));
            }
            if std::mem::replace(&mut seen_numbers[number - 1], true) {
                return Err(CoreError::InvalidChart(format!(
                    "palace number {number} appears more than once"
                )));
            }

            let slot = &mut by_kind[palace.kind.ordinal()];
            if *slot != usize::MAX {
                return Err(CoreError::InvalidChart(format!(
                    "palace {} appears more than once",
                    palace.kind
                )));
            }
            *slot = idx;

            if let Some(limit) = palace.major_limit {
                if limit.start_age > limit.end_age {
                    return Err(CoreError::InvalidChart(format!(
                        "palace {} has major limit {}-{} with start after end",
                        palace.kind, limit.start_age, limit.end_age
                    )));
                }
                if limit.start_age < 0 || limit.end_age > MAX_AGE {
                    return Err(CoreError::InvalidChart(format!(
                        "palace {} has major limit {}-{} outside 0..={MAX_AGE}",
                        palace.kind, limit.start_age, limit.end_age
                    )));
                }
            }
        }

        Ok(Self {
            subject,
            palaces,
            by_kind,
        })
    }

    /// Parse and validate a chart from generator JSON.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let document: ChartDocument = serde_json::from_str(json)?;
        Self::try_from(document)
    }

    #[must_use]
    pub const fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Palaces in chart order.
    #[must_use]
    pub fn palaces(&self) -> &[Palace] {
        &self.palaces
    }

    /// Palace with the given number (1-based).
    #[must_use]
    pub fn palace(&self, number: u8) -> Option<&Palace> {
        self.palaces.iter().find(|p| p.number == number)
    }

    /// Palace holding the given category. Always present on a valid chart.
    #[must_use]
    pub fn palace_of(&self, kind: PalaceKind) -> &Palace {
        &self.palaces[self.by_kind[kind.ordinal()]]
    }

    /// Palace at a 0-based position in chart order.
    #[must_use]
    pub fn palace_at(&self, position: usize) -> Option<&Palace> {
        self.palaces.get(position)
    }

    /// Check the major-limit intervals for gaps and overlaps.
    #[must_use]
    pub fn check_coverage(&self) -> CoverageReport {
        let mut spans: Vec<(MajorLimit, u8)> = self
            .palaces
            .iter()
            .filter_map(|p| p.major_limit.map(|limit| (limit, p.number)))
            .collect();
        spans.sort_by_key(|(limit, number)| (limit.start_age, *number));

        let mut report = CoverageReport {
            first_age: spans.first().map(|(limit, _)| limit.start_age),
            last_age: spans.iter().map(|(limit, _)| limit.end_age).max(),
            gaps: Vec::new(),
            overlaps: Vec::new(),
        };

        for pair in spans.windows(2) {
            let (prev, prev_number) = pair[0];
            let (next, next_number) = pair[1];
            if next.start_age > prev.end_age + 1 {
                report.gaps.push(AgeSpan {
                    start_age: prev.end_age + 1,
                    end_age: next.start_age - 1,
                });
            } else if next.start_age <= prev.end_age {
                report.overlaps.push((prev_number, next_number));
            }
        }

        report
    }
}

impl TryFrom<ChartDocument> for Chart {
    type Error = CoreError;

    fn try_from(document: ChartDocument) -> Result<Self, Self::Error> {
        let palaces = document
            .palaces
            .into_iter()
            .map(|raw| {
                Ok(Palace {
                    number: raw.number,
                    kind: raw.name.parse()?,
                    major_limit: raw.major_limit,
                    annual_flow: raw.annual_flow,
                    markers: raw.markers,
                })
            })
            .collect::<Result<Vec<_>, CoreError>>()?;
        Self::new(document.subject, palaces)
    }
}

/// Inclusive age range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AgeSpan {
    pub start_age: i32,
    pub end_age: i32,
}

/// Result of [`Chart::check_coverage`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CoverageReport {
    /// Youngest age covered by any cycle.
    pub first_age: Option<i32>,
    /// Oldest age covered by any cycle.
    pub last_age: Option<i32>,
    /// Ages between `first_age` and `last_age` no cycle covers.
    pub gaps: Vec<AgeSpan>,
    /// Palace number pairs whose intervals overlap.
    pub overlaps: Vec<(u8, u8)>,
}

impl CoverageReport {
    #[must_use]
    pub fn is_contiguous(&self) -> bool {
        self.gaps.is_empty() && self.overlaps.is_empty()
    }
}
