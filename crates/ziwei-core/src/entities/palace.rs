use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::MarkerSet;
use crate::enums::PalaceKind;

/// Age interval `[start_age, end_age]` (inclusive both ends) of the 10-year
/// cycle a palace governs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MajorLimit {
    pub start_age: i32,
    pub end_age: i32,
}

impl MajorLimit {
    #[must_use]
    pub const fn contains(self, age: i32) -> bool {
        self.start_age <= age && age <= self.end_age
    }
}

/// The calendar year a palace represents in the current solar-year cycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnnualFlow {
    pub year: i32,
}

/// One sector of the chart wheel.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Palace {
    pub number: u8,
    #[serde(rename = "name")]
    pub kind: PalaceKind,
    #[serde(default)]
    pub major_limit: Option<MajorLimit>,
    #[serde(default)]
    pub annual_flow: Option<AnnualFlow>,
    #[serde(default)]
    pub markers: MarkerSet,
}

impl Palace {
    pub fn new(number: u8, kind: PalaceKind) -> Self {
        Self {
            number,
            kind,
            major_limit: None,
            annual_flow: None,
            markers: MarkerSet::default(),
        }
    }

    #[must_use]
    pub fn with_major_limit(mut self, start_age: i32, end_age: i32) -> Self {
        self.major_limit = Some(MajorLimit { start_age, end_age });
        self
    }

    #[must_use]
    pub fn with_annual_flow(mut self, year: i32) -> Self {
        self.annual_flow = Some(AnnualFlow { year });
        self
    }

    #[must_use]
    pub fn with_markers(mut self, markers: MarkerSet) -> Self {
        self.markers = markers;
        self
    }
}
