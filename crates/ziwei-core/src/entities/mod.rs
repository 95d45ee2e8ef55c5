//! Chart model entities.
//!
//! A [`Chart`] is built once per report from generator output and never mutated.
//! All structs derive `Serialize` and `Deserialize`; the wire forms additionally
//! derive `JsonSchema` for validation.

mod chart;
mod marker;
mod palace;

pub use chart::{
    AgeSpan, Chart, ChartDocument, CoverageReport, MAX_AGE, PALACE_COUNT, PalaceDocument, Subject,
};
pub use marker::{Marker, MarkerSet};
pub use palace::{AnnualFlow, MajorLimit, Palace};
