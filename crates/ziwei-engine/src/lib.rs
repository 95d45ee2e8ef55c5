//! # ziwei-engine
//!
//! Scoring engine for Zi Wei fortune reports.
//!
//! Every component is a pure function over a validated [`Chart`](ziwei_core::entities::Chart):
//! - `cycle` resolves the 10-year cycle containing an age and its neighbours
//! - `season` maps the governing palace to a season theme
//! - `archetype` scores the wealth palace against four wealth archetypes
//! - `role_group` scores the team palace against four role groups
//! - `monthly` rotates the chart per month and builds a deduplicated month plan
//! - `report` bundles all of the above
//!
//! Static catalogs live next to the component that reads them.

pub mod archetype;
pub mod cycle;
pub mod error;
pub mod monthly;
pub mod report;
pub mod role_group;
pub mod season;
mod test_support;

pub use error::EngineError;
pub use report::{ReportRequest, build_report};
