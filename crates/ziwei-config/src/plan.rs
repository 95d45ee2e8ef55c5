//! Month plan configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default number of months in a plan.
const fn default_horizon_months() -> u32 {
    3
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlanConfig {
    /// Months covered by a plan, starting with the month after the creation date.
    #[serde(default = "default_horizon_months")]
    pub horizon_months: u32,
}

impl PlanConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=12).contains(&self.horizon_months) {
            return Err(ConfigError::InvalidValue {
                field: "plan.horizon_months".into(),
                reason: format!("{} is outside 1..=12", self.horizon_months),
            });
        }
        Ok(())
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            horizon_months: default_horizon_months(),
        }
    }
}
