//! Which palaces feed the archetype and role-group scorers.

use serde::{Deserialize, Serialize};
use ziwei_core::enums::PalaceKind;

use crate::ConfigError;

const fn default_wealth_palace() -> PalaceKind {
    PalaceKind::Wealth
}

const fn default_wealth_fallback() -> PalaceKind {
    default_wealth_palace().opposite()
}

const fn default_team_palace() -> PalaceKind {
    PalaceKind::Friends
}

const fn default_team_fallback() -> PalaceKind {
    default_team_palace().opposite()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScoringConfig {
    /// Palace whose markers drive the wealth archetype vector.
    #[serde(default = "default_wealth_palace")]
    pub wealth_palace: PalaceKind,

    /// Substitute read once when the wealth palace has no recognized markers.
    #[serde(default = "default_wealth_fallback")]
    pub wealth_fallback: PalaceKind,

    /// Palace whose markers drive role-group classification.
    #[serde(default = "default_team_palace")]
    pub team_palace: PalaceKind,

    /// Substitute used when the team palace has no recognized markers.
    #[serde(default = "default_team_fallback")]
    pub team_fallback: PalaceKind,
}

impl ScoringConfig {
    /// Reject a fallback that points back at its own primary palace.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wealth_palace == self.wealth_fallback {
            return Err(ConfigError::InvalidValue {
                field: "scoring.wealth_fallback".into(),
                reason: format!("must differ from wealth_palace ({})", self.wealth_palace),
            });
        }
        if self.team_palace == self.team_fallback {
            return Err(ConfigError::InvalidValue {
                field: "scoring.team_fallback".into(),
                reason: format!("must differ from team_palace ({})", self.team_palace),
            });
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            wealth_palace: default_wealth_palace(),
            wealth_fallback: default_wealth_fallback(),
            team_palace: default_team_palace(),
            team_fallback: default_team_fallback(),
        }
    }
}
