//! Category vocabularies for charts and reports.
//!
//! Most enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! [`PalaceKind`] is the exception: it serializes to its canonical Chinese name and
//! accepts both simplified and traditional spellings when parsing, so raw palace
//! strings never travel past the deserialization boundary.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// PalaceKind
// ---------------------------------------------------------------------------

/// One of the 12 life-domain categories of the natal chart.
///
/// Declaration order is the fixed ring ordering used by palace rotation:
///
/// ```text
/// 命宫 → 兄弟 → 夫妻 → 子女 → 财帛 → 疾厄 → 迁移 → 交友 → 官禄 → 田宅 → 福德 → 父母
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PalaceKind {
    Life,
    Siblings,
    Spouse,
    Children,
    Wealth,
    Health,
    Travel,
    Friends,
    Career,
    Property,
    Wellbeing,
    Parents,
}

impl PalaceKind {
    /// The fixed 12-category ring, in rotation order.
    pub const ORDER: [Self; 12] = [
        Self::Life,
        Self::Siblings,
        Self::Spouse,
        Self::Children,
        Self::Wealth,
        Self::Health,
        Self::Travel,
        Self::Friends,
        Self::Career,
        Self::Property,
        Self::Wellbeing,
        Self::Parents,
    ];

    /// Every accepted input spelling: the 12 simplified names plus the 4
    /// traditional variants.
    pub const VOCABULARY: [&'static str; 16] = [
        "命宫", "命宮", "兄弟", "夫妻", "子女", "财帛", "財帛", "疾厄", "迁移", "遷移", "交友",
        "官禄", "官祿", "田宅", "福德", "父母",
    ];

    /// Position of this category in [`Self::ORDER`].
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Category `steps` positions along the ring from 命宫. Wraps modulo 12.
    #[must_use]
    pub const fn from_ordinal(steps: usize) -> Self {
        Self::ORDER[steps % 12]
    }

    /// The palace across the wheel (six steps away).
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::from_ordinal(self.ordinal() + 6)
    }

    /// Canonical (simplified) name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Life => "命宫",
            Self::Siblings => "兄弟",
            Self::Spouse => "夫妻",
            Self::Children => "子女",
            Self::Wealth => "财帛",
            Self::Health => "疾厄",
            Self::Travel => "迁移",
            Self::Friends => "交友",
            Self::Career => "官禄",
            Self::Property => "田宅",
            Self::Wellbeing => "福德",
            Self::Parents => "父母",
        }
    }

    /// English domain name, used in logs and plain-text output.
    #[must_use]
    pub const fn english(self) -> &'static str {
        match self {
            Self::Life => "life",
            Self::Siblings => "siblings",
            Self::Spouse => "spouse",
            Self::Children => "children",
            Self::Wealth => "wealth",
            Self::Health => "health",
            Self::Travel => "travel",
            Self::Friends => "friends",
            Self::Career => "career",
            Self::Property => "property",
            Self::Wellbeing => "wellbeing",
            Self::Parents => "parents",
        }
    }
}

impl FromStr for PalaceKind {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "命宫" | "命宮" => Ok(Self::Life),
            "兄弟" => Ok(Self::Siblings),
            "夫妻" => Ok(Self::Spouse),
            "子女" => Ok(Self::Children),
            "财帛" | "財帛" => Ok(Self::Wealth),
            "疾厄" => Ok(Self::Health),
            "迁移" | "遷移" => Ok(Self::Travel),
            "交友" => Ok(Self::Friends),
            "官禄" | "官祿" => Ok(Self::Career),
            "田宅" => Ok(Self::Property),
            "福德" => Ok(Self::Wellbeing),
            "父母" => Ok(Self::Parents),
            other => Err(CoreError::UnrecognizedPalace {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for PalaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PalaceKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PalaceKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl JsonSchema for PalaceKind {
    fn schema_name() -> Cow<'static, str> {
        "PalaceKind".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "enum": PalaceKind::VOCABULARY
        })
    }
}

// ---------------------------------------------------------------------------
// SeasonCategory
// ---------------------------------------------------------------------------

/// Narrative season of a 10-year cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SeasonCategory {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl SeasonCategory {
    pub const ALL: [Self; 4] = [Self::Spring, Self::Summer, Self::Autumn, Self::Winter];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
        }
    }
}

impl fmt::Display for SeasonCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CyclePhase
// ---------------------------------------------------------------------------

/// Position inside a 10-year cycle.
///
/// ```text
/// years 1-3 → building
/// years 4-6 → peak
/// years 7+  → integration
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CyclePhase {
    Building,
    Peak,
    Integration,
}

impl CyclePhase {
    /// Phase for a 1-based year inside the cycle.
    #[must_use]
    pub const fn for_year_in_cycle(year_in_cycle: i32) -> Self {
        match year_in_cycle {
            i32::MIN..=3 => Self::Building,
            4..=6 => Self::Peak,
            _ => Self::Integration,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Building => "building",
            Self::Peak => "peak",
            Self::Integration => "integration",
        }
    }
}

impl fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ArchetypeKey
// ---------------------------------------------------------------------------

/// Wealth-building archetype. Declaration order is the catalog order used to
/// break score ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ArchetypeKey {
    Strategy,
    Brand,
    Systems,
    Partnership,
}

impl ArchetypeKey {
    pub const ALL: [Self; 4] = [Self::Strategy, Self::Brand, Self::Systems, Self::Partnership];

    /// Catalog declaration position.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strategy => "strategy",
            Self::Brand => "brand",
            Self::Systems => "systems",
            Self::Partnership => "partnership",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strategy => "strategy-oriented",
            Self::Brand => "brand-oriented",
            Self::Systems => "systems-oriented",
            Self::Partnership => "partnership-oriented",
        }
    }
}

impl fmt::Display for ArchetypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ProfileShape
// ---------------------------------------------------------------------------

/// Overall shape of an archetype score vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProfileShape {
    Specialized,
    Balanced,
    Hybrid,
}

impl ProfileShape {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Specialized => "specialized",
            Self::Balanced => "balanced",
            Self::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for ProfileShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RoleGroupKey
// ---------------------------------------------------------------------------

/// Hiring / team-fit role group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RoleGroupKey {
    Pioneer,
    Strategist,
    Operator,
    Connector,
}

impl RoleGroupKey {
    pub const ALL: [Self; 4] = [
        Self::Pioneer,
        Self::Strategist,
        Self::Operator,
        Self::Connector,
    ];

    /// Catalog declaration position.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pioneer => "pioneer",
            Self::Strategist => "strategist",
            Self::Operator => "operator",
            Self::Connector => "connector",
        }
    }
}

impl fmt::Display for RoleGroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
