//! Palace → season classification and the static season copy.
//!
//! The season describes the strategic posture of a 10-year cycle and depends
//! only on which palace governs that cycle.

use serde::Serialize;
use ziwei_core::enums::{PalaceKind, SeasonCategory};
use ziwei_core::errors::CoreError;

/// Presentation pair attached to a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonAccent {
    pub color: &'static str,
    pub icon: &'static str,
}

/// Classify a raw palace name, folding spelling aliases.
///
/// Fails with [`CoreError::UnrecognizedPalace`] for any name outside the
/// 16-token vocabulary. Silent defaults would corrupt cycle semantics.
pub fn classify(palace_name: &str) -> Result<SeasonCategory, CoreError> {
    Ok(classify_kind(palace_name.parse()?))
}

/// Season of a palace category.
#[must_use]
pub const fn classify_kind(kind: PalaceKind) -> SeasonCategory {
    match kind {
        PalaceKind::Life | PalaceKind::Children | PalaceKind::Travel => SeasonCategory::Spring,
        PalaceKind::Wealth | PalaceKind::Career | PalaceKind::Friends => SeasonCategory::Summer,
        PalaceKind::Spouse | PalaceKind::Property | PalaceKind::Parents => SeasonCategory::Autumn,
        PalaceKind::Siblings | PalaceKind::Health | PalaceKind::Wellbeing => {
            SeasonCategory::Winter
        }
    }
}

#[must_use]
pub const fn theme_for(season: SeasonCategory) -> &'static str {
    match season {
        SeasonCategory::Spring => "春·播种期",
        SeasonCategory::Summer => "夏·扩张期",
        SeasonCategory::Autumn => "秋·收获期",
        SeasonCategory::Winter => "冬·蓄藏期",
    }
}

#[must_use]
pub const fn message_for(season: SeasonCategory) -> &'static str {
    match season {
        SeasonCategory::Spring => {
            "这十年适合打基础、试方向，把精力投入学习与新的尝试，不急于求成。"
        }
        SeasonCategory::Summer => {
            "资源与机会集中涌现，宜主动出击放大优势，同时留意节奏，避免过度透支。"
        }
        SeasonCategory::Autumn => {
            "前期积累进入兑现阶段，宜巩固成果、沉淀资产，把关系与合作经营得更稳。"
        }
        SeasonCategory::Winter => {
            "外部节奏放缓，宜向内修炼、调养身心、储备能力，为下一轮周期蓄力。"
        }
    }
}

#[must_use]
pub const fn accent(season: SeasonCategory) -> SeasonAccent {
    match season {
        SeasonCategory::Spring => SeasonAccent {
            color: "#5FA86B",
            icon: "sprout",
        },
        SeasonCategory::Summer => SeasonAccent {
            color: "#E0823D",
            icon: "sun",
        },
        SeasonCategory::Autumn => SeasonAccent {
            color: "#C9A227",
            icon: "leaf",
        },
        SeasonCategory::Winter => SeasonAccent {
            color: "#4A6FA5",
            icon: "snowflake",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_palace_has_a_season() {
        let mut per_season = [0_usize; 4];
        for kind in PalaceKind::ORDER {
            let season = classify_kind(kind);
            let idx = SeasonCategory::ALL.iter().position(|s| *s == season).unwrap();
            per_season[idx] += 1;
        }
        assert_eq!(per_season, [3, 3, 3, 3]);
    }

    #[test]
    fn aliases_classify_identically() {
        assert_eq!(classify("财帛").unwrap(), classify("財帛").unwrap());
        assert_eq!(classify("官禄").unwrap(), SeasonCategory::Summer);
        assert_eq!(classify("命宮").unwrap(), SeasonCategory::Spring);
        assert_eq!(classify("遷移").unwrap(), SeasonCategory::Spring);
    }

    #[test]
    fn unknown_name_is_a_hard_failure() {
        let err = classify("财运宫").unwrap_err();
        assert!(matches!(err, CoreError::UnrecognizedPalace { .. }));
    }

    #[test]
    fn static_copy_is_distinct_per_season() {
        for (i, a) in SeasonCategory::ALL.iter().enumerate() {
            for b in &SeasonCategory::ALL[i + 1..] {
                assert_ne!(theme_for(*a), theme_for(*b));
                assert_ne!(message_for(*a), message_for(*b));
                assert_ne!(accent(*a), accent(*b));
            }
        }
    }
}
