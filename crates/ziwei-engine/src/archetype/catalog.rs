//! Static archetype catalog: per-marker contributions and per-archetype copy.

use ziwei_core::enums::ArchetypeKey;

/// Score a recognized marker contributes to each archetype, indexed by
/// [`ArchetypeKey::ordinal`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerContribution {
    pub marker: &'static str,
    pub scores: [f64; 4],
}

impl MarkerContribution {
    #[must_use]
    pub const fn score_for(&self, key: ArchetypeKey) -> f64 {
        self.scores[key.ordinal()]
    }
}

const fn contribution(marker: &'static str, scores: [f64; 4]) -> MarkerContribution {
    MarkerContribution { marker, scores }
}

/// Columns: strategy, brand, systems, partnership.
pub const MARKER_CONTRIBUTIONS: &[MarkerContribution] = &[
    contribution("紫微", [9.0, 8.0, 7.0, 6.0]),
    contribution("天机", [9.0, 5.0, 7.5, 5.5]),
    contribution("太阳", [6.0, 9.0, 5.0, 7.5]),
    contribution("武曲", [8.5, 5.0, 8.0, 5.0]),
    contribution("天同", [4.0, 6.0, 5.0, 8.5]),
    contribution("廉贞", [7.0, 7.5, 6.0, 6.5]),
    contribution("天府", [7.5, 6.0, 9.0, 6.5]),
    contribution("太阴", [6.5, 5.5, 8.5, 6.0]),
    contribution("贪狼", [6.0, 8.5, 4.5, 8.0]),
    contribution("巨门", [7.0, 8.0, 5.0, 6.0]),
    contribution("天相", [5.5, 5.0, 8.0, 8.5]),
    contribution("天梁", [7.0, 6.0, 6.5, 7.5]),
    contribution("七杀", [8.0, 6.5, 5.5, 4.5]),
    contribution("破军", [7.5, 7.0, 4.0, 5.0]),
    contribution("左辅", [5.0, 5.0, 6.5, 8.0]),
    contribution("右弼", [5.0, 5.5, 6.0, 8.0]),
    contribution("文昌", [6.5, 7.0, 7.0, 5.0]),
    contribution("文曲", [5.5, 8.0, 5.5, 6.0]),
    contribution("禄存", [6.0, 4.5, 8.5, 5.0]),
    contribution("天马", [6.5, 7.0, 4.5, 6.5]),
];

/// Look up a marker by its canonical (simplified) name.
#[must_use]
pub fn lookup(canonical_name: &str) -> Option<&'static MarkerContribution> {
    MARKER_CONTRIBUTIONS
        .iter()
        .find(|entry| entry.marker == canonical_name)
}

/// Static copy for one archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeEntry {
    pub key: ArchetypeKey,
    pub title: &'static str,
    pub strengths: &'static [&'static str],
    pub blind_spots: &'static [&'static str],
    pub ideal_roles: &'static [&'static str],
    pub non_ideal_roles: &'static [&'static str],
}

/// One entry per archetype, in [`ArchetypeKey::ALL`] order.
pub static ARCHETYPES: [ArchetypeEntry; 4] = [
    ArchetypeEntry {
        key: ArchetypeKey::Strategy,
        title: "谋略布局型",
        strengths: &["全局视野", "判断时机", "长线规划"],
        blind_spots: &["想多做少", "过度控制", "忽视执行细节"],
        ideal_roles: &["投资经理", "战略顾问", "创业者", "资产配置"],
        non_ideal_roles: &["流水线执行", "纯销售岗", "重复性事务"],
    },
    ArchetypeEntry {
        key: ArchetypeKey::Brand,
        title: "品牌影响型",
        strengths: &["表达感染力", "塑造个人品牌", "聚拢关注"],
        blind_spots: &["重曝光轻沉淀", "情绪化决策", "忽视现金流"],
        ideal_roles: &["内容创作者", "品牌主理人", "市场营销", "创业者"],
        non_ideal_roles: &["后台财务", "纯技术维护", "重复性事务"],
    },
    ArchetypeEntry {
        key: ArchetypeKey::Systems,
        title: "系统运营型",
        strengths: &["流程搭建", "稳健理财", "风险控制"],
        blind_spots: &["过于保守", "错过窗口期", "不擅自我推销"],
        ideal_roles: &["运营管理", "财务规划", "资产配置", "供应链管理"],
        non_ideal_roles: &["高风险投机", "纯销售岗", "频繁出差的开拓岗"],
    },
    ArchetypeEntry {
        key: ArchetypeKey::Partnership,
        title: "合作资源型",
        strengths: &["整合人脉", "促成合作", "团队凝聚"],
        blind_spots: &["边界模糊", "依赖他人", "难以拒绝"],
        ideal_roles: &["商务拓展", "合伙经营", "渠道管理", "人力资源"],
        non_ideal_roles: &["独立研究", "单打独斗的岗位", "高风险投机"],
    },
];

#[must_use]
pub fn entry(key: ArchetypeKey) -> &'static ArchetypeEntry {
    &ARCHETYPES[key.ordinal()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_follow_key_order() {
        for key in ArchetypeKey::ALL {
            assert_eq!(entry(key).key, key);
        }
    }

    #[test]
    fn contributions_are_in_range_and_unique() {
        for (i, item) in MARKER_CONTRIBUTIONS.iter().enumerate() {
            assert!(item.scores.iter().all(|s| (0.0..=10.0).contains(s)));
            assert!(
                MARKER_CONTRIBUTIONS[i + 1..]
                    .iter()
                    .all(|other| other.marker != item.marker),
                "{} listed twice",
                item.marker
            );
        }
    }

    #[test]
    fn lookup_uses_simplified_keys() {
        assert_eq!(lookup("天机").unwrap().score_for(ArchetypeKey::Strategy), 9.0);
        assert!(lookup("天機").is_none());
        assert!(lookup("红鸾").is_none());
    }
}
