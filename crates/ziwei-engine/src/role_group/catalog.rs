//! Static role-group catalog: member markers, traits, and occupations.

use ziwei_core::enums::RoleGroupKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleGroupEntry {
    pub key: RoleGroupKey,
    pub title: &'static str,
    /// Canonical (simplified) marker names belonging to the group.
    pub members: &'static [&'static str],
    pub traits: &'static [&'static str],
    pub occupations: &'static [&'static str],
}

impl RoleGroupEntry {
    #[must_use]
    pub fn contains(&self, canonical_name: &str) -> bool {
        self.members.contains(&canonical_name)
    }

    /// Member count as used by the coverage formula.
    #[must_use]
    pub fn size(&self) -> u32 {
        u32::try_from(self.members.len()).unwrap_or(u32::MAX)
    }
}

/// One entry per group, in [`RoleGroupKey::ALL`] order. Member lists are disjoint.
pub static ROLE_GROUPS: [RoleGroupEntry; 4] = [
    RoleGroupEntry {
        key: RoleGroupKey::Pioneer,
        title: "开拓型",
        members: &["紫微", "七杀", "破军", "贪狼", "天马"],
        traits: &["敢闯敢试", "目标驱动", "抗压能力强"],
        occupations: &["新业务负责人", "销售总监", "创业合伙人"],
    },
    RoleGroupEntry {
        key: RoleGroupKey::Strategist,
        title: "谋略型",
        members: &["天机", "巨门", "文昌", "文曲", "天梁"],
        traits: &["善于分析", "思路缜密", "表达清晰"],
        occupations: &["战略分析师", "产品经理", "法务顾问"],
    },
    RoleGroupEntry {
        key: RoleGroupKey::Operator,
        title: "执行型",
        members: &["武曲", "天府", "天相", "禄存", "廉贞", "擎羊"],
        traits: &["执行力强", "重视规则", "可靠稳定"],
        occupations: &["运营经理", "财务主管", "项目经理"],
    },
    RoleGroupEntry {
        key: RoleGroupKey::Connector,
        title: "协调型",
        members: &["太阳", "太阴", "天同", "左辅", "右弼", "天魁", "天钺"],
        traits: &["亲和力强", "善于沟通", "乐于助人"],
        occupations: &["人力资源", "客户成功", "商务拓展"],
    },
];

#[must_use]
pub fn entry(key: RoleGroupKey) -> &'static RoleGroupEntry {
    &ROLE_GROUPS[key.ordinal()]
}

/// Group a canonical marker name belongs to, if any.
#[must_use]
pub fn group_of(canonical_name: &str) -> Option<RoleGroupKey> {
    ROLE_GROUPS
        .iter()
        .find(|group| group.contains(canonical_name))
        .map(|group| group.key)
}
