//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use ziwei_config::{ConfigError, ZiweiConfig};
use ziwei_core::enums::PalaceKind;

#[test]
fn loads_scoring_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[scoring]
wealth_palace = "官禄"
wealth_fallback = "夫妻"
team_palace = "兄弟"
team_fallback = "交友"
"#,
        )?;

        let config: ZiweiConfig = Figment::from(Serialized::defaults(ZiweiConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.scoring.wealth_palace, PalaceKind::Career);
        assert_eq!(config.scoring.wealth_fallback, PalaceKind::Spouse);
        assert_eq!(config.scoring.team_palace, PalaceKind::Siblings);
        assert_eq!(config.scoring.team_fallback, PalaceKind::Friends);
        Ok(())
    });
}

#[test]
fn traditional_palace_names_are_accepted_in_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[scoring]
wealth_palace = "財帛"
"#,
        )?;

        let config: ZiweiConfig = Figment::from(Serialized::defaults(ZiweiConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.scoring.wealth_palace, PalaceKind::Wealth);
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[plan]
horizon_months = 6
"#,
        )?;

        let config: ZiweiConfig = Figment::from(Serialized::defaults(ZiweiConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.plan.horizon_months, 6);
        assert_eq!(config.scoring.wealth_palace, PalaceKind::Wealth);
        assert_eq!(config.general.default_format, "json");
        Ok(())
    });
}

#[test]
fn unknown_palace_name_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[scoring]
team_palace = "同事"
"#,
        )?;

        let result: Result<ZiweiConfig, _> =
            Figment::from(Serialized::defaults(ZiweiConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();

        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[plan]
horizon_months = 6
"#,
        )?;
        jail.set_env("ZIWEI_PLAN__HORIZON_MONTHS", "4");

        let config: ZiweiConfig = Figment::from(Serialized::defaults(ZiweiConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("ZIWEI_").split("__"))
            .extract()?;

        assert_eq!(config.plan.horizon_months, 4);
        Ok(())
    });
}

#[test]
fn validation_rejects_out_of_range_horizon() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[plan]
horizon_months = 24
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(ZiweiConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = ZiweiConfig::from_figment(&figment).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "plan.horizon_months"));
        Ok(())
    });
}
