use ziwei_config::ZiweiConfig;

/// Handle `ziwei config`.
pub fn handle(config: &ZiweiConfig) -> anyhow::Result<()> {
    println!("{}", render(config)?);
    Ok(())
}

pub fn render(config: &ZiweiConfig) -> anyhow::Result<String> {
    Ok(toml::to_string_pretty(config)?)
}
