use schemars::schema_for;
use ziwei_core::entities::ChartDocument;
use ziwei_core::responses::FortuneReport;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaKind};
use crate::output::output;

/// Handle `ziwei schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_value(args.kind)?, flags.format)
}

pub fn schema_value(kind: SchemaKind) -> anyhow::Result<serde_json::Value> {
    let schema = match kind {
        SchemaKind::Chart => schema_for!(ChartDocument),
        SchemaKind::Report => schema_for!(FortuneReport),
    };
    Ok(serde_json::to_value(schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_schema_lists_palaces() {
        let schema = schema_value(SchemaKind::Chart).unwrap();
        assert!(schema["properties"]["palaces"].is_object());
    }

    #[test]
    fn report_schema_has_sections() {
        let schema = schema_value(SchemaKind::Report).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for section in ["cycle", "archetypes", "role_groups", "plan"] {
            assert!(properties.contains_key(section), "missing {section}");
        }
    }
}
