use anyhow::Result;
use serde::Serialize;

use behaviors::models::common::BehaviorKind;

use crate::cli::ui;

#[derive(Serialize)]
struct BehaviorEntry {
    name: BehaviorKind,
    description: &'static str,
}

/// List every behavior with its description
pub fn execute(output_format: &str) -> Result<()> {
    if output_format == "json" {
        println!("{}", render_json()?);
        return Ok(());
    }

    ui::print_header("Property Behaviors");
    for kind in BehaviorKind::ALL {
        ui::print_result(kind.name(), "");
        ui::print_wrapped(kind.description(), 4);
        println!();
    }
    Ok(())
}

pub fn render_json() -> Result<String> {
    let entries: Vec<BehaviorEntry> = BehaviorKind::ALL
        .iter()
        .map(|kind| BehaviorEntry { name: *kind, description: kind.description() })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}
