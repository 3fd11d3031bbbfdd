// crates/retarget-cli/src/commands/automap.rs
//
// `retarget automap --target <rig>`: Build a bone mapping for a rig that
// matches a known archetype.

use clap::Args;
use tabled::Tabled;

use retarget_core::{detect_archetype, validate_skinned_mesh_has_bones, BoneMapping, RigDescription};

use super::Context;
use crate::input;
use crate::output::{format_json, format_table, OutputFormat};

/// Generate a bone mapping from archetype detection.
#[derive(Debug, Args)]
pub struct AutomapCmd {
    /// Target rig description (JSON or TOML).
    #[arg(long)]
    pub target: String,
}

/// A row in the generated mapping table.
#[derive(Tabled)]
struct MappingRow {
    #[tabled(rename = "Target bone")]
    target: String,
    #[tabled(rename = "Source bone")]
    source: String,
}

/// Run the automap command.
pub fn run(cmd: &AutomapCmd, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let target: RigDescription = input::load_document(&cmd.target)?;
    validate_skinned_mesh_has_bones(&target)?;

    let archetype = detect_archetype(&target, &ctx.registry)
        .ok_or_else(|| format!("No registered archetype matches rig {}", target.name))?;
    let mapping = BoneMapping::from_archetype(ctx.registry.source(), ctx.registry.require(archetype)?);

    match ctx.output {
        OutputFormat::Json => println!("{}", format_json(&mapping)),
        OutputFormat::Table => {
            println!("Rig {} matches archetype {}", target.name, archetype);
            println!();
            let rows: Vec<MappingRow> = mapping
                .iter()
                .map(|(t, s)| MappingRow {
                    target: t.to_string(),
                    source: s.to_string(),
                })
                .collect();
            println!("{}", format_table(&rows));
        }
    }

    Ok(())
}
