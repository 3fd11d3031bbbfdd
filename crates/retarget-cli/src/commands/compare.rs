// crates/retarget-cli/src/commands/compare.rs
//
// `retarget compare --target <rig>`: Validate an uploaded rig and check
// whether it can skip bone mapping.

use clap::Args;
use serde::Serialize;

use retarget_core::{
    are_source_and_target_bones_identical, detect_archetype, validate_skinned_mesh_has_bones,
    Armature, RigDescription, TaxonomyRegistry, SOURCE_RIG_NAME,
};

use super::Context;
use crate::input;
use crate::output::{format_json, OutputFormat};

/// Compare a target rig against the source rig.
#[derive(Debug, Args)]
pub struct CompareCmd {
    /// Target rig description (JSON or TOML).
    #[arg(long)]
    pub target: String,

    /// Source rig description. Defaults to the built-in source taxonomy.
    #[arg(long)]
    pub source: Option<String>,
}

/// Result of a rig comparison.
#[derive(Debug, Serialize)]
struct CompareReport {
    source: String,
    target: String,
    target_bones: usize,
    identical: bool,
    archetype: Option<String>,
}

fn build_report(
    source: &RigDescription,
    target: &RigDescription,
    registry: &TaxonomyRegistry,
) -> CompareReport {
    CompareReport {
        source: source.name.clone(),
        target: target.name.clone(),
        target_bones: target.bone_names().len(),
        identical: are_source_and_target_bones_identical(source, target),
        archetype: detect_archetype(target, registry).map(str::to_string),
    }
}

/// Run the compare command.
///
/// A target without skinned meshes is reported as an error so the caller
/// stops before any mapping work.
pub fn run(cmd: &CompareCmd, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let target: RigDescription = input::load_document(&cmd.target)?;
    validate_skinned_mesh_has_bones(&target)?;

    let source = match &cmd.source {
        Some(path) => input::load_document(path)?,
        None => RigDescription::from_taxonomy(SOURCE_RIG_NAME, ctx.registry.source()),
    };

    let report = build_report(&source, &target, &ctx.registry);

    match ctx.output {
        OutputFormat::Json => println!("{}", format_json(&report)),
        OutputFormat::Table => {
            println!("Source rig:   {}", report.source);
            println!("Target rig:   {} ({} bones)", report.target, report.target_bones);
            println!(
                "Identical:    {}",
                if report.identical { "yes (no bone mapping needed)" } else { "no" }
            );
            println!(
                "Archetype:    {}",
                report.archetype.as_deref().unwrap_or("none detected")
            );
        }
    }

    Ok(())
}
