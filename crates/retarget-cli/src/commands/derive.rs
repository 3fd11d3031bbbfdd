// crates/retarget-cli/src/commands/derive.rs
//
// `retarget derive --mapping <file>`: Derive the custom source and target
// configs from a bone mapping file.

use std::collections::BTreeMap;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use retarget_core::{derive_configs_from, BoneMapping, ChainTaxonomy, JointName, RetargetConfigs};

use super::Context;
use crate::input;
use crate::output::{format_json, format_table, slot_label, OutputFormat};

/// Derive retargeting configs from a bone mapping.
#[derive(Debug, Args)]
pub struct DeriveCmd {
    /// Bone mapping file (JSON or TOML): `{ "<target bone>": "<source bone>" }`.
    #[arg(long)]
    pub mapping: String,

    /// Only list slots mapped on both sides.
    #[arg(long)]
    pub mapped_only: bool,
}

/// A row in the per-slot table.
#[derive(Tabled)]
struct SlotRow {
    #[tabled(rename = "Chain")]
    chain: String,
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Target")]
    target: String,
}

/// A row in the per-chain coverage table.
#[derive(Tabled)]
struct CoverageRow {
    #[tabled(rename = "Chain")]
    chain: String,
    #[tabled(rename = "Mapped")]
    mapped: String,
}

/// JSON output: both configs in the sentinel record shape (`""` = unmapped).
#[derive(Serialize)]
struct DerivedRecords {
    source: BTreeMap<String, Vec<String>>,
    target: BTreeMap<String, Vec<String>>,
}

fn slot_rows(configs: &RetargetConfigs, mapped_only: bool) -> Vec<SlotRow> {
    let mut rows = Vec::new();
    for (chain, source_slots) in configs.source.iter() {
        let target_slots = configs.target.chain(chain).unwrap_or_default();
        for (index, source) in source_slots.iter().enumerate() {
            let target = target_slots.get(index).and_then(Option::as_ref);
            if mapped_only && (source.is_none() || target.is_none()) {
                continue;
            }
            rows.push(SlotRow {
                chain: chain.to_string(),
                index,
                source: slot_label(source.as_ref()),
                target: slot_label(target),
            });
        }
    }
    rows
}

fn coverage_rows(configs: &RetargetConfigs) -> Vec<CoverageRow> {
    configs
        .coverage()
        .into_iter()
        .map(|c| CoverageRow {
            chain: c.chain.to_string(),
            mapped: format!("{}/{}", c.mapped, c.total),
        })
        .collect()
}

/// Mapping entries whose source bone is not part of the master taxonomy.
/// Derivation drops them silently, so the command reports them.
fn unplaced_entries<'m>(
    master: &ChainTaxonomy,
    mapping: &'m BoneMapping,
) -> Vec<(&'m JointName, &'m JointName)> {
    mapping
        .iter()
        .filter(|(_, source)| master.locate(source.as_str()).is_none())
        .collect()
}

/// Run the derive command.
pub fn run(cmd: &DeriveCmd, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let mapping: BoneMapping = input::load_document(&cmd.mapping)?;
    let configs = derive_configs_from(ctx.registry.source(), &mapping);

    let unplaced = unplaced_entries(ctx.registry.source(), &mapping);
    for (target, source) in &unplaced {
        tracing::warn!(
            "Mapping {} -> {} names a bone outside the source rig; ignoring it",
            target,
            source
        );
    }

    match ctx.output {
        OutputFormat::Json => {
            let records = DerivedRecords {
                source: configs.source.to_sentinel_record(),
                target: configs.target.to_sentinel_record(),
            };
            println!("{}", format_json(&records));
        }
        OutputFormat::Table => {
            println!("Bone mapping: {} ({} entries)", cmd.mapping, mapping.len());
            println!(
                "Retargetable joints: {}/{}",
                configs.target.mapped_count(),
                configs.target.slot_count()
            );
            println!();
            println!("{}", format_table(&slot_rows(&configs, cmd.mapped_only)));
            println!();
            println!("{}", format_table(&coverage_rows(&configs)));
            if !unplaced.is_empty() {
                println!();
                println!("Ignored {} mapping entries naming unknown source bones.", unplaced.len());
            }
            if configs.target.is_fully_unmapped() {
                println!();
                println!("Note: no joint is mapped; nothing can be retargeted.");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use retarget_core::{derive_configs, source_taxonomy};

    fn arm_configs() -> RetargetConfigs {
        let mapping: BoneMapping = [
            (JointName::new("LeftUpperArm").unwrap(), JointName::new("upperarm_l").unwrap()),
            (JointName::new("LeftHand").unwrap(), JointName::new("hand_l").unwrap()),
        ]
        .into_iter()
        .collect();
        derive_configs(&mapping)
    }

    #[test]
    fn test_slot_rows_mark_unmapped() {
        let configs = arm_configs();
        let rows = slot_rows(&configs, false);
        assert_eq!(rows.len(), 58);

        let arm: Vec<(&str, &str)> = rows
            .iter()
            .filter(|r| r.chain == "armL")
            .map(|r| (r.source.as_str(), r.target.as_str()))
            .collect();
        assert_eq!(
            arm,
            vec![("upperarm_l", "LeftUpperArm"), ("-", "-"), ("hand_l", "LeftHand")]
        );
    }

    #[test]
    fn test_slot_rows_mapped_only() {
        let rows = slot_rows(&arm_configs(), true);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].index, 2);
    }

    #[test]
    fn test_coverage_rows() {
        let rows = coverage_rows(&arm_configs());
        let arm = rows.iter().find(|r| r.chain == "armL").unwrap();
        assert_eq!(arm.mapped, "2/3");
    }

    #[test]
    fn test_unplaced_entries_name_unknown_source_bones() {
        let mapping: BoneMapping = [
            (JointName::new("Tail1").unwrap(), JointName::new("tail_01").unwrap()),
            (JointName::new("Hips").unwrap(), JointName::new("pelvis").unwrap()),
        ]
        .into_iter()
        .collect();

        let unplaced = unplaced_entries(source_taxonomy(), &mapping);
        assert_eq!(unplaced.len(), 1);
        assert_eq!(unplaced[0].0.as_str(), "Tail1");
        assert!(unplaced_entries(source_taxonomy(), &BoneMapping::new()).is_empty());
    }
}
