// crates/retarget-cli/src/commands/taxonomy.rs
//
// `retarget taxonomy`: Print the chains of a registered rig.

use clap::Args;
use tabled::Tabled;

use retarget_core::{ChainTaxonomy, SOURCE_RIG_NAME};

use super::Context;
use crate::output::{format_json, format_table, OutputFormat};

/// Print a registered taxonomy.
#[derive(Debug, Args)]
pub struct TaxonomyCmd {
    /// Registry name of the rig (e.g. mesh2motion, mixamo).
    #[arg(long, default_value = SOURCE_RIG_NAME)]
    pub archetype: String,
}

/// A row in the taxonomy table.
#[derive(Tabled)]
struct ChainRow {
    #[tabled(rename = "Group")]
    group: &'static str,
    #[tabled(rename = "Chain")]
    chain: String,
    #[tabled(rename = "Joints")]
    joints: String,
}

fn chain_rows(taxonomy: &ChainTaxonomy) -> Vec<ChainRow> {
    taxonomy
        .iter()
        .map(|(id, joints)| ChainRow {
            group: if id.is_finger() { "fingers" } else { "body" },
            chain: id.to_string(),
            joints: joints
                .iter()
                .map(|j| j.as_str())
                .collect::<Vec<_>>()
                .join(" > "),
        })
        .collect()
}

/// Run the taxonomy command.
pub fn run(cmd: &TaxonomyCmd, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let taxonomy = ctx.registry.require(&cmd.archetype)?;

    match ctx.output {
        OutputFormat::Json => println!("{}", format_json(taxonomy)),
        OutputFormat::Table => {
            println!(
                "Taxonomy: {}  |  Chains: {}  |  Joints: {}",
                cmd.archetype,
                taxonomy.len(),
                taxonomy.joint_count()
            );
            println!();
            println!("{}", format_table(&chain_rows(taxonomy)));
            println!();
            println!("Registered rigs: {}", ctx.registry.names().join(", "));
        }
    }

    Ok(())
}
