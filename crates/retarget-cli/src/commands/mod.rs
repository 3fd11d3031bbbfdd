// crates/retarget-cli/src/commands/mod.rs
//
// Command module declarations for the retarget CLI.

pub mod automap;
pub mod compare;
pub mod derive;
pub mod taxonomy;

use retarget_core::TaxonomyRegistry;

use crate::output::OutputFormat;

/// State shared by every command: the registry built from the configuration
/// and the selected output format.
#[derive(Debug)]
pub struct Context {
    pub registry: TaxonomyRegistry,
    pub output: OutputFormat,
}
