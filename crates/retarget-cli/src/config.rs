// crates/retarget-cli/src/config.rs
//
// Runtime configuration for the retarget CLI.
// Loaded from a TOML file or populated with sensible defaults.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use retarget_core::TaxonomyRegistry;

use crate::input;
use crate::output::OutputFormat;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "~/.retarget/config.toml";

/// Runtime configuration for the CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format when `--json` is not given: "table" or "json".
    #[serde(default)]
    pub output: OutputFormat,

    /// Extra target archetypes to register on startup, each a chain taxonomy
    /// file (JSON or TOML) keyed by chain identifier.
    #[serde(default, rename = "archetype")]
    pub archetypes: Vec<ArchetypeEntry>,
}

/// One extra archetype taxonomy listed in the configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchetypeEntry {
    /// Registry name, e.g. "unreal-mannequin".
    pub name: String,
    /// Path to the taxonomy file. A leading `~/` is expanded.
    pub path: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output: OutputFormat::default(),
            archetypes: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(expand_tilde(path))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: CliConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Build the taxonomy registry: built-in rigs plus every configured
    /// archetype.
    pub fn build_registry(&self) -> Result<TaxonomyRegistry, Box<dyn std::error::Error>> {
        let mut registry = TaxonomyRegistry::default_registry();
        for entry in &self.archetypes {
            let taxonomy = input::load_document(&expand_tilde(&entry.path))?;
            registry.register(entry.name.as_str(), taxonomy)?;
            tracing::info!("Registered archetype {} from {}", entry.name, entry.path);
        }
        Ok(registry)
    }
}

/// Expand `~` at the start of a path to the user's home directory.
/// Whether a failed load deserves a warning: the user named the file, or a
/// file sits at the path but could not be read as config.
pub fn load_failure_is_visible(path: &str, explicit: bool) -> bool {
    explicit || Path::new(&expand_tilde(path)).exists()
}

pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return format!("{}{}", home.display(), &path[1..]);
        }
    }
    path.to_string()
}
