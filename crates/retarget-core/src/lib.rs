// crates/retarget-core/src/lib.rs
//
// retarget-core: chain taxonomies, bone mappings, and retargeting config
// derivation for Mesh2Motion rigs.
//
// This is the leaf crate of the workspace. It holds the built-in source and
// target taxonomies, derives the chain-aligned configs a pose-transfer step
// consumes, and compares uploaded rigs against known archetypes.

pub mod animation;
pub mod chain;
pub mod config;
pub mod deriver;
pub mod error;
pub mod joint;
pub mod mapping;
pub mod registry;
pub mod rig;
pub mod taxonomy;
pub mod traits;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use retarget_core::BoneMapping;`

// Taxonomy types
pub use chain::ChainId;
pub use joint::JointName;
pub use registry::{
    source_taxonomy, target_taxonomy, TaxonomyRegistry, SOURCE_RIG_NAME, TARGET_RIG_NAME,
};
pub use taxonomy::ChainTaxonomy;

// Mapping and derived configs
pub use config::{ChainConfig, ChainCoverage, JointPair, RetargetConfigs};
pub use deriver::{
    build_custom_source_config, build_custom_source_config_from, build_custom_target_config,
    derive_configs, derive_configs_from,
};
pub use mapping::BoneMapping;

// Rig comparison
pub use rig::{
    are_source_and_target_bones_identical, detect_archetype, validate_skinned_mesh_has_bones,
    RigDescription, SkinnedMeshInfo,
};

// Animation helpers
pub use animation::{track_name, SkeletonType};

// Error type
pub use error::RetargetError;

// Traits
pub use traits::Armature;
