// crates/retarget-core/src/deriver.rs
//
// Config derivation: turn a partial bone mapping into the chain-aligned
// source and target configs the pose-transfer step walks.
//
// Both builders are pure. They read the master taxonomy by shared reference
// and return fresh owned configs, so repeated derivations never touch the
// registry data. Neither can fail: anything unresolvable becomes an unmapped
// slot.

use std::collections::HashSet;

use crate::config::{ChainConfig, RetargetConfigs};
use crate::mapping::BoneMapping;
use crate::registry::source_taxonomy;
use crate::taxonomy::ChainTaxonomy;

/// Custom source config for the built-in source rig.
///
/// Every source joint that no target bone maps onto becomes unmapped. Chain
/// ids and lengths match the master taxonomy exactly. An empty mapping yields
/// a config with every slot unmapped.
pub fn build_custom_source_config(bone_mapping: &BoneMapping) -> ChainConfig {
    build_custom_source_config_from(source_taxonomy(), bone_mapping)
}

/// Custom source config for an arbitrary master taxonomy.
pub fn build_custom_source_config_from(
    master: &ChainTaxonomy,
    bone_mapping: &BoneMapping,
) -> ChainConfig {
    let mapped: HashSet<&str> = bone_mapping.source_joints().map(|j| j.as_str()).collect();

    let config = ChainConfig::from_taxonomy(master)
        .map_slots(|_, _, joint| mapped.contains(joint.as_str()).then(|| joint.clone()));

    tracing::debug!(
        "Custom source config created: {}/{} joints mapped",
        config.mapped_count(),
        config.slot_count()
    );
    config
}

/// Custom target config: the source config with every mapped slot renamed
/// to the target bone mapped onto it.
///
/// Unmapped slots stay unmapped. A slot the source config claims is mapped
/// but the mapping cannot resolve means the two inputs disagree; it is
/// logged and left unmapped so retargeting can go ahead on the rest.
pub fn build_custom_target_config(
    custom_source_config: &ChainConfig,
    bone_mapping: &BoneMapping,
) -> ChainConfig {
    let reverse = bone_mapping.reverse();

    let config = custom_source_config.map_slots(|chain, index, source_joint| {
        match reverse.get(source_joint.as_str()) {
            Some(&target_joint) => Some(target_joint.clone()),
            None => {
                tracing::warn!(
                    "No target bone mapped for source bone {} ({}[{}]); leaving it unmapped",
                    source_joint,
                    chain,
                    index
                );
                None
            }
        }
    });

    tracing::debug!(
        "Custom target config created: {}/{} joints mapped",
        config.mapped_count(),
        config.slot_count()
    );
    config
}

/// Run both derivation steps for the built-in source rig.
pub fn derive_configs(bone_mapping: &BoneMapping) -> RetargetConfigs {
    derive_configs_from(source_taxonomy(), bone_mapping)
}

/// Run both derivation steps for an arbitrary master taxonomy.
pub fn derive_configs_from(master: &ChainTaxonomy, bone_mapping: &BoneMapping) -> RetargetConfigs {
    let source = build_custom_source_config_from(master, bone_mapping);
    let target = build_custom_target_config(&source, bone_mapping);
    RetargetConfigs { source, target }
}
