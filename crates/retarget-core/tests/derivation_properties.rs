// crates/retarget-core/tests/derivation_properties.rs
//
// Integration tests for config derivation through the public API: shape
// preservation, unmapped-slot propagation, full-coverage renaming, and the
// rig comparison path that bypasses mapping.

use retarget_core::{
    are_source_and_target_bones_identical, build_custom_source_config,
    build_custom_target_config, derive_configs, detect_archetype, source_taxonomy,
    target_taxonomy, BoneMapping, ChainConfig, ChainId, JointName, RigDescription,
    SkinnedMeshInfo, TaxonomyRegistry, TARGET_RIG_NAME,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn j(name: &str) -> JointName {
    JointName::new(name).unwrap()
}

/// A handful of mappings of different coverage, from nothing to everything.
fn sample_mappings() -> Vec<BoneMapping> {
    let arm_only: BoneMapping = [
        (j("LeftUpperArm"), j("upperarm_l")),
        (j("LeftHand"), j("hand_l")),
    ]
    .into_iter()
    .collect();

    // Every other source joint, with made-up target names.
    let sparse: BoneMapping = source_taxonomy()
        .joint_names()
        .enumerate()
        .filter(|(i, _)| i % 2 == 0)
        .map(|(i, joint)| (j(&format!("Bone{:03}", i)), joint.clone()))
        .collect();

    // A mapping naming joints the source rig does not have.
    let foreign: BoneMapping = [(j("Tail1"), j("tail_01")), (j("Hips"), j("pelvis"))]
        .into_iter()
        .collect();

    vec![
        BoneMapping::new(),
        arm_only,
        sparse,
        foreign,
        BoneMapping::from_archetype(source_taxonomy(), target_taxonomy()),
    ]
}

fn shape_of_master() -> Vec<(ChainId, usize)> {
    source_taxonomy().iter().map(|(id, joints)| (id, joints.len())).collect()
}

fn rig(name: &str, bones: &[&str]) -> RigDescription {
    RigDescription {
        name: name.to_string(),
        skinned_meshes: vec![SkinnedMeshInfo {
            name: "Body".to_string(),
            bones: bones.iter().map(|b| b.to_string()).collect(),
        }],
        bones: Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn test_shape_is_preserved_for_every_mapping() {
    for mapping in sample_mappings() {
        let source = build_custom_source_config(&mapping);
        let target = build_custom_target_config(&source, &mapping);
        assert_eq!(source.shape(), shape_of_master());
        assert_eq!(target.shape(), shape_of_master());
    }
}

#[test]
fn test_unmapped_source_slots_stay_unmapped_in_target() {
    for mapping in sample_mappings() {
        let source = build_custom_source_config(&mapping);
        let target = build_custom_target_config(&source, &mapping);

        for (chain, source_slots) in source.iter() {
            let target_slots = target.chain(chain).unwrap();
            for (s, t) in source_slots.iter().zip(target_slots) {
                if s.is_none() {
                    assert!(t.is_none(), "{} gained a joint in the target config", chain);
                }
            }
        }
    }
}

#[test]
fn test_full_chain_coverage_renames_every_slot() {
    let mapping = BoneMapping::from_archetype(source_taxonomy(), target_taxonomy());
    let configs = derive_configs(&mapping);

    assert_eq!(configs.source, ChainConfig::from_taxonomy(source_taxonomy()));
    assert_eq!(configs.target, ChainConfig::from_taxonomy(target_taxonomy()));

    for pair in configs.joint_pairs() {
        assert_eq!(mapping.source_for(pair.target.as_str()), Some(pair.source));
    }
    assert_eq!(configs.joint_pairs().len(), source_taxonomy().joint_count());
}

#[test]
fn test_empty_mapping_floor() {
    let mapping = BoneMapping::new();
    let source = build_custom_source_config(&mapping);
    let target = build_custom_target_config(&source, &mapping);
    assert!(source.is_fully_unmapped());
    assert!(target.is_fully_unmapped());
    assert_eq!(target.slot_count(), source_taxonomy().joint_count());
}

#[test]
fn test_master_taxonomy_untouched_by_derivation() {
    let before = source_taxonomy().clone();
    for mapping in sample_mappings() {
        let _ = derive_configs(&mapping);
    }
    assert_eq!(source_taxonomy(), &before);
}

#[test]
fn test_left_arm_scenario() {
    let mapping: BoneMapping = [
        (j("LeftUpperArm"), j("upperarm_l")),
        (j("LeftHand"), j("hand_l")),
    ]
    .into_iter()
    .collect();

    let source = build_custom_source_config(&mapping);
    let target = build_custom_target_config(&source, &mapping);

    let source_record = source.to_sentinel_record();
    let target_record = target.to_sentinel_record();
    assert_eq!(source_record["armL"], vec!["upperarm_l", "", "hand_l"]);
    assert_eq!(target_record["armL"], vec!["LeftUpperArm", "", "LeftHand"]);
}

#[test]
fn test_foreign_source_names_are_ignored() {
    let mapping: BoneMapping = [(j("Tail1"), j("tail_01")), (j("Hips"), j("pelvis"))]
        .into_iter()
        .collect();
    let configs = derive_configs(&mapping);

    assert_eq!(configs.source.mapped_count(), 1);
    assert_eq!(configs.target.chain(ChainId::Pelvis).unwrap(), &[Some(j("Hips"))]);
}

#[test]
fn test_later_target_wins_shared_source_joint() {
    let mut mapping = BoneMapping::new();
    mapping.insert(j("Hips"), j("pelvis"));
    mapping.insert(j("Hips_02"), j("pelvis"));

    let configs = derive_configs(&mapping);
    assert_eq!(configs.source.chain(ChainId::Pelvis).unwrap(), &[Some(j("pelvis"))]);
    assert_eq!(configs.target.chain(ChainId::Pelvis).unwrap(), &[Some(j("Hips_02"))]);
}

// ---------------------------------------------------------------------------
// Rig comparison
// ---------------------------------------------------------------------------

#[test]
fn test_asymmetric_rig_match() {
    let source = rig("source", &["A", "B", "C"]);
    assert!(are_source_and_target_bones_identical(&source, &rig("target", &["A", "B"])));
    assert!(!are_source_and_target_bones_identical(&source, &rig("target", &["A", "D"])));
}

#[test]
fn test_mixamo_upload_auto_maps_end_to_end() {
    let registry = TaxonomyRegistry::default();
    let upload = RigDescription::from_taxonomy("ybot", target_taxonomy());
    let source_rig = RigDescription::from_taxonomy("mesh2motion", source_taxonomy());

    assert!(!are_source_and_target_bones_identical(&source_rig, &upload));

    let archetype = detect_archetype(&upload, &registry).unwrap();
    assert_eq!(archetype, TARGET_RIG_NAME);

    let mapping = BoneMapping::from_archetype(registry.source(), registry.get(archetype).unwrap());
    let configs = derive_configs(&mapping);
    assert_eq!(
        configs.target.chain(ChainId::FingersIndexR).unwrap()[0],
        Some(j("mixamorigRightHandIndex1"))
    );
    assert!(configs.coverage().iter().all(|c| c.mapped == c.total));
}
