// crates/retarget-core/src/rig.rs
//
// Rig comparison: validating an uploaded rig and deciding whether it can skip
// bone mapping entirely.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::RetargetError;
use crate::registry::TaxonomyRegistry;
use crate::taxonomy::ChainTaxonomy;
use crate::traits::Armature;

/// A skinned mesh and the bones its skeleton binds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinnedMeshInfo {
    pub name: String,
    #[serde(default)]
    pub bones: Vec<String>,
}

/// Bone hierarchy summary of a loaded model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RigDescription {
    pub name: String,
    #[serde(default)]
    pub skinned_meshes: Vec<SkinnedMeshInfo>,
    /// Bones present in the scene but not bound by any skinned mesh.
    #[serde(default)]
    pub bones: Vec<String>,
}

impl RigDescription {
    /// A rig with one skinned mesh binding every joint of the taxonomy.
    pub fn from_taxonomy(name: impl Into<String>, taxonomy: &ChainTaxonomy) -> Self {
        let name = name.into();
        Self {
            skinned_meshes: vec![SkinnedMeshInfo {
                name: format!("{}_mesh", name),
                bones: taxonomy.joint_names().map(|j| j.to_string()).collect(),
            }],
            bones: Vec::new(),
            name,
        }
    }
}

impl Armature for RigDescription {
    fn rig_name(&self) -> &str {
        &self.name
    }

    fn bone_names(&self) -> Vec<&str> {
        self.skinned_meshes
            .iter()
            .flat_map(|mesh| mesh.bones.iter())
            .chain(self.bones.iter())
            .map(String::as_str)
            .collect()
    }

    fn has_skinned_mesh(&self) -> bool {
        self.skinned_meshes.iter().any(|mesh| !mesh.bones.is_empty())
    }
}

/// Check that a rig has something to retarget onto.
///
/// A rig without a skinned mesh is a user-facing error: mapping cannot start
/// until a different model is supplied.
pub fn validate_skinned_mesh_has_bones<A: Armature + ?Sized>(rig: &A) -> Result<(), RetargetError> {
    if !rig.has_skinned_mesh() {
        return Err(RetargetError::NoSkinnedMesh(rig.rig_name().to_string()));
    }
    tracing::debug!("Skinned meshes found in {}; ready to start retargeting", rig.rig_name());
    Ok(())
}

/// Whether the target rig already uses the source rig's bone names, so no
/// bone mapping is needed.
///
/// Every target bone must exist in the source; extra source bones are
/// allowed. A target without skinned meshes never matches.
pub fn are_source_and_target_bones_identical<S, T>(source: &S, target: &T) -> bool
where
    S: Armature + ?Sized,
    T: Armature + ?Sized,
{
    if validate_skinned_mesh_has_bones(target).is_err() {
        return false;
    }

    let source_bones: HashSet<&str> = source.bone_names().into_iter().collect();
    target
        .bone_names()
        .into_iter()
        .all(|bone| source_bones.contains(bone))
}

/// Find a registered target archetype whose every joint is present in the
/// rig. Returns the archetype's registry name.
pub fn detect_archetype<'r, A: Armature + ?Sized>(
    rig: &A,
    registry: &'r TaxonomyRegistry,
) -> Option<&'r str> {
    let bones: HashSet<&str> = rig.bone_names().into_iter().collect();
    let found = registry.archetypes().find_map(|(name, taxonomy)| {
        taxonomy
            .joint_names()
            .all(|joint| bones.contains(joint.as_str()))
            .then_some(name)
    });
    if let Some(name) = found {
        tracing::info!("Rig {} matches the {} archetype", rig.rig_name(), name);
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{source_taxonomy, target_taxonomy, TARGET_RIG_NAME};

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

    #[test]
    fn test_identical_check_is_asymmetric() {
        let source = rig("source", &["A", "B", "C"]);
        assert!(are_source_and_target_bones_identical(&source, &rig("t1", &["A", "B"])));
        assert!(!are_source_and_target_bones_identical(&source, &rig("t2", &["A", "D"])));
        // Reversed roles: the source lacks C.
        assert!(!are_source_and_target_bones_identical(&rig("t1", &["A", "B"]), &source));
    }

    #[test]
    fn test_identical_check_requires_skinned_target() {
        let source = rig("source", &["A", "B"]);
        let target = RigDescription {
            name: "props".to_string(),
            skinned_meshes: Vec::new(),
            bones: vec!["A".to_string()],
        };
        assert!(!are_source_and_target_bones_identical(&source, &target));
    }

    #[test]
    fn test_validate_skinned_mesh() {
        assert!(validate_skinned_mesh_has_bones(&rig("ok", &["Hips"])).is_ok());

        let unbound = rig("unbound", &[]);
        assert_eq!(
            validate_skinned_mesh_has_bones(&unbound).unwrap_err(),
            RetargetError::NoSkinnedMesh("unbound".to_string())
        );
    }

    #[test]
    fn test_loose_bones_count_for_comparison() {
        let mut target = rig("target", &["A"]);
        target.bones.push("Z".to_string());
        assert_eq!(target.bone_names(), vec!["A", "Z"]);
        assert!(!are_source_and_target_bones_identical(&rig("source", &["A"]), &target));
    }

    #[test]
    fn test_from_taxonomy_matches_itself() {
        let source = RigDescription::from_taxonomy("mesh2motion", source_taxonomy());
        assert_eq!(source.bone_names().len(), source_taxonomy().joint_count());
        assert!(are_source_and_target_bones_identical(&source, &source));
    }

    #[test]
    fn test_detect_mixamo_archetype() {
        let registry = TaxonomyRegistry::default();

        let mut mixamo = RigDescription::from_taxonomy("character", target_taxonomy());
        mixamo.bones.push("mixamorigHeadTop_End".to_string());
        assert_eq!(detect_archetype(&mixamo, &registry), Some(TARGET_RIG_NAME));

        let partial = rig("partial", &["mixamorigHips", "mixamorigSpine"]);
        assert_eq!(detect_archetype(&partial, &registry), None);

        // The source rig itself is never reported as an archetype.
        let source = RigDescription::from_taxonomy("m2m", source_taxonomy());
        assert_eq!(detect_archetype(&source, &registry), None);
    }

    #[test]
    fn test_rig_description_serde_defaults() {
        let rig: RigDescription = serde_json::from_str(
            r#"{"name": "bot", "skinned_meshes": [{"name": "Body", "bones": ["Hips"]}]}"#,
        )
        .unwrap();
        assert!(rig.bones.is_empty());
        assert!(rig.has_skinned_mesh());
    }
}
