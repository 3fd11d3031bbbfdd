// crates/retarget-core/src/traits.rs

/// Read access to a loaded rig's bone hierarchy.
///
/// Implemented by `RigDescription` for rigs described in JSON/TOML; a scene
/// graph loader can implement it directly over its own node tree.
pub trait Armature {
    /// Name used in diagnostics.
    fn rig_name(&self) -> &str;

    /// Every bone name in the rig, in traversal order. May contain repeats
    /// when several skinned meshes share a skeleton.
    fn bone_names(&self) -> Vec<&str>;

    /// Whether at least one skinned mesh with bound bones is present.
    fn has_skinned_mesh(&self) -> bool;
}
