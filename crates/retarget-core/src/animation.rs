// crates/retarget-core/src/animation.rs
//
// Animation library lookup and keyframe track naming.

use serde::{Deserialize, Serialize};

/// Skeleton family of a source rig. Each family ships its own animation
/// library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkeletonType {
    Human,
    Quadruped,
    Bird,
    Dragon,
}

impl SkeletonType {
    /// Path of the animation library for this skeleton family.
    pub fn animation_file_path(&self) -> &'static str {
        match self {
            SkeletonType::Human => "/animations/human-base-animations.glb",
            SkeletonType::Quadruped => "/animations/quad-creature-animations.glb",
            SkeletonType::Bird => "/animations/bird-animations.glb",
            SkeletonType::Dragon => "/animations/dragon-animations.glb",
        }
    }
}

/// Keyframe track name for a bone property, e.g. `"hand_l.quaternion"`.
pub fn track_name(bone: &str, property: &str) -> String {
    format!("{}.{}", bone, property)
}
