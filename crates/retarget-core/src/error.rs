// crates/retarget-core/src/error.rs

use thiserror::Error;

use crate::chain::ChainId;

/// Error types for taxonomy construction, mapping input, and rig validation.
///
/// The config deriver itself never produces one of these: unresolvable slots
/// are logged and marked unmapped instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RetargetError {
    /// A joint name was empty. The empty name is reserved for "unmapped".
    #[error("Joint names must not be empty")]
    EmptyJointName,

    /// A chain was defined with no joints.
    #[error("Chain {0} has no joints")]
    EmptyChain(ChainId),

    /// A chain identifier is listed more than once.
    #[error("Chain {0} is defined more than once")]
    DuplicateChain(ChainId),

    /// The same joint name appears twice in one taxonomy.
    #[error("Joint {joint} appears in both {first} and {second}")]
    DuplicateJoint {
        joint: String,
        first: ChainId,
        second: ChainId,
    },

    /// A chain identifier outside the known set.
    #[error("Unknown chain identifier: {0}")]
    UnknownChain(String),

    /// An archetype taxonomy does not cover the same chains as the source rig.
    #[error("Archetype {archetype} chain set differs from source (missing: {missing:?}, extra: {extra:?})")]
    ChainSetMismatch {
        archetype: String,
        missing: Vec<ChainId>,
        extra: Vec<ChainId>,
    },

    /// An archetype with this name is already registered.
    #[error("Archetype already registered: {0}")]
    DuplicateArchetype(String),

    /// No archetype with this name is registered.
    #[error("Unknown archetype: {0}")]
    UnknownArchetype(String),

    /// The rig has no skinned mesh with bones to retarget onto.
    #[error("No SkinnedMeshes found in rig {0}")]
    NoSkinnedMesh(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RetargetError {
    fn from(e: serde_json::Error) -> Self {
        RetargetError::Serialization(e.to_string())
    }
}
