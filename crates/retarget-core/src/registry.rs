// crates/retarget-core/src/registry.rs
//
// Built-in chain taxonomies and the registry of known rig archetypes.
//
// The Mesh2Motion taxonomy is always the source side of a retarget. Target
// archetypes (Mixamo for now) share its chain identifiers so that chains can
// be joined across rigs by id; only the joint names differ.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use crate::chain::ChainId;
use crate::error::RetargetError;
use crate::taxonomy::ChainTaxonomy;

/// Registry name of the source rig.
pub const SOURCE_RIG_NAME: &str = "mesh2motion";

/// Registry name of the built-in target archetype.
pub const TARGET_RIG_NAME: &str = "mixamo";

type ChainTable = [(ChainId, &'static [&'static str]); 17];

const MESH2MOTION_CHAINS: ChainTable = [
    (ChainId::Pelvis, &["pelvis"]),
    (ChainId::Spine, &["spine_01", "spine_02", "spine_03"]),
    (ChainId::Head, &["neck_01", "head"]),
    (ChainId::ArmL, &["upperarm_l", "lowerarm_l", "hand_l"]),
    (ChainId::ArmR, &["upperarm_r", "lowerarm_r", "hand_r"]),
    (ChainId::LegL, &["thigh_l", "calf_l", "foot_l"]),
    (ChainId::LegR, &["thigh_r", "calf_r", "foot_r"]),
    (ChainId::FingersThumbL, &["thumb_01_l", "thumb_02_l", "thumb_03_l", "thumb_04_leaf_l"]),
    (ChainId::FingersThumbR, &["thumb_01_r", "thumb_02_r", "thumb_03_r", "thumb_04_leaf_r"]),
    (ChainId::FingersIndexL, &["index_01_l", "index_02_l", "index_03_l", "index_04_leaf_l"]),
    (ChainId::FingersIndexR, &["index_01_r", "index_02_r", "index_03_r", "index_04_leaf_r"]),
    (ChainId::FingersMiddleL, &["middle_01_l", "middle_02_l", "middle_03_l", "middle_04_leaf_l"]),
    (ChainId::FingersMiddleR, &["middle_01_r", "middle_02_r", "middle_03_r", "middle_04_leaf_r"]),
    (ChainId::FingersRingL, &["ring_01_l", "ring_02_l", "ring_03_l", "ring_04_leaf_l"]),
    (ChainId::FingersRingR, &["ring_01_r", "ring_02_r", "ring_03_r", "ring_04_leaf_r"]),
    (ChainId::FingersPinkyL, &["pinky_01_l", "pinky_02_l", "pinky_03_l", "pinky_04_leaf_l"]),
    (ChainId::FingersPinkyR, &["pinky_01_r", "pinky_02_r", "pinky_03_r", "pinky_04_leaf_r"]),
];

const MIXAMO_CHAINS: ChainTable = [
    (ChainId::Pelvis, &["mixamorigHips"]),
    (ChainId::Spine, &["mixamorigSpine", "mixamorigSpine1", "mixamorigSpine2"]),
    (ChainId::Head, &["mixamorigNeck", "mixamorigHead"]),
    (ChainId::ArmL, &["mixamorigLeftArm", "mixamorigLeftForeArm", "mixamorigLeftHand"]),
    (ChainId::ArmR, &["mixamorigRightArm", "mixamorigRightForeArm", "mixamorigRightHand"]),
    (ChainId::LegL, &["mixamorigLeftUpLeg", "mixamorigLeftLeg", "mixamorigLeftFoot"]),
    (ChainId::LegR, &["mixamorigRightUpLeg", "mixamorigRightLeg", "mixamorigRightFoot"]),
    (
        ChainId::FingersThumbL,
        &["mixamorigLeftHandThumb1", "mixamorigLeftHandThumb2", "mixamorigLeftHandThumb3", "mixamorigLeftHandThumb4"],
    ),
    (
        ChainId::FingersThumbR,
        &["mixamorigRightHandThumb1", "mixamorigRightHandThumb2", "mixamorigRightHandThumb3", "mixamorigRightHandThumb4"],
    ),
    (
        ChainId::FingersIndexL,
        &["mixamorigLeftHandIndex1", "mixamorigLeftHandIndex2", "mixamorigLeftHandIndex3", "mixamorigLeftHandIndex4"],
    ),
    (
        ChainId::FingersIndexR,
        &["mixamorigRightHandIndex1", "mixamorigRightHandIndex2", "mixamorigRightHandIndex3", "mixamorigRightHandIndex4"],
    ),
    (
        ChainId::FingersMiddleL,
        &["mixamorigLeftHandMiddle1", "mixamorigLeftHandMiddle2", "mixamorigLeftHandMiddle3", "mixamorigLeftHandMiddle4"],
    ),
    (
        ChainId::FingersMiddleR,
        &["mixamorigRightHandMiddle1", "mixamorigRightHandMiddle2", "mixamorigRightHandMiddle3", "mixamorigRightHandMiddle4"],
    ),
    (
        ChainId::FingersRingL,
        &["mixamorigLeftHandRing1", "mixamorigLeftHandRing2", "mixamorigLeftHandRing3", "mixamorigLeftHandRing4"],
    ),
    (
        ChainId::FingersRingR,
        &["mixamorigRightHandRing1", "mixamorigRightHandRing2", "mixamorigRightHandRing3", "mixamorigRightHandRing4"],
    ),
    (
        ChainId::FingersPinkyL,
        &["mixamorigLeftHandPinky1", "mixamorigLeftHandPinky2", "mixamorigLeftHandPinky3", "mixamorigLeftHandPinky4"],
    ),
    (
        ChainId::FingersPinkyR,
        &["mixamorigRightHandPinky1", "mixamorigRightHandPinky2", "mixamorigRightHandPinky3", "mixamorigRightHandPinky4"],
    ),
];

/// The Mesh2Motion rig's chains. Always the source side of a retarget.
pub fn source_taxonomy() -> &'static ChainTaxonomy {
    static SOURCE: OnceLock<ChainTaxonomy> = OnceLock::new();
    SOURCE.get_or_init(|| {
        ChainTaxonomy::from_table(&MESH2MOTION_CHAINS)
            .expect("built-in Mesh2Motion chain table is well-formed")
    })
}

/// The Mixamo rig's chains, used to detect 1:1 archetype matches.
pub fn target_taxonomy() -> &'static ChainTaxonomy {
    static TARGET: OnceLock<ChainTaxonomy> = OnceLock::new();
    TARGET.get_or_init(|| {
        ChainTaxonomy::from_table(&MIXAMO_CHAINS)
            .expect("built-in Mixamo chain table is well-formed")
    })
}

/// Named collection of rig taxonomies: the source rig plus every known
/// target archetype.
///
/// Archetypes must cover exactly the source's chain identifiers, which are
/// the join key when pairing joints across rigs.
#[derive(Debug, Clone)]
pub struct TaxonomyRegistry {
    source: ChainTaxonomy,
    archetypes: Vec<(String, ChainTaxonomy)>,
}

impl TaxonomyRegistry {
    /// A registry holding only the given source taxonomy.
    pub fn new(source: ChainTaxonomy) -> Self {
        Self {
            source,
            archetypes: Vec::new(),
        }
    }

    /// The Mesh2Motion source plus the built-in Mixamo archetype.
    pub fn default_registry() -> Self {
        Self {
            source: source_taxonomy().clone(),
            archetypes: vec![(TARGET_RIG_NAME.to_string(), target_taxonomy().clone())],
        }
    }

    /// Register a further target archetype.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        taxonomy: ChainTaxonomy,
    ) -> Result<(), RetargetError> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(RetargetError::DuplicateArchetype(name));
        }

        let expected: BTreeSet<ChainId> = self.source.chain_ids().collect();
        let actual: BTreeSet<ChainId> = taxonomy.chain_ids().collect();
        if expected != actual {
            return Err(RetargetError::ChainSetMismatch {
                archetype: name,
                missing: expected.difference(&actual).copied().collect(),
                extra: actual.difference(&expected).copied().collect(),
            });
        }

        tracing::debug!("Registered archetype {} ({} joints)", name, taxonomy.joint_count());
        self.archetypes.push((name, taxonomy));
        Ok(())
    }

    /// Look up a taxonomy by name. The source rig is found under
    /// [`SOURCE_RIG_NAME`].
    pub fn get(&self, name: &str) -> Option<&ChainTaxonomy> {
        if name == SOURCE_RIG_NAME {
            return Some(&self.source);
        }
        self.archetypes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, taxonomy)| taxonomy)
    }

    /// Like [`get`](Self::get) but reports unknown names as an error.
    pub fn require(&self, name: &str) -> Result<&ChainTaxonomy, RetargetError> {
        self.get(name)
            .ok_or_else(|| RetargetError::UnknownArchetype(name.to_string()))
    }

    pub fn source(&self) -> &ChainTaxonomy {
        &self.source
    }

    /// Target archetypes in registration order.
    pub fn archetypes(&self) -> impl Iterator<Item = (&str, &ChainTaxonomy)> + '_ {
        self.archetypes.iter().map(|(n, t)| (n.as_str(), t))
    }

    /// Every registered name, source first.
    pub fn names(&self) -> Vec<&str> {
        std::iter::once(SOURCE_RIG_NAME)
            .chain(self.archetypes.iter().map(|(n, _)| n.as_str()))
            .collect()
    }
}

impl Default for TaxonomyRegistry {
    fn default() -> Self {
        Self::default_registry()
    }
}
