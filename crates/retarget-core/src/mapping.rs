// crates/retarget-core/src/mapping.rs
//
// BoneMapping: the correspondence between a target model's bones and the
// canonical source rig's bones, as produced by the bone-matching UI.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::joint::JointName;
use crate::taxonomy::ChainTaxonomy;

/// Target-model joint name to source-rig joint name.
///
/// Keys are unique; values may repeat when the user maps several target bones
/// onto one source bone. The mapping is usually partial. Entries keep the
/// order they were first inserted in, and re-mapping a target bone updates
/// its entry in place.
///
/// Serialized as a plain `{ "<target bone>": "<source bone>" }` object, in
/// entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoneMapping {
    entries: Vec<(JointName, JointName)>,
    index: HashMap<JointName, usize>,
}

impl BoneMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a target bone onto a source bone. Returns the source bone it was
    /// previously mapped to, if any.
    pub fn insert(&mut self, target: JointName, source: JointName) -> Option<JointName> {
        match self.index.get(&target) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, source)),
            None => {
                self.index.insert(target.clone(), self.entries.len());
                self.entries.push((target, source));
                None
            }
        }
    }

    /// Drop the mapping for a target bone.
    pub fn remove(&mut self, target: &str) -> Option<JointName> {
        let position = self.index.remove(target)?;
        let (_, source) = self.entries.remove(position);
        for (shifted, _) in &self.entries[position..] {
            if let Some(slot) = self.index.get_mut(shifted.as_str()) {
                *slot -= 1;
            }
        }
        Some(source)
    }

    /// The source bone a target bone is mapped to.
    pub fn source_for(&self, target: &str) -> Option<&JointName> {
        self.index.get(target).map(|&position| &self.entries[position].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(target, source)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&JointName, &JointName)> + '_ {
        self.entries.iter().map(|(target, source)| (target, source))
    }

    /// The source-rig side of the mapping: every source joint that has been
    /// matched to something.
    pub fn source_joints(&self) -> impl Iterator<Item = &JointName> + '_ {
        self.entries.iter().map(|(_, source)| source)
    }

    /// Source joint to target joint.
    ///
    /// When several target bones map onto the same source joint, the entry
    /// inserted last wins and the collision is logged.
    pub fn reverse(&self) -> HashMap<&str, &JointName> {
        let mut reverse: HashMap<&str, &JointName> = HashMap::with_capacity(self.entries.len());
        for (target, source) in &self.entries {
            if let Some(replaced) = reverse.insert(source.as_str(), target) {
                tracing::warn!(
                    "Source bone {} is mapped from both {} and {}; keeping {}",
                    source,
                    replaced,
                    target,
                    target
                );
            }
        }
        reverse
    }

    /// Pair two taxonomies joint by joint, chain by chain.
    ///
    /// Used when a target rig is recognized as a known archetype. Chains are
    /// joined on their identifier; if lengths differ only the common prefix is
    /// paired so traversal order is never broken. Chains missing from either
    /// side contribute nothing.
    pub fn from_archetype(source: &ChainTaxonomy, target: &ChainTaxonomy) -> Self {
        let mut mapping = Self::new();
        for (chain_id, source_joints) in source.iter() {
            let Some(target_joints) = target.chain(chain_id) else {
                tracing::warn!("Archetype has no {} chain; leaving it unmapped", chain_id);
                continue;
            };
            if source_joints.len() != target_joints.len() {
                tracing::warn!(
                    "Chain {} length differs (source {}, target {}); pairing first {} joints",
                    chain_id,
                    source_joints.len(),
                    target_joints.len(),
                    source_joints.len().min(target_joints.len())
                );
            }
            for (source_joint, target_joint) in source_joints.iter().zip(target_joints) {
                if mapping.source_for(target_joint.as_str()).is_none() {
                    mapping.insert(target_joint.clone(), source_joint.clone());
                }
            }
        }
        mapping
    }
}

impl FromIterator<(JointName, JointName)> for BoneMapping {
    /// Collect `(target, source)` pairs. Later pairs replace earlier ones for
    /// the same target.
    fn from_iter<I: IntoIterator<Item = (JointName, JointName)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (target, source) in iter {
            mapping.insert(target, source);
        }
        mapping
    }
}

impl Serialize for BoneMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (target, source) in &self.entries {
            map.serialize_entry(target, source)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for BoneMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(BoneMappingVisitor)
    }
}

/// Reads object entries in document order.
struct BoneMappingVisitor;

impl<'de> Visitor<'de> for BoneMappingVisitor {
    type Value = BoneMapping;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of target bone names to source bone names")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut mapping = BoneMapping::new();
        while let Some((target, source)) = access.next_entry::<JointName, JointName>()? {
            mapping.insert(target, source);
        }
        Ok(mapping)
    }
}
