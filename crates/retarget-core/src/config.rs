// crates/retarget-core/src/config.rs
//
// ChainConfig: a taxonomy-shaped retargeting config whose slots may be
// unmapped. The custom source and custom target configs are both of this
// type; they share chain ids and chain lengths and differ only in which name
// space the slots are in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::chain::ChainId;
use crate::error::RetargetError;
use crate::joint::JointName;
use crate::taxonomy::ChainTaxonomy;

/// Ordered chains of joint slots. `None` marks a joint with no
/// correspondence, which the pose-transfer step skips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainConfig {
    chains: BTreeMap<ChainId, Vec<Option<JointName>>>,
}

impl ChainConfig {
    /// A config with every slot of the taxonomy filled in.
    pub fn from_taxonomy(taxonomy: &ChainTaxonomy) -> Self {
        let chains = taxonomy
            .iter()
            .map(|(id, joints)| (id, joints.iter().cloned().map(Some).collect()))
            .collect();
        Self { chains }
    }

    /// Read a record in the legacy sentinel convention, where an empty
    /// string marks an unmapped slot.
    pub fn from_sentinel_record(record: &BTreeMap<String, Vec<String>>) -> Result<Self, RetargetError> {
        let mut chains = BTreeMap::new();
        for (chain_name, slots) in record {
            let chain_id: ChainId = chain_name.parse()?;
            let slots = slots
                .iter()
                .map(|name| {
                    if name.is_empty() {
                        Ok(None)
                    } else {
                        JointName::new(name.as_str()).map(Some)
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;
            chains.insert(chain_id, slots);
        }
        Ok(Self { chains })
    }

    /// Write the config in the legacy sentinel convention (`""` for
    /// unmapped).
    pub fn to_sentinel_record(&self) -> BTreeMap<String, Vec<String>> {
        self.chains
            .iter()
            .map(|(id, slots)| {
                let names = slots
                    .iter()
                    .map(|slot| slot.as_ref().map(|j| j.to_string()).unwrap_or_default())
                    .collect();
                (id.to_string(), names)
            })
            .collect()
    }

    pub fn chain(&self, chain_id: ChainId) -> Option<&[Option<JointName>]> {
        self.chains.get(&chain_id).map(Vec::as_slice)
    }

    /// Chains in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ChainId, &[Option<JointName>])> + '_ {
        self.chains.iter().map(|(&id, slots)| (id, slots.as_slice()))
    }

    pub fn chain_ids(&self) -> impl Iterator<Item = ChainId> + '_ {
        self.chains.keys().copied()
    }

    /// Chain id and slot count of every chain.
    pub fn shape(&self) -> Vec<(ChainId, usize)> {
        self.chains.iter().map(|(&id, slots)| (id, slots.len())).collect()
    }

    /// Total number of slots, mapped or not.
    pub fn slot_count(&self) -> usize {
        self.chains.values().map(Vec::len).sum()
    }

    /// Number of slots holding a joint.
    pub fn mapped_count(&self) -> usize {
        self.chains.values().flatten().filter(|slot| slot.is_some()).count()
    }

    /// True when no slot holds a joint, i.e. nothing can be retargeted.
    pub fn is_fully_unmapped(&self) -> bool {
        self.mapped_count() == 0
    }

    pub(crate) fn map_slots<F>(&self, mut f: F) -> Self
    where
        F: FnMut(ChainId, usize, &JointName) -> Option<JointName>,
    {
        let chains = self
            .chains
            .iter()
            .map(|(&id, slots)| {
                let slots = slots
                    .iter()
                    .enumerate()
                    .map(|(index, slot)| slot.as_ref().and_then(|joint| f(id, index, joint)))
                    .collect();
                (id, slots)
            })
            .collect();
        Self { chains }
    }
}

/// One joint that can be transferred: the same slot resolved on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JointPair<'a> {
    pub chain: ChainId,
    pub index: usize,
    pub source: &'a JointName,
    pub target: &'a JointName,
}

/// Mapped versus total slots of one chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChainCoverage {
    pub chain: ChainId,
    pub mapped: usize,
    pub total: usize,
}

/// The source/target config pair produced by one derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetargetConfigs {
    pub source: ChainConfig,
    pub target: ChainConfig,
}

impl RetargetConfigs {
    /// Slots resolved on both sides, chain by chain in traversal order.
    pub fn joint_pairs(&self) -> Vec<JointPair<'_>> {
        let mut pairs = Vec::new();
        for (chain, source_slots) in self.source.iter() {
            let Some(target_slots) = self.target.chain(chain) else {
                continue;
            };
            for (index, (source, target)) in source_slots.iter().zip(target_slots).enumerate() {
                if let (Some(source), Some(target)) = (source, target) {
                    pairs.push(JointPair {
                        chain,
                        index,
                        source,
                        target,
                    });
                }
            }
        }
        pairs
    }

    /// Per-chain count of slots resolved on the target side.
    pub fn coverage(&self) -> Vec<ChainCoverage> {
        self.target
            .iter()
            .map(|(chain, slots)| ChainCoverage {
                chain,
                mapped: slots.iter().filter(|slot| slot.is_some()).count(),
                total: slots.len(),
            })
            .collect()
    }
}
