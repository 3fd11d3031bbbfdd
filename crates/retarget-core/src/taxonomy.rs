// crates/retarget-core/src/taxonomy.rs
//
// ChainTaxonomy: the full set of named joint chains describing one rig's
// topology. Validated once at construction and immutable afterwards.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::chain::ChainId;
use crate::error::RetargetError;
use crate::joint::JointName;

/// Ordered mapping from chain identifier to the joints of that chain.
///
/// Joint order within a chain is parent to child and is preserved by every
/// transformation. Joint names are unique across the whole taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Vec<JointName>>",
    into = "BTreeMap<ChainId, Vec<JointName>>"
)]
pub struct ChainTaxonomy {
    chains: BTreeMap<ChainId, Vec<JointName>>,
}

impl ChainTaxonomy {
    /// Build a taxonomy, rejecting empty chains and repeated joint names.
    pub fn new(chains: BTreeMap<ChainId, Vec<JointName>>) -> Result<Self, RetargetError> {
        let mut seen: HashMap<&str, ChainId> = HashMap::new();
        for (&chain_id, joints) in &chains {
            if joints.is_empty() {
                return Err(RetargetError::EmptyChain(chain_id));
            }
            for joint in joints {
                if let Some(&first) = seen.get(joint.as_str()) {
                    return Err(RetargetError::DuplicateJoint {
                        joint: joint.to_string(),
                        first,
                        second: chain_id,
                    });
                }
                seen.insert(joint.as_str(), chain_id);
            }
        }
        Ok(Self { chains })
    }

    /// Build a taxonomy from a static table of chain rows.
    ///
    /// A chain id listed in two rows is rejected with `DuplicateChain`.
    pub fn from_table(table: &[(ChainId, &[&str])]) -> Result<Self, RetargetError> {
        let mut chains: BTreeMap<ChainId, Vec<JointName>> = BTreeMap::new();
        for &(chain_id, names) in table {
            let Entry::Vacant(slot) = chains.entry(chain_id) else {
                return Err(RetargetError::DuplicateChain(chain_id));
            };
            let joints = names
                .iter()
                .map(|name| JointName::new(*name))
                .collect::<Result<Vec<_>, _>>()?;
            slot.insert(joints);
        }
        Self::new(chains)
    }

    /// Joints of one chain, or `None` if the taxonomy lacks that chain.
    pub fn chain(&self, chain_id: ChainId) -> Option<&[JointName]> {
        self.chains.get(&chain_id).map(Vec::as_slice)
    }

    /// Chains in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ChainId, &[JointName])> + '_ {
        self.chains.iter().map(|(&id, joints)| (id, joints.as_slice()))
    }

    pub fn chain_ids(&self) -> impl Iterator<Item = ChainId> + '_ {
        self.chains.keys().copied()
    }

    /// Every joint name, chain by chain.
    pub fn joint_names(&self) -> impl Iterator<Item = &JointName> + '_ {
        self.chains.values().flatten()
    }

    /// Find which chain (and position within it) holds a joint.
    pub fn locate(&self, joint: &str) -> Option<(ChainId, usize)> {
        self.iter().find_map(|(id, joints)| {
            joints
                .iter()
                .position(|j| j.as_str() == joint)
                .map(|index| (id, index))
        })
    }

    /// Number of chains.
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Total number of joints across all chains.
    pub fn joint_count(&self) -> usize {
        self.chains.values().map(Vec::len).sum()
    }
}

impl TryFrom<BTreeMap<String, Vec<JointName>>> for ChainTaxonomy {
    type Error = RetargetError;

    /// Chain identifiers arrive as plain strings so every document format
    /// can key the table by them.
    fn try_from(record: BTreeMap<String, Vec<JointName>>) -> Result<Self, Self::Error> {
        let mut chains = BTreeMap::new();
        for (chain_name, joints) in record {
            chains.insert(chain_name.parse::<ChainId>()?, joints);
        }
        ChainTaxonomy::new(chains)
    }
}

impl From<ChainTaxonomy> for BTreeMap<ChainId, Vec<JointName>> {
    fn from(taxonomy: ChainTaxonomy) -> Self {
        taxonomy.chains
    }
}
