// crates/retarget-core/src/chain.rs
//
// Chain identifiers: the stable join key between the source rig taxonomy and
// every target archetype taxonomy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RetargetError;

/// Identifier of one joint chain (a limb, the spine, or a digit).
///
/// Variant order is the canonical traversal order of a humanoid rig, and
/// `Ord` follows it, so ordered maps keyed by `ChainId` iterate proximal
/// chains before the fingers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChainId {
    Pelvis,
    Spine,
    Head,
    ArmL,
    ArmR,
    LegL,
    LegR,
    FingersThumbL,
    FingersThumbR,
    FingersIndexL,
    FingersIndexR,
    FingersMiddleL,
    FingersMiddleR,
    FingersRingL,
    FingersRingR,
    FingersPinkyL,
    FingersPinkyR,
}

impl ChainId {
    /// Every chain identifier, in canonical order.
    pub const ALL: [ChainId; 17] = [
        ChainId::Pelvis,
        ChainId::Spine,
        ChainId::Head,
        ChainId::ArmL,
        ChainId::ArmR,
        ChainId::LegL,
        ChainId::LegR,
        ChainId::FingersThumbL,
        ChainId::FingersThumbR,
        ChainId::FingersIndexL,
        ChainId::FingersIndexR,
        ChainId::FingersMiddleL,
        ChainId::FingersMiddleR,
        ChainId::FingersRingL,
        ChainId::FingersRingR,
        ChainId::FingersPinkyL,
        ChainId::FingersPinkyR,
    ];

    /// The serialized identifier, e.g. `"armL"` or `"fingersIndexR"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainId::Pelvis => "pelvis",
            ChainId::Spine => "spine",
            ChainId::Head => "head",
            ChainId::ArmL => "armL",
            ChainId::ArmR => "armR",
            ChainId::LegL => "legL",
            ChainId::LegR => "legR",
            ChainId::FingersThumbL => "fingersThumbL",
            ChainId::FingersThumbR => "fingersThumbR",
            ChainId::FingersIndexL => "fingersIndexL",
            ChainId::FingersIndexR => "fingersIndexR",
            ChainId::FingersMiddleL => "fingersMiddleL",
            ChainId::FingersMiddleR => "fingersMiddleR",
            ChainId::FingersRingL => "fingersRingL",
            ChainId::FingersRingR => "fingersRingR",
            ChainId::FingersPinkyL => "fingersPinkyL",
            ChainId::FingersPinkyR => "fingersPinkyR",
        }
    }

    /// Whether this chain is one of the ten finger chains.
    pub fn is_finger(&self) -> bool {
        *self >= ChainId::FingersThumbL
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainId {
    type Err = RetargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChainId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| RetargetError::UnknownChain(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_matches_serde_name() {
        for id in ChainId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
    }

    #[test]
    fn test_parse_roundtrip_and_unknown() {
        assert_eq!("fingersIndexR".parse::<ChainId>().unwrap(), ChainId::FingersIndexR);
        assert_eq!("armL".parse::<ChainId>().unwrap(), ChainId::ArmL);

        let err = "tail".parse::<ChainId>().unwrap_err();
        assert_eq!(err, RetargetError::UnknownChain("tail".to_string()));
    }

    #[test]
    fn test_all_is_sorted_in_canonical_order() {
        let mut sorted = ChainId::ALL;
        sorted.sort();
        assert_eq!(sorted, ChainId::ALL);
        assert_eq!(ChainId::ALL[0], ChainId::Pelvis);
    }

    #[test]
    fn test_is_finger() {
        assert!(!ChainId::LegR.is_finger());
        assert!(ChainId::FingersThumbL.is_finger());
        assert_eq!(ChainId::ALL.iter().filter(|id| id.is_finger()).count(), 10);
    }
}
