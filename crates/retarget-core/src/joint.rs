// crates/retarget-core/src/joint.rs

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RetargetError;

/// Name of a joint (bone) in a rig.
///
/// Never empty. Unmapped slots in a derived config are `None` rather than an
/// empty name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JointName(String);

impl JointName {
    /// Create a joint name. Rejects the empty string.
    pub fn new(name: impl Into<String>) -> Result<Self, RetargetError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RetargetError::EmptyJointName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for JointName {
    type Error = RetargetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        JointName::new(value)
    }
}

impl TryFrom<&str> for JointName {
    type Error = RetargetError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        JointName::new(value)
    }
}

impl From<JointName> for String {
    fn from(name: JointName) -> Self {
        name.0
    }
}

impl Borrow<str> for JointName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for JointName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
