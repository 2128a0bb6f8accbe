use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VcfError;

/// Supported vCard format versions.
///
/// The version only changes the token written into the VERSION line;
/// type-parameter syntax is deliberately identical for both formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VcardVersion {
    /// Legacy 2.1 format, preferred by some iOS importers.
    #[serde(rename = "2.1")]
    V2_1,
    /// Current 3.0 format.
    #[default]
    #[serde(rename = "3.0")]
    V3_0,
}

impl VcardVersion {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V2_1 => "2.1",
            Self::V3_0 => "3.0",
        }
    }
}

impl fmt::Display for VcardVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VcardVersion {
    type Err = VcfError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "2.1" => Ok(Self::V2_1),
            "3.0" => Ok(Self::V3_0),
            other => Err(VcfError::UnsupportedVersion(other.to_string())),
        }
    }
}
