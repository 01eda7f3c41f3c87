//! Protocol wire versions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// Wire version byte of the protocol header.
///
/// Only the four versions the generator knows about can be constructed.
/// Versions 1 and 2 encode matches as a fixed struct plus a wildcard bitmask;
/// later versions use generic typed fields.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WireVersion(u8);

impl WireVersion {
    pub const V1_0: Self = Self(1);
    pub const V1_1: Self = Self(2);
    pub const V1_2: Self = Self(3);
    pub const V1_3: Self = Self(4);

    /// Every known version, ascending.
    pub const ALL: [Self; 4] = [Self::V1_0, Self::V1_1, Self::V1_2, Self::V1_3];

    /// Versions with a fixed-layout match struct.
    pub const LEGACY: [Self; 2] = [Self::V1_0, Self::V1_1];

    pub fn new(wire: u8) -> Option<Self> {
        matches!(wire, 1..=4).then_some(Self(wire))
    }

    #[inline]
    pub fn wire(self) -> u8 {
        self.0
    }

    /// Whether matches in this version use the fixed struct + wildcard layout.
    pub fn is_legacy(self) -> bool {
        self.0 <= 2
    }

    /// Human-facing protocol release, e.g. `1.0` for wire version 1.
    pub fn release(self) -> &'static str {
        match self.0 {
            1 => "1.0",
            2 => "1.1",
            3 => "1.2",
            _ => "1.3",
        }
    }
}

impl TryFrom<u8> for WireVersion {
    type Error = CatalogError;

    fn try_from(wire: u8) -> Result<Self, Self::Error> {
        Self::new(wire).ok_or(CatalogError::UnknownVersion(wire))
    }
}

impl From<WireVersion> for u8 {
    fn from(version: WireVersion) -> Self {
        version.0
    }
}

impl fmt::Display for WireVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
