//! The 32-bit type/length header constant of a typed match field.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::CatalogError;

/// Namespace tag of the standard field catalog.
pub const STANDARD_NAMESPACE: u16 = 0x8000;

/// Type/length constant: high 16 bits namespace tag, low 16 bits type code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(transparent)]
pub struct TypeLen(u32);

impl TypeLen {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn from_parts(namespace: u16, code: u16) -> Self {
        Self(((namespace as u32) << 16) | code as u32)
    }

    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn namespace(self) -> u16 {
        (self.0 >> 16) as u16
    }

    #[inline]
    pub fn code(self) -> u16 {
        (self.0 & 0xffff) as u16
    }

    pub fn is_standard(self) -> bool {
        self.namespace() == STANDARD_NAMESPACE
    }
}

impl fmt::Display for TypeLen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Accepts decimal (`2147484678`) or hex (`0x80000406`).
impl FromStr for TypeLen {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let parsed = match text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
        {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => text.parse::<u32>(),
        };
        parsed
            .map(Self)
            .map_err(|_| CatalogError::InvalidTypeLen(s.to_string()))
    }
}
