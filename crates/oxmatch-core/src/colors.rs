//! ANSI color codes for terminal output.
//!
//! Roles, not hues, are what callers pick:
//! - Name: field names, struct names
//! - Type: value types
//! - Error: violation headers
//! - Dim: orders, shifts, and other metadata

/// ANSI palette for model dumps and violation reports.
///
/// Standard 16-color codes only, readable on light and dark themes.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub name: &'static str,
    pub ty: &'static str,
    pub error: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        name: "\x1b[34m",
        ty: "\x1b[32m",
        error: "\x1b[31m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        name: "",
        ty: "",
        error: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
