//! Prospect interest level

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a prospect has shown interest in the offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterestLevel {
    Yes,
    No,
}

impl InterestLevel {
    /// Human-readable label for table display
    pub fn label(self) -> &'static str {
        match self {
            InterestLevel::Yes => "Yes",
            InterestLevel::No => "No",
        }
    }
}

impl fmt::Display for InterestLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
