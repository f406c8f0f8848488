//! Strongly-typed identifiers for domain entities
//!
//! Newtype wrappers around sequential integers prevent accidental mixing of
//! identifier types across entity families. Identifiers are handed out by
//! the owning repository from an [`IdSequence`]; the raw value `0` marks an
//! entity that has not been stored yet.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Identifier of an entity that has not been stored yet
            pub const UNASSIGNED: Self = Self(0);

            /// Creates an identifier from a raw value
            pub fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Returns the underlying value
            pub fn raw(self) -> u32 {
                self.0
            }

            /// Returns true once a repository has assigned this identifier
            pub fn is_assigned(self) -> bool {
                self.0 != 0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let raw = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(raw.parse()?))
            }
        }
    };
}

define_id!(ClientId, "CLI");
define_id!(ProspectId, "PRO");
define_id!(ContractId, "CTR");

/// Monotonic identifier counter owned by a repository instance.
///
/// Each repository carries its own sequence, reset only when the repository
/// is constructed. Issued values start at 1 and are never reused, so an id
/// stays unique within its repository for the repository's whole lifetime.
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Issues the next raw id value
    pub fn next_raw(&mut self) -> u32 {
        let raw = self.next;
        self.next += 1;
        raw
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
