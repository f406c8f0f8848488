//! Core kernel for the CRM system
//!
//! Shared building blocks used by every other crate: strongly-typed
//! sequential identifiers, the error taxonomy, and the pure validation
//! predicates backing entity setters.

pub mod error;
pub mod identifiers;
pub mod validation;

pub use error::{DomainError, ValidationError};
pub use identifiers::{ClientId, ContractId, IdSequence, ProspectId};
