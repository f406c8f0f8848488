//! Orchestration Layer
//!
//! One façade per entity family sequences the duplicate-name check, entity
//! validation, and repository mutation, and builds the table projections
//! consumed by a presentation layer.
//!
//! Expected failures travel as [`core_kernel::DomainError`] values;
//! repository-level absence stays a boolean. Delete operations convert
//! every failure into `false` so that "already gone" never surfaces as an
//! error during defensive cleanup.

pub mod client_service;
pub mod config;
pub mod contract_service;
pub mod prospect_service;
pub mod rows;
pub mod uniqueness;

pub use client_service::{ClientRequest, ClientService};
pub use config::CrmConfig;
pub use contract_service::{ContractRequest, ContractService};
pub use prospect_service::{ProspectRequest, ProspectService};
pub use rows::{ClientRow, ContractRow, ProspectRow};
pub use uniqueness::{Exclude, UniquenessService};
