//! Repository implementations

mod client;
mod contract;
mod prospect;

pub use client::ClientRepository;
pub use contract::ContractRepository;
pub use prospect::ProspectRepository;

use std::sync::{Arc, Mutex};

/// Shared handle to a client repository
pub type SharedClientRepository = Arc<Mutex<ClientRepository>>;

/// Shared handle to a prospect repository
pub type SharedProspectRepository = Arc<Mutex<ProspectRepository>>;

/// Shared handle to a contract repository
pub type SharedContractRepository = Arc<Mutex<ContractRepository>>;
