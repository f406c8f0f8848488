//! Contract repository

use core_kernel::{ClientId, ContractId, IdSequence};
use domain_contract::Contract;
use tracing::debug;

/// In-memory store for contracts.
///
/// Records are kept in insertion order; the per-client view is answered by
/// filtering on the owning client id.
#[derive(Debug, Default)]
pub struct ContractRepository {
    contracts: Vec<Contract>,
    ids: IdSequence,
}

impl ContractRepository {
    pub fn new() -> Self {
        Self {
            contracts: Vec::new(),
            ids: IdSequence::new(),
        }
    }

    /// Stores a contract, assigning its identifier. Whether the referenced
    /// client exists is the orchestration service's concern.
    pub fn add(&mut self, mut contract: Contract) -> ContractId {
        let id = ContractId::new(self.ids.next_raw());
        contract.set_id(id);
        self.contracts.push(contract);
        debug!(%id, "contract stored");
        id
    }

    /// Replaces the stored contract with the same id, preserving its
    /// position. Returns false when the id is absent.
    pub fn update(&mut self, contract: Contract) -> bool {
        match self.contracts.iter_mut().find(|c| c.id() == contract.id()) {
            Some(slot) => {
                *slot = contract;
                true
            }
            None => false,
        }
    }

    /// Removes the contract with the given id; false when absent.
    pub fn delete(&mut self, id: ContractId) -> bool {
        let before = self.contracts.len();
        self.contracts.retain(|c| c.id() != id);
        self.contracts.len() < before
    }

    /// Removes every contract owned by the given client, returning how many
    /// were removed. Cascade primitive used by client deletion.
    pub fn delete_by_client(&mut self, client_id: ClientId) -> usize {
        let before = self.contracts.len();
        self.contracts.retain(|c| c.client_id() != client_id);
        let removed = before - self.contracts.len();
        if removed > 0 {
            debug!(%client_id, removed, "contracts removed by cascade");
        }
        removed
    }

    pub fn find_by_id(&self, id: ContractId) -> Option<Contract> {
        self.contracts.iter().find(|c| c.id() == id).cloned()
    }

    /// Defensive copy in insertion order.
    pub fn find_all(&self) -> Vec<Contract> {
        self.contracts.clone()
    }

    /// Contracts of one client, in insertion order.
    pub fn find_by_client(&self, client_id: ClientId) -> Vec<Contract> {
        self.contracts
            .iter()
            .filter(|c| c.client_id() == client_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}
