//! Contract orchestration façade

use core_kernel::{ClientId, ContractId, DomainError};
use domain_contract::Contract;
use infra_memory::{lock, SharedClientRepository, SharedContractRepository};
use tracing::info;

use crate::rows::ContractRow;

/// Field values for creating or updating a contract. The owning client id
/// is passed separately on creation and never changes afterwards.
#[derive(Debug, Clone)]
pub struct ContractRequest {
    pub name: String,
    pub amount: f64,
}

/// Sequences validation and storage for contracts.
///
/// Creation requires the owning client to exist. The contract repository
/// is the sole holder of contract records; deletion is a single-store
/// operation and every per-client view reflects it immediately.
#[derive(Debug, Clone)]
pub struct ContractService {
    contracts: SharedContractRepository,
    clients: SharedClientRepository,
}

impl ContractService {
    pub fn new(contracts: SharedContractRepository, clients: SharedClientRepository) -> Self {
        Self { contracts, clients }
    }

    /// Creates and stores a contract for an existing client. Returns the
    /// stored entity with its assigned id.
    pub fn create(
        &self,
        client_id: ClientId,
        request: ContractRequest,
    ) -> Result<Contract, DomainError> {
        if lock(&self.clients).find_by_id(client_id).is_none() {
            return Err(DomainError::not_found("client", client_id));
        }

        let mut contract = Contract::new(client_id, request.name, request.amount)?;
        let id = lock(&self.contracts).add(contract.clone());
        contract.set_id(id);
        info!(%id, %client_id, "contract created");
        Ok(contract)
    }

    /// Re-applies name and amount through the validating setters on a copy
    /// of the stored contract and persists only on full success.
    pub fn update(&self, id: ContractId, request: ContractRequest) -> Result<bool, DomainError> {
        let mut contract = lock(&self.contracts)
            .find_by_id(id)
            .ok_or_else(|| DomainError::not_found("contract", id))?;

        contract.set_name(request.name)?;
        contract.set_amount(request.amount)?;

        let updated = lock(&self.contracts).update(contract);
        if updated {
            info!(%id, "contract updated");
        }
        Ok(updated)
    }

    /// Deletes a contract. Absent ids report false; nothing here can error.
    pub fn delete(&self, id: ContractId) -> bool {
        let deleted = lock(&self.contracts).delete(id);
        if deleted {
            info!(%id, "contract deleted");
        }
        deleted
    }

    pub fn get(&self, id: ContractId) -> Option<Contract> {
        lock(&self.contracts).find_by_id(id)
    }

    /// All contracts, in insertion order.
    pub fn list(&self) -> Vec<Contract> {
        lock(&self.contracts).find_all()
    }

    /// Contracts of one client, in insertion order.
    pub fn list_by_client(&self, client_id: ClientId) -> Vec<Contract> {
        lock(&self.contracts).find_by_client(client_id)
    }

    /// Table projection: one row per contract of the client.
    pub fn display_rows(&self, client_id: ClientId) -> Vec<ContractRow> {
        self.list_by_client(client_id)
            .iter()
            .map(ContractRow::from_contract)
            .collect()
    }
}
