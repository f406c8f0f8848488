//! Client repository with contract cascade

use core_kernel::{ClientId, IdSequence};
use domain_company::{Client, Company};
use tracing::debug;

use super::SharedContractRepository;
use crate::lock;

/// In-memory store for clients.
///
/// Holds a handle to the contract repository so that deleting a client
/// cascades into its contracts: no orphaned contract survives a client
/// deletion.
#[derive(Debug)]
pub struct ClientRepository {
    clients: Vec<Client>,
    ids: IdSequence,
    contracts: SharedContractRepository,
}

impl ClientRepository {
    pub fn new(contracts: SharedContractRepository) -> Self {
        Self {
            clients: Vec::new(),
            ids: IdSequence::new(),
            contracts,
        }
    }

    /// Stores a client, assigning its identifier. Name uniqueness is
    /// checked by the orchestration services before the call, never here.
    pub fn add(&mut self, mut client: Client) -> ClientId {
        let id = ClientId::new(self.ids.next_raw());
        client.set_id(id);
        self.clients.push(client);
        debug!(%id, "client stored");
        id
    }

    /// Replaces the stored client with the same id, preserving its
    /// position. Returns false when the id is absent.
    pub fn update(&mut self, client: Client) -> bool {
        match self.clients.iter_mut().find(|c| c.id() == client.id()) {
            Some(slot) => {
                *slot = client;
                true
            }
            None => false,
        }
    }

    /// Removes a client and every contract referencing it. Returns false
    /// without touching anything when the id is absent.
    pub fn delete(&mut self, id: ClientId) -> bool {
        if !self.clients.iter().any(|c| c.id() == id) {
            return false;
        }
        let removed_contracts = lock(&self.contracts).delete_by_client(id);
        self.clients.retain(|c| c.id() != id);
        debug!(%id, removed_contracts, "client deleted");
        true
    }

    pub fn find_by_id(&self, id: ClientId) -> Option<Client> {
        self.clients.iter().find(|c| c.id() == id).cloned()
    }

    /// Defensive copy sorted case-insensitively by company name.
    pub fn find_all(&self) -> Vec<Client> {
        let mut copy = self.clients.clone();
        copy.sort_by(|a, b| a.name().to_lowercase().cmp(&b.name().to_lowercase()));
        copy
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}
