//! Prospect repository

use core_kernel::{IdSequence, ProspectId};
use domain_company::{Company, Prospect};
use tracing::debug;

/// In-memory store for prospects.
#[derive(Debug, Default)]
pub struct ProspectRepository {
    prospects: Vec<Prospect>,
    ids: IdSequence,
}

impl ProspectRepository {
    pub fn new() -> Self {
        Self {
            prospects: Vec::new(),
            ids: IdSequence::new(),
        }
    }

    /// Stores a prospect, assigning its identifier. Name uniqueness is
    /// checked by the orchestration services before the call, never here.
    pub fn add(&mut self, mut prospect: Prospect) -> ProspectId {
        let id = ProspectId::new(self.ids.next_raw());
        prospect.set_id(id);
        self.prospects.push(prospect);
        debug!(%id, "prospect stored");
        id
    }

    /// Replaces the stored prospect with the same id, preserving its
    /// position. Returns false when the id is absent.
    pub fn update(&mut self, prospect: Prospect) -> bool {
        match self.prospects.iter_mut().find(|p| p.id() == prospect.id()) {
            Some(slot) => {
                *slot = prospect;
                true
            }
            None => false,
        }
    }

    /// Removes the prospect with the given id; false when absent.
    pub fn delete(&mut self, id: ProspectId) -> bool {
        let before = self.prospects.len();
        self.prospects.retain(|p| p.id() != id);
        let deleted = self.prospects.len() < before;
        if deleted {
            debug!(%id, "prospect deleted");
        }
        deleted
    }

    pub fn find_by_id(&self, id: ProspectId) -> Option<Prospect> {
        self.prospects.iter().find(|p| p.id() == id).cloned()
    }

    /// Defensive copy sorted case-insensitively by company name.
    pub fn find_all(&self) -> Vec<Prospect> {
        let mut copy = self.prospects.clone();
        copy.sort_by(|a, b| a.name().to_lowercase().cmp(&b.name().to_lowercase()));
        copy
    }

    pub fn len(&self) -> usize {
        self.prospects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prospects.is_empty()
    }
}
