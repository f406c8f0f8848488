//! Cross-collection company-name uniqueness

use core_kernel::{ClientId, ProspectId, ValidationError};
use domain_company::Company;
use infra_memory::{lock, SharedClientRepository, SharedProspectRepository};

/// Entity excluded from a duplicate-name scan.
///
/// Updates pass their own id so that a no-op rename is not reported as a
/// duplicate; creations exclude nothing. Ids are per-repository counters,
/// so the exclusion is typed per family: a client id can never accidentally
/// exclude the equally-numbered prospect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclude {
    Nothing,
    Client(ClientId),
    Prospect(ProspectId),
}

/// Checks that a company name is used at most once across prospects and
/// clients together.
#[derive(Debug, Clone)]
pub struct UniquenessService {
    clients: SharedClientRepository,
    prospects: SharedProspectRepository,
}

impl UniquenessService {
    pub fn new(clients: SharedClientRepository, prospects: SharedProspectRepository) -> Self {
        Self { clients, prospects }
    }

    /// Returns true when another entity already uses the name, comparing
    /// case-insensitively. True means duplicate: callers reject the write.
    pub fn is_duplicate_name(&self, name: &str, exclude: Exclude) -> bool {
        let needle = name.to_lowercase();

        for prospect in lock(&self.prospects).find_all() {
            if Exclude::Prospect(prospect.id()) == exclude {
                continue;
            }
            if prospect.name().to_lowercase() == needle {
                return true;
            }
        }

        for client in lock(&self.clients).find_all() {
            if Exclude::Client(client.id()) == exclude {
                continue;
            }
            if client.name().to_lowercase() == needle {
                return true;
            }
        }

        false
    }
}

/// Error reported when a create/update would duplicate a company name.
pub(crate) fn duplicate_name_error(name: &str) -> ValidationError {
    ValidationError::new("name", format!("the company name \"{name}\" is already in use"))
}
