//! Client orchestration façade

use core_kernel::{ClientId, DomainError};
use domain_company::{Address, Client, Company, CompanyProfile};
use infra_memory::{lock, SharedClientRepository};
use tracing::{info, warn};

use crate::rows::ClientRow;
use crate::uniqueness::{duplicate_name_error, Exclude, UniquenessService};

/// Field values for creating or updating a client.
#[derive(Debug, Clone)]
pub struct ClientRequest {
    pub name: String,
    pub street_number: String,
    pub street_name: String,
    pub postal_code: String,
    pub city: String,
    pub phone: String,
    pub email: String,
    pub notes: Option<String>,
    pub revenue: i64,
    pub employee_count: u32,
}

/// Sequences validation, uniqueness, and storage for clients.
#[derive(Debug, Clone)]
pub struct ClientService {
    clients: SharedClientRepository,
    uniqueness: UniquenessService,
}

impl ClientService {
    pub fn new(clients: SharedClientRepository, uniqueness: UniquenessService) -> Self {
        Self {
            clients,
            uniqueness,
        }
    }

    /// Creates and stores a client: duplicate-name check, validated
    /// construction, then storage. Returns the stored entity with its
    /// assigned id.
    pub fn create(&self, request: ClientRequest) -> Result<Client, DomainError> {
        if self.uniqueness.is_duplicate_name(&request.name, Exclude::Nothing) {
            warn!(name = %request.name, "client creation rejected, duplicate name");
            return Err(duplicate_name_error(&request.name).into());
        }

        let address = Address::new(
            request.street_number,
            request.street_name,
            request.postal_code,
            request.city,
        )?;
        let profile = CompanyProfile::new(
            request.name,
            address,
            request.phone,
            request.email,
            request.notes,
        )?;
        let mut client = Client::new(profile, request.revenue, request.employee_count)?;

        let id = lock(&self.clients).add(client.clone());
        client.set_id(id);
        info!(%id, name = %client.name(), "client created");
        Ok(client)
    }

    /// Re-applies every field through the validating setters on a copy of
    /// the stored client and persists only on full success, so a failed
    /// validation leaves the stored client untouched.
    pub fn update(&self, id: ClientId, request: ClientRequest) -> Result<bool, DomainError> {
        if self.uniqueness.is_duplicate_name(&request.name, Exclude::Client(id)) {
            warn!(%id, name = %request.name, "client update rejected, duplicate name");
            return Err(duplicate_name_error(&request.name).into());
        }

        let mut client = lock(&self.clients)
            .find_by_id(id)
            .ok_or_else(|| DomainError::not_found("client", id))?;

        let profile = client.profile_mut();
        profile.address_mut().set_street_number(request.street_number)?;
        profile.address_mut().set_street_name(request.street_name)?;
        profile.address_mut().set_postal_code(request.postal_code)?;
        profile.address_mut().set_city(request.city)?;
        profile.set_name(request.name)?;
        profile.set_phone(request.phone)?;
        profile.set_email(request.email)?;
        profile.set_notes(request.notes);
        client.set_revenue(request.revenue)?;
        client.set_employee_count(request.employee_count)?;

        let updated = lock(&self.clients).update(client);
        if updated {
            info!(%id, "client updated");
        }
        Ok(updated)
    }

    /// Deletes a client, cascading into its contracts. Absent ids report
    /// false; nothing here can error.
    pub fn delete(&self, id: ClientId) -> bool {
        let deleted = lock(&self.clients).delete(id);
        if deleted {
            info!(%id, "client deleted");
        }
        deleted
    }

    pub fn get(&self, id: ClientId) -> Option<Client> {
        lock(&self.clients).find_by_id(id)
    }

    /// All clients, sorted case-insensitively by name.
    pub fn list(&self) -> Vec<Client> {
        lock(&self.clients).find_all()
    }

    /// Table projection: one row per client, in list order.
    pub fn display_rows(&self) -> Vec<ClientRow> {
        self.list().iter().map(ClientRow::from_client).collect()
    }
}
