//! Prospect orchestration façade

use chrono::NaiveDate;
use core_kernel::{DomainError, ProspectId};
use domain_company::{Address, Company, CompanyProfile, InterestLevel, Prospect};
use infra_memory::{lock, SharedProspectRepository};
use tracing::{info, warn};

use crate::rows::ProspectRow;
use crate::uniqueness::{duplicate_name_error, Exclude, UniquenessService};

/// Field values for creating or updating a prospect.
#[derive(Debug, Clone)]
pub struct ProspectRequest {
    pub name: String,
    pub street_number: String,
    pub street_name: String,
    pub postal_code: String,
    pub city: String,
    pub phone: String,
    pub email: String,
    pub notes: Option<String>,
    pub prospecting_date: NaiveDate,
    pub interest: InterestLevel,
}

/// Sequences validation, uniqueness, and storage for prospects.
#[derive(Debug, Clone)]
pub struct ProspectService {
    prospects: SharedProspectRepository,
    uniqueness: UniquenessService,
}

impl ProspectService {
    pub fn new(prospects: SharedProspectRepository, uniqueness: UniquenessService) -> Self {
        Self {
            prospects,
            uniqueness,
        }
    }

    /// Creates and stores a prospect: duplicate-name check, validated
    /// construction, then storage. Returns the stored entity with its
    /// assigned id.
    pub fn create(&self, request: ProspectRequest) -> Result<Prospect, DomainError> {
        if self.uniqueness.is_duplicate_name(&request.name, Exclude::Nothing) {
            warn!(name = %request.name, "prospect creation rejected, duplicate name");
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
        let mut prospect = Prospect::new(profile, request.prospecting_date, request.interest);

        let id = lock(&self.prospects).add(prospect.clone());
        prospect.set_id(id);
        info!(%id, name = %prospect.name(), "prospect created");
        Ok(prospect)
    }

    /// Re-applies every field through the validating setters on a copy of
    /// the stored prospect and persists only on full success.
    pub fn update(&self, id: ProspectId, request: ProspectRequest) -> Result<bool, DomainError> {
        if self.uniqueness.is_duplicate_name(&request.name, Exclude::Prospect(id)) {
            warn!(%id, name = %request.name, "prospect update rejected, duplicate name");
            return Err(duplicate_name_error(&request.name).into());
        }

        let mut prospect = lock(&self.prospects)
            .find_by_id(id)
            .ok_or_else(|| DomainError::not_found("prospect", id))?;

        let profile = prospect.profile_mut();
        profile.address_mut().set_street_number(request.street_number)?;
        profile.address_mut().set_street_name(request.street_name)?;
        profile.address_mut().set_postal_code(request.postal_code)?;
        profile.address_mut().set_city(request.city)?;
        profile.set_name(request.name)?;
        profile.set_phone(request.phone)?;
        profile.set_email(request.email)?;
        profile.set_notes(request.notes);
        prospect.set_prospecting_date(request.prospecting_date);
        prospect.set_interest(request.interest);

        let updated = lock(&self.prospects).update(prospect);
        if updated {
            info!(%id, "prospect updated");
        }
        Ok(updated)
    }

    /// Deletes a prospect. Absent ids report false; nothing here can error.
    pub fn delete(&self, id: ProspectId) -> bool {
        let deleted = lock(&self.prospects).delete(id);
        if deleted {
            info!(%id, "prospect deleted");
        }
        deleted
    }

    pub fn get(&self, id: ProspectId) -> Option<Prospect> {
        lock(&self.prospects).find_by_id(id)
    }

    /// All prospects, sorted case-insensitively by name.
    pub fn list(&self) -> Vec<Prospect> {
        lock(&self.prospects).find_all()
    }

    /// Table projection: one row per prospect, in list order.
    pub fn display_rows(&self) -> Vec<ProspectRow> {
        self.list().iter().map(ProspectRow::from_prospect).collect()
    }
}
