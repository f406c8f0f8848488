//! Client and prospect entities
//!
//! The shared fields live in [`CompanyProfile`]; each family adds its own
//! payload on top. The [`Company`] trait gives callers a uniform read view
//! where polymorphic access is still wanted (display, uniqueness scans).

use chrono::NaiveDate;
use core_kernel::validation;
use core_kernel::{ClientId, ProspectId, ValidationError};
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::interest::InterestLevel;

/// Date format used everywhere a prospecting date is displayed
pub const DATE_DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Fields common to every company, validated on each mutation.
///
/// The company name must also be unique (case-insensitively) across all
/// clients and prospects together; that cross-collection rule is enforced
/// by the orchestration layer before any profile reaches a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    name: String,
    address: Address,
    phone: String,
    email: String,
    notes: Option<String>,
}

impl CompanyProfile {
    /// Builds a profile, validating fields in declaration order (fail-fast).
    ///
    /// The address argument is already validated by construction; `notes`
    /// is free text and accepts anything, including nothing.
    pub fn new(
        name: impl Into<String>,
        address: Address,
        phone: impl Into<String>,
        email: impl Into<String>,
        notes: Option<String>,
    ) -> Result<Self, ValidationError> {
        let mut profile = Self {
            name: String::new(),
            address,
            phone: String::new(),
            email: String::new(),
            notes: None,
        };
        profile.set_name(name)?;
        profile.set_phone(phone)?;
        profile.set_email(email)?;
        profile.set_notes(notes);
        Ok(profile)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn address_mut(&mut self) -> &mut Address {
        &mut self.address
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn set_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        if validation::is_blank(&value) {
            return Err(ValidationError::new("name", "the company name is required"));
        }
        self.name = value;
        Ok(())
    }

    /// Replaces the address wholesale; the replacement is valid by
    /// construction, so this cannot fail.
    pub fn set_address(&mut self, address: Address) {
        self.address = address;
    }

    pub fn set_phone(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        if !validation::is_valid_phone(&value) {
            return Err(ValidationError::new(
                "phone",
                "the phone number format is invalid",
            ));
        }
        self.phone = value;
        Ok(())
    }

    pub fn set_email(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        if !validation::is_valid_email(&value) {
            return Err(ValidationError::new("email", "the email format is invalid"));
        }
        self.email = value;
        Ok(())
    }

    pub fn set_notes(&mut self, value: Option<String>) {
        self.notes = value;
    }
}

/// Uniform read access over the two company families.
pub trait Company {
    fn profile(&self) -> &CompanyProfile;

    /// Family name for display ("Client" or "Prospect")
    fn type_name(&self) -> &'static str;

    fn name(&self) -> &str {
        self.profile().name()
    }
}

/// A contracted company.
///
/// Business rules: revenue must be at least [`Client::MIN_REVENUE`] and
/// headcount at least 1. Contracts are not stored on the client; the
/// contract repository, indexed by client id, is the single source of
/// truth for "which contracts does this client have".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    id: ClientId,
    profile: CompanyProfile,
    revenue: i64,
    employee_count: u32,
}

impl Client {
    /// Minimum annual revenue for a company to qualify as a client
    pub const MIN_REVENUE: i64 = 200;

    /// Builds an unstored client; the repository assigns the id on add.
    pub fn new(
        profile: CompanyProfile,
        revenue: i64,
        employee_count: u32,
    ) -> Result<Self, ValidationError> {
        let mut client = Self {
            id: ClientId::UNASSIGNED,
            profile,
            revenue: Self::MIN_REVENUE,
            employee_count: 1,
        };
        client.set_revenue(revenue)?;
        client.set_employee_count(employee_count)?;
        Ok(client)
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    /// Assigned exactly once, by the owning repository.
    pub fn set_id(&mut self, id: ClientId) {
        self.id = id;
    }

    pub fn profile(&self) -> &CompanyProfile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut CompanyProfile {
        &mut self.profile
    }

    pub fn revenue(&self) -> i64 {
        self.revenue
    }

    pub fn employee_count(&self) -> u32 {
        self.employee_count
    }

    pub fn set_revenue(&mut self, value: i64) -> Result<(), ValidationError> {
        if value < Self::MIN_REVENUE {
            return Err(ValidationError::new(
                "revenue",
                "the revenue must be at least 200",
            ));
        }
        self.revenue = value;
        Ok(())
    }

    pub fn set_employee_count(&mut self, value: u32) -> Result<(), ValidationError> {
        if value < 1 {
            return Err(ValidationError::new(
                "employee_count",
                "the employee count must be at least 1",
            ));
        }
        self.employee_count = value;
        Ok(())
    }
}

impl Company for Client {
    fn profile(&self) -> &CompanyProfile {
        &self.profile
    }

    fn type_name(&self) -> &'static str {
        "Client"
    }
}

/// A prospective company.
///
/// The prospecting date and interest level are required by construction;
/// their setters cannot fail because the types admit no invalid value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prospect {
    id: ProspectId,
    profile: CompanyProfile,
    prospecting_date: NaiveDate,
    interest: InterestLevel,
}

impl Prospect {
    /// Builds an unstored prospect; the repository assigns the id on add.
    pub fn new(profile: CompanyProfile, prospecting_date: NaiveDate, interest: InterestLevel) -> Self {
        Self {
            id: ProspectId::UNASSIGNED,
            profile,
            prospecting_date,
            interest,
        }
    }

    pub fn id(&self) -> ProspectId {
        self.id
    }

    /// Assigned exactly once, by the owning repository.
    pub fn set_id(&mut self, id: ProspectId) {
        self.id = id;
    }

    pub fn profile(&self) -> &CompanyProfile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut CompanyProfile {
        &mut self.profile
    }

    pub fn prospecting_date(&self) -> NaiveDate {
        self.prospecting_date
    }

    /// Prospecting date rendered as dd/MM/yyyy
    pub fn prospecting_date_display(&self) -> String {
        self.prospecting_date.format(DATE_DISPLAY_FORMAT).to_string()
    }

    pub fn interest(&self) -> InterestLevel {
        self.interest
    }

    pub fn set_prospecting_date(&mut self, value: NaiveDate) {
        self.prospecting_date = value;
    }

    pub fn set_interest(&mut self, value: InterestLevel) {
        self.interest = value;
    }
}

impl Company for Prospect {
    fn profile(&self) -> &CompanyProfile {
        &self.profile
    }

    fn type_name(&self) -> &'static str {
        "Prospect"
    }
}
