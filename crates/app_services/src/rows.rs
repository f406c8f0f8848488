//! Table projections for the presentation layer
//!
//! Fixed column order, preformatted cells. Rows are owned values, so a
//! caller cannot reach back into the repositories through them.

use domain_company::{Client, Company, Prospect};
use domain_contract::Contract;
use serde::Serialize;

/// One table row per client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientRow {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub revenue: i64,
    pub employee_count: u32,
}

impl ClientRow {
    pub const COLUMNS: [&'static str; 7] = [
        "ID",
        "Company Name",
        "Address",
        "Phone",
        "Email",
        "Revenue (€)",
        "Employees",
    ];

    pub fn from_client(client: &Client) -> Self {
        Self {
            id: client.id().raw(),
            name: client.name().to_string(),
            address: client.profile().address().to_string(),
            phone: client.profile().phone().to_string(),
            email: client.profile().email().to_string(),
            revenue: client.revenue(),
            employee_count: client.employee_count(),
        }
    }

    /// Cells in column order
    pub fn cells(&self) -> [String; 7] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.address.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.revenue.to_string(),
            self.employee_count.to_string(),
        ]
    }
}

/// One table row per prospect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProspectRow {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    /// Prospecting date preformatted as dd/MM/yyyy
    pub prospecting_date: String,
    /// Interest label ("Yes" / "No")
    pub interest: String,
}

impl ProspectRow {
    pub const COLUMNS: [&'static str; 7] = [
        "ID",
        "Company Name",
        "Address",
        "Phone",
        "Email",
        "Prospecting Date",
        "Interested",
    ];

    pub fn from_prospect(prospect: &Prospect) -> Self {
        Self {
            id: prospect.id().raw(),
            name: prospect.name().to_string(),
            address: prospect.profile().address().to_string(),
            phone: prospect.profile().phone().to_string(),
            email: prospect.profile().email().to_string(),
            prospecting_date: prospect.prospecting_date_display(),
            interest: prospect.interest().label().to_string(),
        }
    }

    /// Cells in column order
    pub fn cells(&self) -> [String; 7] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.address.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.prospecting_date.clone(),
            self.interest.clone(),
        ]
    }
}

/// One table row per contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractRow {
    pub id: u32,
    pub name: String,
    /// Amount preformatted with two decimals
    pub amount: String,
}

impl ContractRow {
    pub const COLUMNS: [&'static str; 3] = ["ID", "Contract Name", "Amount (€)"];

    pub fn from_contract(contract: &Contract) -> Self {
        Self {
            id: contract.id().raw(),
            name: contract.name().to_string(),
            amount: format!("{:.2}", contract.amount()),
        }
    }

    /// Cells in column order
    pub fn cells(&self) -> [String; 3] {
        [self.id.to_string(), self.name.clone(), self.amount.clone()]
    }
}
