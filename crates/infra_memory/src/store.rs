//! Store wiring and demo seed data

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use core_kernel::ValidationError;
use domain_company::{Address, Client, CompanyProfile, InterestLevel, Prospect};
use domain_contract::Contract;
use tracing::info;

use crate::lock;
use crate::repositories::{
    ClientRepository, ContractRepository, ProspectRepository, SharedClientRepository,
    SharedContractRepository, SharedProspectRepository,
};

/// Owns the three shared repositories and their wiring.
///
/// The client repository receives a handle to the contract repository at
/// construction so that client deletion can cascade. Cloning the store
/// clones the handles, not the data.
#[derive(Debug, Clone)]
pub struct CrmStore {
    clients: SharedClientRepository,
    prospects: SharedProspectRepository,
    contracts: SharedContractRepository,
}

impl CrmStore {
    /// Builds a store with empty repositories.
    pub fn new() -> Self {
        let contracts: SharedContractRepository =
            Arc::new(Mutex::new(ContractRepository::new()));
        let clients = Arc::new(Mutex::new(ClientRepository::new(Arc::clone(&contracts))));
        let prospects = Arc::new(Mutex::new(ProspectRepository::new()));
        Self {
            clients,
            prospects,
            contracts,
        }
    }

    /// Builds a store pre-populated with sample companies and contracts.
    ///
    /// The seed is a convenience for demos and tests, not a durable
    /// contract.
    pub fn with_demo_data() -> Result<Self, ValidationError> {
        let store = Self::new();
        store.seed_demo_data()?;
        Ok(store)
    }

    pub fn clients(&self) -> SharedClientRepository {
        Arc::clone(&self.clients)
    }

    pub fn prospects(&self) -> SharedProspectRepository {
        Arc::clone(&self.prospects)
    }

    pub fn contracts(&self) -> SharedContractRepository {
        Arc::clone(&self.contracts)
    }

    fn seed_demo_data(&self) -> Result<(), ValidationError> {
        let mut clients = lock(&self.clients);
        let mut prospects = lock(&self.prospects);

        let ibm = clients.add(Client::new(
            CompanyProfile::new(
                "IBM",
                Address::new("10", "Victor Hugo", "54000", "Nancy")?,
                "0778663083",
                "ibm@ibm.com",
                None,
            )?,
            5_000,
            10,
        )?);
        let apple = clients.add(Client::new(
            CompanyProfile::new(
                "Apple",
                Address::new("102", "Victor Duquesnay", "97233", "Schoelcher")?,
                "0778663083",
                "apple@apple.com",
                None,
            )?,
            50_000,
            100,
        )?);
        let microsoft = clients.add(Client::new(
            CompanyProfile::new(
                "Microsoft",
                Address::new("25", "L'Esperance", "54390", "Frouard")?,
                "0778663083",
                "microsoft@microsoft.com",
                None,
            )?,
            500_000,
            1_000,
        )?);

        {
            let mut contracts = lock(&self.contracts);
            contracts.add(Contract::new(ibm, "Annual maintenance", 1_250.50)?);
            contracts.add(Contract::new(ibm, "Hosting", 800.0)?);
            contracts.add(Contract::new(apple, "Consulting", 3_200.0)?);
            contracts.add(Contract::new(microsoft, "License renewal", 15_000.0)?);
        }

        prospects.add(Prospect::new(
            CompanyProfile::new(
                "Boulangerie",
                Address::new("10", "Metz", "54390", "Frouard")?,
                "0696589632",
                "boulangerie@boulangerie.fr",
                None,
            )?,
            seed_date(2021, 1, 10),
            InterestLevel::Yes,
        ));
        prospects.add(Prospect::new(
            CompanyProfile::new(
                "Supermarché",
                Address::new("101", "De La Resistance", "54390", "Frouard")?,
                "0123456789",
                "supermarche@supermarche.fr",
                None,
            )?,
            seed_date(2024, 1, 12),
            InterestLevel::Yes,
        ));

        info!(
            clients = clients.len(),
            prospects = prospects.len(),
            contracts = lock(&self.contracts).len(),
            "demo data seeded"
        );
        Ok(())
    }
}

impl Default for CrmStore {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}
