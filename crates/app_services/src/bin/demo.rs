//! CRM Core - Demo Binary
//!
//! Wires the in-memory store and the orchestration services, then prints
//! the client, prospect, and contract tables.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration (seeded demo data)
//! cargo run --bin crm-demo
//!
//! # Run against an empty store with debug logging
//! CRM_SEED_DEMO_DATA=false CRM_LOG_LEVEL=debug cargo run --bin crm-demo
//! ```
//!
//! # Environment Variables
//!
//! * `CRM_LOG_LEVEL` - log filter: trace, debug, info, warn, error (default: info)
//! * `CRM_SEED_DEMO_DATA` - pre-populate the store with sample companies (default: true)

use app_services::{
    ClientRow, ClientService, ContractRow, ContractService, CrmConfig, ProspectRow,
    ProspectService, UniquenessService,
};
use domain_company::Company;
use infra_memory::CrmStore;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = CrmConfig::from_env()?;
    init_tracing(&config.log_level);

    tracing::info!(seed = config.seed_demo_data, "starting CRM core demo");

    let store = if config.seed_demo_data {
        CrmStore::with_demo_data()?
    } else {
        CrmStore::new()
    };

    let uniqueness = UniquenessService::new(store.clients(), store.prospects());
    let clients = ClientService::new(store.clients(), uniqueness.clone());
    let prospects = ProspectService::new(store.prospects(), uniqueness);
    let contracts = ContractService::new(store.contracts(), store.clients());

    print_table(
        "Clients",
        &ClientRow::COLUMNS,
        clients.display_rows().iter().map(|r| r.cells().to_vec()),
    );
    print_table(
        "Prospects",
        &ProspectRow::COLUMNS,
        prospects.display_rows().iter().map(|r| r.cells().to_vec()),
    );
    for client in clients.list() {
        let rows = contracts.display_rows(client.id());
        if !rows.is_empty() {
            print_table(
                &format!("Contracts of {}", client.name()),
                &ContractRow::COLUMNS,
                rows.iter().map(|r| r.cells().to_vec()),
            );
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_table(title: &str, columns: &[&str], rows: impl Iterator<Item = Vec<String>>) {
    println!("\n== {title} ==");
    println!("{}", columns.join(" | "));
    for row in rows {
        println!("{}", row.join(" | "));
    }
}
