//! End-to-end orchestration tests: uniqueness, cascade, and projections

use app_services::{
    ClientRequest, ClientService, ContractRequest, ContractService, Exclude, ProspectRequest,
    ProspectService, UniquenessService,
};
use chrono::NaiveDate;
use core_kernel::{ClientId, ContractId, DomainError, ProspectId};
use domain_company::{Company, InterestLevel};
use infra_memory::{lock, CrmStore};

struct Services {
    store: CrmStore,
    clients: ClientService,
    prospects: ProspectService,
    contracts: ContractService,
}

fn services() -> Services {
    let store = CrmStore::new();
    let uniqueness = UniquenessService::new(store.clients(), store.prospects());
    Services {
        clients: ClientService::new(store.clients(), uniqueness.clone()),
        prospects: ProspectService::new(store.prospects(), uniqueness),
        contracts: ContractService::new(store.contracts(), store.clients()),
        store,
    }
}

fn client_request(name: &str) -> ClientRequest {
    ClientRequest {
        name: name.to_string(),
        street_number: "10".to_string(),
        street_name: "Victor Hugo".to_string(),
        postal_code: "54000".to_string(),
        city: "Nancy".to_string(),
        phone: "0123456789".to_string(),
        email: "contact@example.fr".to_string(),
        notes: None,
        revenue: 1_000,
        employee_count: 10,
    }
}

fn prospect_request(name: &str) -> ProspectRequest {
    ProspectRequest {
        name: name.to_string(),
        street_number: "101".to_string(),
        street_name: "De La Resistance".to_string(),
        postal_code: "54390".to_string(),
        city: "Frouard".to_string(),
        phone: "0696589632".to_string(),
        email: "contact@example.fr".to_string(),
        notes: None,
        prospecting_date: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
        interest: InterestLevel::Yes,
    }
}

#[test]
fn create_returns_entity_with_assigned_id() {
    let s = services();
    let client = s.clients.create(client_request("ACME")).unwrap();
    assert_eq!(client.id(), ClientId::new(1));
    assert_eq!(s.clients.get(client.id()).unwrap().name(), "ACME");
}

#[test]
fn duplicate_name_across_families_rejected_before_persist() {
    let s = services();
    s.clients.create(client_request("ACME")).unwrap();

    let err = s.prospects.create(prospect_request("acme")).unwrap_err();
    assert!(matches!(err, DomainError::Validation(ref v) if v.field == "name"));
    assert!(
        lock(&s.store.prospects()).is_empty(),
        "the rejected prospect must never be stored"
    );
}

#[test]
fn duplicate_name_within_same_family_rejected() {
    let s = services();
    s.prospects.create(prospect_request("Boulangerie")).unwrap();
    assert!(s.prospects.create(prospect_request("BOULANGERIE")).is_err());
}

#[test]
fn renaming_client_to_its_own_name_succeeds() {
    let s = services();
    let client = s.clients.create(client_request("ACME")).unwrap();

    // Case-identical
    assert!(s.clients.update(client.id(), client_request("ACME")).unwrap());
    // Case-different
    assert!(s.clients.update(client.id(), client_request("Acme")).unwrap());
    assert_eq!(s.clients.get(client.id()).unwrap().name(), "Acme");
}

#[test]
fn renaming_client_onto_another_company_rejected() {
    let s = services();
    s.clients.create(client_request("ACME")).unwrap();
    let other = s.clients.create(client_request("Globex")).unwrap();

    let err = s.clients.update(other.id(), client_request("acme")).unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
    assert_eq!(s.clients.get(other.id()).unwrap().name(), "Globex");
}

#[test]
fn uniqueness_exclusion_is_typed_per_family() {
    let s = services();
    let client = s.clients.create(client_request("ACME")).unwrap();
    let prospect = s.prospects.create(prospect_request("Initech")).unwrap();
    assert_eq!(client.id().raw(), prospect.id().raw());

    let uniqueness = UniquenessService::new(s.store.clients(), s.store.prospects());
    // Excluding the client must not hide the equally-numbered prospect
    assert!(uniqueness.is_duplicate_name("Initech", Exclude::Client(client.id())));
    assert!(!uniqueness.is_duplicate_name("Initech", Exclude::Prospect(prospect.id())));
}

#[test]
fn update_of_missing_client_is_not_found() {
    let s = services();
    let err = s
        .clients
        .update(ClientId::new(99), client_request("Ghost"))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn failed_update_leaves_stored_entity_untouched() {
    let s = services();
    let client = s.clients.create(client_request("ACME")).unwrap();

    let mut request = client_request("Renamed");
    request.revenue = 199;
    assert!(s.clients.update(client.id(), request).is_err());

    let stored = s.clients.get(client.id()).unwrap();
    assert_eq!(stored.name(), "ACME", "no field may change on a failed update");
    assert_eq!(stored.revenue(), 1_000);
}

#[test]
fn deleting_client_removes_all_its_contracts() {
    let s = services();
    let c1 = s.clients.create(client_request("ACME")).unwrap();

    let k1 = s
        .contracts
        .create(
            c1.id(),
            ContractRequest {
                name: "Maintenance".to_string(),
                amount: 1_250.50,
            },
        )
        .unwrap();
    let k2 = s
        .contracts
        .create(
            c1.id(),
            ContractRequest {
                name: "Hosting".to_string(),
                amount: 800.0,
            },
        )
        .unwrap();

    assert!(s.clients.delete(c1.id()));

    assert!(s.contracts.list_by_client(c1.id()).is_empty());
    assert!(s.contracts.get(k1.id()).is_none());
    assert!(s.contracts.get(k2.id()).is_none());
}

#[test]
fn deleting_contract_updates_the_client_view() {
    let s = services();
    let c1 = s.clients.create(client_request("ACME")).unwrap();
    let k1 = s
        .contracts
        .create(
            c1.id(),
            ContractRequest {
                name: "Maintenance".to_string(),
                amount: 500.0,
            },
        )
        .unwrap();

    assert!(s.contracts.delete(k1.id()));

    assert!(s.contracts.get(k1.id()).is_none());
    assert!(s.contracts.list_by_client(c1.id()).is_empty());
    assert!(s.clients.get(c1.id()).is_some(), "the client itself survives");
}

#[test]
fn contract_for_missing_client_is_not_found() {
    let s = services();
    let err = s
        .contracts
        .create(
            ClientId::new(7),
            ContractRequest {
                name: "Orphan".to_string(),
                amount: 100.0,
            },
        )
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(lock(&s.store.contracts()).is_empty());
}

#[test]
fn contract_update_revalidates_fields() {
    let s = services();
    let c1 = s.clients.create(client_request("ACME")).unwrap();
    let contract = s
        .contracts
        .create(
            c1.id(),
            ContractRequest {
                name: "Hosting".to_string(),
                amount: 800.0,
            },
        )
        .unwrap();

    let err = s
        .contracts
        .update(
            contract.id(),
            ContractRequest {
                name: "Hosting".to_string(),
                amount: -5.0,
            },
        )
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(ref v) if v.field == "amount"));
    assert_eq!(s.contracts.get(contract.id()).unwrap().amount(), 800.0);

    assert!(s
        .contracts
        .update(
            contract.id(),
            ContractRequest {
                name: "Hosting Plus".to_string(),
                amount: 900.0,
            },
        )
        .unwrap());
}

#[test]
fn delete_operations_never_error_on_missing_ids() {
    let s = services();
    assert!(!s.clients.delete(ClientId::new(1)));
    assert!(!s.prospects.delete(ProspectId::new(1)));
    assert!(!s.contracts.delete(ContractId::new(1)));
}

#[test]
fn client_rows_follow_column_order() {
    let s = services();
    s.clients.create(client_request("ACME")).unwrap();

    let rows = s.clients.display_rows();
    assert_eq!(rows.len(), 1);
    let cells = rows[0].cells();
    assert_eq!(
        cells,
        [
            "1".to_string(),
            "ACME".to_string(),
            "10 Victor Hugo 54000 Nancy".to_string(),
            "0123456789".to_string(),
            "contact@example.fr".to_string(),
            "1000".to_string(),
            "10".to_string(),
        ]
    );
}

#[test]
fn prospect_rows_format_date_and_interest() {
    let s = services();
    s.prospects.create(prospect_request("Boulangerie")).unwrap();

    let rows = s.prospects.display_rows();
    assert_eq!(rows[0].prospecting_date, "12/01/2024");
    assert_eq!(rows[0].interest, "Yes");
}

#[test]
fn contract_rows_format_amount_with_two_decimals() {
    let s = services();
    let c1 = s.clients.create(client_request("ACME")).unwrap();
    s.contracts
        .create(
            c1.id(),
            ContractRequest {
                name: "Hosting".to_string(),
                amount: 800.0,
            },
        )
        .unwrap();

    let rows = s.contracts.display_rows(c1.id());
    assert_eq!(rows[0].amount, "800.00");
}

#[test]
fn rows_serialize_for_external_consumers() {
    let s = services();
    s.clients.create(client_request("ACME")).unwrap();

    let json = serde_json::to_value(s.clients.display_rows()).unwrap();
    assert_eq!(json[0]["name"], "ACME");
    assert_eq!(json[0]["revenue"], 1_000);
}

#[test]
fn rows_list_clients_sorted_by_name() {
    let s = services();
    s.clients.create(client_request("banana")).unwrap();
    s.clients.create(client_request("Apricot")).unwrap();

    let names: Vec<String> = s.clients.display_rows().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["Apricot", "banana"]);
}

#[test]
fn seeded_store_drives_the_services() {
    let store = CrmStore::with_demo_data().unwrap();
    let uniqueness = UniquenessService::new(store.clients(), store.prospects());
    let clients = ClientService::new(store.clients(), uniqueness.clone());
    let prospects = ProspectService::new(store.prospects(), uniqueness);

    assert_eq!(clients.list().len(), 3);
    assert_eq!(prospects.list().len(), 2);

    // Seed names are taken: no new company may reuse one
    assert!(clients.create(client_request("ibm")).is_err());
    assert!(prospects.create(prospect_request("SUPERMARCHÉ")).is_err());
}
