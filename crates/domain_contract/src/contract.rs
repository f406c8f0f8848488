//! Contract entity

use core_kernel::validation;
use core_kernel::{ClientId, ContractId, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contract held by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    id: ContractId,
    client_id: ClientId,
    name: String,
    amount: f64,
}

impl Contract {
    /// Builds an unstored contract; the repository assigns the id on add.
    ///
    /// The client id must be an assigned one (raw value > 0); whether that
    /// client actually exists is checked by the orchestration service.
    pub fn new(
        client_id: ClientId,
        name: impl Into<String>,
        amount: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        check_client_id(client_id)?;
        check_name(&name)?;
        check_amount(amount)?;
        Ok(Self {
            id: ContractId::UNASSIGNED,
            client_id,
            name,
            amount,
        })
    }

    pub fn id(&self) -> ContractId {
        self.id
    }

    /// Assigned exactly once, by the owning repository.
    pub fn set_id(&mut self, id: ContractId) {
        self.id = id;
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn set_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        check_name(&value)?;
        self.name = value;
        Ok(())
    }

    pub fn set_amount(&mut self, value: f64) -> Result<(), ValidationError> {
        check_amount(value)?;
        self.amount = value;
        Ok(())
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}€)", self.name, self.amount)
    }
}

fn check_client_id(client_id: ClientId) -> Result<(), ValidationError> {
    if !client_id.is_assigned() {
        return Err(ValidationError::new("client_id", "the client id is required"));
    }
    Ok(())
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    if validation::is_blank(name) {
        return Err(ValidationError::new("name", "the contract name is required"));
    }
    Ok(())
}

// NaN fails the comparison, so it is rejected along with zero and negatives.
fn check_amount(amount: f64) -> Result<(), ValidationError> {
    if !(amount > 0.0) {
        return Err(ValidationError::new("amount", "the amount must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let contract = Contract::new(ClientId::new(3), "Annual maintenance", 1250.50).unwrap();
        assert_eq!(contract.id(), ContractId::UNASSIGNED);
        assert_eq!(contract.client_id(), ClientId::new(3));
        assert_eq!(contract.name(), "Annual maintenance");
        assert_eq!(contract.amount(), 1250.50);
    }

    #[test]
    fn test_unassigned_client_id_rejected() {
        let err = Contract::new(ClientId::UNASSIGNED, "Hosting", 100.0).unwrap_err();
        assert_eq!(err.field, "client_id");
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = Contract::new(ClientId::new(1), "  ", 100.0).unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        for amount in [0.0, -0.01, -500.0, f64::NAN] {
            let err = Contract::new(ClientId::new(1), "Hosting", amount).unwrap_err();
            assert_eq!(err.field, "amount");
        }
    }

    #[test]
    fn test_failed_setter_keeps_previous_value() {
        let mut contract = Contract::new(ClientId::new(1), "Hosting", 800.0).unwrap();
        assert!(contract.set_amount(-1.0).is_err());
        assert_eq!(contract.amount(), 800.0);
        assert!(contract.set_name("").is_err());
        assert_eq!(contract.name(), "Hosting");
    }

    #[test]
    fn test_display_format() {
        let contract = Contract::new(ClientId::new(1), "Hosting", 800.0).unwrap();
        assert_eq!(contract.to_string(), "Hosting (800.00€)");
    }
}
