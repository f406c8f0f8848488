//! Postal address value type

use core_kernel::validation;
use core_kernel::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated postal address, embedded by value in every company.
///
/// Fields are private; every mutation goes through a setter that validates
/// before committing, so an address is never observed in an invalid state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    street_number: String,
    street_name: String,
    postal_code: String,
    city: String,
}

impl Address {
    /// Builds an address, validating fields in declaration order.
    ///
    /// Fail-fast: the first invalid field aborts construction and its error
    /// is returned as-is.
    pub fn new(
        street_number: impl Into<String>,
        street_name: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let mut address = Self {
            street_number: String::new(),
            street_name: String::new(),
            postal_code: String::new(),
            city: String::new(),
        };
        address.set_street_number(street_number)?;
        address.set_street_name(street_name)?;
        address.set_postal_code(postal_code)?;
        address.set_city(city)?;
        Ok(address)
    }

    pub fn street_number(&self) -> &str {
        &self.street_number
    }

    pub fn street_name(&self) -> &str {
        &self.street_name
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn set_street_number(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        if validation::is_blank(&value) {
            return Err(ValidationError::new(
                "street_number",
                "the street number is required",
            ));
        }
        self.street_number = value;
        Ok(())
    }

    pub fn set_street_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        if validation::is_blank(&value) {
            return Err(ValidationError::new(
                "street_name",
                "the street name is required",
            ));
        }
        self.street_name = value;
        Ok(())
    }

    pub fn set_postal_code(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        if !validation::is_valid_postal_code(&value) {
            return Err(ValidationError::new(
                "postal_code",
                "the postal code must be exactly 5 digits",
            ));
        }
        self.postal_code = value;
        Ok(())
    }

    pub fn set_city(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        if validation::is_blank(&value) {
            return Err(ValidationError::new("city", "the city is required"));
        }
        self.city = value;
        Ok(())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.street_number, self.street_name, self.postal_code, self.city
        )
    }
}
