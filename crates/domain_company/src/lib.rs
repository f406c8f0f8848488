//! Company Domain
//!
//! This crate manages the two company families tracked by the system:
//! clients (contracted companies) and prospects (prospective companies).
//!
//! Both variants share a validated [`CompanyProfile`]; the payload specific
//! to each family lives on the concrete type. Every field is checked on
//! construction and on every setter, so a stored entity never violates a
//! business rule at rest. Name uniqueness across the two families is an
//! orchestration concern and is not enforced here.

pub mod address;
pub mod company;
pub mod interest;

pub use address::Address;
pub use company::{Client, Company, CompanyProfile, Prospect};
pub use interest::InterestLevel;
