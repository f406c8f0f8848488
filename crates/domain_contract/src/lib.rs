//! Contract Domain
//!
//! Contracts belong to clients and are only ever created through the
//! contract orchestration service, which checks that the owning client
//! exists before storing. The contract repository is the single holder of
//! contract records; deleting a client cascades there.

pub mod contract;

pub use contract::Contract;
