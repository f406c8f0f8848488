//! In-Memory Persistence
//!
//! Each repository owns a `Vec` of its entity type plus a monotonic id
//! sequence, and is shared behind `Arc<Mutex<...>>` — one mutex-protected
//! region per repository instance, because a defensive-copy read followed
//! by a separate mutation is not atomic across calls.
//!
//! Repository methods report absence through `Option`/`bool`, never through
//! errors; promoting a missing entity to a failure is the orchestration
//! layer's job.

pub mod repositories;
pub mod store;

pub use repositories::{
    ClientRepository, ContractRepository, ProspectRepository, SharedClientRepository,
    SharedContractRepository, SharedProspectRepository,
};
pub use store::CrmStore;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Locks a shared repository handle, recovering the guard when the lock was
/// poisoned by a panicking writer.
pub fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
