//! Loader collaborators: tabular sources feeding [`LedgerStore::load`] and
//! an explicit cache keyed by source identity.

pub mod cache;
pub mod csv_loader;

use std::path::PathBuf;
use std::time::SystemTime;

use crate::errors::Result;
use crate::ledger::{CategoryPolicy, LedgerStore, RawRow};

pub use cache::LedgerCache;
pub use csv_loader::CsvSource;

/// Identifies one version of a source's contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceIdentity {
    pub path: PathBuf,
    pub len: u64,
    pub modified: Option<SystemTime>,
}

/// Abstraction over tabular ledger sources.
pub trait LedgerSource {
    fn identity(&self) -> Result<SourceIdentity>;
    fn read_rows(&self) -> Result<Vec<RawRow>>;

    fn load(&self, policy: CategoryPolicy) -> Result<LedgerStore> {
        LedgerStore::load(self.read_rows()?, policy)
    }
}
