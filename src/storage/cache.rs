use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{LedgerSource, SourceIdentity};
use crate::errors::Result;
use crate::ledger::{CategoryPolicy, LedgerStore};

/// Load cache keyed by source identity.
///
/// An entry is reused only while the source's path, length and modification
/// time are unchanged; any change triggers a reload. Cached stores are cheap
/// clones sharing the loaded entries.
#[derive(Debug, Default)]
pub struct LedgerCache {
    entries: HashMap<PathBuf, (SourceIdentity, CategoryPolicy, LedgerStore)>,
}

impl LedgerCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load<S: LedgerSource>(
        &mut self,
        source: &S,
        policy: CategoryPolicy,
    ) -> Result<LedgerStore> {
        let identity = source.identity()?;
        if let Some((cached_identity, cached_policy, store)) = self.entries.get(&identity.path) {
            if *cached_identity == identity && *cached_policy == policy {
                debug!(path = %identity.path.display(), "ledger cache hit");
                return Ok(store.clone());
            }
        }
        debug!(path = %identity.path.display(), "ledger cache miss");
        let store = source.load(policy)?;
        self.entries
            .insert(identity.path.clone(), (identity, policy, store.clone()));
        Ok(store)
    }

    pub fn invalidate(&mut self, path: &Path) -> bool {
        self.entries.remove(path).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
