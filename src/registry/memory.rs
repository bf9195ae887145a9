use super::{FingerprintRegistry, RegistryError, RegistryRecord};
use crate::fingerprint::Fingerprint;
use std::collections::HashMap;

/// Registry held entirely in memory, for local runs and tests.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRegistry {
    records: HashMap<Fingerprint, Vec<RegistryRecord>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, fingerprint: Fingerprint, record: RegistryRecord) {
        self.records.entry(fingerprint).or_default().push(record);
    }
}

impl FingerprintRegistry for InMemoryRegistry {
    fn find_by_fingerprint(
        &self,
        fingerprint: &Fingerprint,
    ) -> Result<Vec<RegistryRecord>, RegistryError> {
        Ok(self.records.get(fingerprint).cloned().unwrap_or_default())
    }
}
