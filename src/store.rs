use crate::consts::PROFILE_PAGE_SIZE;
use crate::error::{GalaxyError, GxResult};
use crate::galaxy::ProfileSource;
use crate::profile::ProfileRecord;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Deserialize)]
struct ProfileEnvelope {
    profiles: Vec<ProfileRecord>,
}

/// Profile dump on disk, served one page at a time.
///
/// Accepts either a bare JSON array of records or `{"profiles": [...]}`.
#[derive(Debug, Clone, Default)]
pub struct JsonProfileStore {
    records: Vec<ProfileRecord>,
}

impl JsonProfileStore {
    pub fn new(records: Vec<ProfileRecord>) -> Self {
        Self { records }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GxResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            GalaxyError::Source(format!("Failed to read profiles {}: {}", path.display(), e))
        })?;
        let store = Self::from_json(&content)?;
        debug!("Loaded {} profiles from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn from_json(content: &str) -> GxResult<Self> {
        // 1. Bare array
        let array_err = match serde_json::from_str::<Vec<ProfileRecord>>(content) {
            Ok(records) => return Ok(Self { records }),
            Err(e) => e,
        };

        // 2. API envelope
        if let Ok(env) = serde_json::from_str::<ProfileEnvelope>(content) {
            return Ok(Self {
                records: env.profiles,
            });
        }

        Err(GalaxyError::Json(array_err))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ProfileSource for JsonProfileStore {
    fn fetch_profiles(&self, limit: usize) -> GxResult<Vec<ProfileRecord>> {
        let page = limit.min(PROFILE_PAGE_SIZE);
        if self.records.len() > page {
            warn!(
                "Profile store holds {} records; serving first page of {}",
                self.records.len(),
                page
            );
        }
        Ok(self.records.iter().take(page).cloned().collect())
    }
}
