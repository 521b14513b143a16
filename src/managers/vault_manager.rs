//! Vault Manager for SecureVault.
//!
//! Implements `VaultManagerTrait`: an in-memory, ordered collection of
//! credential records with add, update, remove and filtered queries.
//! The newest record is always first. Nothing is persisted.

use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info};
use uuid::Uuid;
use zeroize::Zeroize;

use crate::services::password_generator::evaluate_strength;
use crate::types::credential::{
    Category, CategoryFilter, CredentialRecord, CredentialUpdate, NewCredential, VaultStats,
};
use crate::types::errors::VaultError;

/// Trait defining credential vault operations.
pub trait VaultManagerTrait {
    fn add(&mut self, draft: NewCredential) -> Result<String, VaultError>;
    fn update(&mut self, id: &str, changes: CredentialUpdate) -> Result<(), VaultError>;
    fn remove(&mut self, id: &str) -> bool;
    fn get(&self, id: &str) -> Option<&CredentialRecord>;
    fn list(&self) -> &[CredentialRecord];
    fn query(&self, search: &str, filter: CategoryFilter) -> Vec<&CredentialRecord>;
    fn count(&self) -> usize;
    fn stats(&self) -> VaultStats;
}

/// In-memory credential vault.
pub struct VaultManager {
    records: Vec<CredentialRecord>,
}

impl VaultManager {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Creates a vault holding the three demo accounts.
    pub fn with_sample_data() -> Self {
        let samples = [
            (
                "GitHub",
                "john.doe@email.com",
                "SuperSecure123!",
                "https://github.com",
                Category::Development,
                "Main development account",
                1_705_276_800, // 2024-01-15
                1_709_251_200, // 2024-03-01
            ),
            (
                "Google Account",
                "john.doe@gmail.com",
                "MySecretPass456#",
                "https://accounts.google.com",
                Category::Personal,
                "Primary email account",
                1_706_745_600, // 2024-02-01
                1_707_955_200, // 2024-02-15
            ),
            (
                "Netflix",
                "john.doe@email.com",
                "StreamingLife789$",
                "https://netflix.com",
                Category::Entertainment,
                "Family plan subscription",
                1_710_028_800, // 2024-03-10
                1_710_028_800,
            ),
        ];

        let records = samples
            .iter()
            .map(
                |(title, username, secret, website, category, notes, created_at, last_updated)| {
                    CredentialRecord {
                        id: Uuid::new_v4().to_string(),
                        title: title.to_string(),
                        username: username.to_string(),
                        secret: secret.to_string(),
                        website: website.to_string(),
                        category: *category,
                        notes: notes.to_string(),
                        created_at: *created_at,
                        last_updated: *last_updated,
                    }
                },
            )
            .collect();

        Self { records }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn find_index(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    fn validate(title: &str, secret: &str) -> Result<(), VaultError> {
        if title.is_empty() || secret.is_empty() {
            return Err(VaultError::InvalidCredentialRecord(
                "Title and password are required".to_string(),
            ));
        }
        Ok(())
    }

    fn matches_search(record: &CredentialRecord, needle: &str) -> bool {
        record.title.to_lowercase().contains(needle)
            || record.username.to_lowercase().contains(needle)
            || record.website.to_lowercase().contains(needle)
    }
}

impl Default for VaultManager {
    fn default() -> Self {
        Self::new()
    }
}

impl VaultManagerTrait for VaultManager {
    /// Adds a record at the front of the vault. Returns the generated ID.
    fn add(&mut self, mut draft: NewCredential) -> Result<String, VaultError> {
        Self::validate(&draft.title, &draft.secret)?;

        let id = Uuid::new_v4().to_string();
        let now = Self::now();
        let record = CredentialRecord {
            id: id.clone(),
            title: std::mem::take(&mut draft.title),
            username: std::mem::take(&mut draft.username),
            secret: std::mem::take(&mut draft.secret),
            website: std::mem::take(&mut draft.website),
            category: draft.category,
            notes: std::mem::take(&mut draft.notes),
            created_at: now,
            last_updated: now,
        };

        info!(id = %id, category = %record.category, "credential added");
        self.records.insert(0, record);
        Ok(id)
    }

    /// Replaces the given fields in place and bumps `last_updated`.
    fn update(&mut self, id: &str, changes: CredentialUpdate) -> Result<(), VaultError> {
        let idx = self
            .find_index(id)
            .ok_or_else(|| VaultError::NotFound(id.to_string()))?;

        let record = &self.records[idx];
        Self::validate(
            changes.title.as_deref().unwrap_or(&record.title),
            changes.secret.as_deref().unwrap_or(&record.secret),
        )?;

        let now = Self::now();
        let record = &mut self.records[idx];
        if let Some(title) = changes.title {
            record.title = title;
        }
        if let Some(username) = changes.username {
            record.username = username;
        }
        if let Some(secret) = changes.secret {
            record.secret.zeroize();
            record.secret = secret;
        }
        if let Some(website) = changes.website {
            record.website = website;
        }
        if let Some(category) = changes.category {
            record.category = category;
        }
        if let Some(notes) = changes.notes {
            record.notes = notes;
        }
        record.last_updated = now;

        info!(id, "credential updated");
        Ok(())
    }

    /// Removes the record with `id`. Returns false if there was none.
    fn remove(&mut self, id: &str) -> bool {
        match self.find_index(id) {
            Some(idx) => {
                // Dropping the record zeroizes its secret.
                self.records.remove(idx);
                info!(id, "credential removed");
                true
            }
            None => {
                debug!(id, "remove ignored, no such credential");
                false
            }
        }
    }

    fn get(&self, id: &str) -> Option<&CredentialRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    fn list(&self) -> &[CredentialRecord] {
        &self.records
    }

    /// Records whose title, username or website contains `search`
    /// (case-insensitive) and whose category passes `filter`, in vault order.
    fn query(&self, search: &str, filter: CategoryFilter) -> Vec<&CredentialRecord> {
        let needle = search.to_lowercase();
        self.records
            .iter()
            .filter(|r| Self::matches_search(r, &needle) && filter.matches(r.category))
            .collect()
    }

    fn count(&self) -> usize {
        self.records.len()
    }

    fn stats(&self) -> VaultStats {
        let stored = self.records.len();
        let security_score = if stored == 0 {
            0
        } else {
            let total: usize = self
                .records
                .iter()
                .map(|r| evaluate_strength(&r.secret).percent() as usize)
                .sum();
            (total / stored) as u8
        };
        let categories_in_use = self
            .records
            .iter()
            .map(|r| r.category)
            .collect::<HashSet<_>>()
            .len();

        VaultStats {
            stored,
            security_score,
            categories_in_use,
        }
    }
}
