//! Registered billboards and their persistence.
//!
//! The registry is the collaborating store of billboard texts that owners
//! have registered. Matching only ever sees a snapshot of the texts; the
//! entries themselves carry identity and provenance for management.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::authorisation::normalize;

/// A billboard registered by its owner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistryEntry {
    pub id: Uuid,
    pub text: String,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// In-memory collection of registered billboards.
///
/// Uniqueness is enforced on the normalized text: two entries that the
/// matcher could not tell apart cannot coexist.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a billboard text.
    ///
    /// The text is trimmed before storage. Registration fails when the text
    /// normalizes to nothing or when its normalized form duplicates an
    /// existing entry.
    pub fn create(&mut self, text: &str, location: Option<&str>) -> Result<&RegistryEntry> {
        let text = text.trim();
        let normalized = normalize(text);
        if normalized.is_empty() {
            bail!("Billboard text must contain letters or digits");
        }
        if self
            .entries
            .iter()
            .any(|entry| normalize(&entry.text) == normalized)
        {
            bail!("Billboard text '{}' is already registered", text);
        }

        let entry = RegistryEntry {
            id: Uuid::new_v4(),
            text: text.to_string(),
            location: location.map(|l| l.to_string()),
            created_at: Utc::now(),
        };
        let idx = self.entries.len();
        self.entries.push(entry);
        Ok(&self.entries[idx])
    }

    /// Remove a registered billboard by id, returning the removed entry.
    pub fn delete(&mut self, id: Uuid) -> Result<RegistryEntry> {
        match self.entries.iter().position(|entry| entry.id == id) {
            Some(idx) => Ok(self.entries.remove(idx)),
            None => bail!("No registered billboard with id {}", id),
        }
    }

    /// All entries in registration order.
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The registered texts in registration order, detached from the
    /// registry so matching never observes later mutations.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.text.clone()).collect()
    }
}

/// One entry of a registry file: either a bare text or an object with an
/// optional location.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RegistryFileEntry {
    Text(String),
    Detailed {
        text: String,
        #[serde(default)]
        location: Option<String>,
    },
}

/// Load a registry from a JSON file holding an array of entries.
///
/// Entries that cannot be registered, because they normalize to nothing or
/// duplicate an earlier entry, are skipped with a warning rather than
/// failing the whole load.
pub fn load_registry_file(path: &Path) -> Result<Registry> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read registry file {}", path.display()))?;
    let raw: Vec<RegistryFileEntry> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse registry file {}", path.display()))?;

    let mut registry = Registry::new();
    for file_entry in raw {
        let (text, location) = match file_entry {
            RegistryFileEntry::Text(text) => (text, None),
            RegistryFileEntry::Detailed { text, location } => (text, location),
        };
        if let Err(err) = registry.create(&text, location.as_deref()) {
            warn!("Skipping registry entry: {}", err);
        }
    }
    Ok(registry)
}
