use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryStatus {
    Active,
    Pending,
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryStatus::Active => write!(f, "Active"),
            EntryStatus::Pending => write!(f, "Pending"),
        }
    }
}

/// A published application record as held by the catalog store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Assigned by the store on create; ignored when creating.
    pub id: u64,
    pub status: EntryStatus,
    pub name: String,
    pub package_id: String,
    pub description: String,
    pub version: String,
    pub category: String,
    pub size_mb: Option<f64>,
    pub website_url: Option<String>,
    pub license: Option<String>,
    pub changelog: Option<String>,
    pub target_os_versions: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub analogs: BTreeSet<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl CatalogEntry {
    pub fn new(name: String, package_id: String, version: String, category: String) -> Self {
        Self {
            id: 0,
            status: EntryStatus::Pending,
            name,
            package_id,
            description: String::new(),
            version,
            category,
            size_mb: None,
            website_url: None,
            license: None,
            changelog: None,
            target_os_versions: BTreeSet::new(),
            tags: BTreeSet::new(),
            analogs: BTreeSet::new(),
            updated_at: None,
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn with_status(mut self, status: EntryStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_size(mut self, size_mb: f64) -> Self {
        self.size_mb = Some(size_mb);
        self
    }

    pub fn with_website(mut self, url: &str) -> Self {
        self.website_url = Some(url.to_string());
        self
    }

    pub fn with_license(mut self, license: &str) -> Self {
        self.license = Some(license.to_string());
        self
    }

    pub fn with_os_versions<I, S>(mut self, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_os_versions = versions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, EntryStatus::Active)
    }

    /// Lowest OS label the entry targets, used for sorting the list view.
    pub fn primary_os_version(&self) -> Option<&str> {
        self.target_os_versions.iter().next().map(String::as_str)
    }
}
