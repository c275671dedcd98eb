use super::{CatalogEntry, EntryStatus, PackageRecord};
use std::collections::BTreeSet;
use std::fmt;

pub const CATEGORIES: [&str; 7] = [
    "Разработка",
    "Браузеры",
    "Графика",
    "Офисные",
    "Мультимедиа",
    "Утилиты",
    "Игры",
];

pub const OS_VERSIONS: [&str; 3] = ["Debian 10+", "Debian 11+", "Debian 12+"];

/// Form fields of the application draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    PackageId,
    Description,
    Version,
    Category,
    Size,
    Website,
    License,
    Changelog,
    OsVersions,
}

impl Field {
    /// Fields checked by the details stage gate, in display order.
    pub const VALIDATED: [Field; 8] = [
        Field::Name,
        Field::PackageId,
        Field::Description,
        Field::Version,
        Field::Category,
        Field::Size,
        Field::Website,
        Field::OsVersions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::PackageId => "packageId",
            Field::Description => "description",
            Field::Version => "version",
            Field::Category => "category",
            Field::Size => "sizeMb",
            Field::Website => "websiteUrl",
            Field::License => "license",
            Field::Changelog => "changelog",
            Field::OsVersions => "targetOsVersions",
        }
    }

    pub fn is_text(&self) -> bool {
        !matches!(self, Field::OsVersions)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Working state of the add/edit form. Text fields hold raw input; optional
/// fields are absent when empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftRecord {
    pub name: String,
    pub package_id: String,
    pub description: String,
    pub version: String,
    pub category: String,
    pub size_mb: String,
    pub website_url: String,
    pub license: String,
    pub changelog: String,
    pub target_os_versions: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub analogs: BTreeSet<String>,
}

impl DraftRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            name: entry.name.clone(),
            package_id: entry.package_id.clone(),
            description: entry.description.clone(),
            version: entry.version.clone(),
            category: entry.category.clone(),
            size_mb: entry.size_mb.map(|s| s.to_string()).unwrap_or_default(),
            website_url: entry.website_url.clone().unwrap_or_default(),
            license: entry.license.clone().unwrap_or_default(),
            changelog: entry.changelog.clone().unwrap_or_default(),
            target_os_versions: entry.target_os_versions.clone(),
            tags: entry.tags.clone(),
            analogs: entry.analogs.clone(),
        }
    }

    /// Overwrites the core fields with repository metadata. Changelog, tags and
    /// analogs are left as they are.
    pub fn import_package(&mut self, record: &PackageRecord) {
        self.name = record.display_name.clone();
        self.package_id = record.identifier.clone();
        self.description = record.description.clone();
        self.version = record.version.clone();
        self.category = record.category.clone();
        self.size_mb = record.size_mb.map(|s| s.to_string()).unwrap_or_default();
        self.license = record.license.clone().unwrap_or_default();
        self.website_url = record.website.clone().unwrap_or_default();
        self.target_os_versions = record.os_versions.iter().cloned().collect();
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Name => &self.name,
            Field::PackageId => &self.package_id,
            Field::Description => &self.description,
            Field::Version => &self.version,
            Field::Category => &self.category,
            Field::Size => &self.size_mb,
            Field::Website => &self.website_url,
            Field::License => &self.license,
            Field::Changelog => &self.changelog,
            Field::OsVersions => return None,
        };
        Some(value.as_str())
    }

    /// Returns false for fields that are not free text.
    pub fn set_text(&mut self, field: Field, value: String) -> bool {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::PackageId => &mut self.package_id,
            Field::Description => &mut self.description,
            Field::Version => &mut self.version,
            Field::Category => &mut self.category,
            Field::Size => &mut self.size_mb,
            Field::Website => &mut self.website_url,
            Field::License => &mut self.license,
            Field::Changelog => &mut self.changelog,
            Field::OsVersions => return false,
        };
        *slot = value;
        true
    }

    pub fn has_package(&self) -> bool {
        !self.name.trim().is_empty() && !self.package_id.trim().is_empty()
    }

    /// Whether discarding the draft would lose something the user entered.
    pub fn has_user_input(&self) -> bool {
        !self.name.trim().is_empty()
            || !self.package_id.trim().is_empty()
            || !self.tags.is_empty()
            || !self.analogs.is_empty()
    }

    /// Builds the catalog shape of the draft. Callers validate first; an
    /// unparsable size is dropped.
    pub fn to_entry(&self, id: u64, status: EntryStatus) -> CatalogEntry {
        CatalogEntry {
            id,
            status,
            name: self.name.trim().to_string(),
            package_id: self.package_id.trim().to_string(),
            description: self.description.trim().to_string(),
            version: self.version.trim().to_string(),
            category: self.category.clone(),
            size_mb: optional(&self.size_mb).and_then(|s| s.parse::<f64>().ok()),
            website_url: optional(&self.website_url).map(String::from),
            license: optional(&self.license).map(String::from),
            changelog: optional(&self.changelog).map(String::from),
            target_os_versions: self.target_os_versions.clone(),
            tags: self.tags.clone(),
            analogs: self.analogs.clone(),
            updated_at: None,
        }
    }
}

fn optional(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}
