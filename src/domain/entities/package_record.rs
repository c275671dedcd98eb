use serde::{Deserialize, Serialize};

/// Metadata published by the package repository for a single package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub identifier: String,
    pub display_name: String,
    pub version: String,
    pub description: String,
    pub category: String,
    pub size_mb: Option<f64>,
    pub os_versions: Vec<String>,
    pub license: Option<String>,
    pub website: Option<String>,
}

impl PackageRecord {
    pub fn new(identifier: &str, display_name: &str, version: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            display_name: display_name.to_string(),
            version: version.to_string(),
            description: String::new(),
            category: String::new(),
            size_mb: None,
            os_versions: Vec::new(),
            license: None,
            website: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn with_size(mut self, size_mb: f64) -> Self {
        self.size_mb = Some(size_mb);
        self
    }

    pub fn with_os_versions(mut self, versions: &[&str]) -> Self {
        self.os_versions = versions.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn with_license(mut self, license: &str) -> Self {
        self.license = Some(license.to_string());
        self
    }

    pub fn with_website(mut self, website: &str) -> Self {
        self.website = Some(website.to_string());
        self
    }

    pub fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        filter.is_empty()
            || self.identifier.to_lowercase().contains(&filter)
            || self.display_name.to_lowercase().contains(&filter)
    }
}

/// One row of a tag or analog picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerOption {
    pub label: String,
    pub description: Option<String>,
}

impl PickerOption {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Case-insensitive substring match over the label and, when present, the description.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.label.to_lowercase().contains(&query)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
    }
}
