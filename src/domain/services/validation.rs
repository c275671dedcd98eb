use crate::domain::entities::{CATEGORIES, DraftRecord, Field, OS_VERSIONS};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use url::Url;

// `[0-9]` rather than `\d`: the latter matches any Unicode digit in `regex`.
static PACKAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9+.-]*$").expect("valid package regex"));
static VERSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+(\.[0-9]+)*(-[a-zA-Z0-9]+)?$").expect("valid version regex")
});

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;
const PACKAGE_MAX: usize = 50;
const DESCRIPTION_MIN: usize = 10;
const DESCRIPTION_MAX: usize = 500;
const SIZE_MAX_MB: f64 = 10_000.0;

/// Field validators for the application draft. Each returns the violation
/// message, or `None` when the value is acceptable.
pub struct DraftValidator;

impl DraftValidator {
    pub fn validate_name(value: &str) -> Option<String> {
        let len = value.trim().chars().count();
        if len == 0 {
            return Some("Application name is required".to_string());
        }
        if len < NAME_MIN {
            return Some(format!("Name must be at least {} characters", NAME_MIN));
        }
        if len > NAME_MAX {
            return Some(format!("Name must not exceed {} characters", NAME_MAX));
        }
        None
    }

    pub fn validate_package(value: &str) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Some("Package name is required".to_string());
        }
        if !PACKAGE_RE.is_match(value) {
            return Some(
                "Package name may only contain lowercase letters, digits, +, . and -".to_string(),
            );
        }
        if trimmed.chars().count() > PACKAGE_MAX {
            return Some(format!(
                "Package name must not exceed {} characters",
                PACKAGE_MAX
            ));
        }
        None
    }

    pub fn validate_description(value: &str) -> Option<String> {
        let len = value.trim().chars().count();
        if len == 0 {
            return Some("Description is required".to_string());
        }
        if len < DESCRIPTION_MIN {
            return Some(format!(
                "Description must be at least {} characters",
                DESCRIPTION_MIN
            ));
        }
        if len > DESCRIPTION_MAX {
            return Some(format!(
                "Description must not exceed {} characters",
                DESCRIPTION_MAX
            ));
        }
        None
    }

    pub fn validate_version(value: &str) -> Option<String> {
        if value.trim().is_empty() {
            return Some("Version is required".to_string());
        }
        if !VERSION_RE.is_match(value) {
            return Some("Invalid version format (e.g. 1.0.0 or 1.2.3-beta)".to_string());
        }
        None
    }

    pub fn validate_category(value: &str) -> Option<String> {
        if value.is_empty() {
            return Some("Category is required".to_string());
        }
        if !CATEGORIES.contains(&value) {
            return Some(format!("Unknown category: {}", value));
        }
        None
    }

    /// Size is optional; an empty value is never a violation.
    pub fn validate_size(value: &str) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        let size = match trimmed.parse::<f64>() {
            Ok(size) if size.is_finite() => size,
            _ => return Some("Size must be a number".to_string()),
        };
        if size <= 0.0 {
            return Some("Size must be greater than zero".to_string());
        }
        if size > SIZE_MAX_MB {
            return Some(format!("Size must not exceed {} MB", SIZE_MAX_MB));
        }
        None
    }

    /// Website is optional; when present it must be an absolute http(s) URL.
    pub fn validate_website(value: &str) -> Option<String> {
        if value.is_empty() {
            return None;
        }
        match Url::parse(value) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => None,
            Ok(_) => Some("URL must start with http:// or https://".to_string()),
            Err(_) => Some("Invalid URL format".to_string()),
        }
    }

    pub fn validate_os_versions(versions: &BTreeSet<String>) -> Option<String> {
        if versions.is_empty() {
            return Some("Select at least one OS version".to_string());
        }
        versions
            .iter()
            .find(|v| !OS_VERSIONS.contains(&v.as_str()))
            .map(|v| format!("Unknown OS version: {}", v))
    }

    /// Runs the validator that covers `field` against the draft.
    pub fn validate_field(draft: &DraftRecord, field: Field) -> Option<String> {
        match field {
            Field::Name => Self::validate_name(&draft.name),
            Field::PackageId => Self::validate_package(&draft.package_id),
            Field::Description => Self::validate_description(&draft.description),
            Field::Version => Self::validate_version(&draft.version),
            Field::Category => Self::validate_category(&draft.category),
            Field::Size => Self::validate_size(&draft.size_mb),
            Field::Website => Self::validate_website(&draft.website_url),
            Field::OsVersions => Self::validate_os_versions(&draft.target_os_versions),
            Field::License | Field::Changelog => None,
        }
    }

    /// All violations of the details stage, keyed by field.
    pub fn validate_details(draft: &DraftRecord) -> BTreeMap<Field, String> {
        Field::VALIDATED
            .iter()
            .filter_map(|&field| Self::validate_field(draft, field).map(|msg| (field, msg)))
            .collect()
    }
}
