use crate::domain::entities::Field;
use std::collections::{BTreeMap, BTreeSet};

/// Current violation message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `error` for `field`, or clears it when `None`.
    pub fn set(&mut self, field: Field, error: Option<String>) {
        match error {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    pub fn replace(&mut self, errors: BTreeMap<Field, String>) {
        self.errors = errors;
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

/// Fields the user has interacted with. Errors only show for these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchedFields {
    fields: BTreeSet<Field>,
}

impl TouchedFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch(&mut self, field: Field) {
        self.fields.insert(field);
    }

    pub fn touch_all(&mut self, fields: impl IntoIterator<Item = Field>) {
        self.fields.extend(fields);
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }
}
