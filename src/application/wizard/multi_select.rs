use crate::domain::entities::PickerOption;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetKind {
    Tags,
    Analogs,
}

/// Editing state for one unordered set of labels: the manual input box and
/// the searchable picker overlay. The set itself lives on the draft.
#[derive(Debug, Clone, Default)]
pub struct SetEditor {
    input: String,
    picker_open: bool,
    picker_query: String,
    options: Vec<PickerOption>,
}

impl SetEditor {
    pub fn new(options: Vec<PickerOption>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: String) {
        self.input = input;
    }

    /// Commits the trimmed input; whitespace-only input is left in place.
    /// Returns whether the set gained a value.
    pub fn commit_input(&mut self, set: &mut BTreeSet<String>) -> bool {
        let value = self.input.trim().to_string();
        if value.is_empty() {
            return false;
        }
        self.input.clear();
        set.insert(value)
    }

    /// Adds when absent, removes when present. Returns the new membership.
    pub fn toggle(set: &mut BTreeSet<String>, value: &str) -> bool {
        if set.remove(value) {
            false
        } else {
            set.insert(value.to_string());
            true
        }
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn open_picker(&mut self) {
        self.picker_open = true;
    }

    pub fn close_picker(&mut self) {
        self.picker_open = false;
        self.picker_query.clear();
    }

    pub fn picker_query(&self) -> &str {
        &self.picker_query
    }

    pub fn set_picker_query(&mut self, query: String) {
        self.picker_query = query;
    }

    /// Options matching the picker query, recomputed on every call.
    pub fn filtered_options(&self) -> Vec<&PickerOption> {
        self.options
            .iter()
            .filter(|o| o.matches(&self.picker_query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analogs() -> Vec<PickerOption> {
        vec![
            PickerOption::new("Chrome").with_description("Браузер от Google"),
            PickerOption::new("Atom").with_description("Текстовый редактор от GitHub"),
            PickerOption::new("Sublime Text").with_description("Текстовый редактор"),
        ]
    }

    #[test]
    fn manual_entry_trims_and_deduplicates() {
        let mut editor = SetEditor::default();
        let mut set = BTreeSet::new();

        editor.set_input("  IDE ".to_string());
        assert!(editor.commit_input(&mut set));
        assert_eq!(editor.input(), "");

        editor.set_input("IDE".to_string());
        assert!(!editor.commit_input(&mut set));
        assert_eq!(set.len(), 1);
        assert!(set.contains("IDE"));
    }

    #[test]
    fn blank_input_is_not_committed() {
        let mut editor = SetEditor::default();
        let mut set = BTreeSet::new();
        editor.set_input("   ".to_string());
        assert!(!editor.commit_input(&mut set));
        assert!(set.is_empty());
    }

    #[test]
    fn toggle_flips_membership() {
        let mut set = BTreeSet::new();
        assert!(SetEditor::toggle(&mut set, "Web"));
        assert!(set.contains("Web"));
        assert!(!SetEditor::toggle(&mut set, "Web"));
        assert!(set.is_empty());
    }

    #[test]
    fn picker_searches_label_and_description() {
        let mut editor = SetEditor::new(analogs());
        assert_eq!(editor.filtered_options().len(), 3);

        editor.set_picker_query("github".to_string());
        let hits: Vec<_> = editor
            .filtered_options()
            .into_iter()
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(hits, vec!["Atom"]);

        editor.set_picker_query("ТЕКСТОВЫЙ".to_string());
        assert_eq!(editor.filtered_options().len(), 2);

        editor.close_picker();
        assert_eq!(editor.picker_query(), "");
    }
}
