use crate::domain::entities::CatalogEntry;
use std::cmp::Ordering;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Version,
    Category,
    Size,
    OsVersion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Search, filter, sort and page settings of the catalog list.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    search: String,
    category: Option<String>,
    os_version: Option<String>,
    sort: Option<(SortField, SortOrder)>,
    page: usize,
    page_size: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    pub items: Vec<CatalogEntry>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}

impl CatalogQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            category: None,
            os_version: None,
            sort: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: &str) {
        if self.search != search {
            self.search = search.to_string();
            self.page = 1;
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn set_category(&mut self, category: Option<String>) {
        if self.category != category {
            self.category = category;
            self.page = 1;
        }
    }

    pub fn os_version(&self) -> Option<&str> {
        self.os_version.as_deref()
    }

    pub fn set_os_version(&mut self, os_version: Option<String>) {
        if self.os_version != os_version {
            self.os_version = os_version;
            self.page = 1;
        }
    }

    pub fn sort(&self) -> Option<(SortField, SortOrder)> {
        self.sort
    }

    /// Cycles a column through ascending, descending and unsorted.
    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort = match self.sort {
            Some((current, SortOrder::Ascending)) if current == field => {
                Some((field, SortOrder::Descending))
            }
            Some((current, SortOrder::Descending)) if current == field => None,
            _ => Some((field, SortOrder::Ascending)),
        };
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        let search = self.search.to_lowercase();
        let matches_search = entry.name.to_lowercase().contains(&search)
            || entry.category.to_lowercase().contains(&search);
        let matches_category = self
            .category
            .as_ref()
            .is_none_or(|category| &entry.category == category);
        let matches_os = self
            .os_version
            .as_ref()
            .is_none_or(|os| entry.target_os_versions.contains(os));

        matches_search && matches_category && matches_os
    }

    pub fn apply(&self, entries: Vec<CatalogEntry>) -> CatalogPage {
        let mut filtered: Vec<CatalogEntry> =
            entries.into_iter().filter(|e| self.matches(e)).collect();

        if let Some((field, order)) = self.sort {
            filtered.sort_by(|a, b| {
                let ordering = compare(a, b, field);
                match order {
                    SortOrder::Ascending => ordering,
                    SortOrder::Descending => ordering.reverse(),
                }
            });
        }

        let total = filtered.len();
        let total_pages = total.div_ceil(self.page_size);
        let items = filtered
            .into_iter()
            .skip((self.page - 1) * self.page_size)
            .take(self.page_size)
            .collect();

        CatalogPage {
            items,
            total,
            page: self.page,
            total_pages,
        }
    }
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self::new(25)
    }
}

fn compare(a: &CatalogEntry, b: &CatalogEntry, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Version => a.version.to_lowercase().cmp(&b.version.to_lowercase()),
        SortField::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
        SortField::Size => match (a.size_mb, b.size_mb) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortField::OsVersion => a.primary_os_version().cmp(&b.primary_os_version()),
    }
}

/// Category options for the list filter, in first-seen order.
pub fn distinct_categories(entries: &[CatalogEntry]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    entries
        .iter()
        .filter(|e| seen.insert(e.category.clone()))
        .map(|e| e.category.clone())
        .collect()
}

pub fn distinct_os_versions(entries: &[CatalogEntry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|e| e.target_os_versions.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, name: &str, category: &str, size: Option<f64>, os: &str) -> CatalogEntry {
        let mut e = CatalogEntry::new(
            name.to_string(),
            name.to_lowercase(),
            "1.0".to_string(),
            category.to_string(),
        )
        .with_id(id)
        .with_os_versions([os]);
        e.size_mb = size;
        e
    }

    fn sample() -> Vec<CatalogEntry> {
        vec![
            entry(1, "Visual Studio Code", "Разработка", Some(85.0), "Debian 11+"),
            entry(2, "Firefox", "Браузеры", Some(65.0), "Debian 10+"),
            entry(3, "GIMP", "Графика", Some(120.0), "Debian 11+"),
            entry(4, "LibreOffice", "Офисные", Some(280.0), "Debian 10+"),
            entry(5, "Blender", "3D графика", None, "Debian 12+"),
        ]
    }

    fn names(page: &CatalogPage) -> Vec<&str> {
        page.items.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn search_matches_name_or_category() {
        let mut query = CatalogQuery::default();
        query.set_search("FIRE");
        assert_eq!(names(&query.apply(sample())), vec!["Firefox"]);

        query.set_search("графика");
        assert_eq!(names(&query.apply(sample())), vec!["GIMP", "Blender"]);
    }

    #[test]
    fn filters_combine() {
        let mut query = CatalogQuery::default();
        query.set_os_version(Some("Debian 11+".to_string()));
        assert_eq!(names(&query.apply(sample())), vec!["Visual Studio Code", "GIMP"]);

        query.set_category(Some("Графика".to_string()));
        assert_eq!(names(&query.apply(sample())), vec!["GIMP"]);
    }

    #[test]
    fn sort_cycles_through_three_states() {
        let mut query = CatalogQuery::default();
        query.toggle_sort(SortField::Name);
        assert_eq!(query.sort(), Some((SortField::Name, SortOrder::Ascending)));
        assert_eq!(query.apply(sample()).items[0].name, "Blender");

        query.toggle_sort(SortField::Name);
        assert_eq!(query.sort(), Some((SortField::Name, SortOrder::Descending)));
        assert_eq!(query.apply(sample()).items[0].name, "Visual Studio Code");

        query.toggle_sort(SortField::Name);
        assert_eq!(query.sort(), None);
        assert_eq!(query.apply(sample()).items[0].name, "Visual Studio Code");

        query.toggle_sort(SortField::Name);
        query.toggle_sort(SortField::Size);
        assert_eq!(query.sort(), Some((SortField::Size, SortOrder::Ascending)));
    }

    #[test]
    fn size_sorts_numerically() {
        let mut query = CatalogQuery::default();
        query.toggle_sort(SortField::Size);
        assert_eq!(
            names(&query.apply(sample())),
            vec!["Blender", "Firefox", "Visual Studio Code", "GIMP", "LibreOffice"]
        );
    }

    #[test]
    fn pagination_slices_and_counts() {
        let many: Vec<CatalogEntry> = (1..=60)
            .map(|i| entry(i, &format!("App {:02}", i), "Утилиты", None, "Debian 12+"))
            .collect();
        let mut query = CatalogQuery::new(25);

        let first = query.apply(many.clone());
        assert_eq!(first.total, 60);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items.len(), 25);

        query.set_page(3);
        let last = query.apply(many.clone());
        assert_eq!(last.items.len(), 10);
        assert_eq!(last.items[0].id, 51);

        query.set_page_size(50);
        assert_eq!(query.page(), 1);
        assert_eq!(query.apply(many.clone()).total_pages, 2);

        query.set_page(9);
        assert!(query.apply(many).items.is_empty());
    }

    #[test]
    fn empty_result_has_no_pages() {
        let mut query = CatalogQuery::default();
        query.set_search("nothing matches this");
        let page = query.apply(sample());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn filter_options_are_distinct() {
        let entries = sample();
        assert_eq!(distinct_categories(&entries).len(), 5);
        assert_eq!(
            distinct_os_versions(&entries),
            vec!["Debian 10+", "Debian 11+", "Debian 12+"]
        );
    }
}
