/// A record that can appear in a selection-and-filter list.
pub trait Candidate {
    /// Stable identity within one list.
    fn key(&self) -> &str;
    /// Text the search box matches against (case-insensitive substring).
    fn search_text(&self) -> String;
    /// Category facet value, if the record carries one.
    fn category(&self) -> Option<&str>;
}

/// One candidate plus its selection flag. The flag is the only mutable
/// field; the record itself is fixed for the life of the screen.
#[derive(Debug, Clone)]
pub struct Selectable<T> {
    pub item: T,
    pub selected: bool,
}

/// Category facet. `All` admits every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All categories",
            CategoryFilter::Only(name) => name,
        }
    }

    pub fn admits(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => category == Some(name.as_str()),
        }
    }
}

/// A filterable candidate list with selection state.
///
/// Filtering only narrows what is visible. Selection operations act on the
/// full list, so select-all also marks records the active filter hides.
#[derive(Debug, Clone)]
pub struct SelectionList<T: Candidate> {
    items: Vec<Selectable<T>>,
    pub search: String,
    pub filter: CategoryFilter,
    /// Facet options offered for this list, fixed at construction.
    categories: Vec<String>,
}

impl<T: Candidate> SelectionList<T> {
    pub fn new(items: Vec<T>, categories: Vec<String>) -> Self {
        SelectionList {
            items: items
                .into_iter()
                .map(|item| Selectable {
                    item,
                    selected: false,
                })
                .collect(),
            search: String::new(),
            filter: CategoryFilter::All,
            categories,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Selectable<T>] {
        &self.items
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    fn matches(&self, entry: &Selectable<T>) -> bool {
        let needle = self.search.to_lowercase();
        entry.item.search_text().to_lowercase().contains(&needle)
            && self.filter.admits(entry.item.category())
    }

    /// Indices (into the full list) of records passing the current filter.
    pub fn visible(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, entry)| self.matches(entry))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn visible_len(&self) -> usize {
        self.items.iter().filter(|e| self.matches(e)).count()
    }

    /// Flip the selection flag of the record with the given key.
    pub fn toggle(&mut self, key: &str) {
        if let Some(entry) = self.items.iter_mut().find(|e| e.item.key() == key) {
            entry.selected = !entry.selected;
        }
    }

    /// Flip the record at a position in the visible list (cursor position).
    pub fn toggle_visible(&mut self, pos: usize) {
        if let Some(&idx) = self.visible().get(pos) {
            self.items[idx].selected = !self.items[idx].selected;
        }
    }

    /// Mark every record, including ones the filter currently hides.
    pub fn select_all(&mut self) {
        for entry in &mut self.items {
            entry.selected = true;
        }
    }

    /// Unmark every record, including ones the filter currently hides.
    pub fn clear_selection(&mut self) {
        for entry in &mut self.items {
            entry.selected = false;
        }
    }

    /// Gate for advancing to the next wizard step.
    pub fn any_selected(&self) -> bool {
        self.items.iter().any(|e| e.selected)
    }

    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|e| e.selected).count()
    }

    /// Cycle the category facet: All, then each option in order, then All.
    /// No-op for lists without a facet (user lists).
    pub fn cycle_filter(&mut self) {
        if self.categories.is_empty() {
            return;
        }
        self.filter = match &self.filter {
            CategoryFilter::All => CategoryFilter::Only(self.categories[0].clone()),
            CategoryFilter::Only(name) => {
                match self.categories.iter().position(|c| c == name) {
                    Some(i) if i + 1 < self.categories.len() => {
                        CategoryFilter::Only(self.categories[i + 1].clone())
                    }
                    _ => CategoryFilter::All,
                }
            }
        };
    }
}
