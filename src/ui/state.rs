//! View state and its transition rules.

use crate::app::{DrugNameDto, DrugNamePage};

/// Form mode: what the submit action does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Idle,
    Editing,
}

/// Everything the drug name view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub input: String,
    pub search: String,
    /// The page as fetched.
    pub records: Vec<DrugNameDto>,
    /// `records` narrowed by `search`.
    pub filtered: Vec<DrugNameDto>,
    pub selected: Option<DrugNameDto>,
    pub current_page: i64,
    pub total_pages: i64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            input: String::new(),
            search: String::new(),
            records: Vec::new(),
            filtered: Vec::new(),
            selected: None,
            current_page: 1,
            total_pages: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    InputChanged(String),
    SearchChanged(String),
    PageLoaded(DrugNamePage),
    /// Select a record of the current page for editing.
    EditRequested(String),
    Submitted,
    DeleteRequested(String),
    PageRequested(i64),
    Created,
    Updated,
    Deleted,
}

/// Work the view asks its driver to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch(i64),
    Create { drug_name: String },
    Update { id: String, drug_name: String },
    Delete { id: String },
}

impl ViewState {
    pub fn mode(&self) -> FormMode {
        if self.selected.is_some() {
            FormMode::Editing
        } else {
            FormMode::Idle
        }
    }

    pub fn prev_enabled(&self) -> bool {
        self.current_page > 1
    }

    pub fn next_enabled(&self) -> bool {
        self.current_page < self.total_pages
    }

    fn page_reachable(&self, page: i64) -> bool {
        page >= 1 && page <= self.total_pages.max(1)
    }

    fn refilter(&mut self) {
        self.filtered = filter_records(&self.records, &self.search);
    }
}

/// Case-sensitive substring match on the drug name.
pub fn filter_records(records: &[DrugNameDto], keyword: &str) -> Vec<DrugNameDto> {
    records
        .iter()
        .filter(|r| r.drug_name.contains(keyword))
        .cloned()
        .collect()
}

/// Apply one event. Never performs I/O; side effects come back as an [`Effect`].
pub fn transition(mut state: ViewState, event: UiEvent) -> (ViewState, Option<Effect>) {
    match event {
        UiEvent::InputChanged(text) => {
            state.input = text;
            (state, None)
        }
        UiEvent::SearchChanged(keyword) => {
            state.search = keyword;
            state.refilter();
            (state, None)
        }
        UiEvent::PageLoaded(page) => {
            state.records = page.records;
            state.total_pages = page.total_pages;
            state.current_page = page.current_page;
            state.refilter();
            (state, None)
        }
        UiEvent::EditRequested(id) => {
            if let Some(record) = state.records.iter().find(|r| r.id == id).cloned() {
                state.input = record.drug_name.clone();
                state.selected = Some(record);
            }
            (state, None)
        }
        UiEvent::Submitted => {
            let drug_name = state.input.clone();
            let effect = match &state.selected {
                Some(record) => Effect::Update {
                    id: record.id.clone(),
                    drug_name,
                },
                None => Effect::Create { drug_name },
            };
            (state, Some(effect))
        }
        UiEvent::DeleteRequested(id) => (state, Some(Effect::Delete { id })),
        UiEvent::PageRequested(page) => {
            if page == state.current_page || !state.page_reachable(page) {
                return (state, None);
            }
            // current_page moves only once the page has loaded
            (state, Some(Effect::Fetch(page)))
        }
        UiEvent::Created => {
            state.input.clear();
            let page = state.current_page;
            (state, Some(Effect::Fetch(page)))
        }
        UiEvent::Updated => {
            state.input.clear();
            state.selected = None;
            let page = state.current_page;
            (state, Some(Effect::Fetch(page)))
        }
        UiEvent::Deleted => {
            let page = state.current_page;
            (state, Some(Effect::Fetch(page)))
        }
    }
}
