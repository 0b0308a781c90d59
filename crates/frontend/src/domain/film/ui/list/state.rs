use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct FilmListState {
    // committed (debounced) search filter
    pub q: String,

    // client-side sorting: "year" | "genre" | "popularity"
    pub sort_field: String,

    // pagination
    pub page: usize,
    pub page_size: usize,
}

impl Default for FilmListState {
    fn default() -> Self {
        Self {
            q: String::new(),
            sort_field: "year".to_string(),
            page: 1,
            page_size: 12,
        }
    }
}

pub fn create_state() -> RwSignal<FilmListState> {
    RwSignal::new(FilmListState::default())
}
