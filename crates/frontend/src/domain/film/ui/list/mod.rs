pub mod state;

use contracts::domain::film::aggregate::FilmListItem;
use contracts::domain::film::export::flatten_film;
use contracts::shared::csv;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::film::api;
use crate::shared::api_utils::api_url;
use crate::shared::export::download_csv;
use crate::system::auth::context::{expire_if_unauthorized, use_auth};

const SEARCH_DEBOUNCE_MS: u32 = 300;
const EXPORT_FILENAME: &str = "films_full_export.csv";

/// Public browse page: film grid with debounced search, sorting,
/// pagination, and the authenticated CSV export.
#[component]
pub fn HomePage() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let state = state::create_state();
    let (films, set_films) = signal(Vec::<FilmListItem>::new());
    let (notification, set_notification) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    // search box value before the debounce commits it to state
    let (search_input, set_search_input) = signal(String::new());
    let (search_gen, set_search_gen) = signal(0u32);

    // initial load
    spawn_local(async move {
        set_is_loading.set(true);
        match api::fetch_films(None).await {
            Ok(list) => set_films.set(list),
            Err(e) => set_notification.set(Some(format!("Failed to load movies: {}", e))),
        }
        set_is_loading.set(false);
    });

    let on_search_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        set_search_input.set(value.clone());
        let generation = search_gen.get_untracked() + 1;
        set_search_gen.set(generation);
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if search_gen.get_untracked() == generation {
                state.update(|s| {
                    s.q = value;
                    s.page = 1;
                });
            }
        });
    };

    // Fetch the enriched record set, flatten every film, serialize, and hand
    // the CSV to the browser as a download. One terminal notification on any
    // failure; no retry.
    let export_csv = move |_| {
        let Some(token) = auth_state.get_untracked().access_token else {
            set_notification.set(Some("You must be logged in to export data.".to_string()));
            return;
        };
        spawn_local(async move {
            set_is_loading.set(true);
            match api::fetch_full_films(&token).await {
                Ok(records) => {
                    let flat: Vec<_> = records.iter().map(flatten_film).collect();
                    let content = csv::serialize(&flat, None);
                    if let Err(e) = download_csv(&content, EXPORT_FILENAME) {
                        set_notification.set(Some(format!("Failed to export CSV: {}", e)));
                    }
                }
                Err(e) => {
                    expire_if_unauthorized(set_auth_state, &e);
                    set_notification.set(Some(format!("Failed to export CSV: {}", e)));
                }
            }
            set_is_loading.set(false);
        });
    };

    let visible = move || {
        let state = state.get();
        let filter = state.q.to_lowercase();
        let mut list: Vec<FilmListItem> = films
            .get()
            .into_iter()
            .filter(|film| {
                if filter.is_empty() {
                    return true;
                }
                let year = film
                    .release_year
                    .map(|y| y.to_string())
                    .unwrap_or_default();
                [
                    film.title.as_str(),
                    film.director.as_deref().unwrap_or("Unknown Director"),
                    film.genre.as_deref().unwrap_or("Drama"),
                    year.as_str(),
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&filter))
            })
            .collect();

        match state.sort_field.as_str() {
            "genre" => list.sort_by(|a, b| a.genre.cmp(&b.genre)),
            "popularity" => list.sort_by_key(|f| f.film_id),
            _ => list.sort_by_key(|f| f.release_year),
        }
        list
    };

    let total_pages = move || {
        let state = state.get();
        visible().len().div_ceil(state.page_size)
    };

    let current_page_films = move || {
        let state = state.get();
        visible()
            .into_iter()
            .skip((state.page - 1) * state.page_size)
            .take(state.page_size)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="home-page">
            <Show when=move || is_loading.get()>
                <div class="loader">"Loading..."</div>
            </Show>
            {move || notification.get().map(|m| view! {
                <div class="notification" on:click=move |_| set_notification.set(None)>{m}</div>
            })}

            <div class="search-sort">
                <input
                    class="search-input"
                    placeholder="Search by title, director, genre, or year..."
                    prop:value=move || search_input.get()
                    on:input=on_search_input
                />
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.sort_field = value);
                }>
                    <option value="year">"Year"</option>
                    <option value="genre">"Genre"</option>
                    <option value="popularity">"Popularity"</option>
                </select>
                <button class="export-btn" on:click=export_csv>"Export as CSV"</button>
            </div>

            <div class="movie-grid">
                <For
                    each=current_page_films
                    key=|film| film.film_id
                    children=move |film: FilmListItem| {
                        let href = format!("/films/{}", film.film_id);
                        let poster = film
                            .poster_url
                            .clone()
                            .unwrap_or_else(|| api_url(&format!("/films/{}/poster", film.film_id)));
                        view! {
                            <div class="movie-card">
                                <A href=href>
                                    <img src=poster alt=film.title.clone() />
                                    <h4>{film.title.clone()}</h4>
                                    <p>
                                        {film.release_year.map(|y| y.to_string()).unwrap_or_default()}
                                        " · "
                                        {film.director.clone().unwrap_or_else(|| "Unknown Director".to_string())}
                                    </p>
                                </A>
                            </div>
                        }
                    }
                />
            </div>

            <div class="pagination">
                {move || {
                    (1..=total_pages())
                        .map(|page| {
                            view! {
                                <button
                                    class:active=move || state.get().page == page
                                    on:click=move |_| state.update(|s| s.page = page)
                                >
                                    {page}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
