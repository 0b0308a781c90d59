//! Film administration: add / update / delete tabs plus the attachments
//! manager for an existing film.

use std::rc::Rc;

use contracts::domain::film::aggregate::FilmListItem;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::film::api;
use crate::domain::film::ui::attachments::Attachments;
use crate::domain::film::ui::details::FilmDetails;
use crate::system::auth::context::{expire_if_unauthorized, use_auth};
use crate::system::users::ui::AdminUsers;

#[derive(Clone, Copy, PartialEq)]
enum FilmTab {
    Add,
    Update,
    Delete,
}

/// Top-level admin page: films and users sections.
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let (show_users, set_show_users) = signal(false);

    view! {
        <div class="admin-dashboard">
            <div class="admin-sections">
                <button class:active=move || !show_users.get() on:click=move |_| set_show_users.set(false)>
                    "Films"
                </button>
                <button class:active=move || show_users.get() on:click=move |_| set_show_users.set(true)>
                    "Users"
                </button>
            </div>
            <Show when=move || !show_users.get() fallback=|| view! { <AdminUsers /> }>
                <AdminFilms />
            </Show>
        </div>
    }
}

#[component]
pub fn AdminFilms() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let (active_tab, set_active_tab) = signal(FilmTab::Add);
    let (films, set_films) = signal(Vec::<FilmListItem>::new());
    let (message, set_message) = signal(Option::<String>::None);
    let (search, set_search) = signal(String::new());

    // update-tab state
    let (editing_id, set_editing_id) = signal(Option::<i64>::None);
    let (managing_attachments, set_managing_attachments) = signal(Option::<i64>::None);

    // delete-tab state
    let (pending_delete, set_pending_delete) = signal(Option::<i64>::None);

    let load_films = move || {
        let token = auth_state.get_untracked().access_token;
        spawn_local(async move {
            match api::fetch_films(token.as_deref()).await {
                Ok(list) => set_films.set(list),
                Err(e) => {
                    expire_if_unauthorized(set_auth_state, &e);
                    set_message.set(Some(format!("Failed to load films list: {}", e)));
                }
            }
        });
    };

    Effect::new(move |_| {
        active_tab.track();
        set_message.set(None);
        set_search.set(String::new());
        set_editing_id.set(None);
        set_managing_attachments.set(None);
        set_pending_delete.set(None);
        load_films();
    });

    let do_delete = move |_| {
        let Some(film_id) = pending_delete.get_untracked() else {
            return;
        };
        let Some(token) = auth_state.get_untracked().access_token else {
            return;
        };
        spawn_local(async move {
            match api::delete_film(film_id, &token).await {
                Ok(()) => {
                    set_message.set(Some("Film deleted successfully!".to_string()));
                    load_films();
                }
                Err(e) => {
                    expire_if_unauthorized(set_auth_state, &e);
                    set_message.set(Some(format!("Failed to delete film: {}", e)));
                }
            }
            set_pending_delete.set(None);
        });
    };

    let filtered_films = move || {
        let filter = search.get().to_lowercase();
        films
            .get()
            .into_iter()
            .filter(|f| f.title.to_lowercase().contains(&filter))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="admin-films">
            <div class="admin-tabs">
                <button
                    class:active=move || active_tab.get() == FilmTab::Add
                    on:click=move |_| set_active_tab.set(FilmTab::Add)
                >"Add Film"</button>
                <button
                    class:active=move || active_tab.get() == FilmTab::Update
                    on:click=move |_| set_active_tab.set(FilmTab::Update)
                >"Update Film"</button>
                <button
                    class:active=move || active_tab.get() == FilmTab::Delete
                    on:click=move |_| set_active_tab.set(FilmTab::Delete)
                >"Delete Film"</button>
            </div>

            {move || message.get().map(|m| view! {
                <div class="notification" on:click=move |_| set_message.set(None)>{m}</div>
            })}

            <Show when=move || active_tab.get() == FilmTab::Add>
                {move || {
                    let add_saved: Rc<dyn Fn(i64)> = Rc::new(move |_| {
                        set_message.set(Some("Film added successfully!".to_string()));
                    });
                    let add_cancel: Rc<dyn Fn(())> = Rc::new(|_| {});
                    view! {
                        <FilmDetails film_id=None on_saved=add_saved on_cancel=add_cancel />
                    }
                }}
            </Show>

            <Show when=move || active_tab.get() == FilmTab::Update>
                {move || match (editing_id.get(), managing_attachments.get()) {
                    (_, Some(film_id)) => view! {
                        <Attachments
                            film_id=film_id
                            on_back=Callback::new(move |_| set_managing_attachments.set(None))
                        />
                    }.into_any(),
                    (Some(film_id), None) => {
                        let update_saved: Rc<dyn Fn(i64)> = Rc::new(move |_| {
                            set_message.set(Some("Film updated successfully!".to_string()));
                            set_editing_id.set(None);
                            load_films();
                        });
                        let update_cancel: Rc<dyn Fn(())> = Rc::new(move |_| {
                            set_editing_id.set(None);
                        });
                        view! {
                        <div class="update-section">
                            <FilmDetails
                                film_id=Some(film_id)
                                on_saved=update_saved
                                on_cancel=update_cancel
                            />
                            <button on:click=move |_| set_managing_attachments.set(Some(film_id))>
                                "Manage Attachments"
                            </button>
                        </div>
                    }.into_any()
                    }
                    (None, None) => view! {
                        <div class="update-section">
                            <input
                                type="text"
                                class="search-bar"
                                placeholder="Search by movie title..."
                                prop:value=move || search.get()
                                on:input=move |ev| set_search.set(event_target_value(&ev))
                            />
                            <ul class="films-list">
                                <For
                                    each=filtered_films
                                    key=|f| f.film_id
                                    children=move |f: FilmListItem| {
                                        let film_id = f.film_id;
                                        view! {
                                            <li>
                                                <span>{f.title.clone()}</span>
                                                <button
                                                    class="btn-edit"
                                                    on:click=move |_| set_editing_id.set(Some(film_id))
                                                >"Edit"</button>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        </div>
                    }.into_any(),
                }}
            </Show>

            <Show when=move || active_tab.get() == FilmTab::Delete>
                <div class="delete-section">
                    <input
                        type="text"
                        class="search-bar"
                        placeholder="Search by movie title..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <ul class="films-list">
                        <For
                            each=filtered_films
                            key=|f| f.film_id
                            children=move |f: FilmListItem| {
                                let film_id = f.film_id;
                                view! {
                                    <li>
                                        <span>{f.title.clone()}</span>
                                        <button
                                            class="btn-delete"
                                            on:click=move |_| set_pending_delete.set(Some(film_id))
                                        >"Delete"</button>
                                    </li>
                                }
                            }
                        />
                    </ul>

                    <Show when=move || pending_delete.get().is_some()>
                        <div class="confirmation-dialog">
                            <p>"Are you sure you want to delete this film?"</p>
                            <button class="btn-confirm" on:click=do_delete>"Yes, delete"</button>
                            <button class="btn-cancel" on:click=move |_| set_pending_delete.set(None)>
                                "No, keep it"
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
