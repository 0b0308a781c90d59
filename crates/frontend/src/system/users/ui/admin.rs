use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::{expire_if_unauthorized, use_auth};
use crate::system::users::api;

#[derive(Clone, Copy, PartialEq)]
enum UserTab {
    Add,
    Update,
    Delete,
}

/// User administration: add / update / delete, mirroring the films admin
/// tabs. Username and password are required; the update form additionally
/// requires a matching confirmation.
#[component]
pub fn AdminUsers() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let (active_tab, set_active_tab) = signal(UserTab::Add);
    let (users, set_users) = signal(Vec::<User>::new());
    let (message, set_message) = signal(Option::<String>::None);
    let (selected, set_selected) = signal(Option::<User>::None);
    let (search, set_search) = signal(String::new());

    let token = move || auth_state.get_untracked().access_token.unwrap_or_default();

    let load_users = move || {
        let token = token();
        spawn_local(async move {
            match api::fetch_users(&token).await {
                Ok(list) => set_users.set(list),
                Err(e) => {
                    expire_if_unauthorized(set_auth_state, &e);
                    set_message.set(Some(format!("Error loading users: {}", e)));
                }
            }
        });
    };

    Effect::new(move |_| {
        active_tab.track();
        set_selected.set(None);
        set_search.set(String::new());
        set_message.set(None);
        load_users();
    });

    // Add form state
    let (new_username, set_new_username) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let username = new_username.get();
        let password = new_password.get();
        if username.trim().is_empty() || password.is_empty() {
            set_message.set(Some("Username and password are required".to_string()));
            return;
        }
        let token = token();
        spawn_local(async move {
            match api::add_user(&token, username, password).await {
                Ok(()) => {
                    set_message.set(Some("User added successfully!".to_string()));
                    set_new_username.set(String::new());
                    set_new_password.set(String::new());
                    load_users();
                }
                Err(e) => {
                    expire_if_unauthorized(set_auth_state, &e);
                    set_message.set(Some(e.to_string()));
                }
            }
        });
    };

    // Update form state
    let (upd_username, set_upd_username) = signal(String::new());
    let (upd_password, set_upd_password) = signal(String::new());
    let (upd_confirm, set_upd_confirm) = signal(String::new());

    let on_update = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user) = selected.get() else {
            return;
        };
        let Some(user_id) = user.user_id else {
            return;
        };
        let username = upd_username.get();
        let password = upd_password.get();
        if username.trim().is_empty() || password.is_empty() {
            set_message.set(Some("Username and new password are required".to_string()));
            return;
        }
        if password != upd_confirm.get() {
            set_message.set(Some("Passwords must match".to_string()));
            return;
        }
        let token = token();
        spawn_local(async move {
            match api::update_user(&token, user_id, username, password).await {
                Ok(()) => {
                    set_message.set(Some("User updated successfully!".to_string()));
                    set_selected.set(None);
                    load_users();
                }
                Err(e) => {
                    expire_if_unauthorized(set_auth_state, &e);
                    set_message.set(Some(e.to_string()));
                }
            }
        });
    };

    let on_delete = move |user_id: i64| {
        let token = token();
        spawn_local(async move {
            match api::delete_user(&token, user_id).await {
                Ok(()) => {
                    set_message.set(Some("User deleted successfully!".to_string()));
                    load_users();
                }
                Err(e) => {
                    expire_if_unauthorized(set_auth_state, &e);
                    set_message.set(Some(e.to_string()));
                }
            }
        });
    };

    let filtered_users = move || {
        let filter = search.get().to_lowercase();
        users
            .get()
            .into_iter()
            .filter(|u| u.username.to_lowercase().contains(&filter))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="admin-users">
            <div class="admin-tabs">
                <button
                    class:active=move || active_tab.get() == UserTab::Add
                    on:click=move |_| set_active_tab.set(UserTab::Add)
                >"Add User"</button>
                <button
                    class:active=move || active_tab.get() == UserTab::Update
                    on:click=move |_| set_active_tab.set(UserTab::Update)
                >"Update User"</button>
                <button
                    class:active=move || active_tab.get() == UserTab::Delete
                    on:click=move |_| set_active_tab.set(UserTab::Delete)
                >"Delete User"</button>
            </div>

            {move || message.get().map(|m| view! { <div class="notification">{m}</div> })}

            <Show when=move || active_tab.get() == UserTab::Add>
                <form class="user-form" on:submit=on_add>
                    <div class="form-group">
                        <label>"Username"</label>
                        <input
                            type="text"
                            prop:value=move || new_username.get()
                            on:input=move |ev| set_new_username.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Password"</label>
                        <input
                            type="password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| set_new_password.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn-submit">"Add User"</button>
                </form>
            </Show>

            <Show when=move || active_tab.get() == UserTab::Update>
                {move || match selected.get() {
                    None => view! {
                        <div class="user-pick">
                            <input
                                type="text"
                                placeholder="Search by username..."
                                prop:value=move || search.get()
                                on:input=move |ev| set_search.set(event_target_value(&ev))
                            />
                            <ul class="users-list">
                                <For
                                    each=filtered_users
                                    key=|u| u.user_id
                                    children=move |u: User| {
                                        let pick = u.clone();
                                        view! {
                                            <li>
                                                <span>{u.username.clone()}</span>
                                                <button on:click=move |_| {
                                                    set_upd_username.set(pick.username.clone());
                                                    set_upd_password.set(String::new());
                                                    set_upd_confirm.set(String::new());
                                                    set_selected.set(Some(pick.clone()));
                                                }>"Edit"</button>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        </div>
                    }.into_any(),
                    Some(_) => view! {
                        <form class="user-form" on:submit=on_update>
                            <div class="form-group">
                                <label>"Username"</label>
                                <input
                                    type="text"
                                    prop:value=move || upd_username.get()
                                    on:input=move |ev| set_upd_username.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label>"New password"</label>
                                <input
                                    type="password"
                                    prop:value=move || upd_password.get()
                                    on:input=move |ev| set_upd_password.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label>"Confirm new password"</label>
                                <input
                                    type="password"
                                    prop:value=move || upd_confirm.get()
                                    on:input=move |ev| set_upd_confirm.set(event_target_value(&ev))
                                />
                            </div>
                            <button type="submit" class="btn-submit">"Update User"</button>
                            <button type="button" on:click=move |_| set_selected.set(None)>"Cancel"</button>
                        </form>
                    }.into_any(),
                }}
            </Show>

            <Show when=move || active_tab.get() == UserTab::Delete>
                <div class="user-pick">
                    <input
                        type="text"
                        placeholder="Search by username..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <ul class="users-list">
                        <For
                            each=filtered_users
                            key=|u| u.user_id
                            children=move |u: User| {
                                let user_id = u.user_id;
                                view! {
                                    <li>
                                        <span>{u.username.clone()}</span>
                                        <button class="btn-delete" on:click=move |_| {
                                            if let Some(id) = user_id {
                                                on_delete(id);
                                            }
                                        }>"Delete"</button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>
            </Show>
        </div>
    }
}
