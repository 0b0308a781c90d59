//! Attachment manager for an existing film: poster, gallery, documents.
//!
//! Each upload is one multipart POST; gallery uploads go out one at a time
//! and a failure leaves earlier uploads committed.

use contracts::domain::film::aggregate::{FilmDocument, GalleryImage};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

use crate::domain::film::api;
use crate::system::auth::context::{expire_if_unauthorized, use_auth};

fn picked_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    let input = event_target::<HtmlInputElement>(ev);
    let file = input.files().and_then(|files| files.get(0));
    input.set_value("");
    file
}

#[component]
pub fn Attachments(film_id: i64, on_back: Callback<()>) -> impl IntoView {
    view! {
        <div class="attachments-container">
            <h3 class="attachments-title">"Manage Attachments"</h3>
            <button class="btn-back" on:click=move |_| on_back.run(())>
                "← Back to Details"
            </button>
            <section class="attachment-section">
                <PosterSection film_id=film_id />
            </section>
            <section class="attachment-section">
                <GallerySection film_id=film_id />
            </section>
            <section class="attachment-section">
                <DocumentsSection film_id=film_id />
            </section>
        </div>
    }
}

#[component]
fn PosterSection(film_id: i64) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let (poster_url, set_poster_url) = signal(Option::<String>::None);
    let (staged, set_staged) = signal_local(Option::<web_sys::File>::None);
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    spawn_local(async move {
        // An absent poster is normal; other failures just leave the slot empty.
        if let Ok(url) = api::fetch_poster(film_id).await {
            set_poster_url.set(url);
        }
    });

    let upload = move |_| {
        let Some(file) = staged.get_untracked() else {
            return;
        };
        let Some(token) = auth_state.get_untracked().access_token else {
            return;
        };
        set_busy.set(true);
        spawn_local(async move {
            match api::upload_poster(film_id, &file, &token).await {
                Ok(url) => {
                    set_poster_url.set(Some(url));
                    set_staged.set(None);
                }
                Err(e) => {
                    expire_if_unauthorized(set_auth_state, &e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_busy.set(false);
        });
    };

    let remove = move |_| {
        let Some(token) = auth_state.get_untracked().access_token else {
            return;
        };
        set_busy.set(true);
        spawn_local(async move {
            match api::delete_poster(film_id, &token).await {
                Ok(()) => set_poster_url.set(None),
                Err(e) => {
                    expire_if_unauthorized(set_auth_state, &e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="poster-form">
            <h3>"Poster"</h3>
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || match poster_url.get() {
                Some(url) => view! {
                    <div>
                        <img src=url alt="Poster" />
                        <button disabled=move || busy.get() on:click=remove>"Remove"</button>
                    </div>
                }.into_any(),
                None => view! {
                    <div>
                        <input
                            type="file"
                            accept="image/*"
                            on:change=move |ev| set_staged.set(picked_file(&ev))
                        />
                        <button
                            disabled=move || busy.get() || staged.with(|f| f.is_none())
                            on:click=upload
                        >
                            {move || if busy.get() { "Uploading…" } else { "Upload" }}
                        </button>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn GallerySection(film_id: i64) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let (images, set_images) = signal(Vec::<GalleryImage>::new());
    let (staged, set_staged) = signal_local(Option::<web_sys::File>::None);
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    spawn_local(async move {
        if let Ok(list) = api::fetch_gallery(film_id).await {
            set_images.set(list);
        }
    });

    let upload = move |_| {
        let Some(file) = staged.get_untracked() else {
            return;
        };
        let Some(token) = auth_state.get_untracked().access_token else {
            return;
        };
        set_busy.set(true);
        spawn_local(async move {
            match api::upload_gallery_image(film_id, &file, &token).await {
                Ok(image) => {
                    set_images.update(|list| list.push(image));
                    set_staged.set(None);
                }
                Err(e) => {
                    expire_if_unauthorized(set_auth_state, &e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_busy.set(false);
        });
    };

    let remove = move |image_id: i64| {
        let Some(token) = auth_state.get_untracked().access_token else {
            return;
        };
        set_busy.set(true);
        spawn_local(async move {
            match api::delete_gallery_image(film_id, image_id, &token).await {
                Ok(()) => set_images.update(|list| list.retain(|img| img.image_id != image_id)),
                Err(e) => {
                    expire_if_unauthorized(set_auth_state, &e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="gallery-form">
            <h3>"Gallery"</h3>
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            <div class="thumbs">
                <For
                    each=move || images.get()
                    key=|image| image.image_id
                    children=move |image: GalleryImage| {
                        let image_id = image.image_id;
                        view! {
                            <div>
                                <img src=image.url.clone() alt="" />
                                <button disabled=move || busy.get() on:click=move |_| remove(image_id)>
                                    "Remove"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
            <input
                type="file"
                accept="image/*"
                on:change=move |ev| set_staged.set(picked_file(&ev))
            />
            <button
                disabled=move || busy.get() || staged.with(|f| f.is_none())
                on:click=upload
            >
                {move || if busy.get() { "Uploading…" } else { "Upload new" }}
            </button>
        </div>
    }
}

#[component]
fn DocumentsSection(film_id: i64) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let (documents, set_documents) = signal(Vec::<FilmDocument>::new());
    let (staged, set_staged) = signal_local(Option::<web_sys::File>::None);
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let load = move || {
        let Some(token) = auth_state.get_untracked().access_token else {
            return;
        };
        spawn_local(async move {
            if let Ok(list) = api::fetch_documents(film_id, &token).await {
                set_documents.set(list);
            }
        });
    };
    load();

    let upload = move |_| {
        let Some(file) = staged.get_untracked() else {
            return;
        };
        let Some(token) = auth_state.get_untracked().access_token else {
            return;
        };
        set_busy.set(true);
        spawn_local(async move {
            match api::upload_document(film_id, &file, &token).await {
                Ok(doc) => {
                    set_documents.update(|list| list.push(doc));
                    set_staged.set(None);
                }
                Err(e) => {
                    expire_if_unauthorized(set_auth_state, &e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_busy.set(false);
        });
    };

    let remove = move |document_id: i64| {
        let Some(token) = auth_state.get_untracked().access_token else {
            return;
        };
        set_busy.set(true);
        spawn_local(async move {
            match api::delete_document(film_id, document_id, &token).await {
                Ok(()) => {
                    set_documents.update(|list| list.retain(|d| d.document_id != document_id))
                }
                Err(e) => {
                    expire_if_unauthorized(set_auth_state, &e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="documents-form">
            <h3>"Documents"</h3>
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            <ul class="doc-list">
                <For
                    each=move || documents.get()
                    key=|doc| doc.document_id
                    children=move |doc: FilmDocument| {
                        let document_id = doc.document_id;
                        view! {
                            <li class="doc-item">
                                <a href=doc.url.clone() target="_blank">{doc.filename.clone()}</a>
                                <button disabled=move || busy.get() on:click=move |_| remove(document_id)>
                                    "Remove"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
            <div class="doc-upload">
                <input
                    type="file"
                    accept=".pdf,.doc,.docx"
                    on:change=move |ev| set_staged.set(picked_file(&ev))
                />
                <button
                    disabled=move || busy.get() || staged.with(|f| f.is_none())
                    on:click=upload
                >
                    {move || if busy.get() { "Uploading…" } else { "Upload New Document" }}
                </button>
            </div>
        </div>
    }
}
