use std::rc::Rc;

use leptos::prelude::*;
use uuid::Uuid;
use web_sys::HtmlInputElement;

use super::view_model::FilmDetailsViewModel;
use crate::shared::components::ui::{Input, Textarea};

/// Create/update form for one film record. `film_id` of `None` means add
/// mode; otherwise the record is fetched and projected into the form.
#[component]
pub fn FilmDetails(
    film_id: Option<i64>,
    on_saved: Rc<dyn Fn(i64)>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = FilmDetailsViewModel::new(film_id);
    vm.load_if_needed();

    let on_poster_pick = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                vm.stage_poster(file);
            }
        }
        input.set_value("");
    };

    let on_gallery_pick = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(list) = input.files() {
            let files: Vec<web_sys::File> =
                (0..list.length()).filter_map(|i| list.get(i)).collect();
            vm.stage_images(files);
        }
        input.set_value("");
    };

    let on_document_pick = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(list) = input.files() {
            if list.length() > 1 {
                vm.error
                    .set(Some("Only one document can be uploaded.".to_string()));
            } else if let Some(file) = list.get(0) {
                vm.stage_document(file);
            }
        }
        input.set_value("");
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() { "Edit Film" } else { "Add New Film" }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <form class="admin-form" on:submit=|ev| ev.prevent_default()>
                <fieldset>
                    <legend>"Film Information"</legend>
                    <Input
                        label="Title:"
                        id="title"
                        value=Signal::derive(move || vm.form.with(|f| f.title.clone()))
                        on_input=Callback::new(move |v: String| vm.form.update(|f| f.title = v))
                        error=Signal::derive(move || vm.field_error("title"))
                    />
                    <Input
                        label="Release Year:"
                        id="release_year"
                        input_type="number"
                        value=Signal::derive(move || {
                            vm.form.with(|f| f.release_year.map(|y| y.to_string()).unwrap_or_default())
                        })
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.release_year = v.trim().parse().ok())
                        })
                        error=Signal::derive(move || vm.field_error("release_year"))
                    />
                    <Input
                        label="Runtime:"
                        value=Signal::derive(move || vm.form.with(|f| f.runtime.clone()))
                        on_input=Callback::new(move |v: String| vm.form.update(|f| f.runtime = v))
                    />
                    <Textarea
                        label="Synopsis:"
                        value=Signal::derive(move || vm.form.with(|f| f.synopsis.clone()))
                        on_input=Callback::new(move |v: String| vm.form.update(|f| f.synopsis = v))
                    />
                    <Input
                        label="AV Annotate Link:"
                        value=Signal::derive(move || vm.form.with(|f| f.av_annotate_link.clone()))
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.av_annotate_link = v)
                        })
                    />
                </fieldset>

                <fieldset>
                    <legend>"Production Details"</legend>
                    <Input
                        label="Timeframe:"
                        value=Signal::derive(move || {
                            vm.form.with(|f| f.production_details.production_timeframe.clone())
                        })
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.production_details.production_timeframe = v)
                        })
                    />
                    <Input
                        label="City:"
                        value=Signal::derive(move || {
                            vm.form.with(|f| f.production_details.shooting_city.clone())
                        })
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.production_details.shooting_city = v)
                        })
                    />
                    <Input
                        label="Country:"
                        value=Signal::derive(move || {
                            vm.form.with(|f| f.production_details.shooting_country.clone())
                        })
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.production_details.shooting_country = v)
                        })
                    />
                    <Input
                        label="Post Production Studio:"
                        value=Signal::derive(move || {
                            vm.form.with(|f| f.production_details.post_production_studio.clone())
                        })
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.production_details.post_production_studio = v)
                        })
                    />
                    <Textarea
                        label="Comments:"
                        value=Signal::derive(move || {
                            vm.form.with(|f| f.production_details.production_comments.clone())
                        })
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.production_details.production_comments = v)
                        })
                    />
                </fieldset>

                <fieldset>
                    <legend>"Film Authors"</legend>
                    <Input
                        label="Screenwriter:"
                        value=Signal::derive(move || vm.form.with(|f| f.authors.screenwriter.clone()))
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.authors.screenwriter = v)
                        })
                    />
                    <Input
                        label="Screenwriter Comment:"
                        value=Signal::derive(move || {
                            vm.form.with(|f| f.authors.screenwriter_comment.clone())
                        })
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.authors.screenwriter_comment = v)
                        })
                    />
                    <Input
                        label="Filmmaker:"
                        value=Signal::derive(move || vm.form.with(|f| f.authors.filmmaker.clone()))
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.authors.filmmaker = v)
                        })
                    />
                    <Input
                        label="Filmmaker Comment:"
                        value=Signal::derive(move || {
                            vm.form.with(|f| f.authors.filmmaker_comment.clone())
                        })
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.authors.filmmaker_comment = v)
                        })
                    />
                    <Input
                        label="Executive Producer:"
                        value=Signal::derive(move || {
                            vm.form.with(|f| f.authors.executive_producer.clone())
                        })
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.authors.executive_producer = v)
                        })
                    />
                    <Input
                        label="Executive Producer Comment:"
                        value=Signal::derive(move || {
                            vm.form.with(|f| f.authors.executive_producer_comment.clone())
                        })
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.authors.executive_producer_comment = v)
                        })
                    />
                </fieldset>

                <fieldset>
                    <legend>"Production Team"</legend>
                    <For
                        each=move || vm.team_keys.get()
                        key=|key| *key
                        children=move |key: Uuid| {
                            let index = move || {
                                vm.team_keys
                                    .with(|keys| keys.iter().position(|k| *k == key).unwrap_or(0))
                            };
                            view! {
                                <div class="production-team-member">
                                    <Input
                                        label="Department:"
                                        value=Signal::derive(move || {
                                            vm.form.with(|f| {
                                                f.production_team
                                                    .get(index())
                                                    .map(|r| r.department.clone())
                                                    .unwrap_or_default()
                                            })
                                        })
                                        on_input=Callback::new(move |v: String| {
                                            let i = index();
                                            vm.form.update(|f| {
                                                if let Some(row) = f.production_team.get_mut(i) {
                                                    row.department = v;
                                                }
                                            })
                                        })
                                    />
                                    <Input
                                        label="Name:"
                                        value=Signal::derive(move || {
                                            vm.form.with(|f| {
                                                f.production_team
                                                    .get(index())
                                                    .map(|r| r.name.clone())
                                                    .unwrap_or_default()
                                            })
                                        })
                                        on_input=Callback::new(move |v: String| {
                                            let i = index();
                                            vm.form.update(|f| {
                                                if let Some(row) = f.production_team.get_mut(i) {
                                                    row.name = v;
                                                }
                                            })
                                        })
                                    />
                                    <Input
                                        label="Role:"
                                        value=Signal::derive(move || {
                                            vm.form.with(|f| {
                                                f.production_team
                                                    .get(index())
                                                    .map(|r| r.role.clone())
                                                    .unwrap_or_default()
                                            })
                                        })
                                        on_input=Callback::new(move |v: String| {
                                            let i = index();
                                            vm.form.update(|f| {
                                                if let Some(row) = f.production_team.get_mut(i) {
                                                    row.role = v;
                                                }
                                            })
                                        })
                                    />
                                    <Textarea
                                        label="Comment:"
                                        value=Signal::derive(move || {
                                            vm.form.with(|f| {
                                                f.production_team
                                                    .get(index())
                                                    .map(|r| r.comment.clone())
                                                    .unwrap_or_default()
                                            })
                                        })
                                        on_input=Callback::new(move |v: String| {
                                            let i = index();
                                            vm.form.update(|f| {
                                                if let Some(row) = f.production_team.get_mut(i) {
                                                    row.comment = v;
                                                }
                                            })
                                        })
                                    />
                                    <button
                                        type="button"
                                        class="btn-remove"
                                        on:click=move |_| vm.remove_team_row(index())
                                    >"Remove"</button>
                                </div>
                            }
                        }
                    />
                    <button type="button" class="btn-add" on:click=move |_| vm.add_team_row()>
                        "Add Production Team Member"
                    </button>
                </fieldset>

                <fieldset>
                    <legend>"Actors (comma-separated)"</legend>
                    <Input
                        value=Signal::derive(move || vm.form.with(|f| f.actors.clone()))
                        on_input=Callback::new(move |v: String| vm.form.update(|f| f.actors = v))
                    />
                </fieldset>

                <fieldset>
                    <legend>"Film Equipment"</legend>
                    <Input
                        label="Equipment Name:"
                        value=Signal::derive(move || vm.form.with(|f| f.equipment.equipment_name.clone()))
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.equipment.equipment_name = v)
                        })
                    />
                    <Textarea
                        label="Description:"
                        value=Signal::derive(move || vm.form.with(|f| f.equipment.description.clone()))
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.equipment.description = v)
                        })
                    />
                    <Textarea
                        label="Comment:"
                        value=Signal::derive(move || vm.form.with(|f| f.equipment.comment.clone()))
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.equipment.comment = v)
                        })
                    />
                </fieldset>

                <fieldset>
                    <legend>"Film Documents"</legend>
                    <Input
                        label="Document Type:"
                        value=Signal::derive(move || vm.form.with(|f| f.documents.document_type.clone()))
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.documents.document_type = v)
                        })
                    />
                    <Input
                        label="File URL:"
                        value=Signal::derive(move || vm.form.with(|f| f.documents.file_url.clone()))
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.documents.file_url = v)
                        })
                    />
                    <Textarea
                        label="Comment:"
                        value=Signal::derive(move || vm.form.with(|f| f.documents.comment.clone()))
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.documents.comment = v)
                        })
                    />
                </fieldset>

                <fieldset>
                    <legend>"Institutional & Financial Information"</legend>
                    <Input
                        label="Production Company:"
                        value=Signal::derive(move || {
                            vm.form.with(|f| f.institutional_info.production_company.clone())
                        })
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.institutional_info.production_company = v)
                        })
                    />
                    <Input
                        label="Funding Company:"
                        value=Signal::derive(move || {
                            vm.form.with(|f| f.institutional_info.funding_company.clone())
                        })
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.institutional_info.funding_company = v)
                        })
                    />
                    <Textarea
                        label="Funding Comment:"
                        value=Signal::derive(move || {
                            vm.form.with(|f| f.institutional_info.funding_comment.clone())
                        })
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.institutional_info.funding_comment = v)
                        })
                    />
                    <Input
                        label="Source:"
                        value=Signal::derive(move || vm.form.with(|f| f.institutional_info.source.clone()))
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.institutional_info.source = v)
                        })
                    />
                    <Input
                        label="City:"
                        value=Signal::derive(move || {
                            vm.form.with(|f| f.institutional_info.institutional_city.clone())
                        })
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.institutional_info.institutional_city = v)
                        })
                    />
                    <Input
                        label="Country:"
                        value=Signal::derive(move || {
                            vm.form.with(|f| f.institutional_info.institutional_country.clone())
                        })
                        on_input=Callback::new(move |v: String| {
                            vm.form.update(|f| f.institutional_info.institutional_country = v)
                        })
                    />
                </fieldset>

                <fieldset>
                    <legend>"Film Screenings"</legend>
                    <For
                        each=move || vm.screening_keys.get()
                        key=|key| *key
                        children=move |key: Uuid| {
                            let index = move || {
                                vm.screening_keys
                                    .with(|keys| keys.iter().position(|k| *k == key).unwrap_or(0))
                            };
                            view! {
                                <div class="screening-member">
                                    <Input
                                        label="Screening Date:"
                                        input_type="date"
                                        value=Signal::derive(move || {
                                            vm.form.with(|f| {
                                                f.screenings
                                                    .get(index())
                                                    .map(|s| s.screening_date.clone())
                                                    .unwrap_or_default()
                                            })
                                        })
                                        on_input=Callback::new(move |v: String| {
                                            let i = index();
                                            vm.form.update(|f| {
                                                if let Some(row) = f.screenings.get_mut(i) {
                                                    row.screening_date = v;
                                                }
                                            })
                                        })
                                    />
                                    <Input
                                        label="City:"
                                        value=Signal::derive(move || {
                                            vm.form.with(|f| {
                                                f.screenings
                                                    .get(index())
                                                    .map(|s| s.screening_city.clone())
                                                    .unwrap_or_default()
                                            })
                                        })
                                        on_input=Callback::new(move |v: String| {
                                            let i = index();
                                            vm.form.update(|f| {
                                                if let Some(row) = f.screenings.get_mut(i) {
                                                    row.screening_city = v;
                                                }
                                            })
                                        })
                                    />
                                    <Input
                                        label="Country:"
                                        value=Signal::derive(move || {
                                            vm.form.with(|f| {
                                                f.screenings
                                                    .get(index())
                                                    .map(|s| s.screening_country.clone())
                                                    .unwrap_or_default()
                                            })
                                        })
                                        on_input=Callback::new(move |v: String| {
                                            let i = index();
                                            vm.form.update(|f| {
                                                if let Some(row) = f.screenings.get_mut(i) {
                                                    row.screening_country = v;
                                                }
                                            })
                                        })
                                    />
                                    <Input
                                        label="Organizers:"
                                        value=Signal::derive(move || {
                                            vm.form.with(|f| {
                                                f.screenings
                                                    .get(index())
                                                    .map(|s| s.organizers.clone())
                                                    .unwrap_or_default()
                                            })
                                        })
                                        on_input=Callback::new(move |v: String| {
                                            let i = index();
                                            vm.form.update(|f| {
                                                if let Some(row) = f.screenings.get_mut(i) {
                                                    row.organizers = v;
                                                }
                                            })
                                        })
                                    />
                                    <Input
                                        label="Format:"
                                        value=Signal::derive(move || {
                                            vm.form.with(|f| {
                                                f.screenings
                                                    .get(index())
                                                    .map(|s| s.format.clone())
                                                    .unwrap_or_default()
                                            })
                                        })
                                        on_input=Callback::new(move |v: String| {
                                            let i = index();
                                            vm.form.update(|f| {
                                                if let Some(row) = f.screenings.get_mut(i) {
                                                    row.format = v;
                                                }
                                            })
                                        })
                                    />
                                    <Input
                                        label="Audience:"
                                        value=Signal::derive(move || {
                                            vm.form.with(|f| {
                                                f.screenings
                                                    .get(index())
                                                    .map(|s| s.audience.clone())
                                                    .unwrap_or_default()
                                            })
                                        })
                                        on_input=Callback::new(move |v: String| {
                                            let i = index();
                                            vm.form.update(|f| {
                                                if let Some(row) = f.screenings.get_mut(i) {
                                                    row.audience = v;
                                                }
                                            })
                                        })
                                    />
                                    <Input
                                        label="Film Rights:"
                                        value=Signal::derive(move || {
                                            vm.form.with(|f| {
                                                f.screenings
                                                    .get(index())
                                                    .map(|s| s.film_rights.clone())
                                                    .unwrap_or_default()
                                            })
                                        })
                                        on_input=Callback::new(move |v: String| {
                                            let i = index();
                                            vm.form.update(|f| {
                                                if let Some(row) = f.screenings.get_mut(i) {
                                                    row.film_rights = v;
                                                }
                                            })
                                        })
                                    />
                                    <Textarea
                                        label="Comment:"
                                        value=Signal::derive(move || {
                                            vm.form.with(|f| {
                                                f.screenings
                                                    .get(index())
                                                    .map(|s| s.comment.clone())
                                                    .unwrap_or_default()
                                            })
                                        })
                                        on_input=Callback::new(move |v: String| {
                                            let i = index();
                                            vm.form.update(|f| {
                                                if let Some(row) = f.screenings.get_mut(i) {
                                                    row.comment = v;
                                                }
                                            })
                                        })
                                    />
                                    <Input
                                        label="Source:"
                                        value=Signal::derive(move || {
                                            vm.form.with(|f| {
                                                f.screenings
                                                    .get(index())
                                                    .map(|s| s.source.clone())
                                                    .unwrap_or_default()
                                            })
                                        })
                                        on_input=Callback::new(move |v: String| {
                                            let i = index();
                                            vm.form.update(|f| {
                                                if let Some(row) = f.screenings.get_mut(i) {
                                                    row.source = v;
                                                }
                                            })
                                        })
                                    />
                                    <button
                                        type="button"
                                        class="btn-remove"
                                        on:click=move |_| vm.remove_screening_row(index())
                                    >"Remove"</button>
                                </div>
                            }
                        }
                    />
                    <button type="button" class="btn-add" on:click=move |_| vm.add_screening_row()>
                        "Add Screening"
                    </button>
                </fieldset>

                <fieldset>
                    <legend>"Upload Attachments"</legend>
                    <div class="form-group">
                        <label for="posterFile">"Poster image:"</label>
                        <input id="posterFile" type="file" accept="image/*" on:change=on_poster_pick />
                        {move || {
                            vm.uploads
                                .with(|u| u.poster().map(|f| f.name()))
                                .map(|name| view! { <div class="pending-file">{name}</div> })
                        }}
                    </div>
                    <div class="form-group">
                        <label for="imageFiles">"Gallery images:"</label>
                        <input
                            id="imageFiles"
                            type="file"
                            accept="image/*"
                            multiple=true
                            on:change=on_gallery_pick
                        />
                        <ul class="pending-files">
                            {move || {
                                vm.uploads.with(|u| {
                                    u.images()
                                        .iter()
                                        .enumerate()
                                        .map(|(i, f)| {
                                            let name = f.name();
                                            view! {
                                                <li>
                                                    {name}
                                                    <button
                                                        type="button"
                                                        on:click=move |_| vm.uploads.update(|u| u.remove_image(i))
                                                    >"Remove"</button>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                            }}
                        </ul>
                    </div>
                    <div class="form-group">
                        <label for="filmDocument">"Upload PDF or DOC file:"</label>
                        <input
                            id="filmDocument"
                            type="file"
                            accept=".pdf,.doc,.docx"
                            on:change=on_document_pick
                        />
                        {move || {
                            vm.uploads
                                .with(|u| u.document().map(|f| f.name()))
                                .map(|name| view! { <div class="pending-file">{name}</div> })
                        }}
                    </div>
                </fieldset>

                <div class="form-actions">
                    <button
                        type="button"
                        class="btn-submit"
                        disabled=move || vm.is_saving.get()
                        on:click={
                            let on_saved = on_saved.clone();
                            move |_| {
                                vm.save_command(on_saved.clone())();
                            }
                        }
                    >
                        {move || if vm.is_saving.get() { "Submitting..." } else { "Submit" }}
                    </button>
                    <button type="button" class="btn-secondary" on:click=move |_| on_cancel(())>
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
