use contracts::domain::film::aggregate::{FilmRecord, TeamMember};
use contracts::shared::collections::group_by;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::domain::film::api;
use crate::system::auth::context::{expire_if_unauthorized, use_auth};
use crate::system::auth::guard::RequireAuth;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Synopsis,
    FilmProduction,
    Institution,
    Screening,
    Gallery,
    AvLink,
    Documents,
}

const TABS: [(Tab, &str); 7] = [
    (Tab::Synopsis, "Synopsis"),
    (Tab::FilmProduction, "Film Production"),
    (Tab::Institution, "Institutional & Financial"),
    (Tab::Screening, "Film Screenings"),
    (Tab::Gallery, "Gallery"),
    (Tab::AvLink, "AV Annotate Link"),
    (Tab::Documents, "Documents"),
];

/// Public record view for one film, behind the login guard.
#[component]
pub fn FilmPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <FilmPageInner />
        </RequireAuth>
    }
}

#[component]
fn FilmPageInner() -> impl IntoView {
    let params = use_params_map();
    let (auth_state, set_auth_state) = use_auth();
    let (record, set_record) = signal(Option::<FilmRecord>::None);
    let (error, set_error) = signal(Option::<String>::None);
    let (active_tab, set_active_tab) = signal(Tab::Synopsis);

    let film_id = move || {
        params
            .get()
            .get("id")
            .and_then(|id| id.parse::<i64>().ok())
    };

    // Fetched fresh on every visit; the client keeps no film cache.
    Effect::new(move |_| {
        let Some(film_id) = film_id() else {
            set_error.set(Some("No movie ID provided".to_string()));
            return;
        };
        let token = auth_state.get().access_token;
        spawn_local(async move {
            match api::fetch_film(film_id, token.as_deref()).await {
                Ok(data) => set_record.set(Some(data)),
                Err(e) => {
                    expire_if_unauthorized(set_auth_state, &e);
                    set_error.set(Some(format!("Movie fetch failed: {}", e)));
                }
            }
        });
    });

    view! {
        <div class="movie-details-page">
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || match record.get() {
                None => view! { <div class="loader">"Loading..."</div> }.into_any(),
                Some(record) => view! {
                    <div>
                        <h1>{record.film.title.clone()}</h1>
                        <p class="film-year">
                            {record.film.release_year.map(|y| y.to_string()).unwrap_or_default()}
                        </p>

                        <div class="tab-bar">
                            {TABS
                                .iter()
                                .map(|(tab, label)| {
                                    let tab = *tab;
                                    view! {
                                        <button
                                            class:active=move || active_tab.get() == tab
                                            on:click=move |_| set_active_tab.set(tab)
                                        >
                                            {*label}
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>

                        {move || render_tab(active_tab.get(), &record)}
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

fn render_tab(tab: Tab, record: &FilmRecord) -> AnyView {
    match tab {
        Tab::Synopsis => view! {
            <div class="tab-content"><p>{record.film.synopsis.clone()}</p></div>
        }
        .into_any(),
        Tab::FilmProduction => production_tab(record),
        Tab::Institution => institution_tab(record),
        Tab::Screening => screenings_tab(record),
        Tab::Gallery => view! {
            <div class="tab-content gallery">
                {record
                    .gallery
                    .iter()
                    .map(|image| view! { <img src=image.url.clone() /> })
                    .collect::<Vec<_>>()}
                {record.gallery.is_empty().then(|| view! { <p>"No gallery images."</p> })}
            </div>
        }
        .into_any(),
        Tab::AvLink => view! {
            <div class="tab-content">
                {if record.film.av_annotate_link.is_empty() {
                    view! { <p>"No AV Annotate link."</p> }.into_any()
                } else {
                    view! {
                        <a href=record.film.av_annotate_link.clone() target="_blank">
                            {record.film.av_annotate_link.clone()}
                        </a>
                    }
                    .into_any()
                }}
            </div>
        }
        .into_any(),
        Tab::Documents => view! {
            <div class="tab-content">
                {record
                    .documents
                    .iter()
                    .map(|doc| {
                        let label = doc.document_type.clone().unwrap_or_default();
                        let url = doc.file_url.clone().unwrap_or_default();
                        view! {
                            <p><a href=url target="_blank">{label}</a></p>
                        }
                    })
                    .collect::<Vec<_>>()}
                {record.documents.is_empty().then(|| view! { <p>"No documents."</p> })}
            </div>
        }
        .into_any(),
    }
}

fn production_tab(record: &FilmRecord) -> AnyView {
    // Group the production team by department; members without one land in
    // the "Other" bucket.
    let team_by_dept = group_by(&record.production_team, |member: &TeamMember| {
        if member.department.is_empty() {
            "Other".to_string()
        } else {
            member.department.clone()
        }
    });

    let team_sections = team_by_dept
        .into_iter()
        .map(|(department, members)| {
            let rows = members
                .into_iter()
                .map(|member| {
                    view! {
                        <dt>{member.role.clone().unwrap_or_else(|| "-".to_string())}</dt>
                        <dd>
                            {member.name.clone()}
                            {member
                                .comment
                                .clone()
                                .map(|comment| view! { <span class="dl-comment">" — " {comment}</span> })}
                        </dd>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <div>
                    <h4>{department}</h4>
                    <dl class="two-col-dl">{rows}</dl>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let author_rows = record
        .authors
        .iter()
        .map(|author| {
            view! {
                <dt>{author.role.clone()}</dt>
                <dd>
                    {author.name.clone()}
                    {author
                        .comment
                        .clone()
                        .map(|comment| view! { <span class="dl-comment">" — " {comment}</span> })}
                </dd>
            }
        })
        .collect::<Vec<_>>();

    let actor_rows = record
        .actors
        .iter()
        .map(|actor| {
            let character = actor
                .character_name
                .clone()
                .filter(|c| !c.is_empty())
                .map(|c| format!(" as {}", c))
                .unwrap_or_default();
            view! { <li>{actor.actor_name.clone()}{character}</li> }
        })
        .collect::<Vec<_>>();

    let details = record.production_details.clone().unwrap_or_default();

    view! {
        <div class="tab-content">
            <h2>"Film Production"</h2>

            <section class="grouped-dl-section">
                <h3>"Authors"</h3>
                {if record.authors.is_empty() {
                    view! { <p>"No author information."</p> }.into_any()
                } else {
                    view! { <dl class="two-col-dl">{author_rows}</dl> }.into_any()
                }}
            </section>

            <section class="grouped-dl-section">
                <h3>"Production Team"</h3>
                {team_sections}
                {record
                    .production_team
                    .is_empty()
                    .then(|| view! { <p>"No production team data."</p> })}
            </section>

            <section class="grouped-dl-section">
                <h3>"Actors"</h3>
                {if record.actors.is_empty() {
                    view! { <p>"No actor information."</p> }.into_any()
                } else {
                    view! { <ul>{actor_rows}</ul> }.into_any()
                }}
            </section>

            <section class="grouped-dl-section">
                <h3>"Production Details"</h3>
                <dl class="two-col-dl">
                    <dt>"Runtime"</dt>
                    <dd>{record.film.runtime.clone()}</dd>
                    <dt>"Timeframe"</dt>
                    <dd>{details.production_timeframe.clone()}</dd>
                    <dt>"Shooting City"</dt>
                    <dd>{details.shooting_city.clone()}</dd>
                    <dt>"Shooting Country"</dt>
                    <dd>{details.shooting_country.clone()}</dd>
                    <dt>"Post Production Studio"</dt>
                    <dd>{details.post_production_studio.clone()}</dd>
                    <dt>"Comments"</dt>
                    <dd>{details.production_comments.clone()}</dd>
                </dl>
            </section>
        </div>
    }
    .into_any()
}

fn institution_tab(record: &FilmRecord) -> AnyView {
    let info = record.institutional_info.clone().unwrap_or_default();
    view! {
        <div class="tab-content">
            <h2>"Institutional & Financial"</h2>
            <dl class="two-col-dl">
                <dt>"Production Company"</dt>
                <dd>{info.production_company.clone().unwrap_or_default()}</dd>
                <dt>"Funding Company"</dt>
                <dd>{info.funding_company.clone().unwrap_or_default()}</dd>
                <dt>"Funding Comment"</dt>
                <dd>{info.funding_comment.clone().unwrap_or_default()}</dd>
                <dt>"Source"</dt>
                <dd>{info.source.clone().unwrap_or_default()}</dd>
                <dt>"City"</dt>
                <dd>{info.institutional_city.clone().unwrap_or_default()}</dd>
                <dt>"Country"</dt>
                <dd>{info.institutional_country.clone().unwrap_or_default()}</dd>
            </dl>
        </div>
    }
    .into_any()
}

fn screenings_tab(record: &FilmRecord) -> AnyView {
    let rows = record
        .screenings
        .iter()
        .map(|s| {
            let date = contracts::shared::date_utils::truncate_to_date(
                s.screening_date.as_deref().unwrap_or(""),
            )
            .to_string();
            view! {
                <li class="screening-entry">
                    <strong>{date}</strong>
                    " — "
                    {s.organizers.clone().unwrap_or_default()}
                    {s.screening_city
                        .clone()
                        .filter(|c| !c.is_empty())
                        .map(|c| format!(" ({})", c))}
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="tab-content">
            <h2>"Film Screenings"</h2>
            {if record.screenings.is_empty() {
                view! { <p>"No screenings recorded."</p> }.into_any()
            } else {
                view! { <ul>{rows}</ul> }.into_any()
            }}
        </div>
    }
    .into_any()
}
