use std::rc::Rc;

use contracts::domain::film::form::{FieldError, FilmForm, ScreeningForm, TeamMemberForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use super::model::PendingUploads;
use crate::domain::film::api;
use crate::shared::api_utils::ApiError;
use crate::system::auth::context::{expire_if_unauthorized, use_auth, AuthState};

/// ViewModel for the film create/update form.
///
/// `film_id` is `None` in add mode. Row keys run parallel to the form's
/// team and screening lists so the view can key row rendering stably while
/// rows are added and removed.
#[derive(Clone, Copy)]
pub struct FilmDetailsViewModel {
    auth_state: ReadSignal<AuthState>,
    set_auth_state: WriteSignal<AuthState>,
    pub film_id: RwSignal<Option<i64>>,
    pub form: RwSignal<FilmForm>,
    pub team_keys: RwSignal<Vec<Uuid>>,
    pub screening_keys: RwSignal<Vec<Uuid>>,
    pub uploads: RwSignal<PendingUploads, LocalStorage>,
    pub field_errors: RwSignal<Vec<FieldError>>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
}

impl FilmDetailsViewModel {
    pub fn new(film_id: Option<i64>) -> Self {
        let (auth_state, set_auth_state) = use_auth();
        let form = FilmForm::default();
        let team_keys = keys_for(form.production_team.len());
        let screening_keys = keys_for(form.screenings.len());
        Self {
            auth_state,
            set_auth_state,
            film_id: RwSignal::new(film_id),
            form: RwSignal::new(form),
            team_keys: RwSignal::new(team_keys),
            screening_keys: RwSignal::new(screening_keys),
            uploads: RwSignal::new_local(PendingUploads::new()),
            field_errors: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.film_id.get().is_some()
    }

    /// Inline message for one field, if validation flagged it.
    pub fn field_error(&self, field: &'static str) -> Option<String> {
        self.field_errors
            .get()
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.clone())
    }

    /// Fetch the relational record and project it into the form.
    /// A record is fetched fresh for every edit session; nothing is cached.
    pub fn load_if_needed(&self) {
        let Some(film_id) = self.film_id.get_untracked() else {
            return;
        };
        let this = self.clone();
        let token = self.auth_state.get_untracked().access_token;
        spawn_local(async move {
            match api::fetch_film(film_id, token.as_deref()).await {
                Ok(record) => {
                    let form = FilmForm::from_record(&record);
                    this.team_keys.set(keys_for(form.production_team.len()));
                    this.screening_keys.set(keys_for(form.screenings.len()));
                    this.form.set(form);
                }
                Err(e) => {
                    expire_if_unauthorized(this.set_auth_state, &e);
                    this.error.set(Some(format!("Error loading film data: {}", e)));
                }
            }
        });
    }

    pub fn add_team_row(&self) {
        self.form
            .update(|f| f.production_team.push(TeamMemberForm::default()));
        self.team_keys.update(|keys| keys.push(Uuid::new_v4()));
    }

    pub fn remove_team_row(&self, index: usize) {
        self.form.update(|f| {
            if index < f.production_team.len() {
                f.production_team.remove(index);
            }
        });
        self.team_keys.update(|keys| {
            if index < keys.len() {
                keys.remove(index);
            }
        });
    }

    pub fn add_screening_row(&self) {
        self.form
            .update(|f| f.screenings.push(ScreeningForm::default()));
        self.screening_keys.update(|keys| keys.push(Uuid::new_v4()));
    }

    pub fn remove_screening_row(&self, index: usize) {
        self.form.update(|f| {
            if index < f.screenings.len() {
                f.screenings.remove(index);
            }
        });
        self.screening_keys.update(|keys| {
            if index < keys.len() {
                keys.remove(index);
            }
        });
    }

    pub fn stage_poster(&self, file: web_sys::File) {
        self.uploads.update(|u| u.set_poster(file));
    }

    pub fn stage_document(&self, file: web_sys::File) {
        self.uploads.update(|u| u.set_document(file));
    }

    pub fn stage_images(&self, files: Vec<web_sys::File>) {
        let mut rejected = None;
        self.uploads.update(|u| {
            if let Err(e) = u.stage_images(files) {
                rejected = Some(e);
            }
        });
        if let Some(message) = rejected {
            self.error.set(Some(message));
        }
    }

    /// Validate, persist the payload, then push staged assets one at a time
    /// in array order. Uploads for a new film wait for the created id. A
    /// failed upload aborts the sequence but leaves earlier uploads
    /// committed; retrying is additive.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(i64)>) -> impl Fn() + '_ {
        move || {
            let this = self.clone();
            let form = this.form.get_untracked();
            match form.validate() {
                Ok(()) => this.field_errors.set(Vec::new()),
                Err(errors) => {
                    this.field_errors.set(errors);
                    return;
                }
            }
            let Some(token) = this.auth_state.get_untracked().access_token else {
                this.error.set(Some("You must be logged in.".to_string()));
                return;
            };
            let on_saved_cb = on_saved.clone();
            this.is_saving.set(true);
            spawn_local(async move {
                let result = persist(&this, form, token).await;
                this.is_saving.set(false);
                match result {
                    Ok(film_id) => {
                        this.uploads.update(|u| u.clear());
                        on_saved_cb(film_id);
                    }
                    Err(e) => {
                        expire_if_unauthorized(this.set_auth_state, &e);
                        this.error.set(Some(e.to_string()));
                    }
                }
            });
        }
    }
}

async fn persist(
    vm: &FilmDetailsViewModel,
    form: FilmForm,
    token: String,
) -> Result<i64, ApiError> {
    let payload = form.to_payload();
    let film_id = match vm.film_id.get_untracked() {
        Some(id) => {
            api::update_film(id, &payload, &token).await?;
            id
        }
        None => api::create_film(&payload, &token).await?,
    };

    let uploads = vm.uploads.get_untracked();
    if let Some(document) = uploads.document() {
        api::upload_document(film_id, document, &token).await?;
    }
    if let Some(poster) = uploads.poster() {
        api::upload_poster(film_id, poster, &token).await?;
    }
    for image in uploads.images() {
        api::upload_gallery_image(film_id, image, &token).await?;
    }
    Ok(film_id)
}

fn keys_for(len: usize) -> Vec<Uuid> {
    (0..len).map(|_| Uuid::new_v4()).collect()
}
