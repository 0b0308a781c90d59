//! Flat editable projection of a relational film record.
//!
//! The create/update forms edit a single flat structure; this module builds
//! it from a [`FilmRecord`] (filling documented defaults for every missing
//! sub-record) and serializes it back into the persistence payload. Pending
//! file uploads never appear here: they are staged client-side and the
//! payload is simply this struct's serde serialization.

use serde::{Deserialize, Serialize};

use crate::domain::film::aggregate::FilmRecord;
use crate::shared::collections::find_by_role;
use crate::shared::date_utils::truncate_to_date;

pub const ROLE_SCREENWRITER: &str = "Screenwriter";
pub const ROLE_FILMMAKER: &str = "Filmmaker";
pub const ROLE_EXECUTIVE_PRODUCER: &str = "Executive Producer";

/// The three conventional author roles collapsed to one slot each.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AuthorSlots {
    pub screenwriter: String,
    pub screenwriter_comment: String,
    pub filmmaker: String,
    pub filmmaker_comment: String,
    pub executive_producer: String,
    pub executive_producer_comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductionDetailsForm {
    pub production_timeframe: String,
    pub shooting_city: String,
    pub shooting_country: String,
    pub post_production_studio: String,
    pub production_comments: String,
}

/// Editable production-team row. Kept list-valued so the form can add and
/// remove rows; an empty list is replaced by one blank placeholder row.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TeamMemberForm {
    pub department: String,
    pub name: String,
    pub role: String,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EquipmentForm {
    pub equipment_name: String,
    pub description: String,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DocumentForm {
    pub document_type: String,
    pub file_url: String,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct InstitutionalInfoForm {
    pub production_company: String,
    pub funding_company: String,
    pub funding_comment: String,
    pub source: String,
    pub institutional_city: String,
    pub institutional_country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScreeningForm {
    pub screening_date: String,
    pub screening_city: String,
    pub screening_country: String,
    pub organizers: String,
    pub format: String,
    pub audience: String,
    pub film_rights: String,
    pub comment: String,
    pub source: String,
}

/// One field-level validation failure. Surfaced inline next to the field;
/// submission is blocked while any exist.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilmForm {
    pub title: String,
    pub release_year: Option<i32>,
    pub runtime: String,
    pub synopsis: String,
    pub av_annotate_link: String,
    #[serde(rename = "productionDetails")]
    pub production_details: ProductionDetailsForm,
    pub authors: AuthorSlots,
    #[serde(rename = "productionTeam")]
    pub production_team: Vec<TeamMemberForm>,
    /// Comma-joined actor names. Character and comment data does not survive
    /// the edit path.
    pub actors: String,
    pub equipment: EquipmentForm,
    pub documents: DocumentForm,
    #[serde(rename = "institutionalInfo")]
    pub institutional_info: InstitutionalInfoForm,
    pub screenings: Vec<ScreeningForm>,
}

impl Default for FilmForm {
    /// Initial values for add mode: empty scalars plus one blank placeholder
    /// row for team and screenings so the form always has a row to render.
    fn default() -> Self {
        Self {
            title: String::new(),
            release_year: None,
            runtime: String::new(),
            synopsis: String::new(),
            av_annotate_link: String::new(),
            production_details: ProductionDetailsForm::default(),
            authors: AuthorSlots::default(),
            production_team: vec![TeamMemberForm::default()],
            actors: String::new(),
            equipment: EquipmentForm::default(),
            documents: DocumentForm::default(),
            institutional_info: InstitutionalInfoForm::default(),
            screenings: vec![ScreeningForm::default()],
        }
    }
}

impl FilmForm {
    /// Project a relational record into the flat form shape.
    pub fn from_record(record: &FilmRecord) -> Self {
        let screenwriter = find_by_role(&record.authors, ROLE_SCREENWRITER);
        let filmmaker = find_by_role(&record.authors, ROLE_FILMMAKER);
        let executive_producer = find_by_role(&record.authors, ROLE_EXECUTIVE_PRODUCER);

        let production_team = if record.production_team.is_empty() {
            vec![TeamMemberForm::default()]
        } else {
            record
                .production_team
                .iter()
                .map(|m| TeamMemberForm {
                    department: m.department.clone(),
                    name: m.name.clone(),
                    role: m.role.clone().unwrap_or_default(),
                    comment: m.comment.clone().unwrap_or_default(),
                })
                .collect()
        };

        let screenings = if record.screenings.is_empty() {
            vec![ScreeningForm::default()]
        } else {
            record
                .screenings
                .iter()
                .map(|s| ScreeningForm {
                    screening_date: truncate_to_date(s.screening_date.as_deref().unwrap_or(""))
                        .to_string(),
                    screening_city: s.screening_city.clone().unwrap_or_default(),
                    screening_country: s.screening_country.clone().unwrap_or_default(),
                    organizers: s.organizers.clone().unwrap_or_default(),
                    format: s.format.clone().unwrap_or_default(),
                    audience: s.audience.clone().unwrap_or_default(),
                    film_rights: s.film_rights.clone().unwrap_or_default(),
                    comment: s.comment.clone().unwrap_or_default(),
                    source: s.source.clone().unwrap_or_default(),
                })
                .collect()
        };

        let production_details = record
            .production_details
            .as_ref()
            .map(|d| ProductionDetailsForm {
                production_timeframe: d.production_timeframe.clone(),
                shooting_city: d.shooting_city.clone(),
                shooting_country: d.shooting_country.clone(),
                post_production_studio: d.post_production_studio.clone(),
                production_comments: d.production_comments.clone(),
            })
            .unwrap_or_default();

        let equipment = record
            .equipment
            .first()
            .map(|e| EquipmentForm {
                equipment_name: e.equipment_name.clone(),
                description: e.description.clone().unwrap_or_default(),
                comment: e.comment.clone().unwrap_or_default(),
            })
            .unwrap_or_default();

        let documents = record
            .documents
            .first()
            .map(|d| DocumentForm {
                document_type: d.document_type.clone().unwrap_or_default(),
                file_url: d.file_url.clone().unwrap_or_default(),
                comment: d.comment.clone().unwrap_or_default(),
            })
            .unwrap_or_default();

        let institutional_info = record
            .institutional_info
            .as_ref()
            .map(|i| InstitutionalInfoForm {
                production_company: i.production_company.clone().unwrap_or_default(),
                funding_company: i.funding_company.clone().unwrap_or_default(),
                funding_comment: i.funding_comment.clone().unwrap_or_default(),
                source: i.source.clone().unwrap_or_default(),
                institutional_city: i.institutional_city.clone().unwrap_or_default(),
                institutional_country: i.institutional_country.clone().unwrap_or_default(),
            })
            .unwrap_or_default();

        Self {
            title: record.film.title.clone(),
            release_year: record.film.release_year,
            runtime: record.film.runtime.clone(),
            synopsis: record.film.synopsis.clone(),
            av_annotate_link: record.film.av_annotate_link.clone(),
            production_details,
            authors: AuthorSlots {
                screenwriter: screenwriter.name,
                screenwriter_comment: screenwriter.comment,
                filmmaker: filmmaker.name,
                filmmaker_comment: filmmaker.comment,
                executive_producer: executive_producer.name,
                executive_producer_comment: executive_producer.comment,
            },
            production_team,
            actors: record
                .actors
                .iter()
                .map(|a| a.actor_name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            equipment,
            documents,
            institutional_info,
            screenings,
        }
    }

    /// The JSON body for create/update requests. Pending uploads are staged
    /// outside this struct, so serialization cannot leak them.
    pub fn to_payload(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("FilmForm serializes to JSON")
    }

    /// Declarative required-field validation. Comment and description fields
    /// are always optional; violations block submission and are surfaced per
    /// field rather than raised.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(FieldError {
                field: "title",
                message: "Title is required".to_string(),
            });
        }
        if self.release_year.is_none() {
            errors.push(FieldError {
                field: "release_year",
                message: "Release year must be a number".to_string(),
            });
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::film::aggregate::{
        Actor, Author, Equipment, Film, InstitutionalInfo, Screening, TeamMember,
    };

    fn full_record() -> FilmRecord {
        FilmRecord {
            film: Film {
                film_id: 12,
                title: "Night Shift".into(),
                release_year: Some(1971),
                runtime: "84 min".into(),
                synopsis: "A projectionist's last reel.".into(),
                av_annotate_link: "https://av.example/12".into(),
            },
            authors: vec![
                Author {
                    role: "Screenwriter".into(),
                    name: "P. Lang".into(),
                    comment: Some("draft of 1969".into()),
                },
                Author {
                    role: "Filmmaker".into(),
                    name: "R. Ortiz".into(),
                    comment: None,
                },
                Author {
                    role: "Executive Producer".into(),
                    name: "D. Chen".into(),
                    comment: Some("uncredited".into()),
                },
            ],
            production_team: vec![TeamMember {
                department: "Image Technicians".into(),
                name: "K. Sato".into(),
                role: Some("camera".into()),
                comment: None,
            }],
            actors: vec![
                Actor {
                    actor_name: "A. Moreau".into(),
                    character_name: Some("The Usher".into()),
                    comment: None,
                },
                Actor {
                    actor_name: "B. Holt".into(),
                    character_name: None,
                    comment: Some("archival only".into()),
                },
            ],
            equipment: vec![Equipment {
                equipment_name: "Arriflex 16".into(),
                description: Some("handheld".into()),
                comment: None,
            }],
            institutional_info: Some(InstitutionalInfo {
                production_company: Some("Midnight Films".into()),
                funding_company: Some("Arts Board".into()),
                ..Default::default()
            }),
            screenings: vec![Screening {
                screening_date: Some("2021-05-01T00:00:00Z".into()),
                screening_city: Some("Turin".into()),
                organizers: Some("Fest".into()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn projects_author_roles_into_slots() {
        let form = FilmForm::from_record(&full_record());
        assert_eq!(form.authors.screenwriter, "P. Lang");
        assert_eq!(form.authors.screenwriter_comment, "draft of 1969");
        assert_eq!(form.authors.filmmaker, "R. Ortiz");
        assert_eq!(form.authors.filmmaker_comment, "");
        assert_eq!(form.authors.executive_producer, "D. Chen");
    }

    #[test]
    fn joins_actor_names_and_drops_characters() {
        let form = FilmForm::from_record(&full_record());
        assert_eq!(form.actors, "A. Moreau, B. Holt");
    }

    #[test]
    fn truncates_screening_dates() {
        let form = FilmForm::from_record(&full_record());
        assert_eq!(form.screenings[0].screening_date, "2021-05-01");
        assert_eq!(form.screenings[0].screening_city, "Turin");
        assert_eq!(form.screenings[0].format, "");
    }

    #[test]
    fn empty_record_gets_placeholder_rows_and_blank_scalars() {
        let form = FilmForm::from_record(&FilmRecord::default());
        assert_eq!(form.title, "");
        assert_eq!(form.release_year, None);
        assert_eq!(form.production_team, vec![TeamMemberForm::default()]);
        assert_eq!(form.screenings, vec![ScreeningForm::default()]);
        assert_eq!(form.equipment, EquipmentForm::default());
        assert_eq!(form.documents, DocumentForm::default());
        assert_eq!(form, FilmForm::default());
    }

    #[test]
    fn payload_uses_wire_key_spelling_and_carries_no_file_fields() {
        let payload = FilmForm::from_record(&full_record()).to_payload();
        assert!(payload.get("productionDetails").is_some());
        assert!(payload.get("productionTeam").is_some());
        assert!(payload.get("institutionalInfo").is_some());
        assert!(payload.get("av_annotate_link").is_some());
        assert!(payload.get("posterFile").is_none());
        assert!(payload.get("imageFiles").is_none());
        assert!(payload.get("filmDocument").is_none());
    }

    #[test]
    fn round_trip_preserves_fully_populated_values() {
        let record = full_record();
        let form = FilmForm::from_record(&record);
        let payload = form.to_payload();

        assert_eq!(payload["title"], "Night Shift");
        assert_eq!(payload["release_year"], 1971);
        assert_eq!(payload["runtime"], "84 min");
        assert_eq!(payload["authors"]["filmmaker"], "R. Ortiz");
        assert_eq!(
            payload["productionTeam"][0]["department"],
            "Image Technicians"
        );
        assert_eq!(payload["productionTeam"][0]["role"], "camera");
        assert_eq!(payload["screenings"][0]["organizers"], "Fest");
        assert_eq!(payload["screenings"][0]["screening_date"], "2021-05-01");
    }

    #[test]
    fn validate_flags_missing_required_fields_only() {
        let mut form = FilmForm::default();
        let errors = form.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "release_year"]);

        form.title = "Night Shift".into();
        form.release_year = Some(1971);
        assert!(form.validate().is_ok());
    }
}
