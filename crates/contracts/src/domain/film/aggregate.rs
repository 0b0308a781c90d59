use serde::{Deserialize, Serialize};

// ============================================================================
// Scalar film attributes
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Film {
    #[serde(default)]
    pub film_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub runtime: String,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub av_annotate_link: String,
}

// ============================================================================
// One-to-many sub-entities
// ============================================================================

/// Role values are conventionally "Screenwriter" / "Filmmaker" /
/// "Executive Producer" but the set is open; role is an arbitrary string key.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Author {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TeamMember {
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Actor {
    #[serde(default)]
    pub actor_name: String,
    #[serde(default)]
    pub character_name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Equipment {
    #[serde(default)]
    pub equipment_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Relational document row (type + link). Distinct from [`FilmDocument`],
/// which describes an uploaded binary attachment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DocumentRecord {
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct InstitutionalInfo {
    #[serde(default)]
    pub production_company: Option<String>,
    #[serde(default)]
    pub funding_company: Option<String>,
    #[serde(default)]
    pub funding_comment: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub institutional_city: Option<String>,
    #[serde(default)]
    pub institutional_country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Screening {
    #[serde(default)]
    pub screening_date: Option<String>,
    #[serde(default)]
    pub screening_city: Option<String>,
    #[serde(default)]
    pub screening_country: Option<String>,
    #[serde(default)]
    pub organizers: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub film_rights: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductionDetails {
    #[serde(default)]
    pub production_timeframe: String,
    #[serde(default)]
    pub shooting_city: String,
    #[serde(default)]
    pub shooting_country: String,
    #[serde(default)]
    pub post_production_studio: String,
    #[serde(default)]
    pub production_comments: String,
}

// ============================================================================
// Binary asset descriptors
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GalleryImage {
    #[serde(rename = "imageId", default)]
    pub image_id: i64,
    #[serde(default)]
    pub url: String,
}

/// Uploaded binary attachment as listed by the documents endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FilmDocument {
    #[serde(rename = "documentId", default)]
    pub document_id: i64,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "contentType", default)]
    pub content_type: String,
}

// ============================================================================
// Relational film record (detail endpoint)
// ============================================================================

/// One film plus all of its joined sub-lists, as served by `GET /films/{id}`.
/// Every list defaults to an empty sequence, never null; absent sub-records
/// are a normal state resolved downstream by defaulting.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FilmRecord {
    #[serde(default)]
    pub film: Film,
    #[serde(rename = "productionDetails", default)]
    pub production_details: Option<ProductionDetails>,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(rename = "productionTeam", default)]
    pub production_team: Vec<TeamMember>,
    #[serde(default)]
    pub actors: Vec<Actor>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    #[serde(default)]
    pub documents: Vec<DocumentRecord>,
    #[serde(rename = "institutionalInfo", default)]
    pub institutional_info: Option<InstitutionalInfo>,
    #[serde(default)]
    pub screenings: Vec<Screening>,
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,
}

// ============================================================================
// Enriched export row (full endpoint)
// ============================================================================

/// One row of `GET /films/full`. The shape differs from [`FilmRecord`]:
/// scalars are top-level, the team list is keyed `team`, and institutional
/// info is list-valued.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FullFilmRecord {
    #[serde(default)]
    pub film_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub release_year: Option<i64>,
    #[serde(default)]
    pub runtime: String,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub actors: Vec<Actor>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    #[serde(default)]
    pub documents: Vec<DocumentRecord>,
    #[serde(default)]
    pub institutional_info: Vec<InstitutionalInfo>,
    #[serde(default)]
    pub screenings: Vec<Screening>,
}

// ============================================================================
// List item (browse grid)
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FilmListItem {
    #[serde(default)]
    pub film_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(rename = "posterUrl", default)]
    pub poster_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn film_record_tolerates_missing_sub_records() {
        let record: FilmRecord =
            serde_json::from_str(r#"{"film":{"film_id":7,"title":"Reel"}}"#).unwrap();
        assert_eq!(record.film.film_id, 7);
        assert_eq!(record.film.title, "Reel");
        assert!(record.film.release_year.is_none());
        assert!(record.authors.is_empty());
        assert!(record.production_team.is_empty());
        assert!(record.screenings.is_empty());
        assert!(record.production_details.is_none());
        assert!(record.institutional_info.is_none());
    }

    #[test]
    fn camel_case_wire_keys_round_trip() {
        let record = FilmRecord {
            production_team: vec![TeamMember {
                department: "Sound".into(),
                name: "J. Doe".into(),
                role: None,
                comment: None,
            }],
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("productionTeam").is_some());
        assert!(json.get("institutionalInfo").is_some());
        assert!(json.get("production_team").is_none());
    }

    #[test]
    fn full_record_keeps_optional_screening_fields_distinct_from_empty() {
        let row: FullFilmRecord = serde_json::from_str(
            r#"{"film_id":1,"screenings":[{"screening_date":"2021-05-01T00:00:00Z","organizers":"Fest","comment":""}]}"#,
        )
        .unwrap();
        let s = &row.screenings[0];
        assert_eq!(s.screening_date.as_deref(), Some("2021-05-01T00:00:00Z"));
        assert!(s.format.is_none());
        assert_eq!(s.comment.as_deref(), Some(""));
    }
}
