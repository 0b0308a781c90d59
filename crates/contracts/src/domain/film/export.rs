//! Flattening of enriched film rows into single-level export records.

use crate::domain::film::aggregate::{FullFilmRecord, Screening};
use crate::shared::date_utils::truncate_to_date;

/// One fully flattened row destined for CSV output.
///
/// Keys keep first-insertion order; inserting an existing key overwrites the
/// value in place without moving the column. Later authors sharing a role
/// therefore silently replace earlier ones while the column stays where the
/// first occurrence put it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatRecord {
    entries: Vec<(String, String)>,
}

impl FlatRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derive a column key from a free-text role or department label:
/// lowercase, each whitespace run collapsed to a single underscore,
/// everything else preserved as-is.
///
/// "Image Technicians" -> "image_technicians", "Sound/Image" -> "sound/image"
pub fn column_key(label: &str) -> String {
    let mut key = String::with_capacity(label.len());
    let mut pending_ws = false;
    for ch in label.chars() {
        if ch.is_whitespace() {
            pending_ws = true;
            continue;
        }
        if pending_ws {
            key.push('_');
            pending_ws = false;
        }
        for lc in ch.to_lowercase() {
            key.push(lc);
        }
    }
    if pending_ws {
        key.push('_');
    }
    key
}

/// Render an optional template field the way the legacy export did: an absent
/// value surfaces as the literal `undefined`, an empty string stays empty.
fn js_str(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("undefined")
}

/// JS-truthiness filter: present and non-empty.
fn truthy(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// "<Label>:\n- a\n- b", or "<Label>:\n(none)" for an empty list.
fn block(label: &str, lines: &[String]) -> String {
    if lines.is_empty() {
        format!("{}:\n(none)", label)
    } else {
        format!("{}:\n- {}", label, lines.join("\n- "))
    }
}

fn screening_line(s: &Screening) -> String {
    format!(
        "{} - {} ({})",
        truncate_to_date(js_str(&s.screening_date)),
        js_str(&s.organizers),
        js_str(&s.format)
    )
}

/// Flatten one enriched film row into a [`FlatRecord`].
///
/// Scalar columns come first, then one dynamic column per author role and
/// team department, then the fixed multiline blocks. Authors and team
/// entries with an empty role/department or name are skipped; repeated
/// departments concatenate names with "; " in encounter order.
pub fn flatten_film(film: &FullFilmRecord) -> FlatRecord {
    let mut record = FlatRecord::new();

    record.insert("film_id", film.film_id.to_string());
    record.insert("title", film.title.clone());
    record.insert(
        "release_year",
        film.release_year.map(|y| y.to_string()).unwrap_or_default(),
    );
    record.insert("runtime", film.runtime.clone());
    record.insert("synopsis", film.synopsis.clone());
    record.insert("link", film.link.clone());

    for author in &film.authors {
        if author.role.is_empty() || author.name.is_empty() {
            continue;
        }
        record.insert(column_key(&author.role), author.name.clone());
    }

    for member in &film.team {
        if member.department.is_empty() || member.name.is_empty() {
            continue;
        }
        let key = column_key(&member.department);
        let value = match record.get(&key) {
            Some(existing) => format!("{}; {}", existing, member.name),
            None => member.name.clone(),
        };
        record.insert(key, value);
    }

    let actors: Vec<String> = film
        .actors
        .iter()
        .map(|a| match truthy(&a.character_name) {
            Some(character) => format!("{} as {}", a.actor_name, character),
            None => a.actor_name.clone(),
        })
        .collect();
    record.insert("Actors", block("Actors", &actors));

    let equipment: Vec<String> = film
        .equipment
        .iter()
        .map(|e| match truthy(&e.description) {
            Some(description) => format!("{} ({})", e.equipment_name, description),
            None => e.equipment_name.clone(),
        })
        .collect();
    record.insert("Equipment", block("Equipment", &equipment));

    let documents: Vec<String> = film
        .documents
        .iter()
        .map(|d| format!("{}: {}", js_str(&d.document_type), js_str(&d.file_url)))
        .collect();
    record.insert("Documents", block("Documents", &documents));

    let institutions: Vec<String> = film
        .institutional_info
        .iter()
        .map(|i| {
            format!(
                "{} / {}",
                js_str(&i.production_company),
                js_str(&i.funding_company)
            )
        })
        .collect();
    record.insert("Institutions", block("Institutions", &institutions));

    let screenings: Vec<String> = film.screenings.iter().map(screening_line).collect();
    record.insert("Screenings", block("Screenings", &screenings));

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::film::aggregate::{Actor, Author, TeamMember};

    #[test]
    fn test_column_key() {
        assert_eq!(column_key("Image Technicians"), "image_technicians");
        assert_eq!(column_key("Sound/Image"), "sound/image");
        assert_eq!(column_key("Music & Sound  Designers"), "music_&_sound_designers");
        assert_eq!(column_key("Executive Producer"), "executive_producer");
    }

    #[test]
    fn flat_record_overwrites_in_place() {
        let mut record = FlatRecord::new();
        record.insert("filmmaker", "First");
        record.insert("editor", "Cut");
        record.insert("filmmaker", "Second");
        assert_eq!(record.get("filmmaker"), Some("Second"));
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["filmmaker", "editor"]);
    }

    #[test]
    fn empty_actor_list_renders_none_placeholder() {
        let film = FullFilmRecord::default();
        let record = flatten_film(&film);
        assert_eq!(record.get("Actors"), Some("Actors:\n(none)"));
    }

    #[test]
    fn actor_block_renders_character_only_when_present() {
        let film = FullFilmRecord {
            actors: vec![
                Actor {
                    actor_name: "A".into(),
                    character_name: Some("X".into()),
                    comment: None,
                },
                Actor {
                    actor_name: "B".into(),
                    character_name: None,
                    comment: None,
                },
            ],
            ..Default::default()
        };
        let record = flatten_film(&film);
        assert_eq!(record.get("Actors"), Some("Actors:\n- A as X\n- B"));
    }

    #[test]
    fn missing_screening_format_surfaces_literally() {
        let film = FullFilmRecord {
            screenings: vec![Screening {
                screening_date: Some("2021-05-01T00:00:00Z".into()),
                organizers: Some("Fest".into()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let record = flatten_film(&film);
        assert_eq!(
            record.get("Screenings"),
            Some("Screenings:\n- 2021-05-01 - Fest (undefined)")
        );
    }

    #[test]
    fn repeated_departments_concatenate_while_repeated_roles_overwrite() {
        let film = FullFilmRecord {
            authors: vec![
                Author {
                    role: "Filmmaker".into(),
                    name: "First".into(),
                    comment: None,
                },
                Author {
                    role: "Filmmaker".into(),
                    name: "Second".into(),
                    comment: None,
                },
            ],
            team: vec![
                TeamMember {
                    department: "Image Technicians".into(),
                    name: "A".into(),
                    role: None,
                    comment: None,
                },
                TeamMember {
                    department: "Image Technicians".into(),
                    name: "B".into(),
                    role: None,
                    comment: None,
                },
            ],
            ..Default::default()
        };
        let record = flatten_film(&film);
        assert_eq!(record.get("filmmaker"), Some("Second"));
        assert_eq!(record.get("image_technicians"), Some("A; B"));
    }

    #[test]
    fn entries_with_empty_role_or_name_are_skipped() {
        let film = FullFilmRecord {
            authors: vec![Author {
                role: "".into(),
                name: "Ghost".into(),
                comment: None,
            }],
            team: vec![TeamMember {
                department: "Editing".into(),
                name: "".into(),
                role: None,
                comment: None,
            }],
            ..Default::default()
        };
        let record = flatten_film(&film);
        assert_eq!(record.get(""), None);
        assert_eq!(record.get("editing"), None);
    }

    #[test]
    fn scalar_columns_lead_in_fixed_order() {
        let film = FullFilmRecord {
            film_id: 3,
            title: "Reel".into(),
            release_year: Some(1968),
            ..Default::default()
        };
        let record = flatten_film(&film);
        let keys: Vec<&str> = record.keys().take(6).collect();
        assert_eq!(
            keys,
            vec!["film_id", "title", "release_year", "runtime", "synopsis", "link"]
        );
        assert_eq!(record.get("release_year"), Some("1968"));
    }
}
