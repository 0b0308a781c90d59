//! RFC4180-style CSV serialization of flat export records.

use crate::domain::film::export::FlatRecord;

/// Serialize `records` into CSV text.
///
/// When `headers` is omitted the header row is derived from the key set of
/// the first record only; later records may carry columns the header does
/// not reflect. Callers needing a stable schema pass an explicit list.
///
/// Every field is quoted regardless of content, with embedded quotes
/// doubled. A missing key serializes as an empty field. Rows are joined
/// with `\n`, header row first.
pub fn serialize(records: &[FlatRecord], headers: Option<&[String]>) -> String {
    let derived;
    let headers: &[String] = match headers {
        Some(list) => list,
        None => {
            derived = records
                .first()
                .map(|record| record.keys().map(str::to_string).collect::<Vec<_>>())
                .unwrap_or_default();
            &derived
        }
    };

    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(headers.join(","));
    for record in records {
        let row: Vec<String> = headers
            .iter()
            .map(|key| quote(record.get(key).unwrap_or("")))
            .collect();
        rows.push(row.join(","));
    }
    rows.join("\n")
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> FlatRecord {
        let mut r = FlatRecord::new();
        for (k, v) in pairs {
            r.insert(*k, *v);
        }
        r
    }

    #[test]
    fn quotes_every_field_and_doubles_embedded_quotes() {
        let records = vec![record(&[("note", r#"He said "hi", ok"#)])];
        let csv = serialize(&records, None);
        assert_eq!(csv, "note\n\"He said \"\"hi\"\", ok\"");
    }

    #[test]
    fn header_comes_from_first_record_only() {
        let records = vec![
            record(&[("title", "A"), ("year", "1970")]),
            record(&[("title", "B"), ("director", "C")]),
        ];
        let csv = serialize(&records, None);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "title,year");
        assert_eq!(lines[1], "\"A\",\"1970\"");
        // The second record's extra column is silently absent; its missing
        // "year" renders empty.
        assert_eq!(lines[2], "\"B\",\"\"");
    }

    #[test]
    fn explicit_headers_override_derivation() {
        let records = vec![record(&[("title", "A"), ("year", "1970")])];
        let headers = vec!["year".to_string(), "title".to_string(), "genre".to_string()];
        let csv = serialize(&records, Some(&headers));
        assert_eq!(csv, "year,title,genre\n\"1970\",\"A\",\"\"");
    }

    #[test]
    fn empty_input_yields_empty_header_row() {
        assert_eq!(serialize(&[], None), "");
    }

    #[test]
    fn multiline_cell_stays_inside_its_quotes() {
        let records = vec![record(&[("Actors", "Actors:\n- A as X\n- B")])];
        let csv = serialize(&records, None);
        assert_eq!(csv, "Actors\n\"Actors:\n- A as X\n- B\"");
    }
}
