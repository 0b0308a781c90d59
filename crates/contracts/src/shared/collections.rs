//! List helpers shared by the form projection and the record views.

use crate::domain::film::aggregate::Author;

/// Name/comment pair extracted for a single author role slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleEntry {
    pub name: String,
    pub comment: String,
}

/// Locate one author by exact, case-sensitive role match.
///
/// The first match wins when duplicates exist; absence is a normal state for
/// optional roles and yields empty name/comment rather than an error.
pub fn find_by_role(authors: &[Author], role: &str) -> RoleEntry {
    authors
        .iter()
        .find(|a| a.role == role)
        .map(|a| RoleEntry {
            name: a.name.clone(),
            comment: a.comment.clone().unwrap_or_default(),
        })
        .unwrap_or_default()
}

/// Partition `items` into insertion-ordered buckets keyed by `key_fn`.
///
/// Keys appear in first-encounter order and each bucket preserves the
/// relative order of its members. No sorting is performed.
pub fn group_by<'a, T, K, F>(items: &'a [T], key_fn: F) -> Vec<(K, Vec<&'a T>)>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut groups: Vec<(K, Vec<&'a T>)> = Vec::new();
    for item in items {
        let key = key_fn(item);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(item),
            None => groups.push((key, vec![item])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::film::aggregate::TeamMember;

    fn author(role: &str, name: &str, comment: Option<&str>) -> Author {
        Author {
            role: role.into(),
            name: name.into(),
            comment: comment.map(str::to_string),
        }
    }

    #[test]
    fn find_by_role_returns_first_exact_match() {
        let authors = vec![
            author("Filmmaker", "Vera", Some("primary")),
            author("Filmmaker", "Ines", None),
        ];
        let entry = find_by_role(&authors, "Filmmaker");
        assert_eq!(entry.name, "Vera");
        assert_eq!(entry.comment, "primary");
    }

    #[test]
    fn find_by_role_is_case_sensitive_and_defaults_on_absence() {
        let authors = vec![author("Filmmaker", "Vera", None)];
        assert_eq!(find_by_role(&authors, "filmmaker"), RoleEntry::default());
        assert_eq!(find_by_role(&[], "Screenwriter"), RoleEntry::default());
    }

    fn member(department: &str, name: &str) -> TeamMember {
        TeamMember {
            department: department.into(),
            name: name.into(),
            role: None,
            comment: None,
        }
    }

    #[test]
    fn group_by_keeps_first_seen_key_order_and_member_order() {
        let team = vec![
            member("Sound", "A"),
            member("Image", "B"),
            member("Sound", "C"),
            member("Editing", "D"),
        ];
        let groups = group_by(&team, |m| m.department.clone());
        let keys: Vec<&str> = groups.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Sound", "Image", "Editing"]);

        // Flattening in (key, member) order reproduces a stable permutation
        // of the input: each bucket keeps input-relative order.
        let flat: Vec<&str> = groups
            .iter()
            .flat_map(|(_, ms)| ms.iter().map(|m| m.name.as_str()))
            .collect();
        assert_eq!(flat, vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn group_by_empty_input_yields_empty_output() {
        let groups = group_by(&[] as &[TeamMember], |m| m.department.clone());
        assert!(groups.is_empty());
    }
}
