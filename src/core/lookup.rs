use crate::domain::model::{Course, ResolvedPrerequisite};

// Length first, then ASCII case-folded comparison. Mismatched length is an
// immediate non-match.
fn identifiers_match(candidate: &str, query: &str) -> bool {
    if candidate.len() != query.len() {
        return false;
    }
    candidate.eq_ignore_ascii_case(query)
}

/// Linear scan in catalog order; returns the first record whose identifier
/// matches `query` case-insensitively, or `None` on a miss. A miss is a
/// normal negative result, never a placeholder record.
pub fn find_by_identifier<'a>(catalog: &'a [Course], query: &str) -> Option<&'a Course> {
    catalog
        .iter()
        .find(|course| identifiers_match(&course.identifier, query))
}

/// Resolves each prerequisite reference on `course` against the catalog,
/// preserving order. Dangling references come back with `title: None`; they
/// are expected data, not errors.
pub fn resolve_prerequisites(catalog: &[Course], course: &Course) -> Vec<ResolvedPrerequisite> {
    course
        .prerequisites
        .iter()
        .map(|identifier| ResolvedPrerequisite {
            identifier: identifier.clone(),
            title: find_by_identifier(catalog, identifier).map(|found| found.title.clone()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(identifier: &str, title: &str, prerequisites: &[&str]) -> Course {
        Course {
            identifier: identifier.to_string(),
            title: title.to_string(),
            prerequisites: prerequisites.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn sample_catalog() -> Vec<Course> {
        vec![
            course("CS101", "Intro to CS", &[]),
            course("CS201", "Data Structures", &["CS101"]),
            course("CS301", "Algorithms", &["CS201", "MATH250"]),
        ]
    }

    #[test]
    fn test_find_matches_case_insensitively() {
        let catalog = sample_catalog();
        for query in ["CS201", "cs201", "Cs201"] {
            let found = find_by_identifier(&catalog, query).unwrap();
            assert_eq!(found.identifier, "CS201");
        }
    }

    #[test]
    fn test_find_miss_returns_none() {
        let catalog = sample_catalog();
        assert!(find_by_identifier(&catalog, "no-such-id").is_none());
        assert!(find_by_identifier(&catalog, "CS10").is_none());
    }

    #[test]
    fn test_find_returns_first_match_in_catalog_order() {
        let catalog = vec![
            course("CS101", "First", &[]),
            course("cs101", "Shadowed", &[]),
        ];
        let found = find_by_identifier(&catalog, "CS101").unwrap();
        assert_eq!(found.title, "First");
    }

    #[test]
    fn test_resolve_pairs_resolved_and_dangling_references() {
        let catalog = sample_catalog();
        let target = find_by_identifier(&catalog, "CS301").unwrap();

        let resolved = resolve_prerequisites(&catalog, target);
        assert_eq!(
            resolved,
            vec![
                ResolvedPrerequisite {
                    identifier: "CS201".to_string(),
                    title: Some("Data Structures".to_string()),
                },
                ResolvedPrerequisite {
                    identifier: "MATH250".to_string(),
                    title: None,
                },
            ]
        );
    }

    #[test]
    fn test_resolve_with_no_prerequisites_is_empty() {
        let catalog = sample_catalog();
        let target = find_by_identifier(&catalog, "CS101").unwrap();
        assert!(resolve_prerequisites(&catalog, target).is_empty());
    }
}
