use crate::models::MentorProfile;

/// Only mentors flagged available are candidates for matching
#[inline]
pub fn is_available(mentor: &MentorProfile) -> bool {
    mentor.availability
}

/// Case-insensitive equality of two optional labels
///
/// Absent or empty values never match.
#[inline]
pub fn labels_match(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => {
            a.to_lowercase() == b.to_lowercase()
        }
        _ => false,
    }
}

/// Whether `haystack` contains `needle`, ignoring case
///
/// Absent or empty values never match.
#[inline]
pub fn text_contains(haystack: Option<&str>, needle: Option<&str>) -> bool {
    match (haystack, needle) {
        (Some(h), Some(n)) if !h.is_empty() && !n.is_empty() => {
            h.to_lowercase().contains(&n.to_lowercase())
        }
        _ => false,
    }
}

/// Collect the terms that appear, case-insensitively, inside any of `entries`
///
/// Each term is counted at most once no matter how many entries contain it.
pub fn terms_contained_in<'a>(terms: &'a [String], entries: &[String]) -> Vec<&'a str> {
    let lowered: Vec<String> = entries.iter().map(|e| e.to_lowercase()).collect();

    terms
        .iter()
        .filter(|term| {
            let term = term.to_lowercase();
            lowered.iter().any(|entry| entry.contains(&term))
        })
        .map(String::as_str)
        .collect()
}

/// Exact, case-sensitive overlap between two label lists
pub fn shared_labels<'a>(ours: &'a [String], theirs: &[String]) -> Vec<&'a str> {
    ours.iter()
        .filter(|label| theirs.contains(label))
        .map(String::as_str)
        .collect()
}
