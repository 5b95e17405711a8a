//! Parsing helpers for free-text form fields.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use wire::Id;

/// Trimmed value, or `None` when blank.
pub fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Split a comma-separated list, trimming entries and dropping blanks and
/// case-insensitive duplicates (first spelling wins).
pub fn split_comma_list(raw: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        if !out.iter().any(|seen| seen.eq_ignore_ascii_case(entry)) {
            out.push(entry.to_owned());
        }
    }
    out
}

/// Parse comma-separated positive user ids, keeping first-seen order.
///
/// # Errors
///
/// Rejects the whole list when any entry is not a positive integer, or when
/// no ids are given.
pub fn parse_id_list(raw: &str) -> Result<Vec<Id>, String> {
    let mut ids = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        match entry.parse::<Id>() {
            Ok(id) if id > 0 => {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
            _ => return Err(format!("\"{entry}\" is not a valid user id.")),
        }
    }
    if ids.is_empty() {
        return Err("Enter at least one user id.".to_owned());
    }
    Ok(ids)
}

/// Parse an optional non-negative number field.
///
/// # Errors
///
/// Returns `message` when the field is present but not a valid value.
pub fn parse_optional<T: std::str::FromStr>(raw: &str, message: &'static str) -> Result<Option<T>, &'static str> {
    match non_blank(raw) {
        None => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(|_| message),
    }
}

/// Positive integer id from a route segment.
pub fn parse_route_id(raw: Option<&str>) -> Option<Id> {
    raw?.trim().parse::<Id>().ok().filter(|id| *id > 0)
}
