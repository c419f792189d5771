//! Canonical icon name set: prefix stripped, sorted.

/// Strip `prefix` from names that start with it, then sort by codepoint.
///
/// Duplicates survive; a glyph declared twice in the stylesheet appears
/// twice here.
pub fn canonical_names(class_names: &[String], prefix: Option<&str>) -> Vec<String> {
    let prefix = prefix.filter(|p| !p.is_empty());
    let mut names: Vec<String> = class_names
        .iter()
        .map(|name| match prefix.and_then(|p| name.strip_prefix(p)) {
            Some(stripped) => stripped.to_string(),
            None => name.clone(),
        })
        .collect();
    names.sort();
    names
}
