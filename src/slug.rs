//! Company-code derivation from display names.

/// Slugify a display name into a company code: lowercase, alphanumeric runs
/// joined by single hyphens, no leading or trailing hyphen.
/// e.g. "Apple Computer" -> "apple-computer"
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.extend(c.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    out
}
