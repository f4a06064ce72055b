/// Returns true for `None`, the empty string and whitespace-only strings
pub fn is_blank(text: Option<&str>) -> bool {
    match text {
        None => true,
        Some(text) => text.chars().all(char::is_whitespace),
    }
}

pub fn is_not_blank(text: Option<&str>) -> bool {
    !is_blank(text)
}

/// Returns true for `None` and the empty string only.
/// Unlike [is_blank], whitespace counts as content.
pub fn is_empty(text: Option<&str>) -> bool {
    text.map_or(true, str::is_empty)
}

pub fn is_not_empty(text: Option<&str>) -> bool {
    !is_empty(text)
}
