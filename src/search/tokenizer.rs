/// Trims and lowercases a raw query.
///
/// Returns `None` when the trimmed input has fewer than `min_chars` characters; callers
/// answer such queries with an empty page without touching the catalog. The length is
/// measured before lowercasing, which can expand a character into several.
pub fn normalize_query(raw: &str, min_chars: usize) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < min_chars {
        return None;
    }
    Some(trimmed.to_lowercase())
}

pub fn tokenize_query(normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .filter(|word| !word.is_empty())
        .map(|word| word.to_string())
        .collect()
}
