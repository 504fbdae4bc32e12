/// Collapses every run of whitespace (including newlines) into a single space
/// and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
