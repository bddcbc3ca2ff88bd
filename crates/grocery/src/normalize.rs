/// Normalize an ingredient name for comparison
///
/// Lower-cases, drops everything that is not an ASCII letter, ASCII digit or
/// whitespace, then collapses whitespace runs to a single space. The result is
/// only ever used as a comparison key, never shown to the user.
pub fn normalize(name: &str) -> String {
    let stripped: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
