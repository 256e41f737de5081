//! Normalisation of portion names for comparison.

/// Normalises a portion name: trims, lower-cases and removes all whitespace.
///
/// `"Lech Lecha"`, `" lech lecha"` and `"LECHLECHA"` all normalise to
/// `"lechlecha"`.
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
