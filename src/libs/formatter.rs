//! Text normalization helpers shared by validation and account storage.
//!
//! ## Examples
//!
//! ```rust
//! use enrollment::libs::formatter::{full_name, title_case};
//!
//! assert_eq!(title_case("  dela   cruz "), "Dela Cruz");
//! assert_eq!(full_name("juan", Some("santos"), "dela cruz"), "Juan Santos Dela Cruz");
//! ```

/// Capitalizes each whitespace-separated word and joins them with single spaces.
pub fn title_case(value: &str) -> String {
    value.split_whitespace().map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// `first [middle] last`, each part title-cased, empty parts skipped.
pub fn full_name(first_name: &str, middle_name: Option<&str>, last_name: &str) -> String {
    [Some(first_name), middle_name, Some(last_name)]
        .into_iter()
        .flatten()
        .map(title_case)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trims a value and maps an empty result to `None`.
pub fn non_empty(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}
