//! Slug keys clients use to pick icons and themes per category.

/// Picks the text a listing's key is derived from: the sub-category when it
/// is present and non-empty, otherwise the category.
pub fn category_key_source<'a>(category: &'a str, sub_category: Option<&'a str>) -> &'a str {
    match sub_category {
        Some(sub_category) if !sub_category.is_empty() => sub_category,
        _ => category,
    }
}

/// Collapses the Arabic letter variants clients treat as equivalent.
///
/// Hamza-carrying alefs become a bare alef and teh marbuta becomes heh. No
/// other letters are touched.
fn fold_arabic_variant(c: char) -> char {
    match c {
        '\u{0623}' | '\u{0625}' => '\u{0627}',
        '\u{0629}' => '\u{0647}',
        other => other,
    }
}

/// Derives the category key: lowercase, Arabic variant folding, then every
/// character outside `[a-z0-9]` replaced with `_`.
///
/// Missing or empty input yields an empty key.
pub fn derive_category_key(input: Option<&str>) -> String {
    let Some(input) = input.filter(|value| !value.is_empty()) else {
        return String::new();
    };

    input
        .to_lowercase()
        .chars()
        .map(fold_arabic_variant)
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}
