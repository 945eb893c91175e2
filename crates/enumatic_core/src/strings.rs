//! Define shared identifier-casing semantics (policy + pure helpers).
//!
//! This module holds **pure/deterministic** string helpers used by the template-transform surface
//! and by generated-name decisions, so both sides agree on the exact same word-splitting policy.
//!
//! ## Notes
//! - **Scanning model**: Unicode scalar iteration (Rust `char`), not bytes or grapheme clusters.
//! - **Word splitting**: a separator is inserted before an uppercase letter that starts a new
//!   word; a run of capitals (an acronym) stays joined until its lowercase tail forces a split.
//! - **Authoritative behavior**: the literal examples on [`converted_to_snake_case`] are the
//!   policy of record; untested input classes follow the algorithm, nothing more.

/// Convert the camel-case-based words of an identifier to a separator-joined lowercase form.
///
/// ## Parameters
/// - `input`: identifier to convert.
/// - `separator`: character placed between words (`'_'` for snake case).
///
/// ## Returns
/// - `String`: the converted identifier; empty input yields an empty string.
///
/// ## Examples
/// ```rust
/// use enumatic_core::strings::converted_to_snake_case;
///
/// assert_eq!(converted_to_snake_case("myProperty", '_'), "my_property");
/// assert_eq!(converted_to_snake_case("myURLProperty", '_'), "my_url_property");
/// assert_eq!(converted_to_snake_case("myURLProperty", '-'), "my-url-property");
/// ```
pub fn converted_to_snake_case(input: &str, separator: char) -> String {
    if input.is_empty() {
        return String::new();
    }
    let chars: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len() + 4);
    // Whether we should insert a separator when we see an uppercase character.
    let mut separate_on_uppercase = true;
    for (i, &character) in chars.iter().enumerate() {
        if character.is_uppercase() {
            if separate_on_uppercase && !result.is_empty() {
                result.push(separator);
            }
            // If the next character is uppercase and the next-next character is lowercase,
            // like "L" in "URLSession", we should separate words.
            separate_on_uppercase = match (chars.get(i + 1), chars.get(i + 2)) {
                (Some(next), Some(next_next)) => next.is_uppercase() && next_next.is_lowercase(),
                _ => false,
            };
        } else {
            // If the character is `separator`, we do not want to insert another separator
            // when we see the next uppercase character.
            separate_on_uppercase = character != separator;
        }
        result.extend(character.to_lowercase());
    }
    result
}

/// Wrap a non-empty string in parentheses; pass an empty string through unchanged.
///
/// ## Parameters
/// - `input`: string to wrap.
///
/// ## Returns
/// - `String`: `"(input)"`, or `""` when `input` is empty.
pub fn with_parens(input: &str) -> String {
    if input.is_empty() {
        String::new()
    } else {
        format!("({input})")
    }
}
