//! Named string transforms for the templating layer.
//!
//! The template engine addresses transforms by name. An unknown name yields [`None`]
//! ("no transform"), not an error, so the engine can fall back to its own default transform
//! chain before rejecting the template.

use enumatic_core::conventions::{SNAKE_CASED_TRANSFORM, WITH_PARENS_TRANSFORM};
use enumatic_core::strings;

/// Apply a named transform to a string value.
///
/// ## Parameters
/// - `value`: the string the template is transforming.
/// - `name`: the transform name as written in the template.
///
/// ## Returns
/// - `Some(String)`: the transformed value, for a known name.
/// - `None`: the name matches no known transform; the caller should fall back.
pub fn apply(value: &str, name: &str) -> Option<String> {
    match name {
        SNAKE_CASED_TRANSFORM => Some(strings::converted_to_snake_case(value, '_')),
        WITH_PARENS_TRANSFORM => Some(strings::with_parens(value)),
        _ => {
            tracing::debug!(%name, "no generator transform matched; falling back to defaults");
            None
        }
    }
}
