//! Shared generator conventions (well-known identifiers).

/// Generic base name that collapses to the optional variant at arity 1.
pub const OPTIONAL_TYPE_NAME: &str = "Optional";

/// Generic base name that collapses to the array variant at arity 1.
pub const ARRAY_TYPE_NAME: &str = "Array";

/// Generic base name that collapses to the dictionary variant at arity 2.
pub const DICTIONARY_TYPE_NAME: &str = "Dictionary";

/// Member name that denotes a metatype (`Base.Type`).
pub const METATYPE_MEMBER_NAME: &str = "Type";

/// Opaque-result qualifier keyword.
pub const SOME_KEYWORD: &str = "some";

/// Existential qualifier keyword.
pub const ANY_KEYWORD: &str = "any";

/// Template transform: camel-case to snake-case.
pub const SNAKE_CASED_TRANSFORM: &str = "snakeCased";

/// Template transform: wrap a non-empty string in parentheses.
pub const WITH_PARENS_TRANSFORM: &str = "withParens";
