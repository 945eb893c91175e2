//! Diagnostics and error taxonomy for the enumatic generator.
//!
//! One closed error set with one authoritative message table. Every kind carries a stable
//! machine-readable code and a fixed `error` severity; the external driver attaches source
//! locations and hands the result to its reporting surface. This module performs no IO and
//! never retries.

use miette::Diagnostic;
use thiserror::Error;

use crate::ast::SyntaxKind;

/// An error produced anywhere in the generation pipeline.
///
/// The taxonomy is closed: extending this set is a breaking change for consumers matching
/// on it.
///
/// ## Notes
/// - The normalizer never recovers internally: the first failure aborts the current parse and is
///   returned unchanged to the caller as a value, never thrown across component boundaries.
/// - `InternalError` always indicates a defect in the generator itself, never bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum MacroError {
    /// The macro was attached to a declaration kind it does not support.
    #[error("Only enums are supported.")]
    #[diagnostic(code(enumatic::is_not_enum), severity(Error))]
    IsNotEnum,

    /// The macro invocation carried no arguments at all.
    #[error("The macro declaration needs to have at least 1 string-literal argument.")]
    #[diagnostic(code(enumatic::macro_declaration_has_no_arguments), severity(Error))]
    MacroDeclarationHasNoArguments,

    /// The argument list was present but empty after filtering.
    #[error("At least one template-string argument is required.")]
    #[diagnostic(code(enumatic::expected_at_least_one_argument), severity(Error))]
    ExpectedAtLeastOneArgument,

    /// The argument list had an unexpected shape.
    #[error("The arguments passed to the macro were unacceptable.")]
    #[diagnostic(code(enumatic::unacceptable_arguments), severity(Error))]
    UnacceptableArguments,

    /// An argument was not a plain string literal.
    #[error("All arguments must be non-interpolated string literals.")]
    #[diagnostic(code(enumatic::arguments_must_be_non_interpolated_string_literals), severity(Error))]
    AllArgumentsMustBeNonInterpolatedStringLiterals,

    /// The normalizer met a type-syntax shape it does not recognize.
    #[error("Unsupported parameter type '{type_text}' ({node_kind} syntax)")]
    #[diagnostic(code(enumatic::unknown_parameter_type), severity(Error))]
    UnknownParameterType {
        /// Trimmed source text of the offending node.
        type_text: String,
        /// Concrete kind reported by the node.
        node_kind: SyntaxKind,
    },

    /// An opaque/existential node carried a qualifier keyword other than `some`/`any`.
    /// The grammar guarantees only those two, so this signals an inconsistency between
    /// the normalizer and the syntax front end, not user error.
    #[error("Expected a 'some' or 'any' type specifier, found '{token}'")]
    #[diagnostic(code(enumatic::unknown_some_or_any_specifier), severity(Error))]
    UnknownSomeOrAnySpecifier { token: String },

    /// The rendering collaborator produced source that does not itself parse cleanly.
    #[error("Rendered code contains syntax errors:\n{rendered}")]
    #[diagnostic(code(enumatic::rendered_syntax_contains_errors), severity(Error))]
    RenderedSyntaxContainsErrors { rendered: String },

    /// The driver could not attach a source location to a node it needs to report on.
    #[error("Could not find the source location of node '{syntax}'")]
    #[diagnostic(code(enumatic::could_not_find_location_of_node), severity(Error))]
    CouldNotFindLocationOfNode { syntax: String },

    /// The template engine reported a failure; surfaced unchanged.
    #[error("Template error: {message}")]
    #[diagnostic(code(enumatic::mustache_template_error), severity(Error))]
    MustacheTemplateError { message: String },

    /// A template requested a transform the tool cannot apply to the given value.
    #[error("Invalid transform '{transform}'")]
    #[diagnostic(code(enumatic::invalid_transform), severity(Error))]
    InvalidTransform { transform: String },

    /// An invariant of the generator itself was violated.
    #[error("Internal error: {message}. This is a bug in the generator, please file a report.")]
    #[diagnostic(code(enumatic::internal_error), severity(Error))]
    InternalError { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic as _;

    #[test]
    fn test_messages_are_stable() {
        assert_eq!(MacroError::IsNotEnum.to_string(), "Only enums are supported.");
        assert_eq!(
            MacroError::UnknownSomeOrAnySpecifier {
                token: "borrowing".to_string()
            }
            .to_string(),
            "Expected a 'some' or 'any' type specifier, found 'borrowing'"
        );
    }

    #[test]
    fn test_unknown_parameter_type_embeds_text_and_kind() {
        let err = MacroError::UnknownParameterType {
            type_text: "(Int) -> Bool".to_string(),
            node_kind: SyntaxKind::Function,
        };
        assert_eq!(
            err.to_string(),
            "Unsupported parameter type '(Int) -> Bool' (function type syntax)"
        );
    }

    #[test]
    fn test_codes_are_stable_identifiers() {
        let code = MacroError::IsNotEnum.code().expect("code is set").to_string();
        assert_eq!(code, "enumatic::is_not_enum");
        let code = MacroError::UnknownParameterType {
            type_text: String::new(),
            node_kind: SyntaxKind::Named,
        }
        .code()
        .expect("code is set")
        .to_string();
        assert_eq!(code, "enumatic::unknown_parameter_type");
    }

    #[test]
    fn test_all_kinds_are_errors() {
        let kinds = [
            MacroError::IsNotEnum,
            MacroError::MacroDeclarationHasNoArguments,
            MacroError::ExpectedAtLeastOneArgument,
            MacroError::UnacceptableArguments,
            MacroError::AllArgumentsMustBeNonInterpolatedStringLiterals,
            MacroError::UnknownParameterType {
                type_text: "(Int) -> Bool".to_string(),
                node_kind: SyntaxKind::Function,
            },
            MacroError::UnknownSomeOrAnySpecifier { token: "isolated".to_string() },
            MacroError::RenderedSyntaxContainsErrors { rendered: "enum {".to_string() },
            MacroError::CouldNotFindLocationOfNode { syntax: "MyEnum".to_string() },
            MacroError::MustacheTemplateError { message: "oops".to_string() },
            MacroError::InvalidTransform { transform: "reversed".to_string() },
            MacroError::InternalError { message: "state desync".to_string() },
        ];
        for kind in kinds {
            assert_eq!(kind.severity(), Some(miette::Severity::Error));
        }
    }
}
