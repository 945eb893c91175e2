//! Recursive-descent normalizer from [`TypeSyntax`] to [`TypeExpr`].
//!
//! Parsing is total (no partial results), pure, and fail-fast: every compound variant first
//! normalizes its sub-nodes and returns the first failure unchanged. Recursion terminates
//! because each step strictly decreases syntactic depth.

use enumatic_core::conventions::{
    ANY_KEYWORD, ARRAY_TYPE_NAME, DICTIONARY_TYPE_NAME, OPTIONAL_TYPE_NAME, SOME_KEYWORD,
};

use crate::ast::{Spanned, TypeSyntax};
use crate::diagnostics::MacroError;
use crate::ty::{TupleElement, TypeExpr};

/// Normalize a type-syntax node into a [`TypeExpr`].
///
/// This is the main public entrypoint for normalization.
///
/// ## Parameters
/// - `node`: Type annotation handed over by the host syntax parser.
///
/// ## Errors
/// Returns a [`MacroError`] if the node (or any sub-node) has a shape the normalizer does not
/// recognize; the first failure aborts the whole parse.
#[tracing::instrument(skip_all, fields(kind = %node.node.kind()))]
pub fn parse(node: &Spanned<TypeSyntax>) -> Result<TypeExpr, MacroError> {
    parse_node(node)
}

fn parse_node(node: &Spanned<TypeSyntax>) -> Result<TypeExpr, MacroError> {
    match &node.node {
        // An empty generic-argument list denotes a plain non-generic reference.
        TypeSyntax::Named(name, args) if args.is_empty() => {
            Ok(TypeExpr::Identifier(name.clone()))
        }
        // Spelled-out applications of the well-known generics collapse into the same
        // variants as their sugar forms; everything else stays a generic application.
        TypeSyntax::Named(name, args) => match (args.len(), name.as_str()) {
            (1, OPTIONAL_TYPE_NAME) => Ok(TypeExpr::Optional(Box::new(parse_node(&args[0])?))),
            (1, ARRAY_TYPE_NAME) => Ok(TypeExpr::Array(Box::new(parse_node(&args[0])?))),
            (2, DICTIONARY_TYPE_NAME) => {
                let key = parse_node(&args[0])?;
                let value = parse_node(&args[1])?;
                Ok(TypeExpr::Dictionary {
                    key: Box::new(key),
                    value: Box::new(value),
                })
            }
            _ => {
                let arguments = args.iter().map(parse_node).collect::<Result<Vec<_>, _>>()?;
                Ok(TypeExpr::UnknownGeneric {
                    name: Box::new(TypeExpr::Identifier(name.clone())),
                    arguments,
                })
            }
        },
        TypeSyntax::Optional(wrapped) => Ok(TypeExpr::Optional(Box::new(parse_node(wrapped)?))),
        TypeSyntax::Array(element) => Ok(TypeExpr::Array(Box::new(parse_node(element)?))),
        TypeSyntax::Dictionary(key, value) => {
            let key = parse_node(key)?;
            let value = parse_node(value)?;
            Ok(TypeExpr::Dictionary {
                key: Box::new(key),
                value: Box::new(value),
            })
        }
        TypeSyntax::Tuple(elements) => {
            let elements = elements
                .iter()
                .map(|element| {
                    Ok(TupleElement {
                        first_name: element.first_name.clone(),
                        second_name: element.second_name.clone(),
                        ty: parse_node(&element.ty)?,
                    })
                })
                .collect::<Result<Vec<_>, MacroError>>()?;
            Ok(TypeExpr::Tuple(elements))
        }
        TypeSyntax::SomeOrAny(specifier, constraint) => {
            let constraint = parse_node(constraint)?;
            match specifier.as_str() {
                SOME_KEYWORD => Ok(TypeExpr::Some(Box::new(constraint))),
                ANY_KEYWORD => Ok(TypeExpr::Any(Box::new(constraint))),
                _ => Err(MacroError::UnknownSomeOrAnySpecifier {
                    token: specifier.clone(),
                }),
            }
        }
        TypeSyntax::Member(base, name) => {
            let base = parse_node(base)?;
            Ok(TypeExpr::Member {
                base: Box::new(base),
                extension: Box::new(TypeExpr::Identifier(name.clone())),
            })
        }
        TypeSyntax::Metatype(base) => {
            let base = parse_node(base)?;
            Ok(TypeExpr::Metatype { base: Box::new(base) })
        }
        unknown => Err(MacroError::UnknownParameterType {
            type_text: unknown.to_string(),
            node_kind: unknown.kind(),
        }),
    }
}
