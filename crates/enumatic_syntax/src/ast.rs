//! Syntax-boundary definitions for type annotations.
//!
//! This module defines the closed set of type-shape nodes the host language's syntax parser
//! hands to the normalizer, plus source spans and the reportable node-kind vocabulary.
//! The normalizer depends only on these nodes, never on the front end's own tree.

use std::fmt;

use enumatic_core::conventions::METATYPE_MEMBER_NAME;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Identifier (interned string index in practice, String for simplicity here)
pub type Ident = String;

/// A type annotation as produced by the host syntax parser.
///
/// This is the input boundary of the normalizer: a closed tagged-variant enumeration covering
/// every type shape the front end can produce, including shapes the normalizer does not
/// recognize (function types, compositions). Those still arrive here so the normalizer can
/// report them with their text and kind instead of silently dropping them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSyntax {
    /// A named type, with any generic arguments: `String`, `Result<T, E>`.
    /// An empty argument list denotes a plain non-generic reference.
    Named(Ident, Vec<Spanned<TypeSyntax>>),
    /// Optional sugar: `T?`
    Optional(Box<Spanned<TypeSyntax>>),
    /// Array sugar: `[T]`
    Array(Box<Spanned<TypeSyntax>>),
    /// Dictionary sugar: `[K: V]`
    Dictionary(Box<Spanned<TypeSyntax>>, Box<Spanned<TypeSyntax>>),
    /// Tuple type: `(a: Int, String)`
    Tuple(Vec<TupleTypeElement>),
    /// Opaque/existential qualified type: `some Hashable`, `any Error`.
    /// The first field is the qualifier keyword token as written.
    SomeOrAny(Ident, Box<Spanned<TypeSyntax>>),
    /// Member type: `Clock.Duration`. The trailing name is always a plain identifier;
    /// deeper qualification (`Foo.Bar.Baz`) arrives pre-nested in the base.
    Member(Box<Spanned<TypeSyntax>>, Ident),
    /// Metatype: `Base.Type`
    Metatype(Box<Spanned<TypeSyntax>>),
    /// Function type: `(Int, String) -> Bool`. Not normalized.
    Function(Vec<Spanned<TypeSyntax>>, Box<Spanned<TypeSyntax>>),
    /// Composition: `Hashable & Sendable`. Not normalized.
    Composition(Vec<Spanned<TypeSyntax>>),
}

/// An element of a tuple type, with its zero, one, or two label tokens as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TupleTypeElement {
    pub first_name: Option<Ident>,
    pub second_name: Option<Ident>,
    pub ty: Spanned<TypeSyntax>,
}

/// The concrete kind of a [`TypeSyntax`] node, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxKind {
    Named,
    Optional,
    Array,
    Dictionary,
    Tuple,
    SomeOrAny,
    Member,
    Metatype,
    Function,
    Composition,
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SyntaxKind::Named => "named type",
            SyntaxKind::Optional => "optional type",
            SyntaxKind::Array => "array type",
            SyntaxKind::Dictionary => "dictionary type",
            SyntaxKind::Tuple => "tuple type",
            SyntaxKind::SomeOrAny => "some-or-any type",
            SyntaxKind::Member => "member type",
            SyntaxKind::Metatype => "metatype",
            SyntaxKind::Function => "function type",
            SyntaxKind::Composition => "composition type",
        };
        write!(f, "{}", name)
    }
}

impl TypeSyntax {
    /// Report this node's concrete kind.
    pub fn kind(&self) -> SyntaxKind {
        match self {
            TypeSyntax::Named(..) => SyntaxKind::Named,
            TypeSyntax::Optional(..) => SyntaxKind::Optional,
            TypeSyntax::Array(..) => SyntaxKind::Array,
            TypeSyntax::Dictionary(..) => SyntaxKind::Dictionary,
            TypeSyntax::Tuple(..) => SyntaxKind::Tuple,
            TypeSyntax::SomeOrAny(..) => SyntaxKind::SomeOrAny,
            TypeSyntax::Member(..) => SyntaxKind::Member,
            TypeSyntax::Metatype(..) => SyntaxKind::Metatype,
            TypeSyntax::Function(..) => SyntaxKind::Function,
            TypeSyntax::Composition(..) => SyntaxKind::Composition,
        }
    }

    /// Build a plain non-generic named type.
    pub fn named(name: impl Into<Ident>) -> TypeSyntax {
        TypeSyntax::Named(name.into(), Vec::new())
    }

    /// Build a generic application of a named type.
    pub fn generic(name: impl Into<Ident>, args: Vec<Spanned<TypeSyntax>>) -> TypeSyntax {
        TypeSyntax::Named(name.into(), args)
    }

    /// Wrap this node with a default (zero) span.
    ///
    /// Front ends that track real source locations should use [`Spanned::new`] instead.
    pub fn unspanned(self) -> Spanned<TypeSyntax> {
        Spanned::new(self, Span::default())
    }
}

impl fmt::Display for TypeSyntax {
    /// Render the node's trimmed source-equivalent text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSyntax::Named(name, args) => {
                write!(f, "{}", name)?;
                if !args.is_empty() {
                    write!(f, "<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", arg.node)?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
            TypeSyntax::Optional(wrapped) => write!(f, "{}?", wrapped.node),
            TypeSyntax::Array(element) => write!(f, "[{}]", element.node),
            TypeSyntax::Dictionary(key, value) => write!(f, "[{}: {}]", key.node, value.node),
            TypeSyntax::Tuple(elements) => {
                write!(f, "(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, ")")
            }
            TypeSyntax::SomeOrAny(specifier, constraint) => {
                write!(f, "{} {}", specifier, constraint.node)
            }
            TypeSyntax::Member(base, name) => write!(f, "{}.{}", base.node, name),
            TypeSyntax::Metatype(base) => write!(f, "{}.{}", base.node, METATYPE_MEMBER_NAME),
            TypeSyntax::Function(params, ret) => {
                write!(f, "(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", param.node)?;
                }
                write!(f, ") -> {}", ret.node)
            }
            TypeSyntax::Composition(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, " & ")?;
                    }
                    write!(f, "{}", member.node)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for TupleTypeElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.first_name, &self.second_name) {
            (Some(first), Some(second)) => write!(f, "{} {}: {}", first, second, self.ty.node),
            (Some(first), None) => write!(f, "{}: {}", first, self.ty.node),
            (None, Some(second)) => write!(f, "{}: {}", second, self.ty.node),
            (None, None) => write!(f, "{}", self.ty.node),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_named_without_arguments() {
        assert_eq!(TypeSyntax::named("String").to_string(), "String");
    }

    #[test]
    fn test_display_generic_application() {
        let node = TypeSyntax::generic(
            "Result",
            vec![
                TypeSyntax::named("Response").unspanned(),
                TypeSyntax::named("Failure").unspanned(),
            ],
        );
        assert_eq!(node.to_string(), "Result<Response, Failure>");
    }

    #[test]
    fn test_display_function_type() {
        let node = TypeSyntax::Function(
            vec![TypeSyntax::named("Int").unspanned()],
            Box::new(TypeSyntax::named("Bool").unspanned()),
        );
        assert_eq!(node.to_string(), "(Int) -> Bool");
        assert_eq!(node.kind(), SyntaxKind::Function);
    }

    #[test]
    fn test_display_labeled_tuple() {
        let node = TypeSyntax::Tuple(vec![
            TupleTypeElement {
                first_name: Some("a".to_string()),
                second_name: None,
                ty: TypeSyntax::named("Int").unspanned(),
            },
            TupleTypeElement {
                first_name: Some("_".to_string()),
                second_name: Some("b".to_string()),
                ty: TypeSyntax::named("String").unspanned(),
            },
            TupleTypeElement {
                first_name: None,
                second_name: None,
                ty: TypeSyntax::named("Double").unspanned(),
            },
        ]);
        assert_eq!(node.to_string(), "(a: Int, _ b: String, Double)");
    }

    #[test]
    fn test_span_merge_covers_both() {
        let merged = Span::new(3, 7).merge(Span::new(5, 12));
        assert_eq!(merged, Span::new(3, 12));
    }
}
