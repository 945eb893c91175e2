//! The normalized type-expression model.
//!
//! [`TypeExpr`] is the canonical representation generation logic pattern-matches over. It is a
//! tree of owned values: constructed once by the normalizer, never mutated, never aliased.

use crate::ast::Ident;

/// A normalized type annotation.
///
/// The well-known generics `Optional`, `Array`, and `Dictionary` collapse into their dedicated
/// variants when (and only when) their argument counts match; every other generic application
/// stays an [`UnknownGeneric`](TypeExpr::UnknownGeneric). Sugar forms (`T?`, `[T]`, `[K: V]`)
/// collapse into the same variants as their spelled-out counterparts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// A simple type identifier with no generic arguments: `String`.
    Identifier(Ident),
    /// An optional type: `Bool?`, `Optional<Bool>`.
    Optional(Box<TypeExpr>),
    /// An array: `[Double]`, `Array<MyType>`.
    Array(Box<TypeExpr>),
    /// A dictionary: `[String: Bool]`, `Dictionary<String, Bool>`.
    Dictionary {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    /// A tuple: `(String)`, `(val1 _: String, _ val2: MyType)`. Order is preserved.
    Tuple(Vec<TupleElement>),
    /// An opaque-result type: `some StringProtocol`.
    Some(Box<TypeExpr>),
    /// An existential type: `any Decodable`.
    Any(Box<TypeExpr>),
    /// A member type: `String.Iterator`, `Foo.Bar.Baz`.
    ///
    /// `extension` is always an [`Identifier`](TypeExpr::Identifier); chains nest
    /// left-associatively, so in `Foo.Bar.Baz` the base is the member type `Foo.Bar`.
    Member {
        base: Box<TypeExpr>,
        extension: Box<TypeExpr>,
    },
    /// A metatype: `String.Type`, `(some Decodable).Type`.
    Metatype { base: Box<TypeExpr> },
    /// A generic application other than the well-known three:
    /// `Collection<String>`, `Result<Response, any Error>`.
    UnknownGeneric {
        name: Box<TypeExpr>,
        arguments: Vec<TypeExpr>,
    },
}

/// An element of a tuple, with its zero, one, or two label tokens copied verbatim
/// from the syntax node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TupleElement {
    pub first_name: Option<Ident>,
    pub second_name: Option<Ident>,
    pub ty: TypeExpr,
}

impl TypeExpr {
    /// Build an identifier expression.
    pub fn identifier(name: impl Into<Ident>) -> TypeExpr {
        TypeExpr::Identifier(name.into())
    }
}
