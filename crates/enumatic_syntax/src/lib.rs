//! Shared type-syntax frontend for the enumatic generator: syntax boundary, normalizer, printers, diagnostics.
//!
//! This crate is dependency-light and intended for reuse across the generator driver, the
//! template-transform surface, and future interactive tooling.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not resolve names, check that types exist,
//!   or perform any type inference. It recognizes the *shape* of a type annotation and normalizes
//!   it into a canonical model that generation logic can pattern-match over.
//! - The host language's syntax parser is an external collaborator. It hands this crate
//!   [`ast::TypeSyntax`] nodes; nothing here depends on a concrete syntax-tree implementation.
//! - Vocabulary identity (well-known generic names, qualifier keywords) comes from
//!   `enumatic_core::conventions`.
//!
//! ## Examples
//! ```rust
//! use enumatic_syntax::ast::TypeSyntax;
//! use enumatic_syntax::parser;
//! use enumatic_syntax::ty::TypeExpr;
//!
//! let node = TypeSyntax::Optional(Box::new(TypeSyntax::named("Bool").unspanned())).unspanned();
//! let ty = parser::parse(&node).unwrap();
//! assert_eq!(ty, TypeExpr::Optional(Box::new(TypeExpr::Identifier("Bool".into()))));
//! assert_eq!(ty.to_string(), "Bool?");
//! ```

pub mod ast;
pub mod diagnostics;
pub mod parser;
pub mod ty;

// Rendering of the normalized model lives in its own module; everything it provides
// surfaces as `Display`/inherent impls on `ty::TypeExpr` and `ty::TupleElement`.
mod printer;
