#![forbid(unsafe_code)]
//! enumatic: the core of a template-driven enum code generator.
//!
//! Given a type annotation from the host language's syntax parser, enumatic normalizes it into a
//! canonical model ([`ty::TypeExpr`]) that generation logic can pattern-match over, renders it
//! back to source-equivalent text, and supplies the deterministic string transforms the
//! templating layer calls into. Failures surface as values from one closed diagnostics taxonomy
//! ([`diagnostics::MacroError`]).
//!
//! The macro-expansion driver, the host syntax parser, and the template-rendering engine are
//! external collaborators; this crate is the pure core between them.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`; no
//!   `.unwrap()` or `.expect()`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: If a panic would represent a generator bug (logic error), return
//!   [`diagnostics::MacroError::InternalError`] instead and let the driver report it.

pub mod transforms;

pub use enumatic_core::conventions;
pub use enumatic_core::strings;

pub use enumatic_syntax::ast;
pub use enumatic_syntax::diagnostics;
pub use enumatic_syntax::parser;
pub use enumatic_syntax::ty;

pub use enumatic_syntax::diagnostics::MacroError;
pub use enumatic_syntax::ty::{TupleElement, TypeExpr};
