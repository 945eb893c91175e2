//! Renderers over the normalized model.
//!
//! Two total functions over [`TypeExpr`]: the developer-facing display form (`Display`) and the
//! round-trippable form ([`TypeExpr::round_trip`]). The two never diverge in shape (same
//! bracket/operator nesting); they differ only in how leaf identifiers are rendered. Neither can
//! fail: every well-formed expression is printable.

use std::fmt;

use enumatic_core::conventions::METATYPE_MEMBER_NAME;

use crate::ty::{TupleElement, TypeExpr};

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Identifier(name) => write!(f, "{}", name),
            TypeExpr::Optional(inner) => write!(f, "{}?", inner),
            TypeExpr::Array(element) => write!(f, "[{}]", element),
            TypeExpr::Dictionary { key, value } => write!(f, "[{}: {}]", key, value),
            TypeExpr::Tuple(elements) => {
                write!(f, "(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, ")")
            }
            TypeExpr::Some(constraint) => write!(f, "some {}", constraint),
            TypeExpr::Any(constraint) => write!(f, "any {}", constraint),
            TypeExpr::Member { base, extension } => write!(f, "{}.{}", base, extension),
            TypeExpr::Metatype { base } => write!(f, "{}.{}", base, METATYPE_MEMBER_NAME),
            TypeExpr::UnknownGeneric { name, arguments } => {
                write!(f, "{}<", name)?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", argument)?;
                }
                write!(f, ">")
            }
        }
    }
}

impl fmt::Display for TupleElement {
    /// Render the structural record (names + nested type), not source-level labels.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TupleElement(first_name: {:?}, second_name: {:?}, type: {})",
            self.first_name, self.second_name, self.ty
        )
    }
}

impl TypeExpr {
    /// Render the round-trippable form.
    ///
    /// Same structural shape as `Display`, but leaf identifiers render through their quoted
    /// (escaped) form so the text can be re-emitted exactly.
    pub fn round_trip(&self) -> String {
        match self {
            TypeExpr::Identifier(name) => format!("{:?}", name),
            TypeExpr::Optional(inner) => format!("{}?", inner.round_trip()),
            TypeExpr::Array(element) => format!("[{}]", element.round_trip()),
            TypeExpr::Dictionary { key, value } => {
                format!("[{}: {}]", key.round_trip(), value.round_trip())
            }
            TypeExpr::Tuple(elements) => {
                let elements: Vec<String> =
                    elements.iter().map(TupleElement::round_trip).collect();
                format!("({})", elements.join(", "))
            }
            TypeExpr::Some(constraint) => format!("some {}", constraint.round_trip()),
            TypeExpr::Any(constraint) => format!("any {}", constraint.round_trip()),
            TypeExpr::Member { base, extension } => {
                format!("{}.{}", base.round_trip(), extension.round_trip())
            }
            TypeExpr::Metatype { base } => {
                format!("{}.{}", base.round_trip(), METATYPE_MEMBER_NAME)
            }
            TypeExpr::UnknownGeneric { name, arguments } => {
                let arguments: Vec<String> =
                    arguments.iter().map(TypeExpr::round_trip).collect();
                format!("{}<{}>", name.round_trip(), arguments.join(", "))
            }
        }
    }
}

impl TupleElement {
    /// Round-trippable form of the structural record.
    pub fn round_trip(&self) -> String {
        format!(
            "TupleElement(first_name: {:?}, second_name: {:?}, type: {})",
            self.first_name,
            self.second_name,
            self.ty.round_trip()
        )
    }
}
