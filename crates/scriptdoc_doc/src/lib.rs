//! scriptdoc_doc: The closed set of document nodes consumed by the printer.
//!
//! A document tree describes *what* to render (literals, calls, assignments,
//! function definitions, ...) without deciding *how*. Rendering policy lives
//! in `scriptdoc_printer`.

pub mod builder;
pub mod codec;
pub mod kind;
pub mod node;
pub mod visitor;

// Re-export key types
pub use kind::DocKind;
pub use node::*;
