//! scriptdoc_printer: Document tree to text output.
//!
//! [`DocPrinter`] is the dispatcher: it routes every document node to the one
//! rendering operation for its kind and accumulates the result in a
//! [`DocBuffer`]. [`PythonDocPrinter`] is the concrete renderer producing
//! Python-flavoured script text.

pub mod buffer;
pub mod precedence;
pub mod printer;
pub mod python;

pub use buffer::DocBuffer;
pub use printer::DocPrinter;
pub use python::{doc_to_python_script, PrinterOptions, PythonDocPrinter};
