//! GML export.
//!
//! - [`GmlWriter`]: walks a graph and writes the document
//! - [`WriterConfig`]: styling, labels, ids and groups of one writer
//! - [`quote`]: escaping of label text

mod config;
mod escape;
mod writer;

pub use config::{GroupMapping, IdFn, LabelFn, PrintLabels, WriterConfig, DEFAULT_CREATOR};
pub use escape::quote;
pub use writer::GmlWriter;
