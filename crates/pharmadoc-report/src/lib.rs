//! Pharmaceutical document rendering.
//!
//! This crate turns a system name and [`SystemCategory`](pharmadoc_model::SystemCategory)
//! into plain-text GxP documents:
//!
//! - **Rendering**: one skeleton per document kind, filled from the template registry
//! - **Catalog**: Validation and QMS document kinds in registration order
//! - **Merge**: every catalog document concatenated under section banners
//! - **Export**: download file naming and writing `.txt` files

mod catalog;
mod error;
mod export;
mod generate;
mod render;

pub use catalog::{MERGED_HEADER_RULE, catalog, find, kinds, render_merged, render_merged_on};
pub use error::ExportError;
pub use export::{
    CONTENT_TYPE, FILE_EXTENSION, MERGED_TITLE, file_name, merged_file_name, sanitize_component,
    write_document,
};
pub use generate::{RenderedDocument, Selection, generate, generate_on};
pub use render::{DOCUMENT_MONTH_FORMAT, EFFECTIVE_DATE_FORMAT, render, render_on};
