//! CLI library components for the document generator.

pub mod listing;
pub mod logging;
pub mod request;
