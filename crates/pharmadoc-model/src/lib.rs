pub mod category;
pub mod document;
pub mod error;
pub mod template;

pub use category::SystemCategory;
pub use document::{DocumentClass, DocumentKind};
pub use error::ModelError;
pub use template::TemplateRecord;
