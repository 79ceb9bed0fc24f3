pub mod render_cv_document;

pub use render_cv_document::{render_cv_document, DocumentSection, RenderedCvDocument};
