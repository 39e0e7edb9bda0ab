//! Extraction Stage — turns an uploaded PDF/DOCX binary into plain text.

pub mod handlers;
pub mod text;

pub use text::{extract, DocumentKind, UploadedDocument, MAX_UPLOAD_BYTES};
