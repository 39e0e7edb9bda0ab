//! Format-specific text decoders and upload validation.

use std::io::Write;

use bytes::Bytes;
use tempfile::NamedTempFile;

use crate::errors::AppError;

/// Upload size cap, enforced before any decode work is attempted.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Supported upload formats, keyed by declared MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            PDF_MIME => Some(Self::Pdf),
            DOCX_MIME => Some(Self::Docx),
            _ => None,
        }
    }
}

/// A single uploaded file, validated and ready for decode.
/// Transient: nothing about it survives the request.
#[derive(Debug)]
pub struct UploadedDocument {
    pub bytes: Bytes,
    pub kind: DocumentKind,
}

impl UploadedDocument {
    /// Validates the declared MIME type and size. Rejection happens here,
    /// before the decoders ever see the bytes.
    pub fn new(bytes: Bytes, mime: &str) -> Result<Self, AppError> {
        let kind = DocumentKind::from_mime(mime)
            .ok_or_else(|| AppError::UnsupportedFormat(mime.to_string()))?;
        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::Validation(
                "File size must be less than 5 MB.".to_string(),
            ));
        }
        Ok(Self { bytes, kind })
    }
}

/// Extracts plain text from the uploaded document.
///
/// The upload is spooled to a per-request temporary file; `NamedTempFile`
/// unlinks it on drop, so cleanup holds on every exit path. The decoders are
/// synchronous, so the work runs on the blocking thread pool.
pub async fn extract(document: UploadedDocument) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || extract_blocking(&document))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("decode task panicked: {e}")))?
}

fn extract_blocking(document: &UploadedDocument) -> Result<String, AppError> {
    let mut tmp = NamedTempFile::new()
        .map_err(|e| AppError::Extraction(format!("temp file create: {e}")))?;
    tmp.write_all(&document.bytes)
        .map_err(|e| AppError::Extraction(format!("temp file write: {e}")))?;

    match document.kind {
        DocumentKind::Pdf => pdf_extract::extract_text(tmp.path())
            .map_err(|e| AppError::Extraction(format!("PDF decode: {e}"))),
        DocumentKind::Docx => {
            let data = std::fs::read(tmp.path())
                .map_err(|e| AppError::Extraction(format!("temp file read: {e}")))?;
            docx_text(&data)
        }
    }
}

/// Walks the word-processing document tree and collects run text,
/// one line per paragraph, discarding all formatting.
fn docx_text(data: &[u8]) -> Result<String, AppError> {
    let docx =
        docx_rs::read_docx(data).map_err(|e| AppError::Extraction(format!("DOCX decode: {e}")))?;

    let mut text = String::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            for paragraph_child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = paragraph_child {
                    for run_child in run.children {
                        if let docx_rs::RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    Ok(text)
}
