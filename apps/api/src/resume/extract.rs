//! Resume text extraction. PDF via `pdf-extract`, UTF-8 plain text as a
//! fallback. DOCX is not supported; callers get a clear validation error
//! instead of silently empty text.

use crate::errors::AppError;

pub fn extract_text(filename: &str, contents: &[u8]) -> Result<String, AppError> {
    let name = filename.to_lowercase();

    let text = if name.ends_with(".pdf") {
        pdf_extract::extract_text_from_mem(contents).map_err(|e| {
            tracing::warn!("PDF extraction failed for {filename}: {e}");
            AppError::Validation(
                "Could not read this PDF. Upload a text-based PDF (not scanned images)."
                    .to_string(),
            )
        })?
    } else if name.ends_with(".docx") || name.ends_with(".doc") {
        return Err(AppError::Validation(
            "DOC/DOCX resumes are not supported. Upload a text-based PDF or TXT file."
                .to_string(),
        ));
    } else {
        String::from_utf8(contents.to_vec()).map_err(|_| {
            AppError::Validation(
                "Could not read text from this file. Upload a text-based PDF or TXT file."
                    .to_string(),
            )
        })?
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::Validation(
            "We couldn't read text from this resume. Please upload a text-based PDF or TXT file."
                .to_string(),
        ));
    }
    Ok(text)
}
