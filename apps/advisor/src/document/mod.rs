//! Document text extraction: PDF bytes in, page-ordered plain text out.
//!
//! Every page contributes its text followed by a newline, including pages with no extractable
//! text, so the line-break count always matches the page count.

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;
use tracing::debug;

const PAGE_SEPARATOR: char = '\n';

#[derive(Debug, Error)]
pub enum DocumentFormatError {
    #[error("Uploaded document is empty")]
    Empty,

    #[error("Not a readable PDF document: {0}")]
    Unreadable(String),

    #[error("PDF backend aborted while reading the document")]
    BackendPanic,
}

/// Extracted resume text. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeText {
    text: String,
    page_count: usize,
}

impl ResumeText {
    /// Joins page texts in order, each followed by a newline.
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        let mut page_count = 0;
        for page in pages {
            text.push_str(page.as_ref());
            text.push(PAGE_SEPARATOR);
            page_count += 1;
        }
        Self { text, page_count }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }
}

/// Extracts the text of every page of a PDF held in memory.
///
/// Fails without returning partial text when the payload is not a well-formed PDF.
pub fn extract_text(bytes: &[u8]) -> Result<ResumeText, DocumentFormatError> {
    if bytes.is_empty() {
        return Err(DocumentFormatError::Empty);
    }

    // pdf-extract panics on some malformed inputs instead of returning an error.
    let pages = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }))
    .map_err(|_| DocumentFormatError::BackendPanic)?
    .map_err(|e| DocumentFormatError::Unreadable(e.to_string()))?;

    let text = ResumeText::from_pages(pages);
    debug!(
        "Extracted {} chars from {} page(s)",
        text.as_str().len(),
        text.page_count()
    );
    Ok(text)
}


#[cfg(test)]
mod tests {
    use super::test_support::pdf_with_pages;
    use super::*;

    #[test]
    fn test_pages_joined_with_trailing_newlines() {
        let text = ResumeText::from_pages(["Jane Doe", "Experience", "Education"]);
        assert_eq!(text.as_str(), "Jane Doe\nExperience\nEducation\n");
        assert_eq!(text.page_count(), 3);
    }

    #[test]
    fn test_empty_pages_keep_their_line_break() {
        let text = ResumeText::from_pages(["Summary", "", "Skills"]);
        assert_eq!(text.as_str(), "Summary\n\nSkills\n");
        assert_eq!(text.page_count(), 3);
    }

    #[test]
    fn test_no_pages_is_empty_text() {
        let text = ResumeText::from_pages(Vec::<String>::new());
        assert_eq!(text.as_str(), "");
        assert_eq!(text.page_count(), 0);
    }

    #[test]
    fn test_empty_payload_rejected() {
        assert!(matches!(extract_text(&[]), Err(DocumentFormatError::Empty)));
    }

    #[test]
    fn test_non_pdf_payload_rejected() {
        let result = extract_text(b"Jane Doe\nSenior Engineer\nPython, SQL");
        assert!(result.is_err());
    }

    #[test]
    fn test_truncated_pdf_rejected() {
        let result = extract_text(b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog");
        assert!(result.is_err());
    }

    #[test]
    fn test_extracts_every_page_in_order() {
        let text = extract_text(&pdf_with_pages(&["Alpha", "", "Gamma"])).unwrap();
        assert_eq!(text.page_count(), 3);

        let body = text.as_str();
        let alpha = body.find("Alpha").unwrap();
        let gamma = body.find("Gamma").unwrap();
        assert!(alpha < gamma);
        assert!(body.ends_with(PAGE_SEPARATOR));

        // First page's break plus the blank page's own break.
        let between = &body[alpha + "Alpha".len()..gamma];
        assert!(between.trim().is_empty());
        assert!(between.matches(PAGE_SEPARATOR).count() >= 2);
    }

    #[test]
    fn test_single_page_document() {
        let text = extract_text(&pdf_with_pages(&["Summary"])).unwrap();
        assert_eq!(text.page_count(), 1);
        assert!(text.as_str().contains("Summary"));
    }
}
