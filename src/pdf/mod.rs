//! PDF text extraction module
//!
//! Wraps the lopdf crate behind an explicit result type: raw PDF bytes in,
//! page-ordered text (or a failure description) out.

mod extractor;

pub use extractor::{extract_text, ExtractError, ExtractedText};
