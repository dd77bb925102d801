//! Page-wise PDF text extraction using lopdf

use lopdf::Document;
use thiserror::Error;

/// Extraction errors
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("empty upload: no PDF bytes received")]
    EmptyUpload,

    #[error("failed to load PDF: {0}")]
    Load(#[from] lopdf::Error),

    #[error("failed to extract text from page {page}: {source}")]
    Page { page: u32, source: lopdf::Error },
}

/// The outcome of a successful extraction
#[derive(Debug)]
pub struct ExtractedText {
    /// Concatenation of every page's text, in page order. No separators are
    /// inserted beyond what lopdf itself emits.
    pub text: String,
    pub page_count: usize,
}

/// Extract the text of every page of a PDF held in memory.
///
/// Pages are visited in ascending page-number order. A failure on any page
/// aborts the whole accumulation; text already extracted from earlier pages
/// is discarded.
pub fn extract_text(bytes: &[u8]) -> Result<ExtractedText, ExtractError> {
    if bytes.is_empty() {
        return Err(ExtractError::EmptyUpload);
    }

    let doc = Document::load_mem(bytes)?;
    let pages = doc.get_pages();
    let page_count = pages.len();

    let mut text = String::new();
    // get_pages returns a BTreeMap, so iteration is already in page order
    for &number in pages.keys() {
        let page_text = doc
            .extract_text(&[number])
            .map_err(|source| ExtractError::Page {
                page: number,
                source,
            })?;
        text.push_str(&page_text);
    }

    Ok(ExtractedText { text, page_count })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    use super::*;

    /// Build a PDF in memory with one page per entry in `page_texts`.
    fn pdf_with_pages(page_texts: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for page_text in page_texts {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*page_text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().unwrap(),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Cursor::new(Vec::new());
        doc.save_to(&mut buffer).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn extracts_single_page_text() {
        let bytes = pdf_with_pages(&["Hello World"]);

        let extracted = extract_text(&bytes).unwrap();
        assert_eq!(extracted.page_count, 1);
        assert!(extracted.text.contains("Hello World"), "{:?}", extracted.text);
    }

    #[test]
    fn concatenates_pages_in_order() {
        let bytes = pdf_with_pages(&["alpha", "bravo", "charlie"]);

        let extracted = extract_text(&bytes).unwrap();
        assert_eq!(extracted.page_count, 3);

        let alpha = extracted.text.find("alpha").expect("page 1 text missing");
        let bravo = extracted.text.find("bravo").expect("page 2 text missing");
        let charlie = extracted.text.find("charlie").expect("page 3 text missing");
        assert!(alpha < bravo && bravo < charlie, "{:?}", extracted.text);
    }

    #[test]
    fn zero_page_document_yields_empty_text() {
        let bytes = pdf_with_pages(&[]);

        let extracted = extract_text(&bytes).unwrap();
        assert_eq!(extracted.page_count, 0);
        assert_eq!(extracted.text, "");
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(extract_text(&[]), Err(ExtractError::EmptyUpload)));
    }

    #[test]
    fn non_pdf_bytes_are_a_load_error() {
        let result = extract_text(b"this is plain text, not a PDF");
        assert!(matches!(result, Err(ExtractError::Load(_))));
    }

    #[test]
    fn extraction_is_deterministic() {
        let bytes = pdf_with_pages(&["same input", "same output"]);

        let first = extract_text(&bytes).unwrap();
        let second = extract_text(&bytes).unwrap();
        assert_eq!(first.text, second.text);
    }
}
