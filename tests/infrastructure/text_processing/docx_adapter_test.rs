use studygen::application::ports::{FileLoader, FileLoaderError};
use studygen::domain::{ContentType, Document};
use studygen::infrastructure::text_processing::DocxAdapter;

use crate::helpers::{docx_with_body, docx_with_parts, paragraph};

fn docx_document(data: &[u8]) -> Document {
    Document::new("notes.docx".to_string(), ContentType::Docx, data.len() as u64)
}

async fn extract(data: &[u8]) -> Result<String, FileLoaderError> {
    DocxAdapter::new()
        .extract_text(data, &docx_document(data))
        .await
}

#[tokio::test]
async fn given_paragraphs_when_extracting_then_joins_with_newlines_in_order() {
    let docx = docx_with_body(&format!(
        "{}{}{}",
        paragraph("First"),
        paragraph("Second"),
        paragraph("Third")
    ));

    assert_eq!(extract(&docx).await.unwrap(), "First\nSecond\nThird");
}

#[tokio::test]
async fn given_split_runs_when_extracting_then_concatenates_runs() {
    let docx = docx_with_body(
        "<w:p><w:r><w:rPr><w:b/></w:rPr><w:t>Bold</w:t></w:r><w:r><w:t xml:space=\"preserve\"> and plain</w:t></w:r></w:p>",
    );

    assert_eq!(extract(&docx).await.unwrap(), "Bold and plain");
}

#[tokio::test]
async fn given_empty_paragraph_when_extracting_then_keeps_blank_line() {
    let docx = docx_with_body(&format!(
        "{}<w:p/>{}",
        paragraph("Above"),
        paragraph("Below")
    ));

    assert_eq!(extract(&docx).await.unwrap(), "Above\n\nBelow");
}

#[tokio::test]
async fn given_tabs_breaks_and_entities_when_extracting_then_maps_them() {
    let docx = docx_with_body(
        "<w:p><w:pPr><w:tabs><w:tab w:val=\"left\" w:pos=\"720\"/></w:tabs></w:pPr><w:r><w:t>A</w:t><w:tab/><w:t>B</w:t><w:br/><w:t>C &amp; D</w:t></w:r></w:p>",
    );

    assert_eq!(extract(&docx).await.unwrap(), "A\tB\nC & D");
}

#[tokio::test]
async fn given_table_when_extracting_then_skips_cell_paragraphs() {
    let docx = docx_with_body(&format!(
        "{}<w:tbl><w:tr><w:tc>{}</w:tc></w:tr></w:tbl>{}",
        paragraph("Before"),
        paragraph("In a cell"),
        paragraph("After")
    ));

    assert_eq!(extract(&docx).await.unwrap(), "Before\nAfter");
}

#[tokio::test]
async fn given_hyperlink_run_when_extracting_then_includes_link_text() {
    let docx = docx_with_body(
        "<w:p><w:r><w:t xml:space=\"preserve\">See </w:t></w:r><w:hyperlink><w:r><w:t>docs</w:t></w:r></w:hyperlink></w:p>",
    );

    assert_eq!(extract(&docx).await.unwrap(), "See docs");
}

#[tokio::test]
async fn given_empty_body_when_extracting_then_returns_empty_string() {
    let docx = docx_with_body("");

    assert_eq!(extract(&docx).await.unwrap(), "");
}

#[tokio::test]
async fn given_non_zip_bytes_when_extracting_then_returns_empty_string() {
    assert_eq!(extract(b"plainly not a zip").await.unwrap(), "");
}

#[tokio::test]
async fn given_zip_without_main_part_when_extracting_then_returns_empty_string() {
    let archive = docx_with_parts(&[("word/styles.xml", "<w:styles/>")]);

    assert_eq!(extract(&archive).await.unwrap(), "");
}

#[tokio::test]
async fn given_malformed_xml_after_a_paragraph_when_extracting_then_keeps_text_read_so_far() {
    let docx = docx_with_body(&format!(
        "{}<w:p><w:r><w:t>Broken</w:r></w:p>",
        paragraph("Kept")
    ));

    assert_eq!(extract(&docx).await.unwrap(), "Kept");
}

#[tokio::test]
async fn given_non_docx_content_type_when_extracting_then_returns_unsupported() {
    let data = b"text";
    let document = Document::new("a.txt".to_string(), ContentType::Text, data.len() as u64);

    let result = DocxAdapter::new().extract_text(data, &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
