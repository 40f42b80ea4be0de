//! Minimal WordprocessingML (.docx) renderer.
//!
//! Writes the smallest package Word and LibreOffice open cleanly: content
//! types, package relationships, the main document, styles, and a single
//! bullet numbering definition. Every ZIP entry gets the same fixed
//! timestamp and entries are written in a fixed order, so the output depends
//! only on the document.

use std::io::{Cursor, Write};
use valuecards_application::{DocumentRenderer, RenderError};
use valuecards_domain::{Block, ExportDocument};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/><Override PartName="/word/numbering.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering" Target="numbering.xml"/></Relationships>"#;

const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/><w:sz w:val="22"/></w:rPr></w:rPrDefault><w:pPrDefault><w:pPr><w:spacing w:after="160" w:line="259" w:lineRule="auto"/></w:pPr></w:pPrDefault></w:docDefaults><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style><w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:pPr><w:spacing w:after="240"/></w:pPr><w:rPr><w:b/><w:sz w:val="56"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:pPr><w:keepNext/><w:spacing w:before="240" w:after="120"/><w:outlineLvl w:val="0"/></w:pPr><w:rPr><w:b/><w:sz w:val="32"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:pPr><w:keepNext/><w:spacing w:before="160" w:after="80"/><w:outlineLvl w:val="1"/></w:pPr><w:rPr><w:b/><w:sz w:val="26"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="ListBullet"><w:name w:val="List Bullet"/><w:basedOn w:val="Normal"/><w:pPr><w:numPr><w:numId w:val="1"/></w:numPr><w:spacing w:after="60"/></w:pPr></w:style></w:styles>"#;

const NUMBERING: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:abstractNum w:abstractNumId="0"><w:multiLevelType w:val="singleLevel"/><w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="&#8226;"/><w:lvlJc w:val="left"/><w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr></w:lvl></w:abstractNum><w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num></w:numbering>"#;

const DOCUMENT_OPEN: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#;

const DOCUMENT_CLOSE: &str = r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/><w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/></w:sectPr></w:body></w:document>"#;

/// Renders [`ExportDocument`]s as `.docx` packages
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxRenderer;

impl DocxRenderer {
    pub fn new() -> Self {
        Self
    }

    /// The `word/document.xml` part for `document`
    pub fn document_xml(document: &ExportDocument) -> String {
        let mut xml = String::from(DOCUMENT_OPEN);
        for block in document.blocks() {
            let style = match block {
                Block::Title(_) => Some("Title"),
                Block::Heading(_) => Some("Heading1"),
                Block::Subheading(_) => Some("Heading2"),
                Block::Bullet(_) => Some("ListBullet"),
                Block::Paragraph(_) => None,
            };
            push_paragraph(&mut xml, style, block.text());
        }
        xml.push_str(DOCUMENT_CLOSE);
        xml
    }
}

fn push_paragraph(xml: &mut String, style: Option<&str>, text: &str) {
    xml.push_str("<w:p>");
    if let Some(style) = style {
        xml.push_str(r#"<w:pPr><w:pStyle w:val=""#);
        xml.push_str(style);
        xml.push_str(r#""/></w:pPr>"#);
    }
    xml.push_str(r#"<w:r><w:t xml:space="preserve">"#);
    xml.push_str(&html_escape::encode_text(&xml_safe(text)));
    xml.push_str("</w:t></w:r></w:p>");
}

/// Drop characters XML 1.0 does not allow and fold line breaks into spaces
fn xml_safe(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\n' | '\r' | '\t' => Some(' '),
            c if (c as u32) < 0x20 => None,
            '\u{FFFE}' | '\u{FFFF}' => None,
            c => Some(c),
        })
        .collect()
}

fn archive_error(e: zip::result::ZipError) -> RenderError {
    RenderError::Archive(e.to_string())
}

impl DocumentRenderer for DocxRenderer {
    fn content_type(&self) -> &'static str {
        DOCX_CONTENT_TYPE
    }

    fn extension(&self) -> &'static str {
        "docx"
    }

    fn render(&self, document: &ExportDocument) -> Result<Vec<u8>, RenderError> {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        let document_xml = Self::document_xml(document);
        let parts: [(&str, &str); 6] = [
            ("[Content_Types].xml", CONTENT_TYPES),
            ("_rels/.rels", PACKAGE_RELS),
            ("word/document.xml", &document_xml),
            ("word/_rels/document.xml.rels", DOCUMENT_RELS),
            ("word/styles.xml", STYLES),
            ("word/numbering.xml", NUMBERING),
        ];

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in parts {
            writer.start_file(name, options).map_err(archive_error)?;
            writer.write_all(content.as_bytes())?;
        }
        let cursor = writer.finish().map_err(archive_error)?;
        Ok(cursor.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::sync::Arc;
    use valuecards_domain::{
        Bucket, BucketSide, Catalog, DraftStatements, EnhancedStatements, ExportContents,
        Tier2Set, ValuesSession, export::DEFAULT_TITLE,
    };
    use zip::ZipArchive;

    fn empty_document() -> ExportDocument {
        let tier2 = Tier2Set::default();
        ExportDocument::build(&ExportContents {
            title: DEFAULT_TITLE,
            tier2: &tier2,
            buckets: None,
            drafts: None,
            enhanced: None,
        })
    }

    fn full_document() -> ExportDocument {
        let tier2 = Tier2Set::from_labels(["Family", "Growth", "Honesty", "Job Security"]);
        let first = Bucket::new("Honesty").with_supports(["Growth"]);
        let second = Bucket::new("Family").with_supports(["Job Security"]);
        let drafts = DraftStatements::compose(&first, &second);
        ExportDocument::build(&ExportContents {
            title: "Values & <Priorities>",
            tier2: &tier2,
            buckets: Some([&first, &second]),
            drafts: Some(&drafts),
            enhanced: None,
        })
    }

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut part = archive.by_name(name).unwrap();
        let mut out = String::new();
        part.read_to_string(&mut out).unwrap();
        out
    }

    #[test]
    fn test_render_is_byte_identical() {
        let renderer = DocxRenderer::new();
        let doc = full_document();
        assert_eq!(renderer.render(&doc).unwrap(), renderer.render(&doc).unwrap());
    }

    fn answered_session(catalog: Arc<Catalog>) -> ValuesSession {
        let mut session = ValuesSession::new(catalog);
        for value in ["Honesty", "Growth", "Family", "Wealth"] {
            session.toggle(value, None).unwrap();
        }
        session.choose_tier_one(&["Honesty", "Family"]).unwrap();
        session.assign_supports(BucketSide::First, &["Growth"]).unwrap();
        session.assign_supports(BucketSide::Second, &["Wealth", "Growth"]).unwrap();
        let drafts = session.drafts().unwrap();
        session.apply_enhancement(
            drafts,
            EnhancedStatements::new("Honesty guides me.", "Family grounds me."),
        );
        session
    }

    #[test]
    fn test_independent_sessions_render_identical_bytes() {
        // Separate catalogs and sessions built from the same answers.
        let a = answered_session(Arc::new(Catalog::standard()));
        let b = answered_session(Arc::new(Catalog::standard()));

        let renderer = DocxRenderer::new();
        let first = renderer.render(&a.export_document(DEFAULT_TITLE)).unwrap();
        let second = DocxRenderer::new()
            .render(&b.export_document(DEFAULT_TITLE))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_package_contains_required_parts() {
        let bytes = DocxRenderer::new().render(&empty_document()).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        for required in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/document.xml",
            "word/_rels/document.xml.rels",
        ] {
            assert!(names.contains(&required), "missing {required}");
        }
    }

    #[test]
    fn test_empty_document_renders_placeholders() {
        let bytes = DocxRenderer::new().render(&empty_document()).unwrap();
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains("Tier 2 Values List"));
        assert!(xml.contains("No values assigned"));
        assert!(xml.contains("No AI enhanced statements generated"));
    }

    #[test]
    fn test_text_is_escaped_and_space_preserved() {
        let xml = DocxRenderer::document_xml(&full_document());
        assert!(xml.contains("Values &amp; &lt;Priorities&gt;"));
        assert!(xml.contains(r#"<w:t xml:space="preserve">I value Family supported by Job Security</w:t>"#));
        assert!(xml.contains(r#"<w:pStyle w:val="ListBullet"/>"#));
    }

    #[test]
    fn test_xml_safe_strips_control_characters() {
        assert_eq!(xml_safe("a\u{0007}b\nc"), "ab c");
    }

    #[test]
    fn test_content_type() {
        assert_eq!(DocxRenderer::new().content_type(), DOCX_CONTENT_TYPE);
    }
}
