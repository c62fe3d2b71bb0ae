//! Plain text to PDF.
//!
//! Every input line becomes one line of Helvetica text on an A4 page. Lines
//! sit in fixed-height cells; a new page starts when the current one is
//! full. The standard fonts only cover WinAnsi, so anything outside it is
//! written as `?`.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;

/// A4 width in points.
pub const PAGE_WIDTH: f32 = 595.28;
/// A4 height in points.
pub const PAGE_HEIGHT: f32 = 841.89;
/// Left/top/bottom margin, 10mm.
pub const MARGIN: f32 = 28.35;
/// Height of one text cell, 10mm.
pub const LINE_HEIGHT: f32 = 28.35;
/// Font size in points.
pub const FONT_SIZE: f32 = 12.0;

/// Number of line cells that fit between the top and bottom margins.
pub const LINES_PER_PAGE: usize = ((PAGE_HEIGHT - 2.0 * MARGIN) / LINE_HEIGHT) as usize;

const FONT_KEY: &str = "F1";
const REPLACEMENT: u8 = b'?';

/// Incrementally builds a text-only PDF document.
///
/// # Examples
///
/// ```
/// use filekit::convert::TextPdfBuilder;
///
/// let doc = TextPdfBuilder::new()
///     .page(&["first page".to_string()])
///     .page(&["second page".to_string()])
///     .build();
/// assert_eq!(doc.get_pages().len(), 2);
/// ```
pub struct TextPdfBuilder {
    doc: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    kids: Vec<Object>,
}

impl TextPdfBuilder {
    /// Start an empty document with the font resources in place.
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { FONT_KEY => font_id },
        });

        Self {
            doc,
            pages_id,
            resources_id,
            kids: Vec::new(),
        }
    }

    /// Append one page holding `lines`, top to bottom.
    ///
    /// Lines beyond [`LINES_PER_PAGE`] run off the bottom; use
    /// [`TextPdfBuilder::lines`] to paginate automatically.
    pub fn page(mut self, lines: &[String]) -> Self {
        let mut operations = Vec::with_capacity(lines.len() * 5);

        for (row, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let baseline = PAGE_HEIGHT - MARGIN - (row as f32 + 1.0) * LINE_HEIGHT
                + (LINE_HEIGHT - FONT_SIZE) / 2.0;

            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new(
                "Tf",
                vec![FONT_KEY.into(), FONT_SIZE.into()],
            ));
            operations.push(Operation::new("Td", vec![MARGIN.into(), baseline.into()]));
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(encode_win_ansi(line))],
            ));
            operations.push(Operation::new("ET", vec![]));
        }

        // Encoding a list of plain operators cannot fail.
        let data = Content { operations }.encode().unwrap_or_default();
        let content_id = self.doc.add_object(Stream::new(dictionary! {}, data));

        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        self.kids.push(page_id.into());
        self
    }

    /// Append `lines`, starting a new page every [`LINES_PER_PAGE`] lines.
    ///
    /// An empty input still produces one blank page.
    pub fn lines(mut self, lines: &[String]) -> Self {
        if lines.is_empty() {
            return self.page(&[]);
        }
        for chunk in lines.chunks(LINES_PER_PAGE) {
            self = self.page(chunk);
        }
        self
    }

    /// Finish the page tree and catalog.
    pub fn build(mut self) -> Document {
        let count = self.kids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => self.kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        };
        self.doc.objects.insert(self.pages_id, Object::Dictionary(pages));

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);

        self.doc
    }
}

impl Default for TextPdfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Read `path` line by line and lay it out as a PDF document.
///
/// Fails on unreadable files and on input that is not valid UTF-8.
pub fn text_file_to_document(path: &Path) -> Result<Document> {
    let reader = BufReader::new(File::open(path)?);
    let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
    tracing::debug!(path = %path.display(), lines = lines.len(), "laying out text");

    Ok(TextPdfBuilder::new().lines(&lines).build())
}

/// Encode `text` for a WinAnsi single-byte font.
///
/// Tabs become a space; anything without a WinAnsi code point becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        '\t' => b' ',
        ' '..='~' => c as u8,
        '\u{A0}'..='\u{FF}' => c as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => REPLACEMENT,
    }
}
