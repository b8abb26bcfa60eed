//! PDF backend for the `Surface` trait, built on `pdf-writer`.
//!
//! One builtin Helvetica font (WinAnsi encoding) shared by every page, one content
//! stream per page. Everything is buffered in memory; nothing touches disk until the
//! caller writes the bytes returned by `finish`.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

use crate::layout::page::PageConfig;
use crate::layout::surface::{Point, Surface};

const LINE_WIDTH: f32 = 0.5;
const LEADING_FACTOR: f32 = 1.2;
const FONT_NAME: Name<'static> = Name(b"F1");

pub struct PdfSurface {
    width: f32,
    height: f32,
    finished_pages: Vec<Vec<u8>>,
    current: Content,
}

impl PdfSurface {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            width: config.width_pt,
            height: config.height_pt,
            finished_pages: Vec::new(),
            current: Content::new(),
        }
    }

    /// Converts a top-left based vertical offset into PDF user space.
    fn flip(&self, y: f32) -> f32 {
        self.height - y
    }

    fn close_page(&mut self) {
        let page = std::mem::replace(&mut self.current, Content::new());
        self.finished_pages.push(page.finish());
    }

    /// Serializes the document. The page being drawn is closed first.
    pub fn finish(mut self) -> Vec<u8> {
        self.close_page();

        let catalog_id = Ref::new(1);
        let page_tree_id = Ref::new(2);
        let font_id = Ref::new(3);
        // Pages and their content streams take ids in pairs after the font.
        let page_ids: Vec<Ref> = (0..self.finished_pages.len())
            .map(|i| Ref::new(4 + 2 * i as i32))
            .collect();

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.pages(page_tree_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);
        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        for (page_id, content) in page_ids.iter().zip(&self.finished_pages) {
            let content_id = Ref::new(page_id.get() + 1);

            let mut page = pdf.page(*page_id);
            page.media_box(Rect::new(0.0, 0.0, self.width, self.height));
            page.parent(page_tree_id);
            page.contents(content_id);
            page.resources().fonts().pair(FONT_NAME, font_id);
            page.finish();

            pdf.stream(content_id, content);
        }

        pdf.finish()
    }
}

impl Surface for PdfSurface {
    fn draw_text(&mut self, at: Point, text: &str, font_size: f32) {
        let y = self.flip(at.y);
        let encoded = win_ansi(text);
        self.current
            .begin_text()
            .set_font(FONT_NAME, font_size)
            .next_line(at.x, y)
            .show(Str(&encoded))
            .end_text();
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        let (from_y, to_y) = (self.flip(from.y), self.flip(to.y));
        self.current
            .set_line_width(LINE_WIDTH)
            .move_to(from.x, from_y)
            .line_to(to.x, to_y)
            .stroke();
    }

    fn begin_paragraph(&mut self, at: Point, lines: &[&str], font_size: f32) {
        let y = self.flip(at.y);
        self.current
            .begin_text()
            .set_font(FONT_NAME, font_size)
            .set_leading(font_size * LEADING_FACTOR)
            .next_line(at.x, y);
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                self.current.next_line_using_leading();
            }
            self.current.show(Str(&win_ansi(line)));
        }
        self.current.end_text();
    }

    fn new_page(&mut self) {
        self.close_page();
    }

    fn page_number(&self) -> u32 {
        self.finished_pages.len() as u32 + 1
    }
}

/// Encodes `text` for the WinAnsi Helvetica font. Characters outside printable
/// Latin-1 become `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' | '\u{A0}'..='\u{FF}' => c as u8,
            _ => b'?',
        })
        .collect()
}
