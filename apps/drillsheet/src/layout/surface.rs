//! Drawing surface capability set.
#![allow(dead_code)]
//!
//! The layout engine only talks to `Surface`; any backend that implements it can
//! receive a worksheet. Coordinates are points from the page's top-left corner.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

pub trait Surface {
    /// Draws a single line of text with its baseline at `at`.
    fn draw_text(&mut self, at: Point, text: &str, font_size: f32);

    fn draw_line(&mut self, from: Point, to: Point);

    /// Draws consecutive lines of text starting at `at`, one font-size step apart.
    fn begin_paragraph(&mut self, at: Point, lines: &[&str], font_size: f32);

    /// Closes the current page and starts the next one.
    fn new_page(&mut self);

    /// 1-based number of the page currently being drawn.
    fn page_number(&self) -> u32;
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Text {
        at: Point,
        text: String,
        font_size: f32,
    },
    Line {
        from: Point,
        to: Point,
    },
    Paragraph {
        at: Point,
        lines: Vec<String>,
        font_size: f32,
    },
}

/// In-memory surface that keeps every draw call, grouped by page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordingSurface {
    pages: Vec<Vec<DrawCommand>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
        }
    }

    pub fn pages(&self) -> &[Vec<DrawCommand>] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All text drawn on page `page` (1-based), in drawing order.
    pub fn texts_on(&self, page: usize) -> Vec<&str> {
        self.pages
            .get(page.wrapping_sub(1))
            .map(|commands| {
                commands
                    .iter()
                    .filter_map(|c| match c {
                        DrawCommand::Text { text, .. } => Some(text.as_str()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn current(&mut self) -> &mut Vec<DrawCommand> {
        if self.pages.is_empty() {
            self.pages.push(Vec::new());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for RecordingSurface {
    fn draw_text(&mut self, at: Point, text: &str, font_size: f32) {
        self.current().push(DrawCommand::Text {
            at,
            text: text.to_string(),
            font_size,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.current().push(DrawCommand::Line { from, to });
    }

    fn begin_paragraph(&mut self, at: Point, lines: &[&str], font_size: f32) {
        self.current().push(DrawCommand::Paragraph {
            at,
            lines: lines.iter().map(|l| l.to_string()).collect(),
            font_size,
        });
    }

    fn new_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn page_number(&self) -> u32 {
        self.pages.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_per_page() {
        let mut surface = RecordingSurface::new();
        assert_eq!(surface.page_number(), 1);

        surface.draw_text(Point::new(10.0, 20.0), "7", 12.0);
        surface.draw_line(Point::new(0.0, 0.0), Point::new(5.0, 0.0));
        surface.new_page();
        surface.begin_paragraph(Point::new(1.0, 1.0), &["a", "b"], 10.0);

        assert_eq!(surface.page_number(), 2);
        assert_eq!(surface.pages()[0].len(), 2);
        assert_eq!(surface.pages()[1].len(), 1);
        assert_eq!(surface.texts_on(1), vec!["7"]);
        assert!(surface.texts_on(2).is_empty());
        assert!(surface.texts_on(0).is_empty());
    }
}
