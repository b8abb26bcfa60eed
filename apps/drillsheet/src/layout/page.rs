//! Page geometry for the worksheet grid.
#![allow(dead_code)]
//!
//! All lengths are PDF points (1/72 inch), measured from the top-left corner of the
//! page. The PDF backend flips the vertical axis when it writes content streams.

use serde::{Deserialize, Serialize};

/// A4 width in points.
pub const A4_WIDTH_PT: f32 = 595.2756;
/// A4 height in points.
pub const A4_HEIGHT_PT: f32 = 841.8898;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

/// Layout parameters for one worksheet page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub width_pt: f32,
    pub height_pt: f32,
    pub margins: Margins,
    /// Gap between the header rule and the first row of exercises.
    pub header_clearance_pt: f32,
    /// Vertical distance between two rows of exercises.
    pub row_height_pt: f32,
    /// Horizontal and vertical step between digits inside one diagram.
    pub digit_spacing_pt: f32,
    pub body_font_size: f32,
    pub header_font_size: f32,
    /// Distance of the header baseline above the top margin.
    pub header_offset_pt: f32,
    /// Name printed in the header as "Printed with <name>".
    pub app_name: String,
}

/// Returns the default page config: A4, margins 80/100/50/50, rows of 150pt,
/// 20pt digit spacing, 12pt body text and a 10pt header.
pub fn default_page_config(app_name: impl Into<String>) -> PageConfig {
    PageConfig {
        width_pt: A4_WIDTH_PT,
        height_pt: A4_HEIGHT_PT,
        margins: Margins {
            top: 80.0,
            bottom: 100.0,
            left: 50.0,
            right: 50.0,
        },
        header_clearance_pt: 20.0,
        row_height_pt: 150.0,
        digit_spacing_pt: 20.0,
        body_font_size: 12.0,
        header_font_size: 10.0,
        header_offset_pt: 25.0,
        app_name: app_name.into(),
    }
}

impl PageConfig {
    /// Usable vertical extent between the top and bottom margins.
    pub fn printable_height(&self) -> f32 {
        (self.height_pt - self.margins.top - self.margins.bottom).max(0.0)
    }

    pub fn printable_width(&self) -> f32 {
        (self.width_pt - self.margins.left - self.margins.right).max(0.0)
    }

    /// Rows of exercises per page: printable height ÷ row height, never below one.
    pub fn rows_per_page(&self) -> usize {
        if self.row_height_pt <= 0.0 {
            return 1;
        }
        ((self.printable_height() / self.row_height_pt).floor() as usize).max(1)
    }

    /// Left edge of each grid column.
    pub fn column_positions(&self) -> [f32; 2] {
        let left = self.margins.left;
        [left, left + self.printable_width() / 2.0]
    }

    /// Vertical offset of the first row on every page.
    pub fn body_start(&self) -> f32 {
        self.margins.top + self.header_clearance_pt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_a4_capacity() {
        let config = default_page_config("Drillsheet");
        // (841.89 - 80 - 100) / 150 = 4.41 → 4 rows
        assert_eq!(config.rows_per_page(), 4);
    }

    #[test]
    fn test_column_positions_split_printable_width() {
        let config = default_page_config("Drillsheet");
        let [left, right] = config.column_positions();
        assert_eq!(left, 50.0);
        assert!((right - (50.0 + (A4_WIDTH_PT - 100.0) / 2.0)).abs() < 1e-3);
    }

    #[test]
    fn test_capacity_never_zero() {
        let mut config = default_page_config("Drillsheet");
        config.row_height_pt = 5000.0;
        assert_eq!(config.rows_per_page(), 1);
        config.row_height_pt = 0.0;
        assert_eq!(config.rows_per_page(), 1);
    }

    #[test]
    fn test_body_start_below_header() {
        let config = default_page_config("Drillsheet");
        assert_eq!(config.body_start(), 100.0);
    }
}
