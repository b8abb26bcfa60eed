//! Paginated layout engine.
#![allow(dead_code)]
//!
//! # Grid
//! Exercises fill a two-column grid. Both columns of a row share one vertical offset;
//! the offset steps down by one row height after the right-hand column is filled.
//! When a page holds `rows_per_page` complete rows and more exercises follow, the
//! engine breaks to a new page and resets the offset to the top of the body. Column
//! cycling is not affected by the break.
//!
//! # State threading
//! `LayoutCursor` is a plain value: `advance` takes the cursor for one exercise and
//! returns the placement plus the cursor for the next one. `plan_layout` and
//! `render_session` share that step, so a plan always matches what gets drawn.

use serde::Serialize;
use tracing::debug;

use crate::exercise::digits::operand_digits;
use crate::exercise::{Operation, Operator, Session};
use crate::layout::page::PageConfig;
use crate::layout::surface::{Point, Surface};

// ────────────────────────────────────────────────────────────────────────────
// Layout state
// ────────────────────────────────────────────────────────────────────────────

/// Where the next exercise goes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutCursor {
    /// 0 = left column, 1 = right column.
    pub column: usize,
    /// Vertical offset of the current row, in points from the page top.
    pub offset: f32,
    /// 1-based page number.
    pub page: u32,
    /// Complete rows already placed on the current page.
    pub rows_on_page: usize,
}

impl LayoutCursor {
    pub fn start(config: &PageConfig) -> Self {
        Self {
            column: 0,
            offset: config.body_start(),
            page: 1,
            rows_on_page: 0,
        }
    }
}

/// Final position of one exercise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub index: usize,
    pub page: u32,
    pub column: usize,
    pub x: f32,
    pub y: f32,
}

/// Result of placing one exercise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub placement: Placement,
    pub next: LayoutCursor,
    /// A page break must be emitted before the next exercise is drawn.
    pub page_break: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutPlan {
    pub placements: Vec<Placement>,
    pub page_count: u32,
    pub rows_per_page: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Placement
// ────────────────────────────────────────────────────────────────────────────

/// Places exercise `index` of `count` at `cursor` and computes the following cursor.
pub fn advance(cursor: LayoutCursor, index: usize, count: usize, config: &PageConfig) -> Step {
    let columns = config.column_positions();
    let column = index % 2;

    let placement = Placement {
        index,
        page: cursor.page,
        column,
        x: columns[column],
        y: cursor.offset,
    };

    let mut next = LayoutCursor {
        column: (index + 1) % 2,
        ..cursor
    };
    let mut page_break = false;

    if column == 1 {
        next.offset += config.row_height_pt;
        next.rows_on_page += 1;

        let more_follow = index + 1 < count;
        if more_follow && next.rows_on_page >= config.rows_per_page() {
            page_break = true;
            next.page += 1;
            next.offset = config.body_start();
            next.rows_on_page = 0;
        }
    }

    Step {
        placement,
        next,
        page_break,
    }
}

/// Computes every placement for `count` exercises without drawing anything.
pub fn plan_layout(count: usize, config: &PageConfig) -> LayoutPlan {
    let mut cursor = LayoutCursor::start(config);
    let mut placements = Vec::with_capacity(count);

    for index in 0..count {
        let step = advance(cursor, index, count, config);
        placements.push(step.placement);
        cursor = step.next;
    }

    LayoutPlan {
        page_count: placements.last().map(|p| p.page).unwrap_or(1),
        placements,
        rows_per_page: config.rows_per_page(),
    }
}

/// Number of pages needed for `count` exercises: `ceil(rows / rows_per_page)`.
pub fn pages_needed(count: usize, config: &PageConfig) -> u32 {
    let rows = count.div_ceil(2).max(1);
    rows.div_ceil(config.rows_per_page()) as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

/// Draws the whole session onto `surface`, page headers included.
pub fn render_session<S: Surface>(
    session: &Session,
    config: &PageConfig,
    surface: &mut S,
) -> LayoutPlan {
    let count = session.count();
    let expected_pages = pages_needed(count, config);
    let mut cursor = LayoutCursor::start(config);
    let mut placements = Vec::with_capacity(count);

    debug!(count, expected_pages, "Rendering worksheet");
    write_header(surface, config);

    for (index, operation) in session.operations().iter().enumerate() {
        let step = advance(cursor, index, count, config);
        let placement = step.placement;

        debug!(
            index,
            page = placement.page,
            column = placement.column,
            x = placement.x,
            y = placement.y,
            "Placing exercise"
        );
        draw_operation(
            surface,
            operation,
            Point::new(placement.x, placement.y),
            config,
        );
        placements.push(placement);

        if step.page_break {
            debug!(after = index, page = step.next.page, "Page break");
            surface.new_page();
            write_header(surface, config);
        }
        cursor = step.next;
    }

    let page_count = surface.page_number();
    debug_assert_eq!(page_count, expected_pages, "rendered page count drifted from capacity");

    LayoutPlan {
        page_count,
        placements,
        rows_per_page: config.rows_per_page(),
    }
}

/// Header line, page number and the rule separating header from body.
pub fn write_header<S: Surface>(surface: &mut S, config: &PageConfig) {
    let baseline = config.margins.top - config.header_offset_pt;
    let credit = format!("Printed with {}", config.app_name);

    surface.begin_paragraph(
        Point::new(config.margins.left, baseline),
        &[credit.as_str()],
        config.header_font_size,
    );
    let page_label = format!("Page {}", surface.page_number());
    surface.draw_text(
        Point::new(config.width_pt - 2.0 * config.margins.right, baseline),
        &page_label,
        config.header_font_size,
    );
    surface.draw_line(
        Point::new(config.margins.left, config.margins.top),
        Point::new(config.width_pt - config.margins.right, config.margins.top),
    );
}

/// Draws one exercise as a digit-by-digit vertical diagram with its top-left at `origin`.
pub fn draw_operation<S: Surface>(
    surface: &mut S,
    operation: &Operation,
    origin: Point,
    config: &PageConfig,
) {
    let digits_a = operand_digits(operation.a());
    let digits_b = operand_digits(operation.b());

    match operation.operator() {
        Operator::Divide => draw_division(surface, &digits_a, &digits_b, origin, config),
        op => draw_column(surface, op, &digits_a, &digits_b, origin, config),
    }
}

/// `+ - ×`: operands right-aligned in columns, operator left of the second row,
/// a rule under the operands and one placeholder mark per result column.
fn draw_column<S: Surface>(
    surface: &mut S,
    operator: Operator,
    digits_a: &[u8],
    digits_b: &[u8],
    origin: Point,
    config: &PageConfig,
) {
    let sp = config.digit_spacing_pt;
    let size = config.body_font_size;
    let width = digits_a.len().max(digits_b.len());
    let (x, y) = (origin.x, origin.y);

    draw_digits(surface, digits_a, x + (width - digits_a.len() + 2) as f32 * sp, y, sp, size);

    surface.draw_text(Point::new(x + sp, y + sp), operator.symbol(), size);
    draw_digits(
        surface,
        digits_b,
        x + (width - digits_b.len() + 2) as f32 * sp,
        y + sp,
        sp,
        size,
    );

    surface.draw_line(
        Point::new(x + sp, y + 2.0 * sp),
        Point::new(x + (width + 2) as f32 * sp, y + 2.0 * sp),
    );

    // One extra column for a final carry.
    for column in 1..=width + 1 {
        surface.draw_text(Point::new(x + column as f32 * sp, y + 3.0 * sp), ".", size);
    }
}

/// `÷`: dividend and divisor side by side, a vertical bar between them and a rule
/// under both. Quotient and remainder are left for the pupil.
fn draw_division<S: Surface>(
    surface: &mut S,
    dividend: &[u8],
    divisor: &[u8],
    origin: Point,
    config: &PageConfig,
) {
    let sp = config.digit_spacing_pt;
    let size = config.body_font_size;
    let (x, y) = (origin.x, origin.y);
    let la = dividend.len() as f32;
    let lb = divisor.len() as f32;

    draw_digits(surface, dividend, x + sp, y, sp, size);
    draw_digits(surface, divisor, x + (la + 2.0) * sp, y, sp, size);

    let bar_x = x + (la + 1.5) * sp;
    surface.draw_line(Point::new(bar_x, y - sp), Point::new(bar_x, y + 4.0 * sp));
    surface.draw_line(
        Point::new(x + sp, y + 0.5 * sp),
        Point::new(x + (la + lb + 2.5) * sp, y + 0.5 * sp),
    );
}

fn draw_digits<S: Surface>(surface: &mut S, digits: &[u8], start_x: f32, y: f32, sp: f32, size: f32) {
    for (j, digit) in digits.iter().enumerate() {
        surface.draw_text(
            Point::new(start_x + j as f32 * sp, y),
            &digit.to_string(),
            size,
        );
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
