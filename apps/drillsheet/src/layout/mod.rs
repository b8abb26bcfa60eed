// Worksheet layout: page geometry, the two-column paginated grid, drawing surfaces and
// PDF export. Placement is pure; only `export` touches the filesystem.

pub mod engine;
pub mod export;
pub mod page;
pub mod pdf;
pub mod surface;

// Re-export the public API consumed by the CLI.
pub use engine::{plan_layout, render_session, LayoutPlan};
pub use export::{export_session, ExportSummary};
pub use page::{default_page_config, PageConfig};
