use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::info;

use crate::errors::DrillError;
use crate::exercise::Session;
use crate::layout::engine::render_session;
use crate::layout::page::PageConfig;
use crate::layout::pdf::PdfSurface;

/// Outcome of a successful export.
#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub pages: u32,
    pub exercises: usize,
    pub bytes: usize,
}

/// Renders `session` into a PDF at `path`.
///
/// The document goes to a temporary file next to `path` and is renamed into place
/// once fully written, so a failed export never leaves a partial document behind.
pub fn export_session(
    session: &Session,
    path: &Path,
    config: &PageConfig,
) -> Result<ExportSummary, DrillError> {
    let mut surface = PdfSurface::new(config);
    let plan = render_session(session, config, &mut surface);
    let document = surface.finish();

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&document)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| DrillError::Io(e.error))?;

    info!(
        path = %path.display(),
        pages = plan.page_count,
        exercises = session.count(),
        bytes = document.len(),
        "Worksheet exported"
    );

    Ok(ExportSummary {
        path: path.to_path_buf(),
        pages: plan.page_count,
        exercises: session.count(),
        bytes: document.len(),
    })
}
