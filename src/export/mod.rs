use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::model::form_input::FormInput;

/// The format the user asked for. Neither is actually encoded yet; both
/// fall back to a plain-text file, and the receipt says so.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Docx,
    Pdf,
}

impl ExportFormat {
    pub fn button_label(&self) -> &'static str {
        match self {
            ExportFormat::Docx => "Export as DOCX (mock)",
            ExportFormat::Pdf => "Export as PDF (mock)",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ExportFormat::Docx => "DOCX",
            ExportFormat::Pdf => "PDF",
        }
    }
}

/// What the export actually did, surfaced to the user so the mock boundary
/// stays visible.
#[derive(Debug)]
pub struct ExportReceipt {
    pub path: PathBuf,
    pub notice: String,
}

pub fn suggested_filename(form: &FormInput) -> String {
    format!(
        "LessonPlan_{}_{}_{}_{}",
        form.grade_level, form.subject, form.quarter, form.week
    )
}

/// Writes the flat plan text to `path` with a `.txt` extension, whatever
/// format was requested. True DOCX/PDF encoding is not implemented, and the
/// receipt's notice tells the user exactly that instead of mislabeling the
/// file.
pub fn export_plan(
    path: &Path,
    text: &str,
    format: ExportFormat,
) -> anyhow::Result<ExportReceipt> {
    let path = path.with_extension("txt");
    fs::write(&path, text)
        .with_context(|| format!("could not write {}", path.display()))?;

    let notice = format!(
        "{} export is not implemented yet; the plan was saved as plain text at {}.",
        format.name(),
        path.display()
    );

    Ok(ExportReceipt { path, notice })
}
