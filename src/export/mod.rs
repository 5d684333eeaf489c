mod csv;
mod json;
mod model;

pub use model::ReportExportRow;

use crate::errors::{AppError, AppResult};
use crate::models::report::DailyReport;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Flatten reports into rows and write them in the requested format.
pub fn export_reports(format: &ExportFormat, path: &str, reports: &[DailyReport]) -> AppResult<()> {
    let rows = model::flatten_reports(reports);

    match format {
        ExportFormat::Csv => csv::write_csv(path, &rows).map_err(|e| AppError::Export(e.to_string()))?,
        ExportFormat::Json => json::write_json(path, &rows).map_err(|e| AppError::Export(e.to_string()))?,
    }

    success(format!(
        "{} export completed: {}",
        format.as_str().to_uppercase(),
        Path::new(path).display()
    ));
    Ok(())
}
