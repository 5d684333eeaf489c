use super::model::ReportExportRow;
use csv::Writer;

/// Write flattened report rows as CSV.
pub fn write_csv(path: &str, rows: &[ReportExportRow]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
