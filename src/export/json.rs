use super::model::ReportExportRow;

/// Write flattened report rows as pretty-printed JSON.
pub fn write_json(path: &str, rows: &[ReportExportRow]) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(rows)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    std::fs::write(path, json)
}
