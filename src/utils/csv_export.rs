use std::path::{Path, PathBuf};

use chrono::Local;
use csv::Writer;

use crate::analysis::report::MetricsTable;
use crate::core::error::{SimError, SimResult};

/// Write the metrics comparison table to a timestamped CSV in `dir`, which
/// the caller has already created. Cells are emitted exactly as rendered;
/// nothing is recomputed here.
pub fn export_metrics_table(table: &MetricsTable, dir: &Path) -> SimResult<PathBuf> {
    let filename = format!(
        "policy_comparison_{}.csv",
        Local::now().format("%Y%m%d_%H%M%S")
    );
    let path = dir.join(filename);

    let mut writer = Writer::from_path(&path)
        .map_err(|e| SimError::export(format!("{}: {e}", path.display())))?;
    writer
        .write_record(&table.header)
        .map_err(|e| SimError::export(e.to_string()))?;
    for row in &table.rows {
        writer
            .write_record(row)
            .map_err(|e| SimError::export(e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| SimError::export(e.to_string()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn sample_table() -> MetricsTable {
        MetricsTable {
            header: vec![
                "Metric".to_string(),
                "Baseline".to_string(),
                "Policy A".to_string(),
                "Policy B".to_string(),
            ],
            rows: vec![vec![
                "AQI Index".to_string(),
                "287".to_string(),
                "244".to_string(),
                "250".to_string(),
            ]],
        }
    }

    #[test]
    fn export_writes_header_and_rows_verbatim() {
        let dir = std::env::temp_dir().join(format!("neetisim_csv_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = export_metrics_table(&sample_table(), &dir).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("Metric,Baseline,Policy A,Policy B"));
        assert_eq!(lines.next(), Some("AQI Index,287,244,250"));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn export_into_a_missing_directory_is_an_export_error() {
        let dir = std::env::temp_dir().join(format!(
            "neetisim_csv_missing_{}",
            std::process::id()
        ));
        fs::remove_dir_all(&dir).ok();
        let err = export_metrics_table(&sample_table(), &dir);
        assert!(matches!(err, Err(SimError::Export(_))));
    }
}
