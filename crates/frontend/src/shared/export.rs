//! CSV export of the rows a report currently shows.

use contracts::shared::api_error::ApiError;

use super::download::{blob_from_text, save_blob, CSV_MIME};

const SEPARATOR: &str = ";";

pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

/// UTF-8 BOM first, so spreadsheet apps read the accents correctly.
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut csv = String::from('\u{FEFF}');
    csv.push_str(&T::headers().join(SEPARATOR));
    csv.push('\n');
    for item in data {
        let row: Vec<String> = item.to_csv_row().iter().map(|c| escape_csv_cell(c)).collect();
        csv.push_str(&row.join(SEPARATOR));
        csv.push('\n');
    }
    csv
}

pub fn export_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), ApiError> {
    if data.is_empty() {
        return Err(ApiError::Validation("No hay datos para exportar".into()));
    }
    let blob = blob_from_text(&build_csv(data), CSV_MIME)?;
    save_blob(&blob, filename)
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, f64);

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Código", "Valor"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), format!("{:.2}", self.1)]
        }
    }

    #[test]
    fn escapes_separator_and_quotes() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_csv_cell("silla \"ejecutiva\""), "\"silla \"\"ejecutiva\"\"\"");
    }

    #[test]
    fn builds_rows_under_bom_and_header() {
        let csv = build_csv(&[Row("BM-001", 10.5), Row("a;b", 0.0)]);
        assert!(csv.starts_with('\u{FEFF}'));
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines, vec!["Código;Valor", "BM-001;10.50", "\"a;b\";0.00"]);
    }
}
