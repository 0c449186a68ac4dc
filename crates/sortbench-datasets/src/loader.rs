//! CSV dataset loading.
//!
//! Files are `;`-delimited with one header row. Fields are trimmed, blank
//! lines are ignored and trailing empty fields are dropped; rows left with
//! anything other than three fields are skipped. Columns are matched by
//! position, so the header text is free.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{DatasetError, Result};
use crate::model::{Appointment, InventoryItem, Patient};

const FIELD_COUNT: usize = 3;

/// Loads appointments (`id;last_name;date_time`) from a file.
pub fn load_appointments(path: impl AsRef<Path>) -> Result<Vec<Appointment>> {
    load_path(path.as_ref())
}

/// Loads appointments from any reader.
pub fn read_appointments<R: Read>(reader: R) -> Result<Vec<Appointment>> {
    read_records(reader)
}

/// Loads patients (`id;last_name;priority`) from a file.
pub fn load_patients(path: impl AsRef<Path>) -> Result<Vec<Patient>> {
    load_path(path.as_ref())
}

/// Loads patients from any reader.
pub fn read_patients<R: Read>(reader: R) -> Result<Vec<Patient>> {
    read_records(reader)
}

/// Loads inventory items (`id;supply;stock`) from a file.
pub fn load_inventory(path: impl AsRef<Path>) -> Result<Vec<InventoryItem>> {
    load_path(path.as_ref())
}

/// Loads inventory items from any reader.
pub fn read_inventory<R: Read>(reader: R) -> Result<Vec<InventoryItem>> {
    read_records(reader)
}

fn load_path<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let records = File::open(path)
        .map_err(DatasetError::from)
        .and_then(read_records::<T, File>)
        .map_err(|e| e.in_file(path))?;

    info!(
        event = "dataset_loaded",
        path = %path.display(),
        records = records.len(),
    );
    Ok(records)
}

fn read_records<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut row = StringRecord::new();
    while reader.read_record(&mut row)? {
        let fields = field_count(&row);
        if fields != FIELD_COUNT {
            debug!(
                event = "row_skipped",
                line = line_of(&row),
                fields,
            );
            continue;
        }
        row.truncate(fields);
        let record = row.deserialize(None).map_err(|e| DatasetError::Parse {
            line: line_of(&row),
            message: parse_message(&e),
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Number of fields once trailing empty fields are dropped.
fn field_count(row: &StringRecord) -> usize {
    row.len() - row.iter().rev().take_while(|field| field.is_empty()).count()
}

fn line_of(row: &StringRecord) -> u64 {
    row.position().map_or(0, |p| p.line())
}

fn parse_message(error: &csv::Error) -> String {
    match error.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StandardDataset;

    #[test]
    fn test_reads_appointments() {
        let input = "id;last_name;date_time\n\
                     APT-001;Torres;2025-03-14T09:30\n\
                     APT-002 ; Cruz ; 2025-03-02T17:50 \n";
        let appointments = read_appointments(input.as_bytes()).unwrap();

        assert_eq!(appointments.len(), 2);
        assert_eq!(appointments[1].id, "APT-002");
        assert_eq!(appointments[1].last_name, "Cruz");
        assert_eq!(appointments[1].to_string(), "APT-002 Cruz (2025-03-02T17:50)");
    }

    #[test]
    fn test_header_text_is_not_matched() {
        let input = "id;apellido;prioridad\nPAT-0001;Soto;2\n";
        let patients = read_patients(input.as_bytes()).unwrap();
        assert_eq!(patients, vec![Patient::new("PAT-0001", "Soto", 2)]);
    }

    #[test]
    fn test_skips_blank_and_malformed_rows() {
        let input = "id;supply;stock\n\
                     \n\
                     ITEM-0001;Tiritas;5\n\
                     ITEM-0002;Tiritas\n\
                     ITEM-0003;Tiritas;4;extra\n\
                     \x20\x20\n\
                     ITEM-0004;Gasas 10x10;3\n";
        let items = read_inventory(input.as_bytes()).unwrap();

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["ITEM-0001", "ITEM-0004"]);
    }

    #[test]
    fn test_trailing_empty_fields_are_dropped() {
        let input = "id;supply;stock\n\
                     ITEM-0001;Tiritas;5;\n\
                     ITEM-0002;Tiritas;\n\
                     ITEM-0003;Gasas;2; ; \n\
                     ITEM-0004;;\n";
        let items = read_inventory(input.as_bytes()).unwrap();

        assert_eq!(
            items,
            vec![
                InventoryItem::new("ITEM-0001", "Tiritas", 5),
                InventoryItem::new("ITEM-0003", "Gasas", 2),
            ]
        );
    }

    #[test]
    fn test_header_only_is_empty() {
        let items = read_inventory("id;supply;stock\n".as_bytes()).unwrap();
        assert!(items.is_empty());
        let items = read_inventory("".as_bytes()).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_bad_integer_reports_line() {
        let input = "id;last_name;priority\nPAT-0001;Soto;2\nPAT-0002;Silva;high\n";
        let err = read_patients(input.as_bytes()).unwrap_err();

        match err {
            DatasetError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_timestamp_is_error() {
        let input = "id;last_name;date_time\nAPT-001;Torres;14/03/2025 09:30\n";
        assert!(matches!(
            read_appointments(input.as_bytes()),
            Err(DatasetError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = StandardDataset::PATIENTS.path_in(dir.path());

        let err = load_patients(&path).unwrap_err();
        assert!(matches!(err, DatasetError::File { .. }));
        assert!(err.to_string().contains("patients_500.csv"));
    }

    #[test]
    fn test_parse_error_in_file_names_path_and_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stock.csv");
        std::fs::write(&path, "id;supply;stock\nITEM-0001;Tiritas;-\n").unwrap();

        let message = load_inventory(&path).unwrap_err().to_string();
        assert!(message.contains("stock.csv"));
        assert!(message.contains("line 2"));
    }
}
