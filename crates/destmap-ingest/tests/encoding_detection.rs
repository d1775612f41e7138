//! End-to-end encoding detection on real files.

use std::fs;
use std::path::PathBuf;

use destmap_ingest::read_csv_table_detected;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).expect("write fixture");
    path
}

#[test]
fn reads_utf8_file() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "utf8.csv", "Destination\nSão Paulo\n".as_bytes());

    let table = read_csv_table_detected(&path).expect("read utf-8");
    assert_eq!(table.headers, vec!["Destination"]);
    assert_eq!(table.rows, vec![vec!["São Paulo".to_string()]]);
}

#[test]
fn reads_utf8_file_with_bom() {
    let dir = TempDir::new().unwrap();
    let mut bytes = vec![0xef, 0xbb, 0xbf];
    bytes.extend_from_slice(b"Destination\nParis\n");
    let path = write_fixture(&dir, "bom.csv", &bytes);

    let table = read_csv_table_detected(&path).expect("read utf-8 bom");
    // The BOM must not leak into the first header.
    assert_eq!(table.headers, vec!["Destination"]);
}

#[test]
fn reads_windows_1252_file() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "legacy.csv", b"Destination,Fare\nM\xe1laga,120\n");

    let table = read_csv_table_detected(&path).expect("read windows-1252");
    assert_eq!(table.rows, vec![vec!["Málaga".to_string(), "120".to_string()]]);
}

#[test]
fn reads_utf16_le_file() {
    let dir = TempDir::new().unwrap();
    let mut bytes = vec![0xff, 0xfe];
    for unit in "Destination\nJFK\n".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let path = write_fixture(&dir, "utf16.csv", &bytes);

    let table = read_csv_table_detected(&path).expect("read utf-16 le");
    assert_eq!(table.headers, vec!["Destination"]);
    assert_eq!(table.rows, vec![vec!["JFK".to_string()]]);
}
