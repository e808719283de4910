//! Integration tests for format dispatch and the on-disk loaders.

use std::io::Write;
use std::path::PathBuf;

use lifex_model::{PipelineError, WIDE_KEY_COLUMN};

use lifex_ingest::load_table;

fn fixture_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}

fn write_zip(dir: &tempfile::TempDir, name: &str, member: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let file = std::fs::File::create(&path).expect("create zip");
    let mut writer = zip::ZipWriter::new(file);
    writer
        .start_file(member, zip::write::SimpleFileOptions::default())
        .expect("start zip member");
    writer.write_all(contents.as_bytes()).expect("write zip member");
    writer.finish().expect("finish zip");
    path
}

#[test]
fn loads_wide_tsv() {
    let dir = fixture_dir();
    let path = write_file(
        &dir,
        "eu_life_expectancy_raw.tsv",
        "unit,sex,age,geo\\time\t2020\t2021\nYR,M,Y_LT1,PT\t78.5 e\t:\nYR,F,Y_LT1,FR\t85.1\t85.3 b\n",
    );

    let table = load_table(&path).unwrap();
    assert_eq!(table.headers[0], WIDE_KEY_COLUMN);
    assert!(table.is_wide());
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0][1], "78.5 e");
    assert_eq!(table.rows[0][2], ":");
}

#[test]
fn loads_long_csv() {
    let dir = fixture_dir();
    let path = write_file(
        &dir,
        "cleaned.csv",
        "unit,sex,age,region,year,life_expectancy\nYR,M,Y_LT1,PT,2020,78.5\n",
    );

    let table = load_table(&path).unwrap();
    assert_eq!(table.headers.len(), 6);
    assert!(!table.is_wide());
    assert_eq!(table.rows, vec![vec!["YR", "M", "Y_LT1", "PT", "2020", "78.5"]]);
}

#[test]
fn loads_zipped_json_records() {
    let dir = fixture_dir();
    let path = write_zip(
        &dir,
        "eurostat_life_expect.zip",
        "eurostat_life_expect.json",
        r#"[
            {"unit": "YR", "sex": "M", "age": "Y_LT1", "region": "PT",
             "year": 2020, "life_expectancy": 78.5},
            {"unit": "YR", "sex": "F", "age": "Y_LT1", "region": "FR",
             "year": 2020, "life_expectancy": 85.1}
        ]"#,
    );

    let table = load_table(&path).unwrap();
    assert_eq!(table.rows.len(), 2);
    let region = table.column_index("region").unwrap();
    let value = table.column_index("life_expectancy").unwrap();
    assert_eq!(table.rows[0][region], "PT");
    assert_eq!(table.rows[1][value], "85.1");
}

#[test]
fn empty_zip_archive_is_a_named_error() {
    let dir = fixture_dir();
    let path = dir.path().join("empty.zip");
    let file = std::fs::File::create(&path).expect("create zip");
    let writer = zip::ZipWriter::new(file);
    writer.finish().expect("finish zip");

    assert!(matches!(
        load_table(&path),
        Err(PipelineError::EmptyArchive { .. })
    ));
}

#[test]
fn unsupported_extension_lists_supported_ones() {
    let dir = fixture_dir();
    let path = write_file(&dir, "table.xlsx", "not really a spreadsheet");

    let error = load_table(&path).unwrap_err();
    let message = error.to_string();
    assert!(message.contains(".xlsx"));
    assert!(message.contains(".tsv, .csv, .zip"));
}

#[test]
fn suffix_dispatch_is_case_insensitive() {
    let dir = fixture_dir();
    let path = write_file(&dir, "RAW.TSV", "a\tb\n1\t2\n");

    let table = load_table(&path).unwrap();
    assert_eq!(table.rows, vec![vec!["1", "2"]]);
}

#[test]
fn loader_rereads_storage_on_every_call() {
    let dir = fixture_dir();
    let path = write_file(&dir, "raw.csv", "a,b\n1,2\n");
    assert_eq!(load_table(&path).unwrap().rows.len(), 1);

    std::fs::write(&path, "a,b\n1,2\n3,4\n").expect("rewrite fixture");
    assert_eq!(load_table(&path).unwrap().rows.len(), 2);
}
