//! Edge case tests for table loading

use tabrecon::{loader, recon, TabreconError, Value};

use crate::common::TestFixture;

#[test]
fn test_missing_csv_is_not_found() {
    let fixture = TestFixture::new().unwrap();
    let err = loader::load_csv(&fixture.path("nope.csv")).unwrap_err();
    assert!(matches!(err, TabreconError::NotFound { .. }));
}

#[test]
fn test_missing_workbook_is_not_found() {
    let fixture = TestFixture::new().unwrap();
    let err = loader::load_excel(&fixture.path("nope.xlsx"), "Sheet1").unwrap_err();
    assert!(matches!(err, TabreconError::NotFound { .. }));
}

#[test]
fn test_ragged_csv_is_parse_error() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_csv_raw("ragged.csv", "id,name\n1,a\n2,b,extra\n")
        .unwrap();
    let err = loader::load_csv(&path).unwrap_err();
    assert!(matches!(err, TabreconError::Parse { .. }));
}

#[test]
fn test_missing_sheet_is_parse_error() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_xlsx("book.xlsx", &[("Data", vec![vec!["id"], vec!["1"]])])
        .unwrap();
    let err = loader::load_excel(&path, "Other").unwrap_err();
    assert!(matches!(err, TabreconError::Parse { .. }));
}

#[test]
fn test_sheet_names_are_case_sensitive() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_xlsx("book.xlsx", &[("Data", vec![vec!["id"], vec!["1"]])])
        .unwrap();
    assert!(loader::load_excel(&path, "data").is_err());
    assert!(loader::load_excel(&path, "Data").is_ok());
}

#[test]
fn test_empty_sheet_is_parse_error() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_xlsx("empty.xlsx", &[("Data", vec![])]).unwrap();
    let err = loader::load_excel(&path, "Data").unwrap_err();
    assert!(matches!(err, TabreconError::Parse { .. }));
}

#[test]
fn test_header_only_csv_loads_as_empty_table() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_csv("header.csv", &[vec!["id", "name"]]).unwrap();
    let table = loader::load_csv(&path).unwrap();
    assert_eq!(table.columns, vec!["id", "name"]);
    assert_eq!(table.row_count(), 0);
}

#[test]
fn test_header_only_inputs_reconcile_to_empty_result() {
    let fixture = TestFixture::new().unwrap();
    let file1 = fixture.create_csv("a.csv", &[vec!["id"]]).unwrap();
    let file2 = fixture.create_csv("b.csv", &[vec!["id"]]).unwrap();

    let table_a = loader::load_csv(&file1).unwrap();
    let table_b = loader::load_csv(&file2).unwrap();
    let result = recon::reconcile(&table_a, &table_b, "id").unwrap();

    assert_eq!(result.table.row_count(), 0);
    assert_eq!(result.table.columns, vec!["id", "changes"]);
}

#[test]
fn test_quoted_fields_and_embedded_commas() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_csv_raw(
            "quoted.csv",
            "id,notes\n1,\"has, comma\"\n2,\"has \"\"quotes\"\"\"\n",
        )
        .unwrap();
    let table = loader::load_csv(&path).unwrap();
    assert_eq!(table.rows[0][1], Value::Text("has, comma".to_string()));
    assert_eq!(table.rows[1][1], Value::Text("has \"quotes\"".to_string()));
}

#[test]
fn test_csv_cell_typing() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_csv(
            "typed.csv",
            &[
                vec!["id", "price", "label", "note"],
                vec!["1", "19.99", "widget", ""],
            ],
        )
        .unwrap();
    let table = loader::load_csv(&path).unwrap();
    assert_eq!(table.rows[0][0], Value::Int(1));
    assert_eq!(table.rows[0][1], Value::Float(19.99));
    assert_eq!(table.rows[0][2], Value::Text("widget".to_string()));
    assert_eq!(table.rows[0][3], Value::Null);
}

#[test]
fn test_unicode_keys_compare_exactly() {
    let fixture = TestFixture::new().unwrap();
    let file1 = fixture
        .create_csv("a.csv", &[vec!["name"], vec!["café"], vec!["München"]])
        .unwrap();
    let file2 = fixture
        .create_csv("b.csv", &[vec!["name"], vec!["café"]])
        .unwrap();

    let table_a = loader::load_csv(&file1).unwrap();
    let table_b = loader::load_csv(&file2).unwrap();
    let result = recon::reconcile(&table_a, &table_b, "name").unwrap();

    assert_eq!(result.deleted, 1);
    assert_eq!(result.unchanged, 1);
}

#[test]
fn test_blank_cells_in_excel_rows_are_null() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_xlsx(
            "gaps.xlsx",
            &[(
                "Data",
                vec![vec!["id", "name"], vec!["1", ""], vec!["2", "x"]],
            )],
        )
        .unwrap();
    let table = loader::load_excel(&path, "Data").unwrap();
    assert_eq!(table.rows[0][1], Value::Null);
    assert_eq!(table.rows[1][1], Value::Text("x".to_string()));
}
