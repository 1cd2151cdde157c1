use crate::data::clean::load_listings;
use crate::domain::affordability::{annotate, Salary};
use crate::router::handle;
use crate::spreadsheets::export_listings_xlsx;
use crate::tests::utils::{get, test_state, LISTINGS_CSV};
use std::io::Read;

#[test]
fn export_downloads_a_workbook() {
    let (state, _) = test_state();

    let mut resp = handle(get("/export.xlsx?salary=45000&affordable_only=on"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["Content-Type"],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(
        resp.headers()["Content-Disposition"],
        "attachment; filename=\"nyc_listings_affordable.xlsx\""
    );

    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    // XLSX is a zip archive.
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn export_without_filter_uses_plain_name() {
    let (state, _) = test_state();

    let resp = handle(get("/export.xlsx"), &state).unwrap();

    assert_eq!(
        resp.headers()["Content-Disposition"],
        "attachment; filename=\"nyc_listings.xlsx\""
    );
}

#[test]
fn workbook_builds_for_empty_selection() {
    let set = load_listings(LISTINGS_CSV).unwrap();
    let rows = annotate(&set.listings, Salary::new(0.0));

    let none: Vec<_> = rows.into_iter().filter(|r| r.affordability.is_affordable()).collect();
    let buffer = export_listings_xlsx(&none).unwrap();

    assert!(buffer.starts_with(b"PK"));
}
