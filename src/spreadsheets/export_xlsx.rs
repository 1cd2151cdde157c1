use crate::domain::affordability::AnnotatedListing;
use crate::errors::ServerError;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

const HEADERS: [&str; 11] = [
    "Price",
    "Price / Bed",
    "Price / Bed (scale)",
    "Lat",
    "Lon",
    "Borough",
    "Nearest Station",
    "Distance (km)",
    "Solo Salary",
    "Unit Salary",
    "Affordability",
];

fn xlsx_err(what: &str) -> impl Fn(XlsxError) -> ServerError + '_ {
    move |e| ServerError::XlsxError(format!("Failed to write {what}: {e}"))
}

/// Build a workbook of the listings currently shown on the dashboard.
pub fn export_listings_xlsx(rows: &[AnnotatedListing<'_>]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(xlsx_err(header))?;
    }

    for (i, row) in rows.iter().enumerate() {
        write_row(worksheet, (i + 1) as u32, row)?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

fn write_row(ws: &mut Worksheet, r: u32, row: &AnnotatedListing<'_>) -> Result<(), ServerError> {
    let l = row.listing;

    let numbers = [
        (0, l.price, "price"),
        (1, l.price_per_bed, "price per bed"),
        (2, l.price_per_bed_scale, "price scale"),
        (3, l.lat, "lat"),
        (4, l.lon, "lon"),
        (7, l.distance_between, "distance"),
        (8, l.solo_salary, "solo salary"),
        (9, l.unit_salary, "unit salary"),
    ];
    for (col, value, what) in numbers {
        ws.write_number(r, col, value).map_err(xlsx_err(what))?;
    }

    ws.write_string(r, 5, &l.borough).map_err(xlsx_err("borough"))?;
    ws.write_string(r, 6, &l.nearest_station)
        .map_err(xlsx_err("station"))?;
    ws.write_string(r, 10, row.affordability.label())
        .map_err(xlsx_err("affordability"))?;

    Ok(())
}
