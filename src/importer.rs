// Tabular import path: an already-exported JSON table of free-text
// Vietnamese fields, run through the same normalizers as the live crawl.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::model::{Address, ImportError, Locate, NormalizedRecord, OpenHours};
use crate::{normalizer, storage};

/// One exported table row. Column names are the export's own; address may
/// come pre-split (`tinh`/`qh`/`px`/`street`) or as one free-text string.
/// `Image1`..`Image12` land in the flattened extras.
#[derive(Debug, Default, Deserialize)]
struct TableRow {
    name: Option<String>,
    #[serde(rename = "tinh")]
    province: Option<String>,
    #[serde(rename = "qh")]
    district: Option<String>,
    #[serde(rename = "px")]
    ward: Option<String>,
    street: Option<String>,
    address: Option<String>,
    categories: Option<String>,
    services: Option<String>,
    open_hour: Option<String>,
    rating: Option<f64>,
    count_comments: Option<i64>,
    price: Option<String>,
    avg_unit: Option<String>,
    url_address: Option<String>,
    phone_numbers: Option<Value>,
    description: Option<String>,
    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

const IMAGE_COLUMNS: usize = 12;

/// Reads the table at `input`, converts every row, writes the same record
/// schema the live crawl produces to `output`. Returns the record count.
pub fn process_table(input: &Path, output: &Path) -> Result<usize, ImportError> {
    let raw = fs::read_to_string(input)?;
    let rows: Vec<TableRow> = serde_json::from_str(&raw)?;
    info!("Importing {} table rows from {}", rows.len(), input.display());

    let records: Vec<NormalizedRecord> = rows.iter().map(convert_row).collect();
    storage::write_records(output, &records)?;
    Ok(records.len())
}

fn convert_row(row: &TableRow) -> NormalizedRecord {
    NormalizedRecord {
        name: row.name.clone(),
        address: Some(row_address(row)),
        locate: row
            .url_address
            .as_deref()
            .map(normalizer::extract_coordinates)
            .unwrap_or_else(Locate::unknown),
        geojson: None,
        imgs: row_images(row),
        rating: row.rating,
        rating_count: row.count_comments,
        district_name: row.district.clone(),
        city_name: row.province.clone(),
        // The export carries no vendor type; the original emitted "".
        business_type: Some(String::new()),
        open_hour: row
            .open_hour
            .as_deref()
            .map(normalizer::open_hours_from_text)
            .unwrap_or_else(OpenHours::default),
        price: Some(Value::from(
            row.price.as_deref().map(normalizer::parse_price).unwrap_or(0),
        )),
        avg_unit: row.avg_unit.clone(),
        categories: split_list(row.categories.as_deref(), '-'),
        phones: normalizer::phones_or_blank(row_phone(row).as_deref()),
        exts: split_list(row.services.as_deref(), ';'),
        description: row.description.clone(),
    }
}

/// Pre-split columns win; otherwise the free-text address is split
/// positionally. Absent columns become empty strings, matching the export.
fn row_address(row: &TableRow) -> Address {
    let has_columns = row.province.is_some()
        || row.district.is_some()
        || row.ward.is_some()
        || row.street.is_some();

    let (street, ward, district, province) = if has_columns {
        (
            row.street.clone().unwrap_or_default(),
            row.ward.clone().unwrap_or_default(),
            row.district.clone().unwrap_or_default(),
            row.province.clone().unwrap_or_default(),
        )
    } else {
        let parts = normalizer::split_address(row.address.as_deref().unwrap_or(""));
        (parts.street, parts.ward, parts.district, parts.province)
    };

    Address {
        street_id: None,
        ward_id: None,
        district_id: None,
        house_number: None,
        province: Some(province),
        district: Some(district),
        ward: Some(ward),
        street,
    }
}

fn row_images(row: &TableRow) -> Vec<String> {
    (1..=IMAGE_COLUMNS)
        .filter_map(|i| {
            row.extra
                .get(&format!("Image{i}"))
                .and_then(Value::as_str)
                .map(String::from)
        })
        .collect()
}

fn row_phone(row: &TableRow) -> Option<String> {
    match row.phone_numbers.as_ref()? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn split_list(raw: Option<&str>, separator: char) -> Vec<String> {
    match raw {
        Some(list) => list.split(separator).map(str::to_string).collect(),
        None => Vec::new(),
    }
}
