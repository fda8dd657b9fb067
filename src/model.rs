// Core structs: raw vendor payloads and the normalized output record.
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// One entry from the paginated recommend endpoint, before enrichment.
/// Every field is optional; the vendor omits freely.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListing {
    pub id: Option<Value>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub location: Option<ListingLocation>,
    pub rating: Option<f64>,
    pub rating_count: Option<i64>,
    pub district_name: Option<String>,
    pub city_name: Option<String>,
    #[serde(rename = "type")]
    pub raw_type: Option<String>,
    #[serde(default)]
    pub banner_img_urls: Vec<BannerImg>,
    pub avg_price: Option<Value>,
    pub avg_unit: Option<String>,
    #[serde(default)]
    pub opening_times: Vec<OpeningTime>,
}

impl RawListing {
    /// Id rendered for the detail URL. Vendor ids arrive as strings or
    /// numbers; anything else means the listing cannot be enriched.
    pub fn id_string(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingLocation {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerImg {
    pub original_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningTime {
    pub day_of_week: Option<i64>,
    #[serde(default)]
    pub times: Vec<TimeRange>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// Per-listing enrichment payload (`pageProps.oaData`). May be entirely
/// absent when the detail fetch fails; every consumer must cope with that.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDetail {
    pub categories: Option<Vec<TagEntry>>,
    pub utilities: Option<Vec<TagEntry>>,
    pub address: Option<Value>,
    pub contact_number: Option<Value>,
    pub description: Option<String>,
}

/// Category/utility list entries come as bare strings or `{name}` objects.
/// Anything that yields no string label is skipped silently.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TagEntry {
    Labeled { name: Value },
    Bare(Value),
}

impl TagEntry {
    pub fn label(&self) -> Option<&str> {
        match self {
            TagEntry::Labeled { name } => name.as_str(),
            TagEntry::Bare(value) => value.as_str(),
        }
    }
}

/// The detail payload's structured address. Only a well-formed object
/// counts; see `enricher`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailAddress {
    pub street_id: Option<Value>,
    pub ward_id: Option<Value>,
    pub district_id: Option<Value>,
    pub house_number: Option<String>,
    pub street_name: Option<String>,
    pub ward_name: Option<String>,
    pub district_name: Option<String>,
    pub city_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Final output unit. Declaration order is the serialization order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecord {
    pub name: Option<String>,
    pub address: Option<Address>,
    pub locate: Locate,
    pub geojson: Option<GeoJson>,
    pub imgs: Vec<String>,
    pub rating: Option<f64>,
    pub rating_count: Option<i64>,
    pub district_name: Option<String>,
    pub city_name: Option<String>,
    #[serde(rename = "type")]
    pub business_type: Option<String>,
    pub open_hour: OpenHours,
    pub price: Option<Value>,
    pub avg_unit: Option<String>,
    pub categories: Vec<String>,
    pub phones: Vec<String>,
    pub exts: Vec<String>,
    pub description: Option<String>,
}

/// Flattened detail address for the output record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street_id: Option<Value>,
    pub ward_id: Option<Value>,
    pub district_id: Option<Value>,
    pub house_number: Option<String>,
    pub province: Option<String>,
    pub district: Option<String>,
    pub ward: Option<String>,
    pub street: String,
}

/// A coordinate is a number when known, the empty string when the import
/// path could not find one. `None` serializes to null (live path, vendor
/// omitted the value). Empty string and 0 are distinct on purpose.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CoordValue {
    Degrees(f64),
    Placeholder(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Locate {
    pub lat: Option<CoordValue>,
    pub long: Option<CoordValue>,
}

impl Locate {
    /// The import path's "unknown" sentinel: empty strings, not nulls.
    pub fn unknown() -> Self {
        Self {
            lat: Some(CoordValue::Placeholder(String::new())),
            long: Some(CoordValue::Placeholder(String::new())),
        }
    }
}

/// GeoJSON Point built from the detail address. Coordinate order is
/// [longitude, latitude].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoJson {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: [Option<f64>; 2],
    pub location: GeoLocation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoLocation {
    pub lat: Option<f64>,
    pub long: Option<f64>,
    pub street_id: Option<Value>,
    pub ward_id: Option<Value>,
    pub district_id: Option<Value>,
    pub house_number: Option<String>,
    pub province: Option<String>,
    pub district: Option<String>,
    pub ward: Option<String>,
    pub street: String,
    pub full_address: Option<String>,
}

/// Opening hours keyed by weekday. Always carries all seven days; a day
/// without entries is an empty list, never a missing key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OpenHours {
    pub monday: Vec<String>,
    pub tuesday: Vec<String>,
    pub wednesday: Vec<String>,
    pub thursday: Vec<String>,
    pub friday: Vec<String>,
    pub saturday: Vec<String>,
    pub sunday: Vec<String>,
}

impl OpenHours {
    pub fn day_mut(&mut self, day: &str) -> Option<&mut Vec<String>> {
        match day {
            "monday" => Some(&mut self.monday),
            "tuesday" => Some(&mut self.tuesday),
            "wednesday" => Some(&mut self.wednesday),
            "thursday" => Some(&mut self.thursday),
            "friday" => Some(&mut self.friday),
            "saturday" => Some(&mut self.saturday),
            "sunday" => Some(&mut self.sunday),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("listing API returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("could not read table: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed table: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
