// Detail-payload field extraction.
//
// Everything here is defensive: a missing or oddly-shaped field degrades to
// its default and the rest of the listing carries on.

use serde_json::Value;

use crate::model::{Address, DetailAddress, GeoJson, GeoLocation, RawDetail, TagEntry};
use crate::vocab;

/// What the detail endpoint contributes to one listing. `default()` is the
/// "no enrichment data" state used when the detail fetch fails.
#[derive(Debug, Clone, Default)]
pub struct Enrichment {
    pub categories: Vec<String>,
    pub utilities: Vec<String>,
    pub address: Option<Address>,
    pub geojson: Option<GeoJson>,
    pub contact: Option<String>,
    pub description: Option<String>,
}

/// Extracts all enrichment fields from a detail payload. `full_address` is
/// the primary listing's raw address string, mirrored into the geojson.
pub fn extract(detail: &RawDetail, full_address: Option<&str>) -> Enrichment {
    let categories = map_tags(detail.categories.as_deref(), true);
    let utilities = map_tags(detail.utilities.as_deref(), false);

    let (address, geojson) = match detail.address.as_ref().and_then(parse_detail_address) {
        Some(detail_addr) => (
            Some(flatten_address(&detail_addr)),
            Some(build_geojson(&detail_addr, full_address)),
        ),
        None => (None, None),
    };

    Enrichment {
        categories,
        utilities,
        address,
        geojson,
        contact: detail.contact_number.as_ref().and_then(contact_string),
        description: detail.description.clone(),
    }
}

/// Maps raw tag entries to canonical tags. Unmapped labels are dropped;
/// category lists additionally drop the internal bookkeeping tags. Source
/// order and duplicates are preserved.
fn map_tags(entries: Option<&[TagEntry]>, exclude_bookkeeping: bool) -> Vec<String> {
    entries
        .unwrap_or_default()
        .iter()
        .filter_map(TagEntry::label)
        .filter_map(vocab::canonical_tag)
        .filter(|tag| !exclude_bookkeeping || !vocab::is_bookkeeping(tag))
        .map(str::to_string)
        .collect()
}

/// Only a well-formed address object counts; anything else is treated as
/// absent without raising.
fn parse_detail_address(value: &Value) -> Option<DetailAddress> {
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value.clone()).ok()
}

fn flatten_address(addr: &DetailAddress) -> Address {
    Address {
        street_id: addr.street_id.clone(),
        ward_id: addr.ward_id.clone(),
        district_id: addr.district_id.clone(),
        house_number: addr.house_number.clone(),
        province: addr.city_name.clone(),
        district: addr.district_name.clone(),
        ward: addr.ward_name.clone(),
        street: street_line(addr),
    }
}

fn build_geojson(addr: &DetailAddress, full_address: Option<&str>) -> GeoJson {
    GeoJson {
        kind: "Point".to_string(),
        coordinates: [addr.longitude, addr.latitude],
        location: GeoLocation {
            lat: addr.latitude,
            long: addr.longitude,
            street_id: addr.street_id.clone(),
            ward_id: addr.ward_id.clone(),
            district_id: addr.district_id.clone(),
            house_number: addr.house_number.clone(),
            province: addr.city_name.clone(),
            district: addr.district_name.clone(),
            ward: addr.ward_name.clone(),
            street: street_line(addr),
            full_address: full_address.map(String::from),
        },
    }
}

fn street_line(addr: &DetailAddress) -> String {
    format!(
        "{} {}",
        addr.house_number.as_deref().unwrap_or(""),
        addr.street_name.as_deref().unwrap_or("")
    )
    .trim()
    .to_string()
}

fn contact_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail(value: serde_json::Value) -> RawDetail {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn categories_accept_both_entry_shapes() {
        let detail = detail(json!({
            "categories": ["Nhà hàng", {"name": "Cà phê"}],
        }));
        let enrichment = extract(&detail, None);
        assert_eq!(enrichment.categories, vec!["restaurant", "cafe"]);
    }

    #[test]
    fn malformed_tag_entries_are_skipped() {
        let detail = detail(json!({
            "categories": [42, {"name": 7}, {"label": "Lẩu"}, "Lẩu"],
        }));
        let enrichment = extract(&detail, None);
        assert_eq!(enrichment.categories, vec!["hotpot"]);
    }

    #[test]
    fn bookkeeping_tags_never_surface_as_categories() {
        let detail = detail(json!({
            "categories": ["Dịch vụ", "Chưa phân loại", "Nhà hàng"],
            "utilities": ["Dịch vụ"],
        }));
        let enrichment = extract(&detail, None);
        assert_eq!(enrichment.categories, vec!["restaurant"]);
        // Utilities keep mapped tags even when they are bookkeeping ones.
        assert_eq!(enrichment.utilities, vec!["service"]);
    }

    #[test]
    fn unmapped_utilities_are_dropped() {
        let detail = detail(json!({
            "utilities": ["Wifi miễn phí", "Sân thượng", "Chỗ đậu xe"],
        }));
        let enrichment = extract(&detail, None);
        assert_eq!(enrichment.utilities, vec!["wifi", "parking"]);
    }

    #[test]
    fn duplicates_and_order_are_preserved() {
        let detail = detail(json!({
            "categories": ["Cà phê", "Nhà hàng", "Cà phê"],
        }));
        let enrichment = extract(&detail, None);
        assert_eq!(enrichment.categories, vec!["cafe", "restaurant", "cafe"]);
    }

    #[test]
    fn address_object_builds_both_views() {
        let detail = detail(json!({
            "address": {
                "streetId": 77,
                "wardId": 12,
                "districtId": 1,
                "houseNumber": "12",
                "streetName": "Lê Lợi",
                "wardName": "Phường Bến Thành",
                "districtName": "Quận 1",
                "cityName": "TP.HCM",
                "latitude": 10.762622,
                "longitude": 106.660172,
            },
        }));
        let enrichment = extract(&detail, Some("12 Lê Lợi, Quận 1, TP.HCM"));

        let address = enrichment.address.expect("flattened address");
        assert_eq!(address.street, "12 Lê Lợi");
        assert_eq!(address.province.as_deref(), Some("TP.HCM"));

        let geojson = enrichment.geojson.expect("geojson");
        assert_eq!(geojson.kind, "Point");
        // GeoJSON order: [lon, lat].
        assert_eq!(geojson.coordinates, [Some(106.660172), Some(10.762622)]);
        assert_eq!(
            geojson.location.full_address.as_deref(),
            Some("12 Lê Lợi, Quận 1, TP.HCM")
        );
    }

    #[test]
    fn non_object_address_yields_neither_view() {
        let enrichment = extract(&detail(json!({"address": "12 Lê Lợi"})), Some("x"));
        assert!(enrichment.address.is_none());
        assert!(enrichment.geojson.is_none());

        let enrichment = extract(&detail(json!({})), Some("x"));
        assert!(enrichment.address.is_none());
        assert!(enrichment.geojson.is_none());
    }

    #[test]
    fn contact_number_accepts_string_or_number() {
        let enrichment = extract(&detail(json!({"contactNumber": "0901234567"})), None);
        assert_eq!(enrichment.contact.as_deref(), Some("0901234567"));

        let enrichment = extract(&detail(json!({"contactNumber": 901234567})), None);
        assert_eq!(enrichment.contact.as_deref(), Some("901234567"));

        let enrichment = extract(&detail(json!({})), None);
        assert!(enrichment.contact.is_none());
    }
}
