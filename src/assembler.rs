// Composes one normalized record from a listing and its enrichment.

use crate::enricher::Enrichment;
use crate::model::{CoordValue, Locate, NormalizedRecord, RawListing};
use crate::{normalizer, vocab};

/// Pure assembly, no I/O. The record keeps the listing's own coordinates in
/// `locate`; the detail address only feeds `address`/`geojson`.
pub fn assemble(listing: &RawListing, enrichment: Enrichment) -> NormalizedRecord {
    let business_type = vocab::infer_type(&enrichment.categories)
        .map(str::to_string)
        .or_else(|| listing.raw_type.clone());

    let location = listing.location.as_ref();

    NormalizedRecord {
        name: listing.name.clone(),
        address: enrichment.address,
        locate: Locate {
            lat: location.and_then(|l| l.lat).map(CoordValue::Degrees),
            long: location.and_then(|l| l.lon).map(CoordValue::Degrees),
        },
        geojson: enrichment.geojson,
        imgs: listing
            .banner_img_urls
            .iter()
            .filter_map(|img| img.original_url.clone())
            .collect(),
        rating: listing.rating,
        rating_count: listing.rating_count,
        district_name: listing.district_name.clone(),
        city_name: listing.city_name.clone(),
        business_type,
        open_hour: normalizer::open_hours_from_entries(&listing.opening_times),
        price: listing.avg_price.clone(),
        avg_unit: listing.avg_unit.clone(),
        categories: enrichment.categories,
        phones: normalizer::phones_or_empty(enrichment.contact.as_deref()),
        exts: enrichment.utilities,
        description: enrichment.description,
    }
}
