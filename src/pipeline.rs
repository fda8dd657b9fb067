// Batch pipeline: one page fetch, then per-listing enrichment fan-out.
//
// The page fetch is fatal for the run. Everything after it is per-item: a
// failed detail fetch costs that listing its enrichment fields, never its
// place in the output. join_all keeps results in listing order regardless
// of completion order.

use futures::future::join_all;
use tracing::{info, warn};

use crate::assembler;
use crate::enricher::{self, Enrichment};
use crate::fetcher::ListingSource;
use crate::model::{FetchError, NormalizedRecord, RawListing};

pub struct Pipeline<S> {
    source: S,
}

impl<S: ListingSource> Pipeline<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Runs the full crawl for one page. Output length always equals the
    /// number of listings the page returned.
    pub async fn run(&self, page_size: u32) -> Result<Vec<NormalizedRecord>, FetchError> {
        info!("Fetching listing page (pageSize = {page_size})...");
        let listings = self.source.fetch_page(page_size).await?;
        info!("Listings to enrich: {}", listings.len());

        let tasks: Vec<_> = listings
            .iter()
            .map(|listing| self.enrich_one(listing))
            .collect();
        Ok(join_all(tasks).await)
    }

    async fn enrich_one(&self, listing: &RawListing) -> NormalizedRecord {
        let enrichment = match listing.id_string() {
            Some(oa_id) => match self.source.fetch_detail(&oa_id).await {
                Ok(detail) => enricher::extract(&detail, listing.address.as_deref()),
                Err(e) => {
                    warn!("Detail fetch failed for {oa_id}: {e}");
                    Enrichment::default()
                }
            },
            None => {
                warn!(
                    "Listing {:?} has no usable id, skipping enrichment",
                    listing.name
                );
                Enrichment::default()
            }
        };
        assembler::assemble(listing, enrichment)
    }
}
