use crate::model::{FetchError, RawDetail, RawListing};

#[async_trait::async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch_page(&self, page_size: u32) -> Result<Vec<RawListing>, FetchError>;
    async fn fetch_detail(&self, oa_id: &str) -> Result<RawDetail, FetchError>;
}
