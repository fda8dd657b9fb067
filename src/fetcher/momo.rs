// MoMo "thổ địa" endpoints. Both return JSON; the recommend endpoint is
// batch-fatal on failure, the detail endpoint is handled per item upstream.

use reqwest::Client;
use serde::Deserialize;

use crate::fetcher::ListingSource;
use crate::model::{FetchError, RawDetail, RawListing};

const RECOMMEND_ENDPOINT: &str = "https://business.momo.vn/api/search/v2.1/tdmm/oas/recommend";
const DETAIL_HOST: &str = "https://thodia.momo.vn";
// Build id baked into the detail URL by the vendor's Next.js export.
const DETAIL_BUILD_ID: &str = "Ngjmk6dQuP_03fqJ-1q8t";

pub struct MomoApi {
    client: Client,
}

impl MomoApi {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) ThodiaCrawler/0.1")
            .build()
            .unwrap();

        Self { client }
    }

    fn recommend_url(&self, page_size: u32) -> String {
        format!(
            "{RECOMMEND_ENDPOINT}?language=vi&pageSize={page_size}&pageNumber=1&isPromotion=false"
        )
    }

    fn detail_url(&self, oa_id: &str) -> String {
        format!("{DETAIL_HOST}/_next/data/{DETAIL_BUILD_ID}/oa/{oa_id}.json?oaId={oa_id}")
    }
}

#[derive(Debug, Default, Deserialize)]
struct RecommendEnvelope {
    data: Option<RecommendData>,
}

#[derive(Debug, Default, Deserialize)]
struct RecommendData {
    content: Option<Vec<RawListing>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetailEnvelope {
    page_props: Option<PageProps>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageProps {
    oa_data: Option<RawDetail>,
}

#[async_trait::async_trait]
impl ListingSource for MomoApi {
    async fn fetch_page(&self, page_size: u32) -> Result<Vec<RawListing>, FetchError> {
        let response = self.client.get(self.recommend_url(page_size)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "unknown".into());
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let envelope: RecommendEnvelope = serde_json::from_str(&body)?;
        // A missing data.content path means an empty page, not an error.
        Ok(envelope
            .data
            .unwrap_or_default()
            .content
            .unwrap_or_default())
    }

    async fn fetch_detail(&self, oa_id: &str) -> Result<RawDetail, FetchError> {
        let response = self.client.get(self.detail_url(oa_id)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "unknown".into());
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let envelope: DetailEnvelope = serde_json::from_str(&body)?;
        Ok(envelope
            .page_props
            .unwrap_or_default()
            .oa_data
            .unwrap_or_default())
    }
}
