//! Client for the recent-counts endpoint

use jamcam_shared::{CountsResponse, JamcamError, JamcamResult};
use url::Url;

use crate::fetcher::{get_json, Fetcher};

/// Counts URL for one camera: `<base>?id=<raw_id>`
pub fn counts_url(base: &str, raw_id: &str) -> JamcamResult<String> {
    let url = Url::parse_with_params(base, &[("id", raw_id)]).map_err(|e| {
        JamcamError::InvalidConfig {
            message: format!("Invalid counts URL '{base}': {e}"),
            field: Some("counts_url".to_string()),
        }
    })?;
    Ok(url.into())
}

/// Fetch the last 12 hours of counts for the camera `raw_id`
pub async fn fetch_counts<F>(fetcher: &F, base: &str, raw_id: &str) -> JamcamResult<CountsResponse>
where
    F: Fetcher + ?Sized,
{
    let url = counts_url(base, raw_id)?;
    log::debug!("Fetching counts from {url}");
    get_json(fetcher, &url).await
}
