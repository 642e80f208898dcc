//! HTTP seam used by the loaders
//!
//! Everything runs on the browser's single thread, so futures are local
//! (`!Send`) and borrowed for the duration of the request.

use futures::future::LocalBoxFuture;
use jamcam_shared::JamcamResult;
use serde::de::DeserializeOwned;

/// Issues GET requests and yields the response body
pub trait Fetcher {
    fn get<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, JamcamResult<String>>;
}

impl<T: Fetcher + ?Sized> Fetcher for std::rc::Rc<T> {
    fn get<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, JamcamResult<String>> {
        (**self).get(url)
    }
}

/// GET `url` and decode the body as JSON
pub async fn get_json<T, F>(fetcher: &F, url: &str) -> JamcamResult<T>
where
    T: DeserializeOwned,
    F: Fetcher + ?Sized,
{
    let body = fetcher.get(url).await?;
    let value = serde_json::from_str(&body)?;
    Ok(value)
}
