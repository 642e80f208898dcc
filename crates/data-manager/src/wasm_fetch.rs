use futures::future::{FutureExt, LocalBoxFuture};
use jamcam_shared::{JamcamError, JamcamResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, DomException, Headers, Request, RequestInit, Response};

use crate::fetcher::Fetcher;

/// WASM-compatible HTTP client using browser's fetch API
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    timeout_ms: Option<u32>,
}

impl FetchClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout_ms: Option<u32>) -> Self {
        Self { timeout_ms }
    }

    /// Fetch a URL and return the body as text
    pub async fn fetch_text(&self, url: &str) -> JamcamResult<String> {
        let opts = RequestInit::new();
        opts.set_method("GET");

        let headers = Headers::new()?;
        headers.set("Accept", "application/json")?;
        opts.set_headers(&headers);

        let window = web_sys::window().ok_or_else(|| JamcamError::JsInterop {
            message: "No window object available".to_string(),
        })?;

        // Abort the request once the timeout elapses
        let timer = match self.timeout_ms {
            Some(ms) => {
                let delay = timeout_delay(ms)?;
                let abort_controller = AbortController::new()?;
                opts.set_signal(Some(&abort_controller.signal()));
                let on_timeout = Closure::once_into_js(move || abort_controller.abort());
                Some(window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    on_timeout.unchecked_ref(),
                    delay,
                )?)
            }
            None => None,
        };

        let request = Request::new_with_str_and_init(url, &opts)?;
        let result = JsFuture::from(window.fetch_with_request(&request)).await;

        if let Some(handle) = timer {
            window.clear_timeout_with_handle(handle);
        }

        let resp_value = result.map_err(|e| self.fetch_error(url, e))?;
        let resp: Response = resp_value.dyn_into()?;

        if !resp.ok() {
            return Err(JamcamError::HttpStatus {
                status: resp.status(),
                url: url.to_string(),
            });
        }

        let text = JsFuture::from(resp.text()?)
            .await
            .map_err(|e| self.fetch_error(url, e))?;

        text.as_string().ok_or_else(|| JamcamError::JsInterop {
            message: format!("Response body of {url} is not text"),
        })
    }

    fn fetch_error(&self, url: &str, err: JsValue) -> JamcamError {
        let aborted = err
            .dyn_ref::<DomException>()
            .map(|e| e.name() == "AbortError")
            .unwrap_or(false);

        match (aborted, self.timeout_ms) {
            (true, Some(duration_ms)) => JamcamError::Timeout {
                url: url.to_string(),
                duration_ms,
            },
            _ => JamcamError::Network {
                message: format!("{url}: {}", JamcamError::from(err)),
            },
        }
    }
}

/// `setTimeout` delay for `ms`; values past `i32::MAX` would wrap negative
/// and fire immediately
fn timeout_delay(ms: u32) -> JamcamResult<i32> {
    i32::try_from(ms).map_err(|_| JamcamError::InvalidConfig {
        message: format!("timeout of {ms}ms exceeds the largest timer delay"),
        field: Some("timeout_ms".to_string()),
    })
}

impl Fetcher for FetchClient {
    fn get<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, JamcamResult<String>> {
        self.fetch_text(url).boxed_local()
    }
}
