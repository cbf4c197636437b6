//! JSON fetcher over the browser's fetch API
//!
//! Single attempt per invocation: no retries, no timeout, no caching. A
//! non-success status is surfaced as [`ChartsError::Http`] instead of
//! attempting to parse an error body as chart data.

use ctc_charts_shared::{ChartsError, ChartsResult};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// HTTP client bound to the dashboard's own origin
pub struct FetchClient {
    base_url: String,
}

impl FetchClient {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch `{base_url}{path}` and deserialize the JSON body.
    pub async fn fetch_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> ChartsResult<T> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("fetching {url}");

        let opts = RequestInit::new();
        opts.set_method("GET");

        let headers = Headers::new().map_err(|_| ChartsError::network("Failed to build headers"))?;
        headers
            .set("Accept", "application/json")
            .map_err(|_| ChartsError::network("Failed to set Accept header"))?;
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(&url, &opts)
            .map_err(|_| ChartsError::network(format!("Failed to create request for {url}")))?;

        let window = web_sys::window()
            .ok_or_else(|| ChartsError::network("No window object available"))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|_| ChartsError::network(format!("Fetch failed for {url}")))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| ChartsError::network("Invalid response type"))?;

        if !resp.ok() {
            return Err(ChartsError::Http {
                status: resp.status(),
            });
        }

        let text_promise = resp
            .text()
            .map_err(|_| ChartsError::network("Failed to read response body"))?;
        let text_value = JsFuture::from(text_promise)
            .await
            .map_err(|_| ChartsError::network("Failed to read response body"))?;
        let body = text_value
            .as_string()
            .ok_or_else(|| ChartsError::network("Response body is not text"))?;

        // serde_json errors split into Parse (syntax) and Shape (fields)
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn missing_endpoint_is_an_error_not_a_panic() {
        let client = FetchClient::new(String::new());
        let result = client
            .fetch_json::<serde_json::Value>("/api/does_not_exist")
            .await;
        assert!(result.is_err());
    }
}
