use std::time::Duration;

use log::debug;

use crate::error::{DvError, DvResult};

pub async fn http_post(
    url: &str,
    path: Option<&str>,
    body: &serde_json::Value,
    timeout_secs: u64,
) -> DvResult<Vec<u8>> {
    let request_url = if let Some(path) = path {
        &join_url(url, path)?
    } else {
        url
    };

    let client = reqwest::Client::new();
    let response = client
        .post(request_url)
        .timeout(Duration::from_secs(timeout_secs))
        .json(body)
        .send()
        .await?;

    if response.status().is_success() {
        Ok(response.bytes().await?.to_vec())
    } else {
        debug!("[HTTP Status Error] {response:?}");

        Err(DvError::HttpStatusError {
            status: response.status().to_string(),
            request: request_url.to_string(),
        })
    }
}

pub fn join_url(base_url: &str, extend_url: &str) -> Result<String, url::ParseError> {
    let mut url = url::Url::parse(base_url)?;

    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(extend_url.split('/').filter(|s| !s.is_empty()));

    Ok(url.to_string())
}
