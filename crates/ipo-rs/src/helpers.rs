use crate::errors::IpoError;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
/// Helper functions for making HTTP requests against the tracker API
use url::Url;


/// Join the configured base URL and an endpoint path into a validated URL
pub(crate) fn build_url(base_url: &str, path: &str) -> Result<Url, IpoError> {
    let base = base_url.trim_end_matches('/');
    let url = format!("{}{}", base, path);
    Url::parse(&url).map_err(|e| IpoError::Other(format!("invalid url {url}: {e}")))
}


/// Turn a response into its body text, mapping non-2xx statuses to errors
async fn read_body(resp: Response) -> Result<String, IpoError> {
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(IpoError::Status {
            code: status.as_u16(),
            body,
        });
    }
    Ok(body)
}


/// Make a GET request
pub(crate) async fn get(
    http_client: &Client,
    base_url: &str,
    path: &str,
) -> Result<String, IpoError> {
    let url = build_url(base_url, path)?;
    tracing::debug!(%url, "GET");
    let resp = http_client.get(url).send().await?;
    read_body(resp).await
}


/// Make a POST request with a JSON body
pub(crate) async fn post<T>(
    http_client: &Client,
    base_url: &str,
    path: &str,
    json_body: &T,
) -> Result<String, IpoError>
where
    T: serde::Serialize + ?Sized,
{
    let url = build_url(base_url, path)?;
    tracing::debug!(%url, "POST");
    let resp = http_client.post(url).json(json_body).send().await?;
    read_body(resp).await
}


/// Decode a JSON body, keeping the raw text in the error for diagnosis
pub(crate) fn parse_body<R>(resp: &str) -> Result<R, IpoError>
where
    R: DeserializeOwned,
{
    serde_json::from_str(resp).map_err(|e| {
        IpoError::Other(format!(
            "Invalid Parsing response format: Parse error: {e}. Response: {resp}"
        ))
    })
}
