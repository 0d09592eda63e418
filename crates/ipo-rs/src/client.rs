use crate::errors::IpoError;
use crate::helpers;
use reqwest::Client;
use serde::de::DeserializeOwned;


// Default API location for a locally running tracker backend
const IPO_API: &str = "http://localhost:8000";


/// Main client for interacting with the IPO tracker API.
///
/// Every endpoint is public, so the client carries no credentials.
/// Create a client with [`IpoClient::new`] and call the endpoint methods.
///
/// # Available Endpoint Categories
///
/// ## IPOs
/// - [`get_ipos`](IpoClient::get_ipos) - All tracked listings
/// - [`get_ipo`](IpoClient::get_ipo) - One listing with subscription detail
/// - [`vote`](IpoClient::vote) - Submit a bullish/bearish sentiment vote
///
/// ## Market
/// - [`get_market_indices`](IpoClient::get_market_indices) - Index ticker
///
/// ## News
/// - [`get_news`](IpoClient::get_news) - IPO news feed
///
/// ## Predictors
/// - [`predict_profit`](IpoClient::predict_profit) - Listing-gain estimate
/// - [`predict_allotment`](IpoClient::predict_allotment) - Allotment chance
#[derive(Debug, Clone)]
pub struct IpoClient {
    pub(crate) http_client: Client,
    pub(crate) base_url: String,
}


impl Default for IpoClient {
    fn default() -> Self {
        Self::new()
    }
}


impl IpoClient {
    /// Create a new IpoClient against the default local API
    pub fn new() -> IpoClient {
        IpoClient {
            http_client: Client::new(),
            base_url: IPO_API.to_string(),
        }
    }


    /// Create a new IpoClient with a custom API base URL
    pub fn new_with_config(configuration: Option<String>) -> IpoClient {
        IpoClient {
            http_client: Client::new(),
            base_url: configuration.unwrap_or_else(|| IPO_API.to_string()),
        }
    }


    pub fn base_url(&self) -> &str {
        &self.base_url
    }


    /// Wrapper for GET requests
    pub async fn get(&self, path: &str) -> Result<String, IpoError> {
        helpers::get(&self.http_client, &self.base_url, path).await
    }


    /// Wrapper for POST requests with a JSON body
    pub async fn post<T>(&self, path: &str, json_body: &T) -> Result<String, IpoError>
    where
        T: serde::Serialize + ?Sized,
    {
        helpers::post(&self.http_client, &self.base_url, path, json_body).await
    }


    pub(crate) async fn get_json<R>(&self, path: &str) -> Result<R, IpoError>
    where
        R: DeserializeOwned,
    {
        let resp = self.get(path).await?;
        helpers::parse_body(&resp)
    }


    pub(crate) async fn post_json<T, R>(&self, path: &str, json_body: &T) -> Result<R, IpoError>
    where
        T: serde::Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let resp = self.post(path, json_body).await?;
        helpers::parse_body(&resp)
    }
}
