//! News module endpoints.

use crate::client::IpoClient;
use crate::errors::IpoError;
use crate::news::models::NewsItem;


const GET_NEWS: &str = "/news";

impl IpoClient {
    /// Retrieves the IPO news feed.
    ///
    /// **Endpoint:** `GET /news`
    pub async fn get_news(&self) -> Result<Vec<NewsItem>, IpoError> {
        self.get_json(GET_NEWS).await
    }
}
