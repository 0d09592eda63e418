//! IPOs module endpoints.
//!
//! Listing, detail and sentiment vote endpoints.
//!
//! # Usage
//!
//! All endpoint methods are available on [`IpoClient`](crate::client::IpoClient).

use crate::client::IpoClient;
use crate::errors::IpoError;
use crate::ipos::models::{Ipo, IpoDetail, IpoId, VoteRequest, VoteResponse, VoteType};

const GET_IPOS: &str = "/ipos";
const GET_IPO: &str = "/ipos/{}";
const POST_VOTE: &str = "/ipos/{}/vote";

impl IpoClient {
    /// Retrieves every tracked IPO listing.
    ///
    /// **Endpoint:** `GET /ipos`
    ///
    /// # Returns
    /// The full collection. Ordering carries no meaning.
    pub async fn get_ipos(&self) -> Result<Vec<Ipo>, IpoError> {
        self.get_json(GET_IPOS).await
    }


    /// Retrieves one listing with its subscription and GMP history detail.
    ///
    /// **Endpoint:** `GET /ipos/{id}`
    pub async fn get_ipo(&self, id: &IpoId) -> Result<IpoDetail, IpoError> {
        let url = GET_IPO.replace("{}", &id.to_string());
        self.get_json(&url).await
    }


    /// Submits a sentiment vote and returns the updated totals.
    ///
    /// **Endpoint:** `POST /ipos/{id}/vote`
    ///
    /// The server does not deduplicate votes; callers gate repeat votes
    /// themselves.
    pub async fn vote(&self, id: &IpoId, vote_type: VoteType) -> Result<VoteResponse, IpoError> {
        let url = POST_VOTE.replace("{}", &id.to_string());
        self.post_json(&url, &VoteRequest { vote_type }).await
    }
}
