//! Predict module endpoints.

use crate::client::IpoClient;
use crate::errors::IpoError;
use crate::ipos::models::IpoId;
use crate::predict::models::{
    AllotmentEstimate, AllotmentRequest, Category, ProfitEstimate, ProfitRequest,
};


const POST_PREDICT_PROFIT: &str = "/predict/profit";
const POST_PREDICT_ALLOTMENT: &str = "/predict/allotment";

impl IpoClient {
    /// Estimated listing gain for `lots` lots at the current GMP.
    ///
    /// **Endpoint:** `POST /predict/profit`
    pub async fn predict_profit(&self, ipo_id: &IpoId, lots: u32) -> Result<ProfitEstimate, IpoError> {
        let body = ProfitRequest {
            ipo_id: ipo_id.clone(),
            lots,
        };
        self.post_json(POST_PREDICT_PROFIT, &body).await
    }


    /// Heuristic allotment chance for a category and lot count.
    ///
    /// **Endpoint:** `POST /predict/allotment`
    pub async fn predict_allotment(
        &self,
        ipo_id: &IpoId,
        category: Category,
        lots_applied: u32,
    ) -> Result<AllotmentEstimate, IpoError> {
        let body = AllotmentRequest {
            ipo_id: ipo_id.clone(),
            category,
            lots_applied,
        };
        self.post_json(POST_PREDICT_ALLOTMENT, &body).await
    }
}
