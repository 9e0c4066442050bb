use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiResult, NewResignation, Resignation, ResignationDecision, ResignationStatus},
};

impl ApiClient {
    pub async fn submit_resignation(&self, payload: NewResignation) -> ApiResult<Resignation> {
        let request = self
            .request(Method::POST, "/resignations")
            .await
            .json(&payload);
        self.send(request).await
    }

    pub async fn get_my_resignations(&self) -> ApiResult<Vec<Resignation>> {
        let request = self.request(Method::GET, "/resignations/me").await;
        self.send_list(request).await
    }

    /// Requests waiting on the signed-in approver.
    pub async fn get_resignations_by_approver(&self) -> ApiResult<Vec<Resignation>> {
        let request = self.request(Method::GET, "/resignations/approver").await;
        self.send_list(request).await
    }

    pub async fn update_resignation_status(
        &self,
        id: &str,
        status: ResignationStatus,
        note: &str,
    ) -> ApiResult<Resignation> {
        let request = self
            .request(Method::PUT, &format!("/resignations/{}/status", id))
            .await
            .json(&ResignationDecision {
                status,
                note: note.to_string(),
            });
        self.send(request).await
    }

    pub async fn delete_resignation(&self, id: &str) -> ApiResult<()> {
        let request = self
            .request(Method::DELETE, &format!("/resignations/{}", id))
            .await;
        self.send_unit(request).await
    }
}
