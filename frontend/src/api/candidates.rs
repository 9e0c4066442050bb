use reqwest::Method;
use serde_json::json;

use super::{
    client::ApiClient,
    types::{ApiResult, Candidate, CandidateStatus},
};

impl ApiClient {
    pub async fn submit_cv(&self, url: &str) -> ApiResult<Candidate> {
        let request = self
            .request(Method::POST, "/candidates")
            .await
            .json(&json!({ "url": url }));
        self.send(request).await
    }

    pub async fn get_candidates(
        &self,
        status: Option<CandidateStatus>,
    ) -> ApiResult<Vec<Candidate>> {
        let mut request = self.request(Method::GET, "/candidates").await;
        if let Some(status) = status {
            request = request.query(&[("status", status.as_str())]);
        }
        self.send_list(request).await
    }

    pub async fn update_candidate_status(
        &self,
        id: &str,
        status: CandidateStatus,
    ) -> ApiResult<Candidate> {
        let request = self
            .request(Method::PUT, &format!("/candidates/{}/status", id))
            .await
            .json(&json!({ "status": status }));
        self.send(request).await
    }
}
