use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiResult, Contract, ContractPatch, NewContract},
};

impl ApiClient {
    pub async fn get_contract(&self, id: &str) -> ApiResult<Contract> {
        let request = self
            .request(Method::GET, &format!("/contracts/{}", id))
            .await;
        self.send(request).await
    }

    pub async fn get_contracts_by_staff(&self, staff_id: &str) -> ApiResult<Vec<Contract>> {
        let request = self
            .request(Method::GET, &format!("/contracts/staff/{}", staff_id))
            .await;
        self.send_list(request).await
    }

    pub async fn get_my_contracts(&self) -> ApiResult<Vec<Contract>> {
        let request = self.request(Method::GET, "/contracts/me").await;
        self.send_list(request).await
    }

    pub async fn create_contract(&self, payload: NewContract) -> ApiResult<Contract> {
        let request = self
            .request(Method::POST, "/contracts")
            .await
            .json(&payload);
        self.send(request).await
    }

    pub async fn update_contract(&self, id: &str, patch: ContractPatch) -> ApiResult<Contract> {
        let request = self
            .request(Method::PUT, &format!("/contracts/{}", id))
            .await
            .json(&patch);
        self.send(request).await
    }

    pub async fn delete_contract(&self, id: &str) -> ApiResult<()> {
        let request = self
            .request(Method::DELETE, &format!("/contracts/{}", id))
            .await;
        self.send_unit(request).await
    }
}
