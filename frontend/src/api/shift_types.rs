use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiResult, ShiftType, ShiftTypePayload},
};

impl ApiClient {
    pub async fn create_shift_type(&self, payload: ShiftTypePayload) -> ApiResult<ShiftType> {
        let request = self
            .request(Method::POST, "/shift-types")
            .await
            .json(&payload);
        self.send(request).await
    }

    pub async fn get_shift_types(&self) -> ApiResult<Vec<ShiftType>> {
        let request = self.request(Method::GET, "/shift-types").await;
        self.send_list(request).await
    }

    pub async fn get_shift_type(&self, id: &str) -> ApiResult<ShiftType> {
        let request = self
            .request(Method::GET, &format!("/shift-types/{}", id))
            .await;
        self.send(request).await
    }

    pub async fn update_shift_type(
        &self,
        id: &str,
        payload: ShiftTypePayload,
    ) -> ApiResult<ShiftType> {
        let request = self
            .request(Method::PUT, &format!("/shift-types/{}", id))
            .await
            .json(&payload);
        self.send(request).await
    }

    pub async fn delete_shift_type(&self, id: &str) -> ApiResult<()> {
        let request = self
            .request(Method::DELETE, &format!("/shift-types/{}", id))
            .await;
        self.send_unit(request).await
    }
}
