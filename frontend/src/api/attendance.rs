use chrono::NaiveDate;
use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiResult, AttendanceRecord, LocationRequest},
};

impl ApiClient {
    pub async fn check_in(&self, location: &str) -> ApiResult<AttendanceRecord> {
        let request = self
            .request(Method::POST, "/attendance/check-in")
            .await
            .json(&LocationRequest { location });
        self.send(request).await
    }

    pub async fn check_out(&self, location: &str) -> ApiResult<AttendanceRecord> {
        let request = self
            .request(Method::POST, "/attendance/check-out")
            .await
            .json(&LocationRequest { location });
        self.send(request).await
    }

    /// `None` when the staff member has no record for today yet.
    pub async fn get_today_attendance(&self) -> ApiResult<Option<AttendanceRecord>> {
        let request = self.request(Method::GET, "/attendance/today").await;
        self.send(request).await
    }

    pub async fn get_my_attendances(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ApiResult<Vec<AttendanceRecord>> {
        let request = self.request(Method::GET, "/attendance/me").await.query(&[
            ("startDate", start_date.format("%Y-%m-%d").to_string()),
            ("endDate", end_date.format("%Y-%m-%d").to_string()),
        ]);
        self.send_list(request).await
    }
}
