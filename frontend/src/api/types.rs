use chrono::{DateTime, Utc};
use leptos::*;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

/// Wire shape shared by every backend call: `{ "EC": 0, "EM": "...", "data": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct Envelope<T = Value> {
    #[serde(rename = "EC")]
    pub ec: i64,
    #[serde(rename = "EM", default)]
    pub em: String,
    #[serde(default)]
    pub data: T,
}

/// Decoded success arm of an [`Envelope`].
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    pub message: String,
    pub data: T,
}

impl<T> Reply<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reply<U> {
        Reply {
            message: self.message,
            data: f(self.data),
        }
    }
}

pub type ApiResult<T> = Result<Reply<T>, ApiError>;

impl<T> Envelope<T> {
    /// `EC == 0` is the only success signal; `data` is dropped on failure.
    pub fn into_result(self) -> ApiResult<T> {
        if self.ec == 0 {
            Ok(Reply {
                message: self.em,
                data: self.data,
            })
        } else {
            Err(ApiError::remote(self.ec, self.em))
        }
    }
}

impl Envelope<Value> {
    pub fn decode<T: DeserializeOwned>(self) -> ApiResult<T> {
        let reply = self.into_result()?;
        let data = serde_json::from_value(reply.data)
            .map_err(|e| ApiError::request_failed(format!("Failed to parse response: {}", e)))?;
        Ok(Reply {
            message: reply.message,
            data,
        })
    }
}

/// List payload that also accepts a single object or `null`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListPayload<T>(pub Vec<T>);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ListPayload<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw<T> {
            Many(Vec<T>),
            One(T),
        }

        Ok(match Option::<Raw<T>>::deserialize(deserializer)? {
            None => Self(Vec::new()),
            Some(Raw::Many(items)) => Self(items),
            Some(Raw::One(item)) => Self(vec![item]),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const REMOTE_ERROR: &str = "REMOTE_ERROR";
pub const REQUEST_FAILED: &str = "REQUEST_FAILED";
pub const UNKNOWN: &str = "UNKNOWN";

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: VALIDATION_ERROR.to_string(),
            details: None,
        }
    }

    /// Logical failure reported by the backend (`EC != 0`).
    pub fn remote(ec: i64, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: REMOTE_ERROR.to_string(),
            details: Some(json!({ "ec": ec })),
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: UNKNOWN.to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: REQUEST_FAILED.to_string(),
            details: None,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.code == VALIDATION_ERROR
    }

    pub fn remote_code(&self) -> Option<i64> {
        self.details
            .as_ref()
            .and_then(|d| d.get("ec"))
            .and_then(Value::as_i64)
    }

    /// The error text when it says anything, otherwise `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        let text = self.error.trim();
        if text.is_empty() {
            fallback.to_string()
        } else {
            text.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Staff reference that the backend either populates or leaves as a bare id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StaffRef {
    Populated(StaffSummary),
    Id(String),
}

impl StaffRef {
    pub fn id(&self) -> &str {
        match self {
            StaffRef::Populated(staff) => &staff.id,
            StaffRef::Id(id) => id,
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            StaffRef::Populated(staff) => staff
                .name
                .clone()
                .filter(|n| !n.trim().is_empty())
                .or_else(|| staff.email.clone())
                .unwrap_or_else(|| staff.id.clone()),
            StaffRef::Id(id) => id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub check_in: Option<DateTime<Utc>>,
    #[serde(default)]
    pub check_out: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub is_late: Option<bool>,
    #[serde(default)]
    pub late_minutes: Option<i64>,
    #[serde(default)]
    pub is_early_leave: Option<bool>,
    #[serde(default)]
    pub early_leave_minutes: Option<i64>,
    #[serde(default)]
    pub working_hours: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationRequest<'a> {
    pub location: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    #[serde(rename = "_id")]
    pub id: String,
    pub staff_id: StaffRef,
    #[serde(default)]
    pub content: String,
    pub from_date: DateTime<Utc>,
    pub to_date: DateTime<Utc>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContract {
    pub staff_id: String,
    pub content: String,
    pub from_date: DateTime<Utc>,
    pub to_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResignationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ResignationStatus {
    pub const ALL: [ResignationStatus; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resignation {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub staff_id: Option<StaffRef>,
    #[serde(default)]
    pub approver_id: Option<StaffRef>,
    #[serde(default)]
    pub reason: String,
    pub status: ResignationStatus,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResignation {
    pub reason: String,
    pub approver_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResignationDecision {
    pub status: ResignationStatus,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftType {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftTypePayload {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStatus {
    Pending,
    Interview,
    Accepted,
    Rejected,
}

impl CandidateStatus {
    pub const ALL: [CandidateStatus; 4] = [
        Self::Pending,
        Self::Interview,
        Self::Accepted,
        Self::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Interview => "interview",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Interview => "Interview",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(alias = "cv", alias = "url")]
    pub cv_url: String,
    pub status: CandidateStatus,
    #[serde(default)]
    pub staff_id: Option<StaffRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_with_zero_code_decodes_payload() {
        let envelope: Envelope = serde_json::from_value(json!({
            "EC": 0,
            "EM": "OK",
            "data": { "_id": "a1", "checkIn": "2024-01-01T01:00:00Z" }
        }))
        .unwrap();
        let reply: Reply<AttendanceRecord> = envelope.decode().unwrap();
        assert_eq!(reply.message, "OK");
        assert_eq!(reply.data.id, "a1");
        assert!(reply.data.check_in.is_some());
        assert!(reply.data.check_out.is_none());
        assert!(reply.data.location.is_empty());
    }

    #[test]
    fn envelope_with_nonzero_code_becomes_remote_error() {
        let envelope: Envelope = serde_json::from_value(json!({
            "EC": 1,
            "EM": "Already checked out"
        }))
        .unwrap();
        let err = envelope.decode::<AttendanceRecord>().unwrap_err();
        assert_eq!(err.code, REMOTE_ERROR);
        assert_eq!(err.error, "Already checked out");
        assert_eq!(err.remote_code(), Some(1));
    }

    #[test]
    fn envelope_with_mismatched_payload_is_a_request_failure() {
        let envelope: Envelope = serde_json::from_value(json!({
            "EC": 0,
            "EM": "",
            "data": 42
        }))
        .unwrap();
        let err = envelope.decode::<Contract>().unwrap_err();
        assert_eq!(err.code, REQUEST_FAILED);
        assert!(err.error.starts_with("Failed to parse response"));
    }

    #[test]
    fn list_payload_coerces_single_object_and_null() {
        let one: ListPayload<ShiftType> = serde_json::from_value(json!({
            "_id": "s1",
            "name": "Morning",
            "startTime": "08:00",
            "endTime": "16:00"
        }))
        .unwrap();
        assert_eq!(one.0.len(), 1);

        let none: ListPayload<ShiftType> = serde_json::from_value(Value::Null).unwrap();
        assert!(none.0.is_empty());

        let many: ListPayload<String> = serde_json::from_value(json!(["a", "b"])).unwrap();
        assert_eq!(many.0, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn staff_ref_accepts_bare_id_and_populated_object() {
        let bare: StaffRef = serde_json::from_value(json!("st-1")).unwrap();
        assert_eq!(bare.id(), "st-1");
        assert_eq!(bare.display_name(), "st-1");

        let populated: StaffRef =
            serde_json::from_value(json!({ "_id": "st-2", "name": "Lan", "email": "lan@hr.io" }))
                .unwrap();
        assert_eq!(populated.id(), "st-2");
        assert_eq!(populated.display_name(), "Lan");
    }

    #[test]
    fn message_or_falls_back_on_blank_text() {
        assert_eq!(ApiError::remote(3, "  ").message_or("fallback"), "fallback");
        assert_eq!(ApiError::request_failed("boom").message_or("fallback"), "boom");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn candidate_status_round_trips_through_query_value() {
        for status in CandidateStatus::ALL {
            assert_eq!(CandidateStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(CandidateStatus::parse("hired"), None);
    }
}
