use async_trait::async_trait;
use chrono::NaiveDate;
use futures::join;
use leptos::*;
use log::{info, warn};
use std::rc::Rc;

use super::{
    cancel::CancelToken,
    fetch::{use_fetch_data, FetchHandle, FetchOptions},
    toast::Notifier,
};
use crate::api::{ApiClient, ApiError, ApiResult, AttendanceRecord};

pub const LOCATION_REQUIRED: &str = "Location is required";
pub const ALREADY_CHECKED_IN: &str = "Already checked in today";
pub const NOT_CHECKED_IN: &str = "You have not checked in yet";
pub const DAY_COMPLETE: &str = "Attendance for today is complete";
pub const ACTION_FAILED_FALLBACK: &str = "Something went wrong";
pub const UPDATE_IN_PROGRESS: &str = "Attendance update already in progress";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    NotCheckedIn,
    CheckedIn,
    CheckedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceAction {
    CheckIn,
    CheckOut,
}

impl AttendanceStatus {
    pub fn from_record(record: Option<&AttendanceRecord>) -> Self {
        match record.map(|r| (r.check_in.is_some(), r.check_out.is_some())) {
            Some((_, true)) => AttendanceStatus::CheckedOut,
            Some((true, false)) => AttendanceStatus::CheckedIn,
            _ => AttendanceStatus::NotCheckedIn,
        }
    }

    pub fn available_action(self) -> Option<AttendanceAction> {
        match self {
            AttendanceStatus::NotCheckedIn => Some(AttendanceAction::CheckIn),
            AttendanceStatus::CheckedIn => Some(AttendanceAction::CheckOut),
            AttendanceStatus::CheckedOut => None,
        }
    }

    /// Why `action` cannot run from this state, if it cannot.
    pub fn rejection(self, action: AttendanceAction) -> Option<&'static str> {
        match (self, action) {
            (AttendanceStatus::NotCheckedIn, AttendanceAction::CheckIn)
            | (AttendanceStatus::CheckedIn, AttendanceAction::CheckOut) => None,
            (AttendanceStatus::CheckedIn, AttendanceAction::CheckIn) => Some(ALREADY_CHECKED_IN),
            (AttendanceStatus::NotCheckedIn, AttendanceAction::CheckOut) => Some(NOT_CHECKED_IN),
            (AttendanceStatus::CheckedOut, _) => Some(DAY_COMPLETE),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AttendanceStatus::NotCheckedIn => "Not checked in",
            AttendanceStatus::CheckedIn => "Checked in",
            AttendanceStatus::CheckedOut => "Checked out",
        }
    }
}

impl AttendanceAction {
    pub fn label(self) -> &'static str {
        match self {
            AttendanceAction::CheckIn => "Check In",
            AttendanceAction::CheckOut => "Check Out",
        }
    }

    fn success_fallback(self) -> &'static str {
        match self {
            AttendanceAction::CheckIn => "Checked in successfully",
            AttendanceAction::CheckOut => "Checked out successfully",
        }
    }
}

/// Remote side of the check-in/out transitions.
#[async_trait(?Send)]
pub trait AttendanceGateway {
    async fn check_in(&self, location: &str) -> ApiResult<AttendanceRecord>;
    async fn check_out(&self, location: &str) -> ApiResult<AttendanceRecord>;
}

#[async_trait(?Send)]
impl AttendanceGateway for ApiClient {
    async fn check_in(&self, location: &str) -> ApiResult<AttendanceRecord> {
        ApiClient::check_in(self, location).await
    }

    async fn check_out(&self, location: &str) -> ApiResult<AttendanceRecord> {
        ApiClient::check_out(self, location).await
    }
}

/// Source of a human-readable position, `"lat, lng"`.
#[async_trait(?Send)]
pub trait LocationProvider {
    async fn current_location(&self) -> Result<String, String>;
}

pub struct AttendanceMachine<G: AttendanceGateway + 'static> {
    gateway: Rc<G>,
    pub today: FetchHandle<Option<AttendanceRecord>>,
    pub history: FetchHandle<Vec<AttendanceRecord>>,
    pub pending: RwSignal<bool>,
    notifier: Rc<dyn Notifier>,
    cancel: CancelToken,
}

impl<G: AttendanceGateway + 'static> Clone for AttendanceMachine<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            today: self.today.clone(),
            history: self.history.clone(),
            pending: self.pending,
            notifier: self.notifier.clone(),
            cancel: self.cancel.clone(),
        }
    }
}

impl<G: AttendanceGateway + 'static> AttendanceMachine<G> {
    pub fn new(
        gateway: Rc<G>,
        today: FetchHandle<Option<AttendanceRecord>>,
        history: FetchHandle<Vec<AttendanceRecord>>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            gateway,
            today,
            history,
            pending: create_rw_signal(false),
            notifier,
            cancel: CancelToken::new(),
        }
    }

    pub fn status(&self) -> Signal<AttendanceStatus> {
        let today = self.today.data;
        Signal::derive(move || today.with(|record| AttendanceStatus::from_record(record.as_ref())))
    }

    pub fn status_untracked(&self) -> AttendanceStatus {
        self.today
            .data
            .with_untracked(|record| AttendanceStatus::from_record(record.as_ref()))
    }

    pub fn available_action(&self) -> Signal<Option<AttendanceAction>> {
        let status = self.status();
        Signal::derive(move || status.get().available_action())
    }

    pub async fn check_in(&self, location: &str) -> Result<AttendanceRecord, ApiError> {
        self.run(AttendanceAction::CheckIn, location).await
    }

    pub async fn check_out(&self, location: &str) -> Result<AttendanceRecord, ApiError> {
        self.run(AttendanceAction::CheckOut, location).await
    }

    pub async fn run(
        &self,
        action: AttendanceAction,
        location: &str,
    ) -> Result<AttendanceRecord, ApiError> {
        let location = location.trim();
        if location.is_empty() {
            self.notifier.error(LOCATION_REQUIRED);
            return Err(ApiError::validation(LOCATION_REQUIRED));
        }
        if let Some(reason) = self.status_untracked().rejection(action) {
            self.notifier.error(reason);
            return Err(ApiError::validation(reason));
        }
        if self.pending.get_untracked() {
            self.notifier.error(UPDATE_IN_PROGRESS);
            return Err(ApiError::validation(UPDATE_IN_PROGRESS));
        }

        self.pending.set(true);
        let result = match action {
            AttendanceAction::CheckIn => self.gateway.check_in(location).await,
            AttendanceAction::CheckOut => self.gateway.check_out(location).await,
        };
        if self.cancel.is_cancelled() {
            return Err(ApiError::unknown("Attendance view was closed"));
        }
        self.pending.set(false);

        match result {
            Ok(reply) => {
                let message = Some(reply.message.trim().to_string())
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| action.success_fallback().to_string());
                info!("{} at {}", action.label(), location);
                self.notifier.success(&message);
                self.today.set_data(Some(reply.data.clone()));
                join!(self.today.fetch(), self.history.fetch());
                Ok(reply.data)
            }
            Err(err) => {
                let message = err.message_or(ACTION_FAILED_FALLBACK);
                warn!("{} failed ({}): {}", action.label(), err.code, message);
                self.notifier.error(&message);
                Err(err)
            }
        }
    }
}

/// Wires the machine to the live API. `range` drives the history fetch.
pub fn use_attendance_machine(
    client: ApiClient,
    range: Signal<(NaiveDate, NaiveDate)>,
    notifier: Rc<dyn Notifier>,
) -> AttendanceMachine<ApiClient> {
    let api = client.clone();
    let today = use_fetch_data(
        move || {
            let api = api.clone();
            async move { api.get_today_attendance().await }
        },
        FetchOptions::new(notifier.clone()),
    );

    let api = client.clone();
    let history = use_fetch_data(
        move || {
            let api = api.clone();
            let (start, end) = range.get_untracked();
            async move { api.get_my_attendances(start, end).await }
        },
        FetchOptions::new(notifier.clone())
            .dependencies(range)
            .latest_only(true),
    );

    let machine = AttendanceMachine::new(Rc::new(client), today, history, notifier);
    machine.cancel.bind_to_owner();
    machine
}

/// Fills `field` with the current position. On failure the field is left
/// blank and a warning is shown; the caller still opens its dialog.
pub async fn prefill_location<P: LocationProvider + ?Sized>(
    provider: &P,
    field: RwSignal<String>,
    notifier: &dyn Notifier,
) -> bool {
    match provider.current_location().await {
        Ok(position) => {
            field.set(position);
            true
        }
        Err(reason) => {
            warn!("Geolocation failed: {}", reason);
            field.set(String::new());
            notifier.warning(&format!(
                "Could not get your location ({}). Please enter it manually.",
                reason
            ));
            false
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Reply;
    use crate::state::toast::ToastLevel;
    use crate::test_support::{
        helpers::{attendance, instant, RecordingNotifier},
        ssr::with_runtime,
    };
    use futures::{executor::block_on, future::ready};
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeBackend {
        today: RefCell<Option<AttendanceRecord>>,
        history: RefCell<Vec<AttendanceRecord>>,
        failure: RefCell<Option<ApiError>>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeBackend {
        fn log(&self, call: impl Into<String>) {
            self.calls.borrow_mut().push(call.into());
        }

        fn count(&self, call: &str) -> usize {
            self.calls.borrow().iter().filter(|c| c.as_str() == call).count()
        }

        fn mutations(&self) -> Vec<String> {
            self.calls
                .borrow()
                .iter()
                .filter(|c| c.starts_with("check"))
                .cloned()
                .collect()
        }
    }

    #[async_trait(?Send)]
    impl AttendanceGateway for FakeBackend {
        async fn check_in(&self, location: &str) -> ApiResult<AttendanceRecord> {
            self.log(format!("check_in:{}", location));
            if let Some(err) = self.failure.borrow().clone() {
                return Err(err);
            }
            let record = attendance("att-1", Some("2025-01-02T01:00:00Z"), None);
            *self.today.borrow_mut() = Some(record.clone());
            self.history.borrow_mut().push(record.clone());
            Ok(Reply::new("Checked in", record))
        }

        async fn check_out(&self, location: &str) -> ApiResult<AttendanceRecord> {
            self.log(format!("check_out:{}", location));
            if let Some(err) = self.failure.borrow().clone() {
                return Err(err);
            }
            let mut record = self
                .today
                .borrow()
                .clone()
                .ok_or_else(|| ApiError::remote(3, "No check-in found"))?;
            record.check_out = Some(instant("2025-01-02T10:00:00Z"));
            *self.today.borrow_mut() = Some(record.clone());
            if let Some(last) = self.history.borrow_mut().last_mut() {
                *last = record.clone();
            }
            Ok(Reply::new("", record))
        }
    }

    fn machine(
        backend: &Rc<FakeBackend>,
        notifier: &RecordingNotifier,
    ) -> AttendanceMachine<FakeBackend> {
        let source = backend.clone();
        let today = FetchHandle::new(
            move || {
                source.log("today");
                ready(Ok(Reply::new("", source.today.borrow().clone())))
            },
            FetchOptions::new(notifier.handle()),
        );
        let source = backend.clone();
        let history = FetchHandle::new(
            move || {
                source.log("history");
                ready(Ok(Reply::new("", source.history.borrow().clone())))
            },
            FetchOptions::new(notifier.handle()),
        );
        AttendanceMachine::new(backend.clone(), today, history, notifier.handle())
    }

    #[test]
    fn status_follows_todays_record() {
        assert_eq!(
            AttendanceStatus::from_record(None),
            AttendanceStatus::NotCheckedIn
        );
        let open = attendance("a", Some("2025-01-02T01:00:00Z"), None);
        assert_eq!(
            AttendanceStatus::from_record(Some(&open)),
            AttendanceStatus::CheckedIn
        );
        let closed = attendance(
            "a",
            Some("2025-01-02T01:00:00Z"),
            Some("2025-01-02T10:00:00Z"),
        );
        assert_eq!(
            AttendanceStatus::from_record(Some(&closed)),
            AttendanceStatus::CheckedOut
        );
        assert_eq!(
            AttendanceStatus::from_record(Some(&AttendanceRecord::default())),
            AttendanceStatus::NotCheckedIn
        );
    }

    #[test]
    fn exactly_one_action_until_the_day_is_complete() {
        assert_eq!(
            AttendanceStatus::NotCheckedIn.available_action(),
            Some(AttendanceAction::CheckIn)
        );
        assert_eq!(
            AttendanceStatus::CheckedIn.available_action(),
            Some(AttendanceAction::CheckOut)
        );
        assert_eq!(AttendanceStatus::CheckedOut.available_action(), None);
        assert_eq!(
            AttendanceStatus::CheckedOut.rejection(AttendanceAction::CheckIn),
            Some(DAY_COMPLETE)
        );
    }

    #[test]
    fn blank_location_is_rejected_without_a_call() {
        with_runtime(|| {
            block_on(async {
                let backend = Rc::new(FakeBackend::default());
                let notifier = RecordingNotifier::new();
                let machine = machine(&backend, &notifier);

                let err = machine.check_in("   ").await.unwrap_err();

                assert!(err.is_validation());
                assert!(backend.calls.borrow().is_empty());
                assert_eq!(
                    notifier.toasts(),
                    vec![(ToastLevel::Error, LOCATION_REQUIRED.to_string())]
                );
                assert_eq!(machine.status_untracked(), AttendanceStatus::NotCheckedIn);
            })
        });
    }

    #[test]
    fn check_out_before_check_in_is_rejected() {
        with_runtime(|| {
            block_on(async {
                let backend = Rc::new(FakeBackend::default());
                let notifier = RecordingNotifier::new();
                let machine = machine(&backend, &notifier);

                let err = machine.check_out("Head office").await.unwrap_err();

                assert_eq!(err.error, NOT_CHECKED_IN);
                assert!(backend.mutations().is_empty());
                assert_eq!(notifier.messages(), vec![NOT_CHECKED_IN.to_string()]);
            })
        });
    }

    #[test]
    fn check_in_refetches_today_and_history_once_each() {
        with_runtime(|| {
            block_on(async {
                let backend = Rc::new(FakeBackend::default());
                let notifier = RecordingNotifier::new();
                let machine = machine(&backend, &notifier);
                machine.today.fetch().await;
                backend.calls.borrow_mut().clear();

                machine.check_in("  10.776900, 106.700900 ").await.unwrap();

                assert_eq!(
                    backend.mutations(),
                    vec!["check_in:10.776900, 106.700900".to_string()]
                );
                assert_eq!(backend.count("today"), 1);
                assert_eq!(backend.count("history"), 1);
                assert_eq!(machine.status_untracked(), AttendanceStatus::CheckedIn);
                assert_eq!(machine.history.data.get_untracked().len(), 1);
                assert_eq!(
                    notifier.toasts(),
                    vec![(ToastLevel::Success, "Checked in".to_string())]
                );
                assert!(!machine.pending.get_untracked());
            })
        });
    }

    #[test]
    fn failed_check_in_toasts_once_and_skips_refetch() {
        with_runtime(|| {
            block_on(async {
                let backend = Rc::new(FakeBackend::default());
                *backend.failure.borrow_mut() =
                    Some(ApiError::remote(2, "Outside of allowed area"));
                let notifier = RecordingNotifier::new();
                let machine = machine(&backend, &notifier);

                let err = machine.check_in("Head office").await.unwrap_err();

                assert_eq!(err.remote_code(), Some(2));
                assert_eq!(backend.count("today"), 0);
                assert_eq!(backend.count("history"), 0);
                assert_eq!(machine.status_untracked(), AttendanceStatus::NotCheckedIn);
                assert_eq!(
                    notifier.toasts(),
                    vec![(ToastLevel::Error, "Outside of allowed area".to_string())]
                );
            })
        });
    }

    #[test]
    fn failed_check_out_keeps_checked_in() {
        with_runtime(|| {
            block_on(async {
                let backend = Rc::new(FakeBackend::default());
                let notifier = RecordingNotifier::new();
                let machine = machine(&backend, &notifier);
                machine.check_in("Head office").await.unwrap();
                let history_fetches = backend.count("history");
                let today_fetches = backend.count("today");

                *backend.failure.borrow_mut() = Some(ApiError::remote(1, "Already checked out"));
                machine.check_out("Head office").await.unwrap_err();

                assert_eq!(machine.status_untracked(), AttendanceStatus::CheckedIn);
                assert_eq!(backend.count("history"), history_fetches);
                assert_eq!(backend.count("today"), today_fetches);
                assert_eq!(notifier.count(ToastLevel::Error), 1);
                assert_eq!(notifier.messages().last().cloned(), Some("Already checked out".to_string()));
            })
        });
    }

    #[test]
    fn second_action_while_one_is_pending_toasts_and_skips_the_call() {
        with_runtime(|| {
            block_on(async {
                let backend = Rc::new(FakeBackend::default());
                let notifier = RecordingNotifier::new();
                let machine = machine(&backend, &notifier);
                machine.pending.set(true);

                let err = machine.check_in("Head office").await.unwrap_err();

                assert_eq!(err.error, UPDATE_IN_PROGRESS);
                assert!(backend.mutations().is_empty());
                assert_eq!(
                    notifier.toasts(),
                    vec![(ToastLevel::Error, UPDATE_IN_PROGRESS.to_string())]
                );
            })
        });
    }

    #[test]
    fn full_day_ends_with_no_available_action() {
        with_runtime(|| {
            block_on(async {
                let backend = Rc::new(FakeBackend::default());
                let notifier = RecordingNotifier::new();
                let machine = machine(&backend, &notifier);

                machine.check_in("Head office").await.unwrap();
                machine.check_out("Head office").await.unwrap();

                assert_eq!(machine.status_untracked(), AttendanceStatus::CheckedOut);
                assert_eq!(machine.available_action().get_untracked(), None);
                assert_eq!(notifier.count(ToastLevel::Success), 2);
                assert_eq!(
                    notifier.messages()[1],
                    "Checked out successfully".to_string()
                );

                let err = machine.check_in("Head office").await.unwrap_err();
                assert_eq!(err.error, DAY_COMPLETE);
                assert_eq!(backend.mutations().len(), 2);
            })
        });
    }

    struct FixedLocation(Result<String, String>);

    #[async_trait(?Send)]
    impl LocationProvider for FixedLocation {
        async fn current_location(&self) -> Result<String, String> {
            self.0.clone()
        }
    }

    #[test]
    fn prefill_writes_coordinates() {
        with_runtime(|| {
            block_on(async {
                let notifier = RecordingNotifier::new();
                let field = create_rw_signal(String::new());
                let provider = FixedLocation(Ok("10.776900, 106.700900".into()));

                assert!(prefill_location(&provider, field, &notifier).await);
                assert_eq!(field.get_untracked(), "10.776900, 106.700900");
                assert!(notifier.toasts().is_empty());
            })
        });
    }

    #[test]
    fn prefill_failure_leaves_field_blank_and_warns() {
        with_runtime(|| {
            block_on(async {
                let notifier = RecordingNotifier::new();
                let field = create_rw_signal("stale".to_string());
                let provider = FixedLocation(Err("User denied Geolocation".into()));

                assert!(!prefill_location(&provider, field, &notifier).await);
                assert_eq!(field.get_untracked(), "");
                assert_eq!(notifier.count(ToastLevel::Warning), 1);
            })
        });
    }
}
