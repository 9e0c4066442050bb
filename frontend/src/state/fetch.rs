use futures::future::LocalBoxFuture;
use leptos::*;
use log::{debug, warn};
use std::{cell::Cell, future::Future, rc::Rc};

use super::{cancel::CancelToken, toast::Notifier};
use crate::api::{ApiError, ApiResult};

pub const FETCH_ERROR_FALLBACK: &str = "Failed to load data";

type Fetcher<T> = Rc<dyn Fn() -> LocalBoxFuture<'static, ApiResult<T>>>;

pub struct FetchOptions<T: 'static, D: 'static = ()> {
    pub dependencies: Option<Signal<D>>,
    pub on_success: Option<Rc<dyn Fn(&T)>>,
    pub on_error: Option<Rc<dyn Fn(&ApiError)>>,
    pub show_error_toast: bool,
    pub initial_data: T,
    pub enabled: MaybeSignal<bool>,
    /// Commit only the response to the most recently issued request.
    /// Off by default: overlapping fetches are last-resolved-wins.
    pub latest_only: bool,
    pub notifier: Rc<dyn Notifier>,
}

impl<T: Default + 'static> FetchOptions<T, ()> {
    pub fn new(notifier: Rc<dyn Notifier>) -> Self {
        Self {
            dependencies: None,
            on_success: None,
            on_error: None,
            show_error_toast: true,
            initial_data: T::default(),
            enabled: MaybeSignal::Static(true),
            latest_only: false,
            notifier,
        }
    }
}

impl<T: 'static, D: 'static> FetchOptions<T, D> {
    pub fn dependencies<E: 'static>(self, dependencies: Signal<E>) -> FetchOptions<T, E> {
        FetchOptions {
            dependencies: Some(dependencies),
            on_success: self.on_success,
            on_error: self.on_error,
            show_error_toast: self.show_error_toast,
            initial_data: self.initial_data,
            enabled: self.enabled,
            latest_only: self.latest_only,
            notifier: self.notifier,
        }
    }

    pub fn on_success(mut self, callback: impl Fn(&T) + 'static) -> Self {
        self.on_success = Some(Rc::new(callback));
        self
    }

    pub fn on_error(mut self, callback: impl Fn(&ApiError) + 'static) -> Self {
        self.on_error = Some(Rc::new(callback));
        self
    }

    pub fn show_error_toast(mut self, show: bool) -> Self {
        self.show_error_toast = show;
        self
    }

    pub fn initial_data(mut self, data: T) -> Self {
        self.initial_data = data;
        self
    }

    pub fn enabled(mut self, enabled: impl Into<MaybeSignal<bool>>) -> Self {
        self.enabled = enabled.into();
        self
    }

    pub fn latest_only(mut self, latest_only: bool) -> Self {
        self.latest_only = latest_only;
        self
    }
}

struct FetchInner<T: 'static> {
    fetcher: Fetcher<T>,
    on_success: Option<Rc<dyn Fn(&T)>>,
    on_error: Option<Rc<dyn Fn(&ApiError)>>,
    show_error_toast: bool,
    latest_only: bool,
    notifier: Rc<dyn Notifier>,
    issued: Cell<u64>,
    in_flight: Cell<u32>,
    cancel: CancelToken,
}

/// Reactive state of one remote list or record, plus the means to reload it.
pub struct FetchHandle<T: 'static> {
    pub data: RwSignal<T>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    inner: Rc<FetchInner<T>>,
}

impl<T: 'static> Clone for FetchHandle<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data,
            loading: self.loading,
            error: self.error,
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + 'static> FetchHandle<T> {
    /// Builds the handle without issuing a request; see [`use_fetch_data`].
    pub fn new<D, F, Fut>(api: F, options: FetchOptions<T, D>) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = ApiResult<T>> + 'static,
    {
        let fetcher: Fetcher<T> = Rc::new(move || Box::pin(api()));
        Self {
            data: create_rw_signal(options.initial_data),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            inner: Rc::new(FetchInner {
                fetcher,
                on_success: options.on_success,
                on_error: options.on_error,
                show_error_toast: options.show_error_toast,
                latest_only: options.latest_only,
                notifier: options.notifier,
                issued: Cell::new(0),
                in_flight: Cell::new(0),
                cancel: CancelToken::new(),
            }),
        }
    }

    /// Runs one request to completion. Failures end here: they land in
    /// `error`, the `on_error` callback and (optionally) a toast.
    pub async fn fetch(&self) {
        let inner = &self.inner;
        if inner.cancel.is_cancelled() {
            return;
        }
        let seq = inner.issued.get().wrapping_add(1);
        inner.issued.set(seq);
        inner.in_flight.set(inner.in_flight.get() + 1);
        self.loading.set(true);
        self.error.set(None);

        let result = (inner.fetcher)().await;

        if inner.cancel.is_cancelled() {
            debug!("Dropping response #{} after teardown", seq);
            return;
        }
        inner.in_flight.set(inner.in_flight.get().saturating_sub(1));

        if inner.latest_only && seq != inner.issued.get() {
            debug!("Discarding superseded response #{}", seq);
        } else {
            match result {
                Ok(reply) => {
                    let data = reply.data;
                    self.data.set(data.clone());
                    if let Some(callback) = &inner.on_success {
                        callback(&data);
                    }
                }
                Err(err) => {
                    let message = err.message_or(FETCH_ERROR_FALLBACK);
                    warn!("Fetch failed ({}): {}", err.code, message);
                    self.error.set(Some(message.clone()));
                    if let Some(callback) = &inner.on_error {
                        callback(&err);
                    }
                    if inner.show_error_toast {
                        inner.notifier.error(&message);
                    }
                }
            }
        }

        self.loading.set(inner.in_flight.get() > 0);
    }

    pub fn refetch(&self) {
        let handle = self.clone();
        spawn_local(async move { handle.fetch().await });
    }

    /// Local mutation without a round trip.
    pub fn set_data(&self, data: T) {
        self.data.set(data);
    }

    pub fn update_data(&self, f: impl FnOnce(&mut T)) {
        self.data.update(f);
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.inner.cancel.clone()
    }
}

/// Decides when [`use_fetch_data`] issues a request: on the first enabled
/// observation, whenever the dependency key changes by value, and again
/// when `enabled` flips back on. Nothing fires while disabled.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTrigger<K> {
    fired_with: Option<K>,
    was_enabled: bool,
}

impl<K> Default for FetchTrigger<K> {
    fn default() -> Self {
        Self {
            fired_with: None,
            was_enabled: false,
        }
    }
}

impl<K: Clone + PartialEq> FetchTrigger<K> {
    /// Returns `true` when this observation should start a fetch.
    pub fn observe(&mut self, key: &K, enabled: bool) -> bool {
        let turned_on = enabled && !self.was_enabled;
        self.was_enabled = enabled;
        if !enabled {
            return false;
        }
        if turned_on || self.fired_with.as_ref() != Some(key) {
            self.fired_with = Some(key.clone());
            return true;
        }
        false
    }
}

/// Fetches on mount and whenever `dependencies` changes by value, while
/// `enabled` holds. Pending responses are dropped once the owner is gone.
pub fn use_fetch_data<T, D, F, Fut>(api: F, options: FetchOptions<T, D>) -> FetchHandle<T>
where
    T: Clone + 'static,
    D: Clone + PartialEq + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    let dependencies = options.dependencies;
    let enabled = options.enabled;
    let handle = FetchHandle::new(api, options);
    handle.inner.cancel.bind_to_owner();

    let dependency_key = create_memo(move |_| dependencies.map(|deps| deps.get()));
    let fetcher = handle.clone();
    create_effect(move |previous: Option<FetchTrigger<Option<D>>>| {
        let mut trigger = previous.unwrap_or_default();
        let key = dependency_key.get();
        if trigger.observe(&key, enabled.get()) {
            let handle = fetcher.clone();
            spawn_local(async move { handle.fetch().await });
        }
        trigger
    });

    handle
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Reply;
    use crate::state::toast::ToastLevel;
    use crate::test_support::{
        helpers::{RecordingNotifier, ScriptedApi},
        ssr::with_runtime,
    };
    use futures::{executor::block_on, poll};
    use std::cell::RefCell;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn loading_is_true_only_while_the_call_is_in_flight() {
        with_runtime(|| {
            block_on(async {
                let api = ScriptedApi::<Vec<String>>::new();
                let respond = api.expect();
                let notifier = RecordingNotifier::new();
                let handle = FetchHandle::new(api.fetcher(), FetchOptions::new(notifier.handle()));
                assert!(!handle.loading.get_untracked());

                let mut pending = Box::pin(handle.fetch());
                assert!(poll!(&mut pending).is_pending());
                assert!(handle.loading.get_untracked());
                assert_eq!(handle.error.get_untracked(), None);

                respond
                    .send(Ok(Reply::new("OK", names(&["alice"]))))
                    .unwrap();
                pending.await;

                assert!(!handle.loading.get_untracked());
                assert_eq!(handle.data.get_untracked(), names(&["alice"]));
                assert!(notifier.toasts().is_empty());
            })
        });
    }

    #[test]
    fn success_invokes_on_success_with_new_data() {
        with_runtime(|| {
            block_on(async {
                let api = ScriptedApi::<Vec<String>>::new();
                api.respond_ok(names(&["bob"]));
                let seen = Rc::new(RefCell::new(Vec::new()));
                let seen_in_callback = seen.clone();
                let handle = FetchHandle::new(
                    api.fetcher(),
                    FetchOptions::new(RecordingNotifier::new().handle())
                        .on_success(move |data: &Vec<String>| {
                            seen_in_callback.borrow_mut().push(data.clone())
                        }),
                );
                handle.fetch().await;
                assert_eq!(*seen.borrow(), vec![names(&["bob"])]);
            })
        });
    }

    #[test]
    fn failure_keeps_previous_data_and_toasts_once() {
        with_runtime(|| {
            block_on(async {
                let api = ScriptedApi::<Vec<String>>::new();
                api.respond_ok(names(&["alice"]));
                api.respond_err(ApiError::remote(7, "Staff not found"));
                let notifier = RecordingNotifier::new();
                let errors = Rc::new(RefCell::new(Vec::new()));
                let errors_in_callback = errors.clone();
                let handle = FetchHandle::new(
                    api.fetcher(),
                    FetchOptions::new(notifier.handle())
                        .on_error(move |err| errors_in_callback.borrow_mut().push(err.clone())),
                );

                handle.fetch().await;
                handle.fetch().await;

                assert_eq!(handle.data.get_untracked(), names(&["alice"]));
                assert_eq!(
                    handle.error.get_untracked().as_deref(),
                    Some("Staff not found")
                );
                assert!(!handle.loading.get_untracked());
                assert_eq!(errors.borrow().len(), 1);
                assert_eq!(
                    notifier.toasts(),
                    vec![(ToastLevel::Error, "Staff not found".to_string())]
                );
            })
        });
    }

    #[test]
    fn transport_failure_without_message_uses_fallback() {
        with_runtime(|| {
            block_on(async {
                let api = ScriptedApi::<Vec<String>>::new();
                api.respond_err(ApiError::request_failed(""));
                let notifier = RecordingNotifier::new();
                let handle = FetchHandle::new(api.fetcher(), FetchOptions::new(notifier.handle()));

                handle.fetch().await;

                assert_eq!(
                    handle.error.get_untracked().as_deref(),
                    Some(FETCH_ERROR_FALLBACK)
                );
                assert_eq!(notifier.messages(), vec![FETCH_ERROR_FALLBACK.to_string()]);
            })
        });
    }

    #[test]
    fn error_toast_can_be_suppressed() {
        with_runtime(|| {
            block_on(async {
                let api = ScriptedApi::<Vec<String>>::new();
                api.respond_err(ApiError::remote(1, "nope"));
                let notifier = RecordingNotifier::new();
                let handle = FetchHandle::new(
                    api.fetcher(),
                    FetchOptions::new(notifier.handle()).show_error_toast(false),
                );
                handle.fetch().await;
                assert_eq!(handle.error.get_untracked().as_deref(), Some("nope"));
                assert!(notifier.toasts().is_empty());
            })
        });
    }

    #[test]
    fn next_attempt_clears_previous_error() {
        with_runtime(|| {
            block_on(async {
                let api = ScriptedApi::<Vec<String>>::new();
                api.respond_err(ApiError::remote(1, "nope"));
                let respond = api.expect();
                let handle = FetchHandle::new(
                    api.fetcher(),
                    FetchOptions::new(RecordingNotifier::new().handle()),
                );
                handle.fetch().await;
                assert!(handle.error.get_untracked().is_some());

                let mut pending = Box::pin(handle.fetch());
                assert!(poll!(&mut pending).is_pending());
                assert_eq!(handle.error.get_untracked(), None);
                respond.send(Ok(Reply::new("", names(&["x"])))).unwrap();
                pending.await;
                assert_eq!(handle.error.get_untracked(), None);
            })
        });
    }

    #[test]
    fn refetching_an_unchanged_backend_is_idempotent() {
        with_runtime(|| {
            block_on(async {
                let api = ScriptedApi::<Vec<String>>::new();
                api.respond_ok(names(&["alice", "bob"]));
                api.respond_ok(names(&["alice", "bob"]));
                let handle = FetchHandle::new(
                    api.fetcher(),
                    FetchOptions::new(RecordingNotifier::new().handle()),
                );
                handle.fetch().await;
                let first = handle.data.get_untracked();
                handle.fetch().await;
                assert_eq!(handle.data.get_untracked(), first);
                assert_eq!(api.calls(), 2);
            })
        });
    }

    #[test]
    fn overlapping_fetches_are_last_resolved_wins() {
        with_runtime(|| {
            block_on(async {
                let api = ScriptedApi::<Vec<String>>::new();
                let first = api.expect();
                let second = api.expect();
                let handle = FetchHandle::new(
                    api.fetcher(),
                    FetchOptions::new(RecordingNotifier::new().handle()),
                );

                let mut older = Box::pin(handle.fetch());
                let mut newer = Box::pin(handle.fetch());
                assert!(poll!(&mut older).is_pending());
                assert!(poll!(&mut newer).is_pending());

                second.send(Ok(Reply::new("", names(&["fresh"])))).unwrap();
                newer.await;
                assert_eq!(handle.data.get_untracked(), names(&["fresh"]));
                assert!(handle.loading.get_untracked());

                first.send(Ok(Reply::new("", names(&["stale"])))).unwrap();
                older.await;
                assert_eq!(handle.data.get_untracked(), names(&["stale"]));
                assert!(!handle.loading.get_untracked());
            })
        });
    }

    #[test]
    fn latest_only_discards_superseded_responses() {
        with_runtime(|| {
            block_on(async {
                let api = ScriptedApi::<Vec<String>>::new();
                let first = api.expect();
                let second = api.expect();
                let handle = FetchHandle::new(
                    api.fetcher(),
                    FetchOptions::new(RecordingNotifier::new().handle()).latest_only(true),
                );

                let mut older = Box::pin(handle.fetch());
                let mut newer = Box::pin(handle.fetch());
                assert!(poll!(&mut older).is_pending());
                assert!(poll!(&mut newer).is_pending());

                second.send(Ok(Reply::new("", names(&["fresh"])))).unwrap();
                newer.await;
                first.send(Ok(Reply::new("", names(&["stale"])))).unwrap();
                older.await;

                assert_eq!(handle.data.get_untracked(), names(&["fresh"]));
                assert!(!handle.loading.get_untracked());
            })
        });
    }

    #[test]
    fn responses_after_cancellation_are_dropped() {
        with_runtime(|| {
            block_on(async {
                let api = ScriptedApi::<Vec<String>>::new();
                let respond = api.expect();
                let notifier = RecordingNotifier::new();
                let handle = FetchHandle::new(api.fetcher(), FetchOptions::new(notifier.handle()));

                let mut pending = Box::pin(handle.fetch());
                assert!(poll!(&mut pending).is_pending());
                handle.cancel_token().cancel();
                respond.send(Err(ApiError::remote(1, "late failure"))).unwrap();
                pending.await;

                assert!(handle.data.get_untracked().is_empty());
                assert_eq!(handle.error.get_untracked(), None);
                assert!(notifier.toasts().is_empty());
            })
        });
    }

    #[test]
    fn set_data_mutates_without_a_request() {
        with_runtime(|| {
            let api = ScriptedApi::<Vec<String>>::new();
            let handle = FetchHandle::new(
                api.fetcher(),
                FetchOptions::new(RecordingNotifier::new().handle())
                    .initial_data(names(&["seed"])),
            );
            assert_eq!(handle.data.get_untracked(), names(&["seed"]));
            handle.set_data(names(&["local"]));
            handle.update_data(|list| list.push("more".into()));
            assert_eq!(handle.data.get_untracked(), names(&["local", "more"]));
            assert_eq!(api.calls(), 0);
        });
    }

    #[test]
    fn trigger_fires_once_on_mount() {
        let mut trigger = FetchTrigger::<Option<String>>::default();
        assert!(trigger.observe(&None, true));
        assert!(!trigger.observe(&None, true));
    }

    #[test]
    fn trigger_refires_only_when_the_key_changes_by_value() {
        let mut trigger = FetchTrigger::default();
        assert!(trigger.observe(&Some("2025-01".to_string()), true));
        assert!(!trigger.observe(&Some("2025-01".to_string()), true));
        assert!(trigger.observe(&Some("2025-02".to_string()), true));
        assert!(trigger.observe(&Some("2025-01".to_string()), true));
    }

    #[test]
    fn trigger_stays_quiet_while_disabled() {
        let mut trigger = FetchTrigger::default();
        assert!(!trigger.observe(&Some(String::new()), false));
        assert!(!trigger.observe(&Some("st-1".to_string()), false));
        assert!(trigger.observe(&Some("st-1".to_string()), true));
        assert!(!trigger.observe(&Some("st-2".to_string()), false));
        assert!(trigger.observe(&Some("st-2".to_string()), true));
    }

    #[test]
    fn re_enabling_refetches_the_same_key() {
        let mut trigger = FetchTrigger::default();
        assert!(trigger.observe(&Some(1), true));
        assert!(!trigger.observe(&Some(1), false));
        assert!(trigger.observe(&Some(1), true));
    }
}
