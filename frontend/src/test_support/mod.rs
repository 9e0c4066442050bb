#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiError, ApiResult, AttendanceRecord, Reply};
    use crate::state::toast::{Notifier, ToastLevel};
    use chrono::{DateTime, Utc};
    use futures::{channel::oneshot, future::LocalBoxFuture};
    use std::{
        cell::{Cell, RefCell},
        collections::VecDeque,
        rc::Rc,
    };

    /// Notifier that keeps every toast for later assertions.
    #[derive(Clone, Default)]
    pub struct RecordingNotifier {
        toasts: Rc<RefCell<Vec<(ToastLevel, String)>>>,
    }

    impl RecordingNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn handle(&self) -> Rc<dyn Notifier> {
            Rc::new(self.clone())
        }

        pub fn toasts(&self) -> Vec<(ToastLevel, String)> {
            self.toasts.borrow().clone()
        }

        pub fn messages(&self) -> Vec<String> {
            self.toasts.borrow().iter().map(|(_, m)| m.clone()).collect()
        }

        pub fn count(&self, level: ToastLevel) -> usize {
            self.toasts.borrow().iter().filter(|(l, _)| *l == level).count()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, level: ToastLevel, message: &str) {
            self.toasts.borrow_mut().push((level, message.to_string()));
        }
    }

    /// Hands out queued responses in call order; each one resolves when the
    /// test sends on the matching channel.
    pub struct ScriptedApi<T: 'static> {
        queue: Rc<RefCell<VecDeque<oneshot::Receiver<ApiResult<T>>>>>,
        calls: Rc<Cell<usize>>,
    }

    impl<T: 'static> ScriptedApi<T> {
        pub fn new() -> Self {
            Self {
                queue: Rc::new(RefCell::new(VecDeque::new())),
                calls: Rc::new(Cell::new(0)),
            }
        }

        pub fn expect(&self) -> oneshot::Sender<ApiResult<T>> {
            let (tx, rx) = oneshot::channel();
            self.queue.borrow_mut().push_back(rx);
            tx
        }

        pub fn respond_ok(&self, data: T) {
            let _ = self.expect().send(Ok(Reply::new("", data)));
        }

        pub fn respond_err(&self, err: ApiError) {
            let _ = self.expect().send(Err(err));
        }

        pub fn calls(&self) -> usize {
            self.calls.get()
        }

        pub fn fetcher(&self) -> impl Fn() -> LocalBoxFuture<'static, ApiResult<T>> + 'static {
            let queue = self.queue.clone();
            let calls = self.calls.clone();
            move || {
                calls.set(calls.get() + 1);
                let next = queue.borrow_mut().pop_front();
                Box::pin(async move {
                    match next {
                        Some(rx) => rx
                            .await
                            .unwrap_or_else(|_| Err(ApiError::unknown("response dropped"))),
                        None => Err(ApiError::unknown("unexpected call")),
                    }
                })
            }
        }
    }

    pub fn instant(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
    }

    pub fn attendance(
        id: &str,
        check_in: Option<&str>,
        check_out: Option<&str>,
    ) -> AttendanceRecord {
        AttendanceRecord {
            id: id.to_string(),
            check_in: check_in.map(instant),
            check_out: check_out.map(instant),
            date: check_in.map(instant),
            location: "Head office".into(),
            ..Default::default()
        }
    }
}
