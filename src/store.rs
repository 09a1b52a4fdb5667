//! Observable UI state
//!
//! [`Writable`] is a shared value holder with subscribe/notify semantics.
//! [`ResourceState`] groups the four holders a list screen needs, and
//! [`AppState`] is the session-wide set of them. Clients never write here;
//! callers move state around each client call.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use crate::error::Error;
use crate::model::structs::{Course, Student};

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
    // Values waiting to be handed out, each with the subscribers that were
    // attached when it was written. Drained in order by one caller at a time.
    queue: VecDeque<(T, Vec<Callback<T>>)>,
    delivering: bool,
}

/// Cloneable handle to one observable value
///
/// Subscribers observe values in write order, even when writes come from
/// several threads or from inside another subscriber's callback. A write made
/// while another caller is delivering is queued and handed out by that
/// caller, so `set` can return before its own callbacks have run.
pub struct Writable<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for Writable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Writable<T> {
    // A panicking subscriber must not brick the store.
    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn deliver<'a>(
        &'a self,
        mut inner: MutexGuard<'a, Inner<T>>,
        value: T,
        callbacks: Vec<Callback<T>>,
    ) {
        inner.queue.push_back((value, callbacks));
        if inner.delivering {
            return;
        }
        inner.delivering = true;
        let reset = DeliveryReset(self);

        while let Some((value, callbacks)) = inner.queue.pop_front() {
            drop(inner);
            for cb in callbacks {
                cb(&value);
            }
            inner = self.lock();
        }

        // still under the lock, so no write can slip in unseen
        inner.delivering = false;
        std::mem::forget(reset);
    }
}

// Clears the delivering flag if a callback unwinds mid-delivery.
struct DeliveryReset<'a, T>(&'a Writable<T>);

impl<T> Drop for DeliveryReset<'_, T> {
    fn drop(&mut self) {
        let mut inner = self.0.lock();
        inner.delivering = false;
        inner.queue.clear();
    }
}

impl<T: Clone + Send + 'static> Writable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value,
                next_id: 0,
                subscribers: Vec::new(),
                queue: VecDeque::new(),
                delivering: false,
            })),
        }
    }

    pub fn get(&self) -> T {
        self.lock().value.clone()
    }

    pub fn set(&self, value: T) {
        self.update(|v| *v = value);
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut inner = self.lock();
        f(&mut inner.value);
        let value = inner.value.clone();
        let callbacks = inner.subscribers.iter().map(|(_, cb)| cb.clone()).collect();
        self.deliver(inner, value, callbacks);
    }

    /// Register a callback; it runs once with the current value, then after
    /// every change until the returned [`Subscription`] is dropped.
    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let cb: Callback<T> = Arc::new(f);
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, cb.clone()));
        let value = inner.value.clone();
        self.deliver(inner, value, vec![cb]);

        let weak = Arc::downgrade(&self.inner);
        Subscription {
            detach: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    let mut inner = inner.lock().unwrap_or_else(|e| e.into_inner());
                    inner.subscribers.retain(|(sid, _)| *sid != id);
                }
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }
}

impl<T: Clone + Default + Send + 'static> Default for Writable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Writable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("Writable").field(&self.lock().value).finish()
    }
}

/// Handle returned by [`Writable::subscribe`]; detaches on drop
pub struct Subscription {
    detach: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.run_detach();
    }

    fn run_detach(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_detach();
    }
}

/// Items, loading flag and messages for one resource screen
#[derive(Debug, Clone)]
pub struct ResourceState<T> {
    pub items: Writable<Vec<T>>,
    pub loading: Writable<bool>,
    pub error: Writable<Option<String>>,
    pub success: Writable<Option<String>>,
}

impl<T: Clone + Send + 'static> Default for ResourceState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + 'static> ResourceState<T> {
    pub fn new() -> Self {
        Self {
            items: Writable::new(Vec::new()),
            loading: Writable::new(false),
            error: Writable::new(None),
            success: Writable::new(None),
        }
    }

    /// Back to the start-of-session values, keeping subscribers attached
    pub fn reset(&self) {
        self.items.set(Vec::new());
        self.loading.set(false);
        self.error.set(None);
        self.success.set(None);
    }

    /// Call before issuing a request
    pub fn begin(&self) {
        self.error.set(None);
        self.success.set(None);
        self.loading.set(true);
    }

    pub fn finish_items(&self, items: Vec<T>) {
        self.items.set(items);
        self.loading.set(false);
    }

    pub fn finish_success(&self, message: impl Into<String>) {
        self.success.set(Some(message.into()));
        self.loading.set(false);
    }

    pub fn fail(&self, err: &Error) {
        self.error.set(Some(err.message()));
        self.loading.set(false);
    }
}

/// Session-wide UI state, one container per domain
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub estudiantes: ResourceState<Student>,
    pub cursos: ResourceState<Course>,
    /// Students enrolled in the course currently on screen
    pub asignaciones: ResourceState<Student>,
}

static APP_STATE: OnceLock<AppState> = OnceLock::new();

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide instance
    pub fn global() -> &'static AppState {
        APP_STATE.get_or_init(AppState::new)
    }

    /// Reset the process-wide instance; call once when a session starts
    pub fn start_session() -> &'static AppState {
        let state = Self::global();
        state.reset();
        state
    }

    pub fn reset(&self) {
        self.estudiantes.reset();
        self.cursos.reset();
        self.asignaciones.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;
    use std::thread;

    #[test]
    fn subscribe_sees_current_value_then_changes() {
        let store = Writable::new(1);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _sub = store.subscribe(move |v| sink.lock().unwrap().push(*v));

        store.set(2);
        store.update(|v| *v += 10);

        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 12]);
        assert_eq!(store.get(), 12);
    }

    #[test]
    fn dropped_subscription_stops_notifications() {
        let store = Writable::new(String::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let sub = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(store.subscriber_count(), 1);

        store.set("a".to_string());
        sub.unsubscribe();
        store.set("b".to_string());

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn subscriber_may_read_the_store() {
        let store = Writable::new(0);
        let reader = store.clone();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _sub = store.subscribe(move |_| sink.lock().unwrap().push(reader.get()));

        store.set(5);
        assert_eq!(*seen.lock().unwrap(), vec![0, 5]);
    }

    #[test]
    fn concurrent_writes_reach_subscribers_in_write_order() {
        let store = Writable::new(0);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let entered_tx = Mutex::new(entered_tx);
        let release_rx = Mutex::new(release_rx);

        let sink = seen.clone();
        let _sub = store.subscribe(move |v| {
            sink.lock().unwrap().push(*v);
            if *v == 1 {
                entered_tx.lock().unwrap().send(()).unwrap();
                release_rx.lock().unwrap().recv().unwrap();
            }
        });

        let writer = {
            let store = store.clone();
            thread::spawn(move || store.set(1))
        };
        // the writer is now parked inside its callback
        entered_rx.recv().unwrap();
        store.set(2);
        release_tx.send(()).unwrap();
        writer.join().unwrap();

        let seen = seen.lock().unwrap().clone();
        assert_eq!(seen, vec![0, 1, 2]);
        assert_eq!(seen.last().copied(), Some(store.get()));
    }

    #[test]
    fn write_from_inside_a_callback_is_delivered_after_it() {
        let store = Writable::new(0);
        let writer = store.clone();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _sub = store.subscribe(move |v| {
            sink.lock().unwrap().push(*v);
            if *v == 1 {
                writer.set(2);
            }
        });

        store.set(1);

        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
        assert_eq!(store.get(), 2);
    }

    #[test]
    fn panicking_subscriber_does_not_stall_delivery() {
        let store = Writable::new(0);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let _sub = store.subscribe(move |v| {
            counter.fetch_add(1, Ordering::SeqCst);
            if *v == 1 {
                panic!("subscriber failed");
            }
        });

        let failing = store.clone();
        assert!(thread::spawn(move || failing.set(1)).join().is_err());
        store.set(2);

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(store.get(), 2);
    }

    #[test]
    fn clones_share_the_value() {
        let a = Writable::new(false);
        let b = a.clone();
        b.set(true);
        assert!(a.get());
    }

    #[test]
    fn resource_state_lifecycle() {
        let state: ResourceState<i32> = ResourceState::new();
        state.error.set(Some("old".to_string()));

        state.begin();
        assert!(state.loading.get());
        assert_eq!(state.error.get(), None);

        state.finish_items(vec![1, 2]);
        assert!(!state.loading.get());
        assert_eq!(state.items.get(), vec![1, 2]);

        state.begin();
        state.fail(&Error::api(404, "Student not found"));
        assert!(!state.loading.get());
        assert_eq!(state.error.get().as_deref(), Some("Student not found"));
        assert_eq!(state.items.get(), vec![1, 2]);

        state.begin();
        state.finish_success("Curso creado");
        assert_eq!(state.success.get().as_deref(), Some("Curso creado"));
    }

    #[test]
    fn reset_keeps_subscribers() {
        let state: ResourceState<i32> = ResourceState::new();
        let loads = Arc::new(Mutex::new(Vec::new()));
        let sink = loads.clone();
        let _sub = state.loading.subscribe(move |v| sink.lock().unwrap().push(*v));

        state.begin();
        state.reset();

        assert_eq!(*loads.lock().unwrap(), vec![false, true, false]);
        assert_eq!(state.loading.subscriber_count(), 1);
    }

    #[test]
    fn session_start_clears_global_state() {
        let state = AppState::global();
        state.cursos.loading.set(true);
        state.estudiantes.error.set(Some("boom".to_string()));

        let state = AppState::start_session();
        assert!(!state.cursos.loading.get());
        assert_eq!(state.estudiantes.error.get(), None);
    }
}
