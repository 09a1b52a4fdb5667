mod common;

use std::sync::{Arc, Mutex};

use aula_core::model::{CourseQuery, Page, Student};
use aula_core::store::{AppState, ResourceState};
use common::api;

#[tokio::test]
async fn load_students_into_state() {
    let api = api();
    api.http().reply(200, r#"[{"id":1},{"id":2}]"#);
    let state = AppState::new();

    let loading_seen = Arc::new(Mutex::new(Vec::new()));
    let sink = loading_seen.clone();
    let _sub = state
        .estudiantes
        .loading
        .subscribe(move |v| sink.lock().unwrap().push(*v));

    state.estudiantes.begin();
    match api.estudiantes().list(Page::default()).await {
        Ok(items) => state.estudiantes.finish_items(items),
        Err(e) => state.estudiantes.fail(&e),
    }

    assert_eq!(state.estudiantes.items.get().len(), 2);
    assert_eq!(state.estudiantes.error.get(), None);
    assert_eq!(*loading_seen.lock().unwrap(), vec![false, true, false]);
}

#[tokio::test]
async fn failed_call_sets_error_message() {
    let api = api();
    api.http().reply(404, r#"{"detail":"Student not found"}"#);
    let state: ResourceState<Student> = ResourceState::new();

    state.begin();
    match api.estudiantes().get(42).await {
        Ok(student) => state.finish_items(vec![student]),
        Err(e) => state.fail(&e),
    }

    assert!(!state.loading.get());
    assert_eq!(state.error.get().as_deref(), Some("Student not found"));
    assert!(state.items.get().is_empty());
}

#[tokio::test]
async fn client_calls_never_write_global_state() {
    let api = api();
    api.http()
        .reply(200, r#"[{"id":1}]"#)
        .reply(200, r#"[{"id":7}]"#)
        .reply(404, r#"{"detail":"Student not found"}"#);
    let state = AppState::start_session();

    let writes = Arc::new(Mutex::new(Vec::new()));
    let mut subs = Vec::new();
    for (name, store) in [
        ("cursos.loading", &state.cursos.loading),
        ("estudiantes.loading", &state.estudiantes.loading),
    ] {
        let sink = writes.clone();
        subs.push(store.subscribe(move |_| sink.lock().unwrap().push(name)));
    }
    let sink = writes.clone();
    subs.push(state.cursos.items.subscribe(move |_| sink.lock().unwrap().push("cursos.items")));
    let sink = writes.clone();
    subs.push(
        state
            .estudiantes
            .error
            .subscribe(move |_| sink.lock().unwrap().push("estudiantes.error")),
    );
    // one initial delivery per subscription
    assert_eq!(writes.lock().unwrap().len(), 4);

    api.cursos().list(&CourseQuery::new()).await.unwrap();
    api.estudiantes().list(Page::default()).await.unwrap();
    api.estudiantes().get(42).await.unwrap_err();

    assert_eq!(writes.lock().unwrap().len(), 4);
    assert!(state.cursos.items.get().is_empty());
    assert_eq!(state.estudiantes.error.get(), None);
}

#[tokio::test]
async fn concurrent_loads_last_write_wins() {
    let api = api();
    api.http()
        .reply(200, r#"[{"id":1}]"#)
        .reply(200, r#"[{"id":2},{"id":3}]"#);
    let state: ResourceState<Student> = ResourceState::new();

    let load = |page: Page| {
        let api = &api;
        let state = &state;
        async move {
            state.begin();
            match api.estudiantes().list(page).await {
                Ok(items) => state.finish_items(items),
                Err(e) => state.fail(&e),
            }
        }
    };

    futures::future::join(load(Page::new(0, 1)), load(Page::new(1, 2))).await;

    // second future resolves last, so its result is what remains
    let ids: Vec<_> = state.items.get().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![2, 3]);
    assert_eq!(api.http().requests().len(), 2);
}
