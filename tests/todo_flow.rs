//! End-to-end scenarios for the todo/goal application.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tether::app::actions::{add_goal, add_todo, receive_data, toggle_todo};
use tether::app::{
    build_store, AppConfig, AppState, Goal, InMemoryApi, Notifier, Services, Todo, ERROR_NOTICE,
};
use tether::interceptors::{Journal, Logger, ThunkInterceptor};
use tether::store::{DispatchError, Interceptor, Store};
use tether::{app, StoreBuilder};

#[derive(Clone, Default)]
struct Notices(Rc<RefCell<Vec<String>>>);

impl Notifier for Notices {
    fn notice(&self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}

fn quiet_store() -> Store<AppState, app::AppAction> {
    build_store(&AppConfig {
        log_dispatches: false,
        ..AppConfig::default()
    })
    .unwrap()
}

fn counting(store: &Store<AppState, app::AppAction>) -> Rc<Cell<usize>> {
    let notified = Rc::new(Cell::new(0));
    let count = Rc::clone(&notified);
    // Keep the observer registered for the life of the store.
    let _ = store.subscribe(move || count.set(count.get() + 1));
    notified
}

#[test]
fn receive_data_replaces_everything_and_stops_loading() {
    let store = quiet_store();
    let notified = counting(&store);

    store
        .dispatch(receive_data(
            vec![Todo::new("1", "Walk")],
            vec![Goal::new("2", "Run")],
        ))
        .unwrap();

    assert_eq!(
        *store.state(),
        AppState {
            todos: vec![Todo::new("1", "Walk")],
            goals: vec![Goal::new("2", "Run")],
            loading: false,
        }
    );
    assert_eq!(notified.get(), 1);
}

#[test]
fn add_then_toggle_completes_the_todo() {
    let store = quiet_store();

    store.dispatch(add_todo(Todo::new("0", "Walk the dog"))).unwrap();
    store.dispatch(toggle_todo("0")).unwrap();

    let state = store.state();
    assert_eq!(state.todos.len(), 1);
    assert!(state.todos[0].complete);
    assert!(state.goals.is_empty());
}

#[test]
fn banned_goal_is_vetoed_without_notification() {
    let store = quiet_store();
    let notified = counting(&store);

    let result = store.dispatch(add_goal(Goal::new("1", "Learn about BitCoin")));

    assert!(matches!(result, Err(DispatchError::Rejected(_))));
    let err = result.unwrap_err();
    let rejection = err.rejection().unwrap();
    assert_eq!(rejection.action, "ADD_GOAL");
    assert_eq!(notified.get(), 0);
    assert!(store.state().goals.is_empty());
}

#[tokio::test]
async fn async_create_dispatches_server_item_once() {
    let store = quiet_store();
    let notified = counting(&store);
    let services = Services::new(InMemoryApi::new(), Notices::default());
    let cleared = Rc::new(Cell::new(false));
    let flag = Rc::clone(&cleared);

    store
        .dispatch(services.handle_add_todo("Walk", move || flag.set(true)))
        .unwrap()
        .settle()
        .await;

    assert!(cleared.get());
    assert_eq!(notified.get(), 1);
    let saved = services.api.stored_todos();
    assert_eq!(saved.len(), 1);
    assert_eq!(store.state().todos, saved);
}

#[tokio::test]
async fn failed_delete_removes_then_re_adds() {
    let journal: Journal<AppState, app::AppAction> = Journal::new();
    let chain: Vec<Box<dyn Interceptor<AppState, app::AppAction>>> = vec![
        Box::new(ThunkInterceptor),
        Box::new(app::checker(&["bitcoin".to_string()])),
        Box::new(Logger::with_journal(journal.clone())),
    ];
    let store = StoreBuilder::new()
        .reducer(app::app_reducer)
        .interceptors(chain)
        .build()
        .unwrap();
    let todo = Todo::new("1", "Walk");
    store.dispatch(add_todo(todo.clone())).unwrap();

    let notices = Notices::default();
    let services = Services::new(InMemoryApi::new(), notices.clone());
    services.api.set_offline(true);

    store
        .dispatch(services.handle_delete_todo(&todo))
        .unwrap()
        .settle()
        .await;

    assert_eq!(
        journal.snapshot().kinds(),
        vec!["ADD_TODO", "REMOVE_TODO", "ADD_TODO"]
    );
    assert_eq!(store.state().todos, vec![todo]);
    assert_eq!(*notices.0.borrow(), vec![ERROR_NOTICE.to_string()]);
}

#[tokio::test]
async fn initial_load_then_optimistic_toggle_round_trip() {
    let store = quiet_store();
    let api = InMemoryApi::new().seed(vec![Todo::new("1", "Walk")], Vec::new());
    let services = Services::new(api, Notices::default());

    store
        .dispatch(services.handle_initial_data())
        .unwrap()
        .settle()
        .await;
    store
        .dispatch(services.handle_toggle("1"))
        .unwrap()
        .settle()
        .await;

    assert!(!store.state().loading);
    assert!(store.state().todos[0].complete);
    assert!(services.api.stored_todos()[0].complete);
}
