//! Property-based tests for the store and its interceptors.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated action sequences.

use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use tether::app::actions::{
    add_goal, add_todo, receive_data, remove_goal, remove_todo, toggle_todo,
};
use tether::app::{app_reducer, checker, AppAction, AppState, Goal, Todo};
use tether::core::Action;
use tether::interceptors::{Journal, Logger};
use tether::store::{Interceptor, Store};

fn any_id() -> impl Strategy<Value = String> {
    (0..4u8).prop_map(|n| n.to_string())
}

fn any_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Walk".to_string()),
        Just("Read".to_string()),
        Just("Buy BITCOIN".to_string()),
        "[a-z]{1,8}",
    ]
}

prop_compose! {
    fn arbitrary_todo()(id in any_id(), name in any_name(), complete in any::<bool>()) -> Todo {
        Todo { id, name, complete }
    }
}

prop_compose! {
    fn arbitrary_goal()(id in any_id(), name in any_name()) -> Goal {
        Goal::new(id, name)
    }
}

fn arbitrary_action() -> impl Strategy<Value = AppAction> {
    prop_oneof![
        arbitrary_todo().prop_map(add_todo),
        any_id().prop_map(remove_todo),
        any_id().prop_map(toggle_todo),
        arbitrary_goal().prop_map(add_goal),
        any_id().prop_map(remove_goal),
        (
            prop::collection::vec(arbitrary_todo(), 0..3),
            prop::collection::vec(arbitrary_goal(), 0..3)
        )
            .prop_map(|(todos, goals)| receive_data(todos, goals)),
    ]
}

fn fold(actions: &[AppAction]) -> AppState {
    actions
        .iter()
        .fold(AppState::default(), |state, action| app_reducer(&state, action))
}

fn banned() -> Vec<String> {
    vec!["bitcoin".to_string()]
}

fn guarded_store() -> Store<AppState, AppAction> {
    let chain: Vec<Box<dyn Interceptor<AppState, AppAction>>> = vec![Box::new(checker(&banned()))];
    Store::new(app_reducer, chain)
}

proptest! {
    #[test]
    fn state_is_left_fold_of_reducer(actions in prop::collection::vec(arbitrary_action(), 0..20)) {
        let store: Store<AppState, AppAction> = Store::new(app_reducer, Vec::new());

        for action in &actions {
            store.dispatch(action.clone()).unwrap();
        }

        prop_assert_eq!(&*store.state(), &fold(&actions));
    }

    #[test]
    fn logger_never_changes_final_state(actions in prop::collection::vec(arbitrary_action(), 0..20)) {
        let plain = guarded_store();
        let journal: Journal<AppState, AppAction> = Journal::new();
        let chain: Vec<Box<dyn Interceptor<AppState, AppAction>>> = vec![
            Box::new(checker(&banned())),
            Box::new(Logger::with_journal(journal.clone())),
        ];
        let logged = Store::new(app_reducer, chain);

        for action in &actions {
            let a = plain.dispatch(action.clone()).is_ok();
            let b = logged.dispatch(action.clone()).is_ok();
            prop_assert_eq!(a, b);
        }

        prop_assert_eq!(&*plain.state(), &*logged.state());
    }

    #[test]
    fn vetoed_actions_leave_state_and_observers_untouched(
        actions in prop::collection::vec(arbitrary_action(), 0..20)
    ) {
        let store = guarded_store();
        let notified = Rc::new(Cell::new(0));
        let count = Rc::clone(&notified);
        let _sub = store.subscribe(move || count.set(count.get() + 1));

        for action in actions {
            let before = store.state();
            let calls = notified.get();

            if store.dispatch(action).is_err() {
                prop_assert!(Rc::ptr_eq(&before, &store.state()));
                prop_assert_eq!(notified.get(), calls);
            } else {
                prop_assert_eq!(notified.get(), calls + 1);
            }
        }
    }

    #[test]
    fn journal_records_every_dispatch_in_order(
        actions in prop::collection::vec(arbitrary_action(), 0..20)
    ) {
        let journal: Journal<AppState, AppAction> = Journal::new();
        let chain: Vec<Box<dyn Interceptor<AppState, AppAction>>> = vec![
            Box::new(Logger::with_journal(journal.clone())),
            Box::new(checker(&banned())),
        ];
        let store = Store::new(app_reducer, chain);

        let mut applied = Vec::new();
        for action in &actions {
            applied.push(store.dispatch(action.clone()).is_ok());
        }

        let log = journal.snapshot();
        prop_assert_eq!(log.len(), actions.len());
        let recorded: Vec<bool> = log.entries().iter().map(|e| e.applied).collect();
        prop_assert_eq!(recorded, applied);
        let kinds: Vec<&str> = actions.iter().map(|a| a.kind()).collect();
        prop_assert_eq!(log.kinds(), kinds);
    }
}
