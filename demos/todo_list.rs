//! Todo List
//!
//! This example drives the todo/goal store through a short session.
//!
//! Key concepts:
//! - Building the store from configuration
//! - A connected view re-rendering only when its slice changes
//! - Thunks talking to a remote service
//! - Optimistic deletion rolled back when the service fails
//! - Dispatch logging through `tracing`
//!
//! Run with: RUST_LOG=info cargo run --example todo_list

use tether::app::actions::toggle_todo;
use tether::app::{
    build_store, connect, AppConfig, AppState, Goal, InMemoryApi, Services, Todo, TracingNotifier,
};
use tracing_subscriber::EnvFilter;

fn render(state: &AppState) {
    if state.loading {
        println!("  Loading...");
        return;
    }
    println!("  Todos:");
    for todo in &state.todos {
        let mark = if todo.complete { "x" } else { " " };
        println!("    [{mark}] {}", todo.name);
    }
    println!("  Goals:");
    for goal in &state.goals {
        println!("    - {}", goal.name);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    println!("=== Todo List Example ===\n");

    let config = AppConfig::from_json(r#"{ "banned_terms": ["bitcoin"] }"#)?;
    let store = build_store(&config)?;
    let api = InMemoryApi::new().seed(
        vec![Todo::new("t1", "Walk the dog"), Todo::new("t2", "Wash the car")],
        vec![Goal::new("g1", "Learn Rust")],
    );
    let services = Services::new(api, TracingNotifier);

    let view = connect(&store, |state: &AppState| state.clone(), render);

    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    runtime.block_on(async {
        println!("\n1. Initial load");
        store.dispatch(services.handle_initial_data())?.settle().await;

        println!("\n2. Add a todo");
        store
            .dispatch(services.handle_add_todo("Read a book", || {
                println!("  (input cleared)")
            }))?
            .settle()
            .await;

        println!("\n3. Add a banned goal");
        store
            .dispatch(services.handle_add_goal("Buy Bitcoin", || {}))?
            .settle()
            .await;

        println!("\n4. Toggle locally");
        store.dispatch(toggle_todo("t1"))?;

        println!("\n5. Delete while offline");
        services.api.set_offline(true);
        let first = store.state().todos[0].clone();
        store
            .dispatch(services.handle_delete_todo(&first))?
            .settle()
            .await;

        Ok::<(), tether::DispatchError>(())
    })?;

    view.unsubscribe();
    println!("\n=== Example Complete ===");
    Ok(())
}
