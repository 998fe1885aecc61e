//! Binding a render function to a slice of state.

use crate::core::Action;
use crate::store::{Store, Subscription};
use std::cell::RefCell;
use std::rc::Rc;

/// Render `selector(state)` now and again whenever the selected value changes.
///
/// Notifications that leave the selected value equal to the last rendered one
/// are skipped. The observer holds a store handle, so the view keeps the
/// store alive until the returned subscription is cancelled.
///
/// ```rust
/// use tether::app::{build_store, connect, AppConfig};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let store = build_store(&AppConfig::default()).unwrap();
/// let renders = Rc::new(Cell::new(0));
/// let count = Rc::clone(&renders);
///
/// let _view = connect(&store, |state| state.loading, move |_| count.set(count.get() + 1));
///
/// assert_eq!(renders.get(), 1);
/// ```
pub fn connect<S, A, T, Sel, R>(store: &Store<S, A>, selector: Sel, render: R) -> Subscription<S, A>
where
    S: 'static,
    A: Action,
    T: PartialEq + 'static,
    Sel: Fn(&S) -> T + 'static,
    R: Fn(&T) + 'static,
{
    let current = Rc::new(selector(&*store.state()));
    render(&*current);
    let last = RefCell::new(current);

    let handle = store.clone();
    store.subscribe(move || {
        let next = selector(&*handle.state());
        if **last.borrow() == next {
            return;
        }
        // Cache before rendering; a render may dispatch and re-enter.
        let next = Rc::new(next);
        *last.borrow_mut() = Rc::clone(&next);
        render(&*next);
    })
}
