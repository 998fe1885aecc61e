//! Pure transition functions.

/// Pure transition function from `(state, action)` to the next state.
///
/// Reducers must be total: an action they do not handle returns a value
/// equal to the input. They never mutate their input; the store swaps the
/// returned value in after `reduce` returns.
///
/// `initial` supplies the state a store starts from, the way a reducer with
/// default parameter values would when handed no state at all.
///
/// Every `Fn(&S, &A) -> S` is a reducer when `S: Default`:
///
/// ```rust
/// use tether::core::Reducer;
///
/// let counter = |state: &i64, delta: &i64| state + delta;
///
/// assert_eq!(Reducer::<i64, i64>::initial(&counter), 0);
/// assert_eq!(Reducer::<i64, i64>::reduce(&counter, &1, &2), 3);
/// ```
pub trait Reducer<S, A> {
    /// State before any action has been applied.
    fn initial(&self) -> S;

    /// Fold one action into the state.
    fn reduce(&self, state: &S, action: &A) -> S;
}

impl<S, A, F> Reducer<S, A> for F
where
    S: Default,
    F: Fn(&S, &A) -> S,
{
    fn initial(&self) -> S {
        S::default()
    }

    fn reduce(&self, state: &S, action: &A) -> S {
        self(state, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Tally {
        items: Vec<u32>,
    }

    struct Seeded(Vec<u32>);

    impl Reducer<Tally, u32> for Seeded {
        fn initial(&self) -> Tally {
            Tally {
                items: self.0.clone(),
            }
        }

        fn reduce(&self, state: &Tally, action: &u32) -> Tally {
            let mut items = state.items.clone();
            items.push(*action);
            Tally { items }
        }
    }

    #[test]
    fn closure_reducer_starts_from_default() {
        let reducer = |state: &Tally, action: &u32| {
            let mut items = state.items.clone();
            items.push(*action);
            Tally { items }
        };

        let initial: Tally = Reducer::<Tally, u32>::initial(&reducer);
        assert_eq!(initial, Tally::default());
        assert_eq!(reducer(&initial, &7).items, vec![7]);
    }

    #[test]
    fn custom_reducer_supplies_its_own_initial_state() {
        let reducer = Seeded(vec![1, 2]);

        assert_eq!(reducer.initial().items, vec![1, 2]);
    }

    #[test]
    fn reduce_leaves_input_untouched() {
        let reducer = Seeded(Vec::new());
        let before = Tally { items: vec![3] };

        let after = reducer.reduce(&before, &4);

        assert_eq!(before.items, vec![3]);
        assert_eq!(after.items, vec![3, 4]);
    }
}
