//! Validating interceptor that vetoes actions breaking domain rules.
//!
//! Rules return Stillwater's `Validation`, and every rule is evaluated so a
//! rejection carries ALL violations instead of the first one found. Failures
//! are `NonEmptyVec`s, so a failing rule always names at least one violation.

use crate::core::{Action, Message, Violation};
use crate::store::{DispatchError, DispatchResult, Interceptor, Next, Rejection, Store};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for rule functions
pub type Rule<A> = Box<dyn Fn(&A) -> Validation<(), NonEmptyVec<Violation>>>;

/// Vetoes plain actions that break any rule.
///
/// A vetoed action never reaches the reducer and notifies nobody; the caller
/// receives [`DispatchError::Rejected`] listing every violation. Thunks are
/// forwarded unchecked.
pub struct Validator<A> {
    rules: Vec<Rule<A>>,
}

impl<A: Action> Validator<A> {
    /// Evaluate every rule, accumulating all violations.
    pub fn check(&self, action: &A) -> Validation<(), NonEmptyVec<Violation>> {
        let checks: Vec<Validation<(), NonEmptyVec<Violation>>> =
            self.rules.iter().map(|rule| rule(action)).collect();

        // Accumulate ALL failures using all_vec
        Validation::all_vec(checks).map(|_| ())
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl<S: 'static, A: Action> Interceptor<S, A> for Validator<A> {
    fn name(&self) -> &'static str {
        "validator"
    }

    fn intercept(
        &self,
        _store: &Store<S, A>,
        message: Message<S, A>,
        next: Next<'_, S, A>,
    ) -> DispatchResult {
        let Some(action) = message.as_action() else {
            return next.run(message);
        };

        match self.check(action) {
            Validation::Success(()) => next.run(message),
            Validation::Failure(violations) => {
                let rejection = Rejection {
                    action: action.kind(),
                    interceptor: Interceptor::<S, A>::name(self),
                    violations,
                };
                tracing::warn!(%rejection, "action vetoed");
                Err(DispatchError::Rejected(rejection))
            }
        }
    }
}

/// Builder for validators
pub struct ValidatorBuilder<A> {
    rules: Vec<Rule<A>>,
}

impl<A: Action> ValidatorBuilder<A> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule
    pub fn require<F>(mut self, rule: F) -> Self
    where
        F: Fn(&A) -> Validation<(), NonEmptyVec<Violation>> + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Add a simple predicate rule with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&A) -> bool + 'static,
    {
        let rule = move |action: &A| {
            if predicate(action) {
                Validation::success(())
            } else {
                Validation::fail(Violation::custom(error_msg.clone()))
            }
        };
        self.rules.push(Box::new(rule));
        self
    }

    /// Reject actions whose text field contains any of `terms`, ignoring case.
    ///
    /// `field` picks the field to inspect, returning its name and contents,
    /// or `None` for actions the rule does not apply to.
    pub fn forbid_terms<F>(mut self, terms: &[String], field: F) -> Self
    where
        F: for<'a> Fn(&'a A) -> Option<(&'static str, &'a str)> + 'static,
    {
        let terms: Vec<String> = terms.iter().map(|t| t.to_lowercase()).collect();
        let rule = move |action: &A| {
            let Some((name, text)) = field(action) else {
                return Validation::success(());
            };
            let text = text.to_lowercase();
            let checks: Vec<Validation<(), NonEmptyVec<Violation>>> = terms
                .iter()
                .map(|term| {
                    if text.contains(term.as_str()) {
                        Validation::fail(Violation::BannedTerm {
                            field: name.to_string(),
                            term: term.clone(),
                        })
                    } else {
                        Validation::success(())
                    }
                })
                .collect();

            Validation::all_vec(checks).map(|_| ())
        };
        self.rules.push(Box::new(rule));
        self
    }

    pub fn build(self) -> Validator<A> {
        Validator { rules: self.rules }
    }
}

impl<A: Action> Default for ValidatorBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}
