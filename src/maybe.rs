//! Presence/absence container
//!
//! `Maybe<T>` carries either a value or nothing. Unlike a bare
//! `std::option::Option`, the discriminant is not matched on directly:
//! callers go through the dispatch and unwrap combinators, and absence can
//! short-circuit an enclosing guarded call via [`Maybe::or_return`].

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::ControlFlow;

use crate::scope::Scope;

/// A value that may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Maybe<T> {
    value: Option<T>,
}

impl<T> Maybe<T> {
    /// A present value.
    pub fn present(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Absence.
    pub fn absent() -> Self {
        Self { value: None }
    }

    /* ===================== Dispatch ===================== */

    /// Run `f` with the value if present.
    pub fn on_present(&self, f: impl FnOnce(&T)) {
        if let Some(v) = &self.value {
            f(v);
        }
    }

    /// Run `f` if absent.
    pub fn on_absent(&self, f: impl FnOnce()) {
        if self.value.is_none() {
            f();
        }
    }

    /// Branch on the discriminant without exposing it.
    pub fn on_both(&self, present: impl FnOnce(&T), absent: impl FnOnce()) {
        match &self.value {
            Some(v) => present(v),
            None => absent(),
        }
    }

    /* ===================== Unwraps ===================== */

    /// Return the value. Absence here is a programming error: this panics
    /// and is never caught by this crate.
    pub fn unwrap(self) -> T {
        match self.value {
            Some(v) => v,
            None => panic!("called unwrap on an absent Maybe"),
        }
    }

    /// Return the value, or `def` when absent.
    pub fn unwrap_or(self, def: T) -> T {
        self.value.unwrap_or(def)
    }

    /// Return the value; when absent, run `f` and return `T::default()`.
    ///
    /// The return value on the absent branch is meaningless beyond being the
    /// zero value. Only rely on it if the handler itself diverges (panics or
    /// early-returns the enclosing scope).
    pub fn unwrap_or_handle(self, f: impl FnOnce()) -> T
    where
        T: Default,
    {
        match self.value {
            Some(v) => v,
            None => {
                f();
                T::default()
            }
        }
    }

    /// Return the value, or divert the enclosing guarded call to resolve to
    /// absence. Use with `?`:
    ///
    /// ```
    /// use ripcord::{execute, Context, Maybe};
    ///
    /// let ctx = Context::new("app");
    /// let result: Maybe<i32> = execute(&ctx, |scope| {
    ///     let n = Maybe::present(2).or_return(scope)?;
    ///     scope.done(Maybe::present(n * 10))
    /// });
    /// assert_eq!(result.unwrap_or(0), 20);
    /// ```
    pub fn or_return<S>(self, scope: &Scope<'_, Maybe<S>>) -> ControlFlow<Maybe<S>, T> {
        match self.value {
            Some(v) => ControlFlow::Continue(v),
            None => scope.divert(Maybe::absent()),
        }
    }

    /// Return `(value, true)` when present, `(T::default(), false)` when
    /// absent. The only discriminant inspection that does not branch.
    pub fn unwrap_both(self) -> (T, bool)
    where
        T: Default,
    {
        match self.value {
            Some(v) => (v, true),
            None => (T::default(), false),
        }
    }

    /* ===================== Adapters ===================== */

    /// Wrap a map lookup.
    pub fn from_lookup<K>(map: &HashMap<K, T>, key: &K) -> Maybe<T>
    where
        K: Eq + Hash,
        T: Clone,
    {
        match map.get(key) {
            Some(v) => Maybe::present(v.clone()),
            None => Maybe::absent(),
        }
    }

    /// Adapt a `(value, present)` pair.
    pub fn from_pair(pair: (T, bool)) -> Maybe<T> {
        let (value, present) = pair;
        if present {
            Maybe::present(value)
        } else {
            Maybe::absent()
        }
    }

    /// Adapt a call returning a `(value, present)` pair.
    pub fn from_fn(f: impl FnOnce() -> (T, bool)) -> Maybe<T> {
        Self::from_pair(f())
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;
    use std::cell::Cell;

    #[test]
    fn test_present_unwrap_returns_value() {
        assert_eq!(Maybe::present(5).unwrap(), 5);
    }

    #[test]
    #[should_panic(expected = "called unwrap on an absent Maybe")]
    fn test_absent_unwrap_panics() {
        Maybe::<i32>::absent().unwrap();
    }

    #[test]
    fn test_unwrap_or_prefers_value() {
        assert_eq!(Maybe::present(5).unwrap_or(9), 5);
        assert_eq!(Maybe::<i32>::absent().unwrap_or(9), 9);
    }

    #[test]
    fn test_unwrap_both_round_trip() {
        assert_eq!(Maybe::present(5).unwrap_both(), (5, true));
        assert_eq!(Maybe::<i32>::absent().unwrap_both(), (0, false));
    }

    #[test]
    fn test_unwrap_or_handle_returns_zero_value_on_absence() {
        let handled = Cell::new(false);
        let v = Maybe::<i32>::absent().unwrap_or_handle(|| handled.set(true));
        assert!(handled.get());
        // The absent branch yields the zero value, nothing more.
        assert_eq!(v, 0);
    }

    #[test]
    fn test_unwrap_or_handle_skips_handler_when_present() {
        let handled = Cell::new(false);
        let v = Maybe::present(3).unwrap_or_handle(|| handled.set(true));
        assert!(!handled.get());
        assert_eq!(v, 3);
    }

    #[test]
    fn test_dispatch_routes_by_discriminant() {
        let seen = Cell::new(0);
        Maybe::present(7).on_present(|v| seen.set(*v));
        assert_eq!(seen.get(), 7);

        let absent_hits = Cell::new(0);
        Maybe::<i32>::absent().on_absent(|| absent_hits.set(absent_hits.get() + 1));
        Maybe::present(1).on_absent(|| absent_hits.set(absent_hits.get() + 10));
        assert_eq!(absent_hits.get(), 1);

        let branch = Cell::new("");
        Maybe::<i32>::absent().on_both(|_| branch.set("present"), || branch.set("absent"));
        assert_eq!(branch.get(), "absent");
    }

    #[test]
    fn test_from_lookup_hits_and_misses() {
        let map = hashmap! {
            "alpha" => 1,
            "beta" => 2,
        };
        assert_eq!(Maybe::from_lookup(&map, &"beta").unwrap_or(0), 2);
        assert_eq!(Maybe::from_lookup(&map, &"gamma").unwrap_both(), (0, false));
    }

    #[test]
    fn test_from_pair_and_from_fn() {
        assert_eq!(Maybe::from_pair((4, true)).unwrap_or(0), 4);
        assert_eq!(Maybe::from_pair((4, false)).unwrap_or(0), 0);
        assert_eq!(Maybe::from_fn(|| (6, true)).unwrap_or(0), 6);
    }

    #[test]
    fn test_option_conversions() {
        let maybe: Maybe<i32> = Some(3).into();
        assert_eq!(maybe.unwrap_or(0), 3);

        let back: Option<i32> = Maybe::<i32>::absent().into();
        assert_eq!(back, None);
    }
}
