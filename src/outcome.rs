//! Success/failure container
//!
//! `Outcome<T>` mirrors [`Maybe`](crate::maybe::Maybe) with a
//! [`Fault`](crate::fault::Fault) on the failure side. Failures are returned,
//! never thrown; the only non-local movement is diverting an enclosing
//! guarded call via [`Outcome::or_return`] / [`Outcome::or_bail`].

use std::ops::ControlFlow;

use crate::context::Context;
use crate::fault::Fault;
use crate::scope::{FaultHandler, Scope};

/// A computation result: a value or a fault, never both.
#[derive(Debug, Clone)]
pub struct Outcome<T> {
    inner: Result<T, Fault>,
}

impl<T> Outcome<T> {
    /// A successful value.
    pub fn ok(value: T) -> Self {
        Self { inner: Ok(value) }
    }

    /// A failure.
    pub fn failed(fault: Fault) -> Self {
        Self { inner: Err(fault) }
    }

    /* ===================== Dispatch ===================== */

    /// Run `f` with the value on success.
    pub fn on_ok(&self, f: impl FnOnce(&T)) {
        if let Ok(v) = &self.inner {
            f(v);
        }
    }

    /// Run `f` with the fault on failure.
    pub fn on_fault(&self, f: impl FnOnce(&Fault)) {
        if let Err(fault) = &self.inner {
            f(fault);
        }
    }

    /// Branch on the discriminant without exposing it.
    pub fn on_both(&self, ok: impl FnOnce(&T), fault: impl FnOnce(&Fault)) {
        match &self.inner {
            Ok(v) => ok(v),
            Err(f) => fault(f),
        }
    }

    /* ===================== Unwraps ===================== */

    /// Return the value. Failure here is a programming error: this panics
    /// with the fault chained into the message.
    pub fn unwrap(self) -> T {
        match self.inner {
            Ok(v) => v,
            Err(fault) => panic!("called unwrap on a failed Outcome: {fault}"),
        }
    }

    /// Return the fault. Success here is a programming error.
    pub fn unwrap_fault(self) -> Fault {
        match self.inner {
            Ok(_) => panic!("called unwrap_fault on an ok Outcome"),
            Err(fault) => fault,
        }
    }

    /// Return the value, or `def` on failure.
    pub fn unwrap_or(self, def: T) -> T {
        self.inner.unwrap_or(def)
    }

    /// Return the value; on failure, run `f` with the fault and return
    /// `T::default()`.
    ///
    /// As with [`Maybe::unwrap_or_handle`](crate::maybe::Maybe::unwrap_or_handle),
    /// the failure-branch return value is just the zero value; only rely on
    /// it if the handler diverges.
    pub fn unwrap_or_handle(self, f: impl FnOnce(&Fault)) -> T
    where
        T: Default,
    {
        match self.inner {
            Ok(v) => v,
            Err(fault) => {
                f(&fault);
                T::default()
            }
        }
    }

    /// Return the value, or divert the enclosing guarded call to resolve to
    /// this same failure, issuer and message untouched.
    pub fn or_return<S>(self, scope: &Scope<'_, Outcome<S>>) -> ControlFlow<Outcome<S>, T> {
        match self.inner {
            Ok(v) => ControlFlow::Continue(v),
            Err(fault) => scope.divert(Outcome::failed(fault)),
        }
    }

    /// Return the value, or tag the fault and divert the guarded call with
    /// it re-shaped into the scope's own result type.
    ///
    /// This is how a function whose result type differs from the callee's
    /// `Outcome<T>` still short-circuits: the scope type only has to be
    /// buildable from a fault. The tag follows the usual rule — prepended,
    /// empty is a no-op, issuer preserved.
    pub fn or_bail<S>(self, scope: &Scope<'_, S>, tag: &str) -> ControlFlow<S, T>
    where
        S: From<Fault>,
    {
        match self.inner {
            Ok(v) => ControlFlow::Continue(v),
            Err(fault) => scope.divert(S::from(fault.tagged(tag))),
        }
    }

    /// Return the value, or route the fault through a reusable handler that
    /// tags it and diverts the scope (see [`Scope::fault_handler`]).
    pub fn or_handle<S>(self, handler: &FaultHandler<'_, '_, S>) -> ControlFlow<S, T>
    where
        S: From<Fault>,
    {
        match self.inner {
            Ok(v) => ControlFlow::Continue(v),
            Err(fault) => handler.divert_with(fault),
        }
    }

    /// Return `(value, None)` on success, `(T::default(), Some(fault))` on
    /// failure.
    pub fn unwrap_both(self) -> (T, Option<Fault>)
    where
        T: Default,
    {
        match self.inner {
            Ok(v) => (v, None),
            Err(fault) => (T::default(), Some(fault)),
        }
    }

    /* ===================== Adapters ===================== */

    /// Adapt a plain `Result`, adopting a foreign error under `ctx` (an
    /// error that already is a [`Fault`] keeps its issuer).
    pub fn from_result<E>(ctx: &Context, result: Result<T, E>) -> Outcome<T>
    where
        E: Into<anyhow::Error>,
    {
        match result {
            Ok(v) => Outcome::ok(v),
            Err(e) => Outcome::failed(ctx.wrap(e.into())),
        }
    }

    /// Adapt a call returning a plain `Result`.
    pub fn from_fn<E>(ctx: &Context, f: impl FnOnce() -> Result<T, E>) -> Outcome<T>
    where
        E: Into<anyhow::Error>,
    {
        Self::from_result(ctx, f())
    }
}

impl<T> From<Fault> for Outcome<T> {
    fn from(fault: Fault) -> Self {
        Outcome::failed(fault)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use std::cell::Cell;
    use std::sync::Arc;

    fn test_context() -> Context {
        Context::with_sink("svc", Arc::new(MemorySink::new()))
    }

    #[test]
    fn test_ok_unwrap_returns_value() {
        assert_eq!(Outcome::ok(5).unwrap(), 5);
        assert_eq!(Outcome::ok(5).unwrap_or(0), 5);
    }

    #[test]
    #[should_panic(expected = "called unwrap on a failed Outcome")]
    fn test_failed_unwrap_panics_with_fault() {
        let ctx = test_context();
        ctx.fail::<i32>("boom").unwrap();
    }

    #[test]
    #[should_panic(expected = "called unwrap_fault on an ok Outcome")]
    fn test_unwrap_fault_on_ok_panics() {
        Outcome::ok(1).unwrap_fault();
    }

    #[test]
    fn test_failed_unwrap_or_falls_back() {
        let ctx = test_context();
        let r2: Outcome<i32> = ctx.child("worker").fail("x");
        assert_eq!(r2.clone().unwrap_or(0), 0);
        assert_eq!(r2.unwrap_fault().to_string(), "[svc::worker] x");
    }

    #[test]
    fn test_unwrap_both_round_trip() {
        let (v, fault) = Outcome::ok(5).unwrap_both();
        assert_eq!(v, 5);
        assert!(fault.is_none());

        let ctx = test_context();
        let (zero, fault) = ctx.fail::<i32>("boom").unwrap_both();
        assert_eq!(zero, 0);
        assert_eq!(fault.map(|f| f.to_string()).as_deref(), Some("[svc] boom"));
    }

    #[test]
    fn test_unwrap_or_handle_sees_fault_and_returns_zero_value() {
        let ctx = test_context();
        let message = Cell::new(String::new());
        let v = ctx.fail::<i32>("boom").unwrap_or_handle(|f| {
            message.set(f.to_string());
        });
        assert_eq!(v, 0);
        assert_eq!(message.take(), "[svc] boom");
    }

    #[test]
    fn test_dispatch_routes_by_discriminant() {
        let ctx = test_context();
        let ok_seen = Cell::new(0);
        Outcome::ok(4).on_ok(|v| ok_seen.set(*v));
        assert_eq!(ok_seen.get(), 4);

        let fault_hits = Cell::new(0);
        ctx.fail::<i32>("boom").on_fault(|_| fault_hits.set(1));
        Outcome::ok(1).on_fault(|_| fault_hits.set(99));
        assert_eq!(fault_hits.get(), 1);

        let branch = Cell::new("");
        ctx.fail::<i32>("boom")
            .on_both(|_| branch.set("ok"), |_| branch.set("fault"));
        assert_eq!(branch.get(), "fault");
    }

    #[test]
    fn test_from_result_adopts_foreign_error() {
        let ctx = test_context();
        let r: Outcome<i32> = Outcome::from_result(
            &ctx,
            Err::<i32, _>(std::io::Error::new(std::io::ErrorKind::Other, "disk gone")),
        );
        assert_eq!(r.unwrap_fault().to_string(), "[svc] disk gone");

        let ok: Outcome<i32> = Outcome::from_result(&ctx, Ok::<_, std::io::Error>(3));
        assert_eq!(ok.unwrap(), 3);
    }

    #[test]
    fn test_from_fn_adapts_fallible_call() {
        let ctx = test_context();
        let r = Outcome::from_fn(&ctx, || Ok::<_, std::io::Error>(11));
        assert_eq!(r.unwrap(), 11);
    }

    #[test]
    fn test_from_result_keeps_existing_fault_issuer() {
        let ctx = test_context();
        let origin = ctx.child("worker");
        let foreign: anyhow::Error = origin.fault("boom").into();

        let r: Outcome<i32> = Outcome::from_result(&ctx, Err::<i32, _>(foreign));
        assert_eq!(r.unwrap_fault().to_string(), "[svc::worker] boom");
    }
}
