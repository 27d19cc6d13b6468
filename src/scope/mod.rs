//! Guarded calls and early return
//!
//! This module is the boundary half of the crate's core: a *guarded call*
//! runs a body against a [`Scope`], and any combinator holding that scope can
//! divert the whole call to finish early with a caller-supplied value.
//!
//! ## Design
//!
//! 1. **Explicit channel**: the early-return signal is a
//!    `std::ops::ControlFlow::Break` value threaded through combinators with
//!    `?`. There is no panic, no unwinding, no runtime type matching.
//! 2. **The scope is the only producer**: `Break` values for a boundary come
//!    out of its own `Scope`, so a diversion can never be confused with
//!    anyone else's signal, and the boundary consumes it exactly once by
//!    construction.
//! 3. **Misuse is unrepresentable**: a `Scope` is borrowed for the duration
//!    of the guarded call, so it cannot be stashed past the call's end or
//!    handed to another thread, and its result type is fixed by the
//!    boundary, so a diversion value of the wrong shape does not compile.
//! 4. **Defects stay loud**: a panic crossing [`execute`] is somebody's bug
//!    and propagates untouched.

use std::convert::Infallible;
use std::marker::PhantomData;
use std::ops::ControlFlow;

use crate::context::Context;
use crate::fault::Fault;

/* ===================== Scope ===================== */

/// The in-flight handle of a guarded call.
///
/// A scope is bound to a [`Context`] (it derefs to it, so `scope.println(..)`
/// and `scope.fault(..)` work directly) and to the call's result type `T`.
/// Scopes are only created by [`execute`] / [`execute_detached`] and live
/// exactly as long as the body runs.
pub struct Scope<'a, T> {
    ctx: &'a Context,
    _result: PhantomData<fn(T) -> T>,
}

impl<'a, T> Scope<'a, T> {
    fn new(ctx: &'a Context) -> Self {
        Self {
            ctx,
            _result: PhantomData,
        }
    }

    /// The context this guarded call is bound to.
    pub fn context(&self) -> &Context {
        self.ctx
    }

    /// Finish the guarded call now with `value`, written `scope.early(v)?`.
    /// Statements after it never run.
    pub fn early(&self, value: T) -> ControlFlow<T, Infallible> {
        ControlFlow::Break(value)
    }

    /// Normal completion value for the tail of a body.
    pub fn done(&self, value: T) -> ControlFlow<T, T> {
        ControlFlow::Continue(value)
    }

    /// A reusable failure handler: tags a fault and diverts this scope.
    /// Pair with [`Outcome::or_handle`](crate::outcome::Outcome::or_handle),
    /// or invoke directly via [`FaultHandler::handle`].
    pub fn fault_handler(&self, tag: impl Into<String>) -> FaultHandler<'_, 'a, T> {
        FaultHandler {
            scope: self,
            tag: tag.into(),
        }
    }

    /// Divert this scope with `value`. Crate-internal: combinators route
    /// their short-circuits through here so the scope stays the single
    /// channel.
    pub(crate) fn divert<V>(&self, value: T) -> ControlFlow<T, V> {
        ControlFlow::Break(value)
    }
}

impl<T> std::ops::Deref for Scope<'_, T> {
    type Target = Context;

    fn deref(&self) -> &Context {
        self.ctx
    }
}

/* ===================== Fault handler ===================== */

/// Reusable handler wiring a failure branch into the scope's early return,
/// created by [`Scope::fault_handler`]. Holding one does not tie up the
/// scope; several call sites can share it.
pub struct FaultHandler<'s, 'a, T> {
    scope: &'s Scope<'a, T>,
    tag: String,
}

impl<T: From<Fault>> FaultHandler<'_, '_, T> {
    /// Tag `fault` and divert the scope with it. Written
    /// `handler.handle(fault)?;`.
    pub fn handle(&self, fault: Fault) -> ControlFlow<T, Infallible> {
        self.divert_with(fault)
    }

    pub(crate) fn divert_with<V>(&self, fault: Fault) -> ControlFlow<T, V> {
        self.scope.divert(T::from(fault.tagged(&self.tag)))
    }
}

/* ===================== Guarded calls ===================== */

/// Run `body` as a guarded call over `ctx`.
///
/// The call always produces a `T`: either the body's normal completion
/// (`scope.done(v)` / `ControlFlow::Continue`) or the value a combinator
/// diverted the scope with.
///
/// ```
/// use ripcord::{execute, Context, Outcome};
///
/// let ctx = Context::new("app");
/// let result: Outcome<i32> = execute(&ctx, |scope| {
///     let n = Outcome::ok(20).or_return(scope)?;
///     scope.done(Outcome::ok(n + 1))
/// });
/// assert_eq!(result.unwrap_or(0), 21);
/// ```
pub fn execute<T>(ctx: &Context, body: impl FnOnce(&Scope<'_, T>) -> ControlFlow<T, T>) -> T {
    let scope = Scope::new(ctx);
    match body(&scope) {
        ControlFlow::Continue(value) => value,
        ControlFlow::Break(value) => value,
    }
}

/// Launch a guarded call as an independent unit of work and report its
/// result to `on_done` instead of a caller.
///
/// The body runs on the tokio blocking pool, so this must be called from
/// within a tokio runtime. The launcher does not block and takes no part in
/// the launched scope; state crosses only by value or explicit shared
/// ownership.
pub fn execute_detached<T, F, C>(ctx: Context, body: F, on_done: C)
where
    T: Send + 'static,
    F: FnOnce(&Scope<'_, T>) -> ControlFlow<T, T> + Send + 'static,
    C: FnOnce(T) + Send + 'static,
{
    let _ = tokio::task::spawn_blocking(move || {
        let path = ctx.path();
        let result = execute(&ctx, body);
        tracing::trace!(context = %path, "detached guarded call completed");
        on_done(result);
    });
}

#[cfg(test)]
mod tests;
