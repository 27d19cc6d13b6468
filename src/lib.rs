//! # ripcord
//!
//! A small runtime algebra for optional values and fallible computations,
//! plus hierarchical execution contexts with scoped logging, tagged faults,
//! and early-return control flow.
//!
//! ## Core pieces
//!
//! 1. **Containers**: [`Maybe`] (presence/absence) and [`Outcome`]
//!    (success/fault) with a combinator surface instead of raw matching
//! 2. **Contexts**: [`Context`] nodes form a tree; every log line and fault
//!    carries the node's dotted path, and tags accumulate as failures
//!    travel outward while the original issuer stays on the label
//! 3. **Guarded calls**: [`execute`] runs a body against a [`Scope`];
//!    combinators like [`Outcome::or_return`] divert the whole call early
//!    through an explicit `ControlFlow` channel and `?`
//!
//! ```
//! use ripcord::{execute, Context, Outcome};
//!
//! let ctx = Context::new("app");
//! let result: Outcome<i32> = execute(&ctx, |scope| {
//!     let n = ctx.fail::<i32>("not ready").or_bail(scope, "warming up")?;
//!     scope.done(Outcome::ok(n + 1))
//! });
//! assert_eq!(result.unwrap_fault().to_string(), "[app] warming up: not ready");
//! ```

pub mod context;
pub mod fault;
pub mod init;
pub mod maybe;
pub mod outcome;
pub mod scope;
pub mod sink;

// Re-export main types
pub use context::Context;
pub use fault::Fault;
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use scope::{execute, execute_detached, FaultHandler, Scope};
pub use sink::{MemorySink, Sink, StdoutSink, TracingSink};

// The early-return channel type, for signatures that thread it.
pub use std::ops::ControlFlow;
