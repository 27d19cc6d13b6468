//! Hierarchical execution contexts
//!
//! A `Context` is a named node in a tree. Walking the parent links yields a
//! dotted path (`root::child::grandchild`) that prefixes every log line and
//! every fault the node issues. Contexts are handed down the call graph
//! explicitly; there is no process-wide default (see `init` for the
//! entry-point factory).
//!
//! Contexts are immutable after construction and cheap to clone: a clone is
//! another handle to the same node. The whole tree shares the root's sink.

use std::fmt;
use std::sync::Arc;

use crate::fault::Fault;
use crate::outcome::Outcome;
use crate::sink::{Sink, StdoutSink};

/// A named, parent-linked context node.
#[derive(Clone)]
pub struct Context {
    inner: Arc<ContextInner>,
}

struct ContextInner {
    name: String,
    parent: Option<Context>,
    sink: Arc<dyn Sink>,
}

impl Context {
    /// Create a root context writing to stdout.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_sink(name, Arc::new(StdoutSink))
    }

    /// Create a root context writing to the given sink.
    pub fn with_sink(name: impl Into<String>, sink: Arc<dyn Sink>) -> Self {
        Self {
            inner: Arc::new(ContextInner {
                name: name.into(),
                parent: None,
                sink,
            }),
        }
    }

    /// Derive a child context. The child shares this tree's sink; `self` is
    /// not modified.
    pub fn child(&self, name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(ContextInner {
                name: name.into(),
                parent: Some(self.clone()),
                sink: self.inner.sink.clone(),
            }),
        }
    }

    /// The leaf segment of this context's path.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The full dotted path, recomputed from the parent links on each call.
    pub fn path(&self) -> String {
        match &self.inner.parent {
            Some(parent) => format!("{}::{}", parent.path(), self.inner.name),
            None => self.inner.name.clone(),
        }
    }

    /* ===================== Logging ===================== */

    /// Write one line to the sink, prefixed with `[<path>] `.
    pub fn println(&self, msg: impl fmt::Display) {
        self.inner
            .sink
            .write_line(&format!("[{}] {}", self.path(), msg));
    }

    /// Formatted variant of [`Context::println`]; call as
    /// `ctx.printf(format_args!("..", ..))`.
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.inner
            .sink
            .write_line(&format!("[{}] {}", self.path(), args));
    }

    /// Write a raw, unprefixed line to the sink. Escape hatch for output
    /// that is already formatted.
    pub fn writeln(&self, line: &str) {
        self.inner.sink.write_line(line);
    }

    /* ===================== Faults ===================== */

    /// Raise a fault issued by this context.
    pub fn fault(&self, msg: impl Into<String>) -> Fault {
        Fault::new(self.clone(), msg.into())
    }

    /// Formatted variant of [`Context::fault`].
    pub fn faultf(&self, args: fmt::Arguments<'_>) -> Fault {
        Fault::new(self.clone(), args.to_string())
    }

    /// Shorthand for a failed [`Outcome`] issued by this context.
    pub fn fail<T>(&self, msg: impl Into<String>) -> Outcome<T> {
        Outcome::failed(self.fault(msg))
    }

    /// Formatted variant of [`Context::fail`].
    pub fn failf<T>(&self, args: fmt::Arguments<'_>) -> Outcome<T> {
        Outcome::failed(self.faultf(args))
    }

    /// Convert any error into a [`Fault`].
    ///
    /// An error that already is a fault passes through unchanged and keeps
    /// its original issuer; a foreign error is adopted with `self` as the
    /// issuer and its rendered message. The asymmetry is deliberate: faults
    /// report where they originated, foreign errors report where they
    /// entered the system.
    pub fn wrap(&self, err: anyhow::Error) -> Fault {
        match err.downcast::<Fault>() {
            Ok(fault) => fault,
            Err(foreign) => Fault::new(self.clone(), format!("{foreign:#}")),
        }
    }

    /// Wrap an error and prepend `"tag: "` to its message. An empty tag is a
    /// plain wrap, so call sites need not branch on whether they have one.
    pub fn wrap_and_tag(&self, err: anyhow::Error, tag: &str) -> Fault {
        self.wrap(err).tagged(tag)
    }

    /// Formatted variant of [`Context::wrap_and_tag`].
    pub fn wrap_and_tagf(&self, err: anyhow::Error, args: fmt::Arguments<'_>) -> Fault {
        self.wrap_and_tag(err, &args.to_string())
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").field("path", &self.path()).finish()
    }
}
