//! Entry-point setup
//!
//! There is deliberately no process-wide default context: contexts are
//! passed down the call graph explicitly. This module is the factory an
//! application uses once, at its outermost edge, to build the root.
//!
//! # Example
//!
//! ```
//! use ripcord::init;
//!
//! let root = init::RootBuilder::new("app").build();
//! root.println("starting");
//! ```

use std::sync::Arc;

use crate::context::Context;
use crate::sink::{Sink, StdoutSink};

/// Builder for a root context.
pub struct RootBuilder {
    name: String,
    sink: Option<Arc<dyn Sink>>,
}

impl RootBuilder {
    /// Start a builder for a root named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sink: None,
        }
    }

    /// Route the tree's output to `sink` instead of stdout.
    pub fn sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build the root context.
    pub fn build(self) -> Context {
        match self.sink {
            Some(sink) => Context::with_sink(self.name, sink),
            None => Context::with_sink(self.name, Arc::new(StdoutSink)),
        }
    }
}

/// Shorthand for `RootBuilder::new(name).build()`.
pub fn root(name: impl Into<String>) -> Context {
    RootBuilder::new(name).build()
}

/// Install a `tracing` subscriber reading its filter from the environment
/// (`RUST_LOG`). Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
