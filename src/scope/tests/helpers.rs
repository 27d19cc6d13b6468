//! Common fixtures for scope tests

use std::sync::Arc;

use crate::context::Context;
use crate::sink::MemorySink;

/// A root context writing into a capturing sink.
pub fn memory_context(name: &str) -> (Context, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let ctx = Context::with_sink(name, sink.clone());
    (ctx, sink)
}
