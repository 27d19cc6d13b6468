//! Failure reasons
//!
//! A `Fault` is the uniform error currency of this crate: a message plus the
//! context that issued it. Rendering always re-derives the issuer's dotted
//! path, so a fault that travels through several scopes still reports where
//! it originated.

use crate::context::Context;

/// A failure reason: an issuing context and a human-readable message.
///
/// Tags accumulate by prepending, so the rendering is always
/// `[<issuer path>] <outer tag>: <inner tag>: ... : <original message>`.
/// The issuer never changes once the fault exists; wrapping only touches the
/// message (see [`Context::wrap`] for how foreign errors are adopted).
#[derive(Debug, Clone, thiserror::Error)]
#[error("[{}] {}", .issuer.path(), .message)]
pub struct Fault {
    issuer: Context,
    message: String,
}

impl Fault {
    pub(crate) fn new(issuer: Context, message: String) -> Self {
        Self { issuer, message }
    }

    /// The context that raised this fault.
    pub fn issuer(&self) -> &Context {
        &self.issuer
    }

    /// The message, without the issuer path prefix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Prepend `"tag: "` to the message, keeping the issuer.
    ///
    /// An empty tag is a no-op, so call sites can tag unconditionally.
    pub fn tagged(self, tag: &str) -> Fault {
        if tag.is_empty() {
            return self;
        }
        Fault {
            issuer: self.issuer,
            message: format!("{}: {}", tag, self.message),
        }
    }
}
