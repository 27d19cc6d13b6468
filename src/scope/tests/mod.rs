//! Tests for the guarded-call boundary and early-return channel

mod helpers;
