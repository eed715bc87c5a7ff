//! Mock - Interception Facility and Deterministic Harness
//!
//! The in-process substitute for real network I/O. [`InterceptLayer`] holds
//! reply rules; code under test routes outbound calls through it instead of
//! a socket. [`MockHarness`] executes a document and registers the full
//! response as the wildcard reply, so every subsequent call receives the
//! same payload.

mod harness;
mod intercept;

pub use harness::{MockError, MockHarness};
pub use intercept::{InterceptLayer, MockReply, NetError, OutboundCall, MATCH_ANY};
