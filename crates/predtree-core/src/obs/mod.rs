//! Observability: construction events and sink abstractions.
//!
//! Sinks are injected by the caller and must not affect which tree is built.

pub(crate) mod sink;

pub(crate) use sink::record;
pub use sink::{BuildCounters, BuildEvent, BuildReport, BuildSink, with_build_sink};
