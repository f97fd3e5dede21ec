//! Observability: process-local pagination telemetry.
//!
//! Counters never influence pagination output; they exist for dashboards and
//! for tests that assert activity. This module does not reach into windowing
//! internals.

pub mod metrics;

pub use metrics::{EventReport, report, reset};
