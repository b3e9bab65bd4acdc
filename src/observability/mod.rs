//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate; hosts wanting JSON output
//!   install their own subscriber instead of calling [`logging::init`]
//! - Metric updates are cheap counter increments; exposition (Prometheus
//!   endpoint, push gateway) is the host's concern
//! - Payload contents never appear in logs or metrics, only sizes and
//!   directions

pub mod logging;
pub mod metrics;
