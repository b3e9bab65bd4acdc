//! Metrics collection.
//!
//! # Metrics
//! - `fieldseal_transforms_total` (counter): payload transforms by direction
//! - `fieldseal_passthrough_total` (counter): eligibility no-ops by direction
//! - `fieldseal_failures_total` (counter): codec failures by direction

use metrics::counter;

/// Record a completed payload transform.
pub(crate) fn record_transform(direction: &'static str) {
    counter!("fieldseal_transforms_total", "direction" => direction).increment(1);
}

/// Record a message that passed through untouched.
pub(crate) fn record_passthrough(direction: &'static str) {
    counter!("fieldseal_passthrough_total", "direction" => direction).increment(1);
}

/// Record a codec failure.
pub(crate) fn record_failure(direction: &'static str) {
    counter!("fieldseal_failures_total", "direction" => direction).increment(1);
}
