//! Small reusable helpers: rate limiting wrappers and display formatting.

pub mod debounce;
pub mod format;
pub mod throttle;
