pub mod opts;

/// Wide counter type used throughout the CLI demo, matching the counting
/// store's own `u64` counts.
pub type BigCount = u64;
