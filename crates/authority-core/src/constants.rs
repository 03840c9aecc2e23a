/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decimal places kept when encoding a vector signature.
pub const SIGNATURE_DECIMALS: usize = 2;

/// Differentiation: per-index step and cap for the secondary nudge.
pub const SECONDARY_NUDGE_STEP: f64 = 0.08;
pub const SECONDARY_NUDGE_CAP: f64 = 0.4;

/// Differentiation: per-index step and cap for the tertiary nudge.
pub const TERTIARY_NUDGE_STEP: f64 = 0.04;
pub const TERTIARY_NUDGE_CAP: f64 = 0.2;

/// Summary shown when a query matched nothing.
pub const EMPTY_SUMMARY: &str = "No matching entities were found for this query.";
