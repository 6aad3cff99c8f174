//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Widen a usize to u64, saturating on exotic targets where it would not fit.
#[must_use]
pub fn usize_to_u64(value: usize) -> u64 {
    cast::<usize, u64>(value).unwrap_or(u64::MAX)
}

/// Narrow a u64 to u32, saturating at `u32::MAX`.
#[must_use]
pub fn u64_to_u32_saturating(value: u64) -> u32 {
    cast::<u64, u32>(value).unwrap_or(u32::MAX)
}

/// Narrow an i64 to u32, clamping negatives to 0 and large values to `u32::MAX`.
#[must_use]
pub fn i64_to_u32_clamped(value: i64) -> u32 {
    if value <= 0 {
        return 0;
    }
    cast::<i64, u32>(value).unwrap_or(u32::MAX)
}

/// Convert usize to f64 while allowing precision loss in a single location.
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}
