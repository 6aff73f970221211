use std::time::Duration;

/// Percent values in hundredths, so `9000` is the 90th percentile.
pub const P50: u64 = 5_000;
pub const P90: u64 = 9_000;
pub const P95: u64 = 9_500;
pub const P99: u64 = 9_900;

const SCALE: u128 = 10_000;

/// Linear-interpolated percentile over an ascending slice.
///
/// `percentile_x100` is clamped to `0..=10_000`. The fractional rank is kept
/// in integer nanoseconds, so the result is exact up to nanosecond
/// truncation. An empty slice yields zero.
#[must_use]
pub fn percentile(sorted: &[Duration], percentile_x100: u64) -> Duration {
    let Some(last_index) = sorted.len().checked_sub(1) else {
        return Duration::ZERO;
    };
    let max = sorted.last().copied().unwrap_or_default();

    let rank = u128::from(percentile_x100).min(SCALE);
    let numerator = u128::try_from(last_index)
        .unwrap_or(u128::MAX)
        .saturating_mul(rank);
    let lower = numerator.checked_div(SCALE).unwrap_or(0);
    let fraction = numerator.checked_rem(SCALE).unwrap_or(0);

    let Ok(lower_index) = usize::try_from(lower) else {
        return max;
    };
    let (Some(low), Some(high)) = (
        sorted.get(lower_index),
        sorted.get(lower_index.saturating_add(1)),
    ) else {
        return max;
    };

    let low_nanos = low.as_nanos();
    let step = high
        .as_nanos()
        .saturating_sub(low_nanos)
        .saturating_mul(fraction)
        .checked_div(SCALE)
        .unwrap_or(0);
    duration_from_nanos(low_nanos.saturating_add(step))
}

pub(super) fn duration_from_nanos(nanos: u128) -> Duration {
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}
