/// Unrounded share of `weight` in `total`, in percent.
pub fn raw_percentage(weight: u32, total: u64) -> f64 {
    100.0 * f64::from(weight) / total as f64
}

/// `100 × weight / total` rounded to one decimal, in tenths of a percent.
///
/// Rounds half away from zero, exactly: `floor((2000·w + total) / (2·total))`.
/// `total` must be non-zero and at least `weight`.
pub fn round_to_tenths(weight: u32, total: u64) -> u32 {
    let numerator = 2_000 * u64::from(weight) + total;
    // weight <= total keeps the quotient <= 1000.
    (numerator / (2 * total)) as u32
}
