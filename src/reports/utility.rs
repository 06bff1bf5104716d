/// Computes the arithmetic mean of a slice of grades in floating point.
/// Returns 0.0 for empty input. Never overflows.
pub fn mean(values: &[i128]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

/// Rounds `value` to `places` decimals by scaling and calling `f64::round`.
///
/// Ties are decided on the binary value, so a decimal `.xx5` that is not
/// exactly representable may go either way. Use [`rounded_mean`] for grades.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Mean of integer grades rounded to `places` decimals, half away from zero.
///
/// Rounds the exact rational `sum / count` in integer arithmetic, so a mean
/// of 1.025 becomes 1.03 and -1.025 becomes -1.03. Falls back to
/// [`round_to`] over [`mean`] only when the scaled sum leaves the i128 range.
pub fn rounded_mean(values: &[i128], places: u32) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let count = values.len() as i128;
    let scale = 10i128.pow(places);

    let exact = values
        .iter()
        .try_fold(0i128, |acc, &v| acc.checked_add(v))
        .and_then(|sum| sum.checked_mul(scale))
        .and_then(|scaled| div_round_half_away(scaled, count));

    match exact {
        Some(units) => units as f64 / scale as f64,
        None => round_to(mean(values), places as i32),
    }
}

/// `num / den` rounded half away from zero. `den` must be positive.
fn div_round_half_away(num: i128, den: i128) -> Option<i128> {
    let den = den as u128;
    let doubled = num.unsigned_abs().checked_mul(2)?.checked_add(den)?;
    let quotient = i128::try_from(doubled / (2 * den)).ok()?;
    Some(if num < 0 { -quotient } else { quotient })
}
