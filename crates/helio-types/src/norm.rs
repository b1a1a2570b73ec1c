// ─────────────────────────────────────────────────────────────────────
// Helio Kernel — Numeric Guards and Small Statistics
// ─────────────────────────────────────────────────────────────────────

/// Clamp a value to [0, 1], mapping NaN to 0 and Inf to the nearest bound.
///
/// Every index and coefficient the kernel emits is documented as living
/// in [0, 1]; this guard holds even at exact phase boundaries (0°, 180°,
/// 360°) where floating-point rounding can overshoot.
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        log::warn!("clamp_unit: NaN detected, clamping to 0.0");
        return 0.0;
    }
    if value.is_infinite() {
        let boundary = if value > 0.0 { 1.0 } else { 0.0 };
        log::warn!("clamp_unit: Inf detected, clamping to {boundary:.1}");
        return boundary;
    }
    value.clamp(0.0, 1.0)
}

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance; 0.0 for an empty slice.
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64
}
