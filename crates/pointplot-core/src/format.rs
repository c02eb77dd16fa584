// File: crates/pointplot-core/src/format.rs
// Summary: Axis label number formatting.

/// Format `value` keeping at most `decimals` fractional digits. Digits are cut,
/// not rounded, and trailing zeros are not padded. `decimals == 0` drops the
/// fractional part entirely. Magnitudes below 1e-6 print as "0".
pub fn axis_label(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value != 0.0 && value.abs() < 1e-6 {
        return "0".to_string();
    }
    let s = value.to_string();
    match s.find('.') {
        Some(dot) if decimals == 0 => s[..dot].to_string(),
        Some(dot) => {
            let end = (dot + 1 + decimals).min(s.len());
            s[..end].to_string()
        }
        None => s,
    }
}
