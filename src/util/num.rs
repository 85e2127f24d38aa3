/// Formats an evaluation result for display.
///
/// - Finite values use the shortest representation that reads back to the
///   same `f64`; integral values print without a fractional part.
/// - Negative zero prints as `0`.
/// - Infinities print as `Infinity` and `-Infinity`, NaN as `NaN`.
///
/// ## Example
/// ```
/// use rpncalc::util::num::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(10.0 / 0.0), "Infinity");
/// assert_eq!(format_number(-0.0), "0");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Scales a value down by a hundred, as the percent key does.
///
/// ## Example
/// ```
/// use rpncalc::util::num::percent_of;
///
/// assert_eq!(percent_of(50.0), 0.5);
/// ```
#[must_use]
pub fn percent_of(value: f64) -> f64 {
    value / 100.0
}
