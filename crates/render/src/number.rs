//! Number formatting shared by the text renderers.

/// Format a number the way the markup expects it.
///
/// Integral values print without a fractional part (`90`, not `90.0`);
/// everything else uses the shortest representation that round-trips
/// (`12.5`). Negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    // `+ 0.0` folds -0.0 into 0.0
    format!("{}", value + 0.0)
}
