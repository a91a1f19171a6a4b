//! Number rendering for tool output.
//!
//! Clients compare tool text verbatim, so numbers follow the
//! ECMAScript `Number::toString` rules: integral values have no decimal
//! point, very large and very small magnitudes use `e+N` / `e-N`.

/// Renders `x` the way a JavaScript template literal would.
pub fn format_number(x: f64) -> String {
    if x == 0.0 {
        // -0 prints as "0" too.
        return "0".to_string();
    }
    ryu_js::Buffer::new().format(x).to_string()
}
