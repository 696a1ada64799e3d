//! Attribute helpers for documents built with the `svg` crate.

use svg::node::Value;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// A length or coordinate written in shortest form.
///
/// Integral values print without a fraction (`169`, not `169.0`); anything else
/// keeps at most two decimals (`141.96`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Num(pub f64);

impl From<Num> for Value {
    fn from(num: Num) -> Self {
        format_number(num.0).into()
    }
}

pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        return format!("{}", value as i64);
    }
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// `viewBox` covering a canvas anchored at the origin.
pub fn view_box(width: f64, height: f64) -> String {
    format!("0 0 {} {}", format_number(width), format_number(height))
}
