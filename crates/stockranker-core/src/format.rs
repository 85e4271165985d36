//! Display formatting for scores and large monetary values.

const UNITS: [&str; 5] = ["", "K", "M", "B", "T"];

/// Scales a value down by powers of 1000 and appends a unit suffix,
/// capping at `T`. Missing or non-finite values render as a dash.
///
/// `950 -> "950.00"`, `1500 -> "1.50K"`, `-2500000 -> "-2.50M"`.
pub fn format_scaled(value: Option<f64>) -> String {
    let Some(v) = value else {
        return "-".to_string();
    };
    if !v.is_finite() {
        return "-".to_string();
    }

    let mut magnitude = v.abs();
    let mut unit = 0;
    while magnitude >= 1000.0 && unit < UNITS.len() - 1 {
        magnitude /= 1000.0;
        unit += 1;
    }

    let sign = if v < 0.0 { "-" } else { "" };
    format!("{}{:.2}{}", sign, magnitude, UNITS[unit])
}

/// Model scores are shown with four decimal places.
pub fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_scaled_below_thousand() {
        assert_eq!(format_scaled(Some(950.0)), "950.00");
    }

    #[test]
    fn test_format_scaled_thousands() {
        assert_eq!(format_scaled(Some(1500.0)), "1.50K");
    }

    #[test]
    fn test_format_scaled_negative_millions() {
        assert_eq!(format_scaled(Some(-2_500_000.0)), "-2.50M");
    }

    #[test]
    fn test_format_scaled_missing() {
        assert_eq!(format_scaled(None), "-");
    }

    #[test]
    fn test_format_scaled_billions_and_cap() {
        assert_eq!(format_scaled(Some(3_200_000_000.0)), "3.20B");
        assert_eq!(format_scaled(Some(5_000_000_000_000.0)), "5.00T");
        // Beyond the largest suffix the magnitude keeps growing.
        assert_eq!(format_scaled(Some(1_500_000_000_000_000.0)), "1500.00T");
    }

    #[test]
    fn test_format_scaled_non_finite() {
        assert_eq!(format_scaled(Some(f64::NAN)), "-");
        assert_eq!(format_scaled(Some(f64::INFINITY)), "-");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0.91), "0.9100");
        assert_eq!(format_score(12.3456789), "12.3457");
    }
}
