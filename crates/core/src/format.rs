//! English-locale number formatting with zero fraction digits

use num_format::{Locale, ToFormattedString};

/// Format `value` rounded to an integer (half away from zero) with comma
/// thousands separators, e.g. `1234567.5` becomes `"1,234,568"`.
pub fn format_number(value: f64) -> String {
    let rounded = value.round();
    if !rounded.is_finite() {
        return rounded.to_string();
    }
    // Saturates beyond i128, far past any catalog value
    (rounded as i128).to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(2_000.0), "2,000");
        assert_eq!(format_number(150_000_000.0), "150,000,000");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(format_number(0.5), "1");
        assert_eq!(format_number(2.5), "3");
        assert_eq!(format_number(1.49), "1");
        assert_eq!(format_number(-1234.5), "-1,235");
    }

    #[test]
    fn test_large_values_keep_grouping() {
        assert_eq!(format_number(5.0e12), "5,000,000,000,000");
        assert_eq!(format_number(f64::INFINITY), "inf");
    }
}
